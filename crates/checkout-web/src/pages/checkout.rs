//! Checkout Page

use checkout_core::{CheckoutForm, Field, PricingMode};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::api;
use crate::components::{ErrorAlert, ReadOnlyField, TextField};

#[component]
pub fn CheckoutPage(#[prop(optional)] mode: PricingMode) -> impl IntoView {
    let query = use_location().search.get_untracked();
    let form = RwSignal::new(CheckoutForm::from_query(&query, mode));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(Ok(request)) = form.try_update(CheckoutForm::begin_submission) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = api::submit(request).await;
            form.update(|f| f.finish_submission(&outcome));
        });
    };

    let selection = match mode {
        PricingMode::Catalog => {
            let course = Signal::derive(move || {
                form.with(|f| f.product().map(|p| p.name.to_string()).unwrap_or_default())
            });
            let price = Signal::derive(move || {
                form.with(|f| f.product().map(|p| p.price.to_string()).unwrap_or_default())
            });
            let currency = form.with_untracked(|f| f.product().map_or("", |p| p.currency));

            view! {
                <TextField
                    form=form
                    field=Field::Product
                    helper="Code for the selected course"
                />
                <ReadOnlyField label="Course".to_string() value=course />
                <ReadOnlyField label=format!("Amount ({currency})") value=price />
            }
            .into_any()
        }
        PricingMode::FreeAmount => view! {
            <TextField form=form field=Field::Amount input_type="number" />
        }
        .into_any(),
    };

    view! {
        <form class="checkout" on:submit=submit>
            <h1>"Checkout"</h1>

            <TextField form=form field=Field::Name />
            <TextField form=form field=Field::Email input_type="email" />
            <TextField form=form field=Field::Phone input_type="tel" />
            <TextField form=form field=Field::Address />

            {selection}

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || !form.with(CheckoutForm::can_submit)
            >
                {move || form.with(CheckoutForm::submit_label)}
            </button>

            {move || {
                form.with(|f| f.error().map(|message| view! { <ErrorAlert message=message.to_string() /> }))
            }}
        </form>
    }
}
