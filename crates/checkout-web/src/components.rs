//! UI Components

use checkout_core::{CheckoutForm, Field, Order, Receipt};
use leptos::prelude::*;

use crate::browser;

/// Labelled input bound to one draft field
#[component]
pub fn TextField(
    form: RwSignal<CheckoutForm>,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] helper: Option<&'static str>,
) -> impl IntoView {
    let editable = form.with_untracked(|f| f.is_editable(field));

    view! {
        <label class="field">
            <span class="label">{field.label()}</span>
            <input
                type=input_type
                name=field.as_str()
                required=editable
                disabled=!editable
                prop:value=move || form.with(|f| f.draft().value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        if let Err(e) = f.edit(field, value) {
                            leptos::logging::warn!("{e}");
                        }
                    });
                }
            />
            {helper.map(|text| view! { <small class="helper">{text}</small> })}
        </label>
    }
}

/// Read-only display row styled like an input
#[component]
pub fn ReadOnlyField(label: String, value: Signal<String>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="label">{label}</span>
            <input type="text" disabled=true prop:value=move || value.get() />
        </label>
    }
}

/// Inline error banner
#[component]
pub fn ErrorAlert(message: String) -> impl IntoView {
    view! { <div class="alert alert-error" role="alert">{message}</div> }
}

/// Order details; charged orders also get the thank-you line and a receipt
#[component]
pub fn OrderSummary(order: Order) -> impl IntoView {
    let amount = order.amount_text();
    let status = order.status.to_string();
    let order_id = order.order_id.clone();
    let charged = order.is_charged();

    let download = move |_| {
        let Some(receipt) = Receipt::from_order(&order, chrono::Utc::now()) else {
            return;
        };
        if let Err(e) = browser::download_receipt(&receipt) {
            leptos::logging::error!("Receipt download failed: {e}");
        }
    };

    view! {
        <div class="order-summary">
            <p>"Order Number: " {order_id}</p>
            <p>{if charged { "Amount Paid: " } else { "Amount: " }} {amount}</p>
            <p class="status">"Status: " {status}</p>
            {charged.then(|| view! {
                <p class="thanks">"Thank you for your payment!"</p>
                <button class="btn" on:click=download>"Download receipt"</button>
            })}
        </div>
    }
}
