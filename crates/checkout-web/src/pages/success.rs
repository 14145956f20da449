//! Success Page

use checkout_core::{OutcomePolicy, OutcomeState};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api;
use crate::components::OrderSummary;

#[component]
pub fn SuccessPage(#[prop(optional)] policy: OutcomePolicy) -> impl IntoView {
    let query = use_location().search.get_untracked();
    let state = RwSignal::new(OutcomeState::Loading);
    let navigate = use_navigate();

    // Single lookup per mount; the branch is decided only after it returns.
    leptos::task::spawn_local(async move {
        let resolved = api::resolve_page(&query, policy).await;

        if let OutcomeState::Failure(handoff) = &resolved {
            navigate(
                &format!("/failure?{}", handoff.to_query()),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }

        state.set(resolved);
    });

    view! {
        <div class="outcome outcome-success">
            <h1>
                {move || match state.get() {
                    OutcomeState::Success(order) if !order.is_charged() => "Order Status",
                    _ => "Payment Successful!",
                }}
            </h1>
            {move || match state.get() {
                OutcomeState::Loading => view! { <p>"Loading order details..."</p> }.into_any(),
                OutcomeState::Error(message) => view! { <p class="error">{message}</p> }.into_any(),
                OutcomeState::Success(order) => view! { <OrderSummary order=order /> }.into_any(),
                OutcomeState::Failure(_) => view! { <p>"Redirecting..."</p> }.into_any(),
            }}
        </div>
    }
}
