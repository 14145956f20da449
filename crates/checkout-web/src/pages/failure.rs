//! Failure Page

use checkout_core::FailureHandoff;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Passive display of whatever handoff fields the URL carries
#[component]
pub fn FailurePage() -> impl IntoView {
    let handoff = FailureHandoff::from_query(&use_location().search.get_untracked());

    view! {
        <div class="outcome outcome-failure">
            <h1>"Payment Failed"</h1>
            <p>"Payment failed or cancelled."</p>
            {handoff.order_id.map(|id| view! { <p>"Order Number: " {id}</p> })}
            {handoff.amount.map(|amount| view! { <p>"Amount: " {amount.normalize().to_string()}</p> })}
            {handoff.status.map(|status| view! { <p>"Status: " {status}</p> })}
        </div>
    }
}
