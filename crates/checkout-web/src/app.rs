//! Main App Component

use checkout_core::{OutcomePolicy, PricingMode};
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{CheckoutPage, FailurePage, SuccessPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=|| view! { <CheckoutPage /> } />
                    <Route path=path!("/checkout") view=|| view! { <CheckoutPage /> } />
                    <Route
                        path=path!("/pay")
                        view=|| view! { <CheckoutPage mode=PricingMode::FreeAmount /> }
                    />
                    <Route
                        path=path!("/success")
                        view=|| view! { <SuccessPage policy=OutcomePolicy::RequireCharged /> }
                    />
                    <Route
                        path=path!("/status")
                        view=|| view! { <SuccessPage policy=OutcomePolicy::DisplayOnly /> }
                    />
                    <Route path=path!("/failure") view=FailurePage />
                </Routes>
            </main>
        </Router>
    }
}
