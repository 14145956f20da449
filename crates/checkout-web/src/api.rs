//! API Client

use checkout_core::{CheckoutError, OutcomePolicy, OutcomeState, PaymentHandoff, PaymentRequest, Result};
use checkout_payments::{BackendConfig, HttpBackend, resolve_outcome, submit_checkout};

use crate::browser::BrowserNavigator;

/// Backend base URL baked in at build time
const API_BASE_URL: Option<&str> = option_env!("CHECKOUT_API_BASE_URL");

/// Backend client; falls back to the page origin when no base URL was
/// configured at build time
pub fn backend() -> Result<HttpBackend> {
    let base_url = API_BASE_URL
        .map(str::to_string)
        .or_else(|| web_sys::window().and_then(|w| w.location().origin().ok()))
        .ok_or_else(|| CheckoutError::Config("CHECKOUT_API_BASE_URL not set".into()))?;

    Ok(HttpBackend::new(BackendConfig::new(&base_url)?))
}

/// Create the order and hand the page over to the payment provider
pub async fn submit(request: PaymentRequest) -> Result<PaymentHandoff> {
    let backend = backend()?;
    submit_checkout(&backend, &BrowserNavigator, &request).await
}

/// Resolve an outcome page from its query string
pub async fn resolve_page(query: &str, policy: OutcomePolicy) -> OutcomeState {
    if let Err(err) = OutcomeState::order_id_from_query(query) {
        return OutcomeState::Error(err.to_string());
    }

    match backend() {
        Ok(backend) => resolve_outcome(&backend, query, policy).await,
        Err(err) => OutcomeState::Error(err.to_string()),
    }
}
