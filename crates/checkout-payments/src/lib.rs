//! # checkout-payments
//!
//! Payment backend access and the checkout/outcome flows.
//!
//! ## Hand-off strategies
//!
//! The backend answers order creation in one of two ways:
//!
//! ### 1. Redirect
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Checkout   │────▶│ Provider hosted │────▶│  /success   │
//! │    form     │     │  payment page   │     │  /failure   │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! `{ "paymentUrl": "..." }`: the whole page navigates to the provider.
//!
//! ### 2. Inline form
//!
//! `{ "htmlForm": "..." }`: the provider's auto-submitting form replaces
//! the current document, which then posts to the provider.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_payments::{HttpBackend, resolve_outcome, run_submission};
//!
//! let backend = HttpBackend::from_env()?;
//! run_submission(&mut form, &backend, &navigator).await?;
//!
//! // later, on the success page
//! let state = resolve_outcome(&backend, "?order_id=O1", OutcomePolicy::RequireCharged).await;
//! ```

mod backend;
mod config;
mod flow;
mod http;
mod mock;
mod navigator;

pub use backend::PaymentBackend;
pub use config::{API_BASE_URL_ENV, BackendConfig};
pub use flow::{resolve_outcome, run_submission, submit_checkout};
pub use http::HttpBackend;
pub use mock::{MOCK_PAYMENT_URL, MockBackend, Navigation, RecordingNavigator};
pub use navigator::{Navigator, hand_off};
