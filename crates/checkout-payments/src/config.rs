//! Backend Configuration

use checkout_core::{CheckoutError, Result};
use url::Url;

/// Environment variable holding the backend base URL
pub const API_BASE_URL_ENV: &str = "CHECKOUT_API_BASE_URL";

/// Where the payment backend lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
}

impl BackendConfig {
    /// Parse an absolute base URL (a path prefix such as `/api` is kept)
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|e| CheckoutError::Config(format!("invalid base URL `{base_url}`: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(CheckoutError::Config(format!("`{base_url}` cannot be a base URL")));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        Ok(Self { base_url })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_BASE_URL_ENV)
            .map_err(|_| CheckoutError::Config(format!("{API_BASE_URL_ENV} not set")))?;
        Self::new(&base_url)
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended by path segments, each percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `POST` target for order creation
    pub fn initiate_payment_url(&self) -> Url {
        self.endpoint(&["initiatePayment"])
    }

    /// `GET` target for an order's status
    pub fn order_url(&self, order_id: &str) -> Url {
        self.endpoint(&["orders", order_id])
    }
}
