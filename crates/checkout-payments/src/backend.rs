//! Payment Backend Seam

use async_trait::async_trait;
use checkout_core::{Order, PaymentHandoff, PaymentRequest, Result};

/// Payment backend client trait
///
/// Implemented over HTTP by [`crate::HttpBackend`] and in memory by
/// [`crate::MockBackend`]. Browser futures are not `Send`, so the wasm build
/// drops that bound.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait PaymentBackend {
    /// Ask the backend to create an order and a payment session
    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<PaymentHandoff>;

    /// Read the current snapshot of an order
    async fn fetch_order(&self, order_id: &str) -> Result<Order>;

    /// Backend name (for logs)
    fn name(&self) -> &str;
}
