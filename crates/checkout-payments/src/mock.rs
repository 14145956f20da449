//! Mock Backend
//!
//! In-memory backend and navigator for tests and demos. Every call is
//! recorded so tests can assert how many requests were made.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use checkout_core::{CheckoutError, Order, PaymentHandoff, PaymentRequest, Result};

use crate::backend::PaymentBackend;
use crate::navigator::Navigator;

/// Redirect target returned by a default [`MockBackend`]
pub const MOCK_PAYMENT_URL: &str = "https://pay.example/checkout";

/// Mock backend with canned responses
pub struct MockBackend {
    handoff: Result<PaymentHandoff>,
    orders: HashMap<String, Order>,
    payment_calls: Mutex<Vec<PaymentRequest>>,
    order_calls: Mutex<Vec<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            handoff: Ok(PaymentHandoff::Redirect(MOCK_PAYMENT_URL.into())),
            orders: HashMap::new(),
            payment_calls: Mutex::new(Vec::new()),
            order_calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer order creation with `handoff`
    #[must_use]
    pub fn with_handoff(mut self, handoff: Result<PaymentHandoff>) -> Self {
        self.handoff = handoff;
        self
    }

    /// Serve `order` from the status endpoint
    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.orders.insert(order.order_id.clone(), order);
        self
    }

    /// Bodies of every order-creation call so far
    pub fn payment_calls(&self) -> Vec<PaymentRequest> {
        self.payment_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Order ids of every status lookup so far
    pub fn order_calls(&self) -> Vec<String> {
        self.order_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl PaymentBackend for MockBackend {
    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<PaymentHandoff> {
        self.payment_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.handoff.clone()
    }

    async fn fetch_order(&self, order_id: &str) -> Result<Order> {
        self.order_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(order_id.to_string());
        self.orders
            .get(order_id)
            .cloned()
            .ok_or(CheckoutError::OrderLookupFailed { status: 404 })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Effect performed by a [`RecordingNavigator`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Redirect(String),
    ReplaceDocument(String),
}

/// Navigator that records effects instead of performing them
#[derive(Default)]
pub struct RecordingNavigator {
    effects: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<Navigation> {
        self.effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, effect: Navigation) {
        self.effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(effect);
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) -> Result<()> {
        self.record(Navigation::Redirect(url.to_string()));
        Ok(())
    }

    fn replace_document(&self, markup: &str) -> Result<()> {
        self.record(Navigation::ReplaceDocument(markup.to_string()));
        Ok(())
    }
}
