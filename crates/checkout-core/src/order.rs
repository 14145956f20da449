//! Backend Order Snapshot

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status value meaning the payment completed
pub const CHARGED_STATUS: &str = "CHARGED";

/// Order status as reported by the backend
///
/// Only [`CHARGED_STATUS`] counts as paid; every other value is treated as
/// not (yet) successful.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn is_charged(&self) -> bool {
        self.0 == CHARGED_STATUS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `GET /orders/{id}` response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,

    /// Backend-determined amount
    #[serde(default)]
    pub amount: Option<Decimal>,

    pub status: OrderStatus,
}

impl Order {
    pub fn new(order_id: impl Into<String>, amount: Decimal, status: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            amount: Some(amount),
            status: OrderStatus::new(status),
        }
    }

    pub fn is_charged(&self) -> bool {
        self.status.is_charged()
    }

    /// Amount for display, empty when the backend sent none
    pub fn amount_text(&self) -> String {
        self.amount.map(|a| a.normalize().to_string()).unwrap_or_default()
    }
}
