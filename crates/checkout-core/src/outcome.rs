//! Outcome Resolution
//!
//! State machine behind the success/failure pages:
//!
//! ```text
//! Loading ──no order id──────────────▶ Error("No order ID found")
//!    │
//!    └─ one GET /orders/{id} ─┬─ Err ─▶ Error(message)
//!                             ├─ CHARGED (or DisplayOnly) ─▶ Success(order)
//!                             └─ anything else ───────────▶ Failure(handoff)
//! ```
//!
//! Every state except `Loading` is terminal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::draft::parse_amount;
use crate::error::{CheckoutError, Result};
use crate::order::Order;
use crate::query::{self, QueryParams};

/// Query key carrying the order id on both outcome pages
pub const ORDER_ID_PARAM: &str = "order_id";

/// How a fetched order maps to a presentation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomePolicy {
    /// Render whatever status came back on the success page
    DisplayOnly,

    /// Anything but the charged sentinel goes to the failure page
    #[default]
    RequireCharged,
}

/// Data handed to the failure page; it never fetches on its own
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureHandoff {
    pub order_id: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<String>,
}

impl FailureHandoff {
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: Some(order.order_id.clone()),
            amount: order.amount,
            status: Some(order.status.to_string()),
        }
    }

    /// Read the handoff from the failure page query string
    pub fn from_query(query: &str) -> Self {
        let params = QueryParams::parse(query);
        Self {
            order_id: params.non_empty(ORDER_ID_PARAM).map(str::to_string),
            amount: params.non_empty("amount").and_then(parse_amount),
            status: params.non_empty("status").map(str::to_string),
        }
    }

    /// Encode for the failure page URL, skipping absent fields
    pub fn to_query(&self) -> String {
        let amount = self.amount.map(|a| a.normalize().to_string());
        query::encode(
            [
                (ORDER_ID_PARAM, self.order_id.as_deref()),
                ("amount", amount.as_deref()),
                ("status", self.status.as_deref()),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v))),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.order_id.is_none() && self.amount.is_none() && self.status.is_none()
    }
}

/// Presentation state of an outcome page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomeState {
    Loading,
    Success(Order),
    Failure(FailureHandoff),
    Error(String),
}

impl OutcomeState {
    /// Order id for the lookup, or the terminal error when it is missing
    pub fn order_id_from_query(query: &str) -> Result<String> {
        QueryParams::parse(query)
            .non_empty(ORDER_ID_PARAM)
            .map(str::to_string)
            .ok_or(CheckoutError::MissingOrderId)
    }

    /// Query string addressing an outcome page at `order_id`
    pub fn query_for(order_id: &str) -> String {
        query::encode([(ORDER_ID_PARAM, order_id)])
    }

    /// Terminal state for the single lookup result
    pub fn from_lookup(lookup: Result<Order>, policy: OutcomePolicy) -> Self {
        match lookup {
            Err(err) => Self::Error(err.to_string()),
            Ok(order) => match policy {
                OutcomePolicy::DisplayOnly => Self::Success(order),
                OutcomePolicy::RequireCharged if order.is_charged() => Self::Success(order),
                OutcomePolicy::RequireCharged => {
                    tracing::info!(
                        order_id = %order.order_id,
                        status = %order.status,
                        "Order not charged, routing to failure"
                    );
                    Self::Failure(FailureHandoff::from_order(&order))
                }
            },
        }
    }
}
