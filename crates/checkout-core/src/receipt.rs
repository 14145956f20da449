//! Receipt Documents
//!
//! Pure transform from an order snapshot to a plain-text receipt. Output is
//! fully determined by the order and the issue time. Only charged orders get
//! a receipt.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::order::Order;

pub const RECEIPT_TITLE: &str = "Payment Receipt";
pub const THANK_YOU: &str = "Thank you for your payment!";

/// Receipt for a paid order
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub order_id: String,
    pub amount: String,
    pub status: String,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Receipt for `order`, or `None` when the order was not charged
    pub fn from_order(order: &Order, issued_at: DateTime<Utc>) -> Option<Self> {
        if !order.is_charged() {
            return None;
        }

        Some(Self {
            order_id: order.order_id.clone(),
            amount: order.amount_text(),
            status: order.status.to_string(),
            issued_at,
        })
    }

    /// Document lines, top to bottom
    pub fn lines(&self) -> Vec<String> {
        vec![
            RECEIPT_TITLE.to_string(),
            "=".repeat(RECEIPT_TITLE.len()),
            String::new(),
            format!("Order Number: {}", self.order_id),
            format!("Amount Paid: {}", self.amount),
            format!("Status: {}", self.status),
            format!("Issued: {}", self.issued_at.format("%Y-%m-%d %H:%M:%S UTC")),
            String::new(),
            THANK_YOU.to_string(),
        ]
    }

    /// Rendered document
    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    pub const fn content_type() -> &'static str {
        "text/plain;charset=utf-8"
    }

    /// Download file name; characters outside `[A-Za-z0-9_-]` become `_`
    pub fn file_name(&self) -> String {
        let id: String = self
            .order_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("receipt-{id}.txt")
    }
}
