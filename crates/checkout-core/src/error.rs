//! Error Types

use thiserror::Error;

use crate::draft::Field;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout error types
///
/// The `Display` text of each variant is what the pages show inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Pre-submit gate rejected the draft (no request was made)
    #[error("Please complete: {}", join_fields(.0))]
    Validation(Vec<Field>),

    /// Field cannot be edited in the current pricing mode
    #[error("{0} is read-only")]
    ReadOnlyField(Field),

    /// A submission is already awaiting the backend
    #[error("A payment request is already in progress")]
    InFlight,

    /// Order creation returned a non-success status
    #[error("Failed to create payment")]
    PaymentCreationFailed { status: u16 },

    /// Order creation succeeded but carried neither a redirect nor a form
    #[error("No payment URL returned")]
    NoPaymentUrl,

    /// Order lookup returned a non-success status
    #[error("Failed to fetch order status")]
    OrderLookupFailed { status: u16 },

    /// Outcome page was opened without an order id
    #[error("No order ID found")]
    MissingOrderId,

    /// Network or transport failure
    #[error("{0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Local I/O failure (e.g. writing a document to disk)
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// Check if the user can reasonably try the same action again
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::PaymentCreationFailed { .. }
                | Self::OrderLookupFailed { .. }
                | Self::Transport(_)
        )
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(_) => "Checkout is not configured. Please contact support.".into(),
            Self::Decode(_) => "The payment service sent an unexpected response.".into(),
            Self::ReadOnlyField(_) => "This field cannot be changed.".into(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
