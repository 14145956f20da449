//! # checkout-core
//!
//! Domain logic for the course checkout page, free of any I/O.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  POST /initiatePayment  ┌───────────┐      ┌──────────┐
//! │ Checkout form│────────────────────────▶│  Backend  │─────▶│ Provider │
//! └──────────────┘   (selector, no price)  └───────────┘      └────┬─────┘
//!                                               ▲                  │
//!                        GET /orders/{id}       │                  ▼
//!                    ┌──────────────────────────┴───┐   redirect target
//!                    │ Success / Failure page       │◀─────────────┘
//!                    └──────────────────────────────┘
//! ```
//!
//! - [`CheckoutDraft`] is an immutable record; edits go through
//!   [`CheckoutDraft::update`].
//! - [`PaymentRequest`] never carries a price in catalog mode; the backend is
//!   the only source of truth for what is charged.
//! - [`OutcomeState`] resolves exactly once per page load.

pub mod catalog;
pub mod draft;
pub mod error;
pub mod form;
pub mod order;
pub mod outcome;
pub mod payment;
pub mod query;
pub mod receipt;
pub mod validation;

pub use catalog::{Catalog, CatalogEntry, DEFAULT_PRODUCT_ID};
pub use draft::{CheckoutDraft, Field, PricingMode, Selector};
pub use error::{CheckoutError, Result};
pub use form::CheckoutForm;
pub use order::{CHARGED_STATUS, Order, OrderStatus};
pub use outcome::{FailureHandoff, OutcomePolicy, OutcomeState};
pub use payment::{PaymentHandoff, PaymentRequest};
pub use query::QueryParams;
pub use receipt::Receipt;
pub use validation::{is_valid_email, validate};
