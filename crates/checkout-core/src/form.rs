//! Checkout Form Session
//!
//! Wraps a [`CheckoutDraft`] with the loading flag and inline error of one
//! page visit. A submission is `begin_submission` → one backend call →
//! `finish_submission`; the second step always clears the loading flag.

use crate::catalog::{Catalog, CatalogEntry};
use crate::draft::{CheckoutDraft, Field, PricingMode};
use crate::error::{CheckoutError, Result};
use crate::payment::PaymentRequest;
use crate::validation::invalid_fields;

/// Form state for one page visit
#[derive(Clone, Debug)]
pub struct CheckoutForm {
    draft: CheckoutDraft,
    catalog: Catalog,
    loading: bool,
    error: Option<String>,
}

impl CheckoutForm {
    pub const fn new(draft: CheckoutDraft, catalog: Catalog) -> Self {
        Self {
            draft,
            catalog,
            loading: false,
            error: None,
        }
    }

    /// Initialise from the page query string with the standard catalog
    pub fn from_query(query: &str, mode: PricingMode) -> Self {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_query(query, mode, &catalog);
        Self::new(draft, catalog)
    }

    pub const fn draft(&self) -> &CheckoutDraft {
        &self.draft
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inline error from the last failed submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Selected catalog entry, if any
    pub fn product(&self) -> Option<&CatalogEntry> {
        self.draft.product(&self.catalog)
    }

    /// Apply a user edit through the draft reducer
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.draft = self.draft.update(field, value)?;
        Ok(())
    }

    /// Whether a field may be edited in this form
    pub const fn is_editable(&self, field: Field) -> bool {
        field.is_contact()
            || matches!(
                (field, self.draft.mode()),
                (Field::Amount, PricingMode::FreeAmount)
            )
    }

    pub fn is_valid(&self) -> bool {
        invalid_fields(&self.draft, &self.catalog).is_empty()
    }

    /// Submit button is live only for a valid draft with nothing in flight
    pub fn can_submit(&self) -> bool {
        !self.loading && self.is_valid()
    }

    /// Enter the loading state and produce the request body
    ///
    /// Fails without side effects when the draft is invalid or a request is
    /// already in flight.
    pub fn begin_submission(&mut self) -> Result<PaymentRequest> {
        if self.loading {
            return Err(CheckoutError::InFlight);
        }

        let request = PaymentRequest::from_draft(&self.draft, &self.catalog)?;
        self.loading = true;
        self.error = None;
        Ok(request)
    }

    /// Leave the loading state, recording the failure message if any
    pub fn finish_submission<T>(&mut self, outcome: &Result<T>) {
        self.loading = false;
        self.error = outcome.as_ref().err().map(ToString::to_string);
    }

    /// Label for the submit button
    pub fn submit_label(&self) -> String {
        if self.loading {
            return "Processing...".into();
        }

        match (self.product(), self.draft.amount(&self.catalog)) {
            (Some(entry), _) => format!("Pay {} {}", entry.currency, entry.price),
            (None, Some(amount)) => format!("Pay {amount}"),
            (None, None) => "Pay".into(),
        }
    }
}
