//! Pre-submit Validation

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::draft::{CheckoutDraft, Field, Selector, parse_amount};
use crate::error::{CheckoutError, Result};

/// Loose `local@domain.tld` shape check
///
/// No whitespace anywhere, exactly one `@` with text before it, and a `.` in
/// the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Fields that fail the pre-submit gate, in form order
pub fn invalid_fields(draft: &CheckoutDraft, catalog: &Catalog) -> Vec<Field> {
    let mut invalid = Vec::new();

    if draft.name.trim().is_empty() {
        invalid.push(Field::Name);
    }
    if draft.email.trim().is_empty() || !is_valid_email(&draft.email) {
        invalid.push(Field::Email);
    }
    if draft.phone.trim().is_empty() {
        invalid.push(Field::Phone);
    }
    if draft.address.trim().is_empty() {
        invalid.push(Field::Address);
    }

    match &draft.selector {
        Selector::Product(id) => {
            if id.is_empty() || !catalog.contains(id) {
                invalid.push(Field::Product);
            }
        }
        Selector::Amount(raw) => {
            if !parse_amount(raw).is_some_and(|amount| amount > Decimal::ZERO) {
                invalid.push(Field::Amount);
            }
        }
    }

    invalid
}

/// Run the gate, failing with every invalid field
pub fn validate(draft: &CheckoutDraft, catalog: &Catalog) -> Result<()> {
    let invalid = invalid_fields(draft, catalog);
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(CheckoutError::Validation(invalid))
    }
}
