//! Checkout Draft
//!
//! The customer's in-progress form. Drafts are never mutated in place:
//! [`CheckoutDraft::update`] returns a new draft, so every edit is a pure
//! `(draft, field, value) -> draft` step.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{CheckoutError, Result};
use crate::query::QueryParams;

/// Query keys that may carry the product selector, in priority order
pub const PRODUCT_QUERY_KEYS: [&str; 3] = ["product_id", "product", "product_url"];

/// How the purchased item is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Fixed catalog key; the price is read-only and the backend prices it
    #[default]
    Catalog,

    /// Legacy mode: the customer types the amount
    FreeAmount,
}

/// What is being purchased, without asserting a trusted price
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Known catalog product id
    Product(String),

    /// Raw amount text as typed
    Amount(String),
}

/// Form field names
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    #[serde(rename = "product_id")]
    Product,
    Amount,
}

impl Field {
    /// Form/wire name of the field
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Product => "product_id",
            Self::Amount => "amount",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::Product => "Product ID",
            Self::Amount => "Amount",
        }
    }

    /// Contact fields are editable in every mode
    pub const fn is_contact(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Phone | Self::Address)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Customer details plus a product/amount selector
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub selector: Selector,
}

impl CheckoutDraft {
    /// Blank draft for a pricing mode
    pub fn empty(mode: PricingMode, catalog: &Catalog) -> Self {
        let selector = match mode {
            PricingMode::Catalog => Selector::Product(catalog.default_entry().id.to_string()),
            PricingMode::FreeAmount => Selector::Amount(String::new()),
        };

        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            selector,
        }
    }

    /// Build the initial draft from the page's query string
    ///
    /// Unknown or missing product ids resolve to the catalog default.
    pub fn from_query(query: &str, mode: PricingMode, catalog: &Catalog) -> Self {
        Self::from_params(&QueryParams::parse(query), mode, catalog)
    }

    /// Build the initial draft from already-decoded parameters
    pub fn from_params(params: &QueryParams, mode: PricingMode, catalog: &Catalog) -> Self {
        let selector = match mode {
            PricingMode::Catalog => {
                let requested = params.first_non_empty(&PRODUCT_QUERY_KEYS);
                Selector::Product(catalog.resolve(requested).id.to_string())
            }
            PricingMode::FreeAmount => Selector::Amount(params.text("amount")),
        };

        Self {
            name: params.text("name"),
            email: params.text("email"),
            phone: params.text("phone"),
            address: params.text("address"),
            selector,
        }
    }

    /// Pricing mode implied by the selector
    pub const fn mode(&self) -> PricingMode {
        match self.selector {
            Selector::Product(_) => PricingMode::Catalog,
            Selector::Amount(_) => PricingMode::FreeAmount,
        }
    }

    /// Apply one field edit, returning the new draft
    ///
    /// Contact fields are always editable. The amount is editable only in
    /// free-amount mode; the product is never edited from the form.
    pub fn update(&self, field: Field, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let mut next = self.clone();

        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
            Field::Address => next.address = value,
            Field::Amount => match next.selector {
                Selector::Amount(_) => next.selector = Selector::Amount(value),
                Selector::Product(_) => return Err(CheckoutError::ReadOnlyField(field)),
            },
            Field::Product => return Err(CheckoutError::ReadOnlyField(field)),
        }

        Ok(next)
    }

    /// Catalog entry for the selected product (catalog mode only)
    pub fn product<'c>(&self, catalog: &'c Catalog) -> Option<&'c CatalogEntry> {
        match &self.selector {
            Selector::Product(id) => catalog.get(id),
            Selector::Amount(_) => None,
        }
    }

    /// Displayed amount: list price in catalog mode, parsed input otherwise
    pub fn amount(&self, catalog: &Catalog) -> Option<Decimal> {
        match &self.selector {
            Selector::Product(id) => catalog.get(id).map(|entry| entry.price),
            Selector::Amount(raw) => parse_amount(raw),
        }
    }

    /// Value of a field as shown in the form
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::Product => match &self.selector {
                Selector::Product(id) => id,
                Selector::Amount(_) => "",
            },
            Field::Amount => match &self.selector {
                Selector::Amount(raw) => raw,
                Selector::Product(_) => "",
            },
        }
    }
}

/// Parse typed amount text; blank or malformed input yields `None`
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_PRODUCT_ID;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_query_catalog() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_query(
            "?name=Asha&email=asha%40example.com&phone=123&address=Goa&product=200_WITHOUT_ACCOM",
            PricingMode::Catalog,
            &catalog,
        );

        assert_eq!(draft.name, "Asha");
        assert_eq!(draft.email, "asha@example.com");
        assert_eq!(draft.selector, Selector::Product("200_WITHOUT_ACCOM".into()));
        assert_eq!(draft.amount(&catalog), Some(dec!(900)));
    }

    #[test]
    fn test_from_query_unknown_product() {
        let catalog = Catalog::standard();
        for query in ["", "product_id=BOGUS", "product_url=https://shop/x", "product_id="] {
            let draft = CheckoutDraft::from_query(query, PricingMode::Catalog, &catalog);
            assert_eq!(draft.value(Field::Product), DEFAULT_PRODUCT_ID, "query {query:?}");
            assert_eq!(draft.amount(&catalog), Some(dec!(900)));
        }
    }

    #[test]
    fn test_product_key_priority() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_query(
            "product_url=CUSTOM_AMOUNT&product_id=100_WITHOUT_ACCOM",
            PricingMode::Catalog,
            &catalog,
        );
        assert_eq!(draft.value(Field::Product), "100_WITHOUT_ACCOM");
    }

    #[test]
    fn test_from_query_free_amount() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_query("amount=250.50", PricingMode::FreeAmount, &catalog);
        assert_eq!(draft.mode(), PricingMode::FreeAmount);
        assert_eq!(draft.amount(&catalog), Some(dec!(250.50)));
    }

    #[test]
    fn test_update_is_pure() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::empty(PricingMode::Catalog, &catalog);
        let next = draft.update(Field::Name, "Ravi").unwrap();

        assert_eq!(draft.name, "");
        assert_eq!(next.name, "Ravi");
    }

    #[test]
    fn test_read_only_fields() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::empty(PricingMode::Catalog, &catalog);

        assert_eq!(
            draft.update(Field::Amount, "1"),
            Err(CheckoutError::ReadOnlyField(Field::Amount))
        );
        assert_eq!(
            draft.update(Field::Product, "200_WITH_ACCOM"),
            Err(CheckoutError::ReadOnlyField(Field::Product))
        );

        let legacy = CheckoutDraft::empty(PricingMode::FreeAmount, &catalog);
        let legacy = legacy.update(Field::Amount, "42").unwrap();
        assert_eq!(legacy.amount(&catalog), Some(dec!(42)));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 10 "), Some(dec!(10)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("ten"), None);
    }
}
