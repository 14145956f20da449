//! Product Catalog
//!
//! Maps product ids to display names and list prices. The prices here are
//! only ever shown to the customer; the backend decides what is charged.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Product id used when the URL names no known product
pub const DEFAULT_PRODUCT_ID: &str = "100_WITH_ACCOM";

/// A purchasable course
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Product id sent to the backend as the selector
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// List price (display only)
    pub price: Decimal,

    /// ISO currency code
    pub currency: &'static str,
}

/// Immutable set of catalog entries with a fallback entry
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    default_id: &'static str,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The course catalog shipped with the checkout page
    pub fn standard() -> Self {
        Self {
            entries: vec![
                CatalogEntry {
                    id: "100_WITH_ACCOM",
                    name: "100 Hour Yoga API with Accommodation",
                    price: dec!(900),
                    currency: "EUR",
                },
                CatalogEntry {
                    id: "100_WITHOUT_ACCOM",
                    name: "100 Hour Yoga API without Accommodation",
                    price: dec!(600),
                    currency: "EUR",
                },
                CatalogEntry {
                    id: "200_WITH_ACCOM",
                    name: "200 Hour Yoga API with Accommodation",
                    price: dec!(1800),
                    currency: "EUR",
                },
                CatalogEntry {
                    id: "200_WITHOUT_ACCOM",
                    name: "200 Hour Yoga API without Accommodation",
                    price: dec!(900),
                    currency: "EUR",
                },
                CatalogEntry {
                    id: "CUSTOM_AMOUNT",
                    name: "Custom Payment",
                    price: dec!(5),
                    currency: "EUR",
                },
            ],
            default_id: DEFAULT_PRODUCT_ID,
        }
    }

    /// Look up an entry by exact product id
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Check whether an id names a known product
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The fallback entry
    pub fn default_entry(&self) -> &CatalogEntry {
        self.get(self.default_id)
            .unwrap_or_else(|| &self.entries[0])
    }

    /// Resolve a selector, falling back to the default entry when the id is
    /// absent or unknown
    pub fn resolve(&self, id: Option<&str>) -> &CatalogEntry {
        match id.and_then(|id| self.get(id)) {
            Some(entry) => entry,
            None => {
                if let Some(unknown) = id {
                    tracing::debug!(product_id = %unknown, "Unknown product, using default");
                }
                self.default_entry()
            }
        }
    }

    /// All entries in display order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_product() {
        let catalog = Catalog::standard();
        let entry = catalog.resolve(Some("200_WITH_ACCOM"));
        assert_eq!(entry.price, dec!(1800));
        assert_eq!(entry.currency, "EUR");
    }

    #[test]
    fn test_unknown_products_fall_back_to_default() {
        let catalog = Catalog::standard();
        for id in ["", "nope", "100_with_accom", "200_WITH_ACCOM ", "../etc"] {
            let entry = catalog.resolve(Some(id));
            assert_eq!(entry.id, DEFAULT_PRODUCT_ID, "selector {id:?}");
            assert_eq!(entry.price, dec!(900));
        }
        assert_eq!(catalog.resolve(None).id, DEFAULT_PRODUCT_ID);
    }
}
