//! Order Creation Wire Types
//!
//! `POST /initiatePayment` request bodies and the redirect-or-form handoff
//! decoded from the response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::draft::{CheckoutDraft, Selector, parse_amount};
use crate::error::{CheckoutError, Result};
use crate::validation::validate;

/// Catalog-mode body: a product selector and no price
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPaymentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub product_id: String,
    /// Mirrors `product_id`; the backend reads either
    pub product_url: String,
}

/// Legacy body with a customer-entered amount
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountPaymentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Body of an order-creation request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentRequest {
    Catalog(CatalogPaymentRequest),
    FreeAmount(AmountPaymentRequest),
}

impl PaymentRequest {
    /// Build the request for a draft that passes validation
    pub fn from_draft(draft: &CheckoutDraft, catalog: &Catalog) -> Result<Self> {
        validate(draft, catalog)?;

        let request = match &draft.selector {
            Selector::Product(id) => Self::Catalog(CatalogPaymentRequest {
                name: draft.name.clone(),
                email: draft.email.clone(),
                phone: draft.phone.clone(),
                address: draft.address.clone(),
                product_id: id.clone(),
                product_url: id.clone(),
            }),
            Selector::Amount(raw) => {
                let amount = parse_amount(raw).ok_or_else(|| {
                    CheckoutError::Validation(vec![crate::draft::Field::Amount])
                })?;
                Self::FreeAmount(AmountPaymentRequest {
                    name: draft.name.clone(),
                    email: draft.email.clone(),
                    phone: draft.phone.clone(),
                    address: draft.address.clone(),
                    amount,
                })
            }
        };

        Ok(request)
    }

    /// Selector description (for logging)
    pub fn selector(&self) -> String {
        match self {
            Self::Catalog(r) => r.product_id.clone(),
            Self::FreeAmount(r) => format!("amount:{}", r.amount),
        }
    }
}

/// Raw `initiatePayment` response
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InitiatePaymentResponse {
    #[serde(rename = "paymentUrl", default)]
    pub payment_url: Option<String>,

    #[serde(rename = "htmlForm", default)]
    pub html_form: Option<String>,
}

impl InitiatePaymentResponse {
    /// Decide the handoff; empty strings count as absent and a redirect URL
    /// wins over a form
    pub fn into_handoff(self) -> Result<PaymentHandoff> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        if let Some(url) = present(self.payment_url) {
            Ok(PaymentHandoff::Redirect(url))
        } else if let Some(markup) = present(self.html_form) {
            Ok(PaymentHandoff::InlineForm(markup))
        } else {
            Err(CheckoutError::NoPaymentUrl)
        }
    }
}

/// Where control goes after the order is created
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentHandoff {
    /// Navigate the whole page to the provider URL
    Redirect(String),

    /// Replace the document with provider-hosted (auto-submitting) markup
    InlineForm(String),
}

impl PaymentHandoff {
    /// Decode a response body
    pub fn from_json(body: &str) -> Result<Self> {
        let response: InitiatePaymentResponse = serde_json::from_str(body)?;
        response.into_handoff()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::PricingMode;
    use rust_decimal_macros::dec;

    const CONTACT: &str = "name=Asha&email=asha@example.com&phone=98765&address=Goa";
    const QUERY: &str = "name=Asha&email=asha@example.com&phone=98765&address=Goa&product_id=200_WITH_ACCOM&amount=1";

    #[test]
    fn test_catalog_request_never_carries_amount() {
        let catalog = Catalog::standard();
        for entry in catalog.entries() {
            let draft = CheckoutDraft::from_query(
                &format!("{CONTACT}&product_id={}&amount=1", entry.id),
                PricingMode::Catalog,
                &catalog,
            );
            let request = PaymentRequest::from_draft(&draft, &catalog).unwrap();
            let body = serde_json::to_value(&request).unwrap();

            assert!(body.get("amount").is_none());
            assert_eq!(body["product_id"], body["product_url"]);
        }
    }

    #[test]
    fn test_catalog_request_shape() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_query(QUERY, PricingMode::Catalog, &catalog);
        let body = serde_json::to_value(PaymentRequest::from_draft(&draft, &catalog).unwrap()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "98765",
                "address": "Goa",
                "product_id": "200_WITH_ACCOM",
                "product_url": "200_WITH_ACCOM",
            })
        );
    }

    #[test]
    fn test_free_amount_request() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_query(
            "name=A&email=a@b.co&phone=1&address=x&amount=499.5",
            PricingMode::FreeAmount,
            &catalog,
        );
        let request = PaymentRequest::from_draft(&draft, &catalog).unwrap();
        match &request {
            PaymentRequest::FreeAmount(r) => assert_eq!(r.amount, dec!(499.5)),
            PaymentRequest::Catalog(_) => panic!("expected free-amount request"),
        }
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["amount"], serde_json::json!(499.5));
        assert!(body.get("product_id").is_none());
    }

    #[test]
    fn test_invalid_draft_has_no_request() {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::empty(PricingMode::Catalog, &catalog);
        assert!(matches!(
            PaymentRequest::from_draft(&draft, &catalog),
            Err(CheckoutError::Validation(_))
        ));
    }

    #[test]
    fn test_handoff_branches() {
        assert_eq!(
            PaymentHandoff::from_json(r#"{"paymentUrl":"https://pay.example/x"}"#).unwrap(),
            PaymentHandoff::Redirect("https://pay.example/x".into())
        );
        assert_eq!(
            PaymentHandoff::from_json(r#"{"htmlForm":"<form></form>"}"#).unwrap(),
            PaymentHandoff::InlineForm("<form></form>".into())
        );
        assert_eq!(
            PaymentHandoff::from_json(r#"{"paymentUrl":"https://a","htmlForm":"<form/>"}"#).unwrap(),
            PaymentHandoff::Redirect("https://a".into())
        );
    }

    #[test]
    fn test_handoff_missing_target() {
        for body in ["{}", r#"{"paymentUrl":""}"#, r#"{"paymentUrl":null,"htmlForm":""}"#] {
            assert_eq!(PaymentHandoff::from_json(body), Err(CheckoutError::NoPaymentUrl), "{body}");
        }
        assert!(matches!(PaymentHandoff::from_json("not json"), Err(CheckoutError::Decode(_))));
    }
}
