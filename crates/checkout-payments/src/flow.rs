//! Checkout and Outcome Flows
//!
//! The two network-touching steps of the checkout page, written against the
//! [`PaymentBackend`] and [`Navigator`] seams so the browser, the CLI and
//! tests all run the same code.

use checkout_core::{
    CheckoutForm, OutcomePolicy, OutcomeState, PaymentHandoff, PaymentRequest, Result,
};

use crate::backend::PaymentBackend;
use crate::navigator::{Navigator, hand_off};

/// One order-creation call followed by exactly one navigation effect
pub async fn submit_checkout<B, N>(
    backend: &B,
    navigator: &N,
    request: &PaymentRequest,
) -> Result<PaymentHandoff>
where
    B: PaymentBackend + ?Sized,
    N: Navigator + ?Sized,
{
    let handoff = backend.initiate_payment(request).await?;
    hand_off(navigator, &handoff)?;
    Ok(handoff)
}

/// Full submission for a form: gate, call, hand off, then always leave the
/// loading state
///
/// A draft that fails validation (or a request already in flight) returns
/// the error without touching the backend or the form's inline error.
pub async fn run_submission<B, N>(
    form: &mut CheckoutForm,
    backend: &B,
    navigator: &N,
) -> Result<PaymentHandoff>
where
    B: PaymentBackend + ?Sized,
    N: Navigator + ?Sized,
{
    let request = form.begin_submission()?;

    let outcome = submit_checkout(backend, navigator, &request).await;
    if let Err(err) = &outcome {
        tracing::warn!(backend = backend.name(), error = %err, "Checkout submission failed");
    }

    form.finish_submission(&outcome);
    outcome
}

/// Resolve an outcome page: read the order id, look it up once, decide
///
/// No lookup is made when the query has no order id.
pub async fn resolve_outcome<B>(backend: &B, query: &str, policy: OutcomePolicy) -> OutcomeState
where
    B: PaymentBackend + ?Sized,
{
    let order_id = match OutcomeState::order_id_from_query(query) {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!("Outcome page opened without an order id");
            return OutcomeState::Error(err.to_string());
        }
    };

    let lookup = backend.fetch_order(&order_id).await;
    OutcomeState::from_lookup(lookup, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBackend, Navigation, RecordingNavigator};
    use checkout_core::{CheckoutError, FailureHandoff, Order, PricingMode};
    use rust_decimal_macros::dec;

    const VALID: &str =
        "name=Asha&email=asha@example.com&phone=98765&address=Goa&product_id=CUSTOM_AMOUNT";

    #[tokio::test]
    async fn test_redirect_handoff() {
        let backend = MockBackend::new()
            .with_handoff(Ok(PaymentHandoff::Redirect("https://pay.example/x".into())));
        let navigator = RecordingNavigator::new();
        let mut form = CheckoutForm::from_query(VALID, PricingMode::Catalog);

        run_submission(&mut form, &backend, &navigator).await.unwrap();

        assert_eq!(
            navigator.effects(),
            vec![Navigation::Redirect("https://pay.example/x".into())]
        );
        assert!(!form.is_loading());
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn test_single_post_without_amount() {
        let backend = MockBackend::new();
        let navigator = RecordingNavigator::new();
        let mut form = CheckoutForm::from_query(VALID, PricingMode::Catalog);

        run_submission(&mut form, &backend, &navigator).await.unwrap();

        let calls = backend.payment_calls();
        assert_eq!(calls.len(), 1);
        let body = serde_json::to_value(&calls[0]).unwrap();
        assert!(body.get("amount").is_none());
        assert_eq!(body["product_id"], "CUSTOM_AMOUNT");
    }

    #[tokio::test]
    async fn test_inline_form_handoff() {
        let backend = MockBackend::new()
            .with_handoff(Ok(PaymentHandoff::InlineForm("<form></form>".into())));
        let navigator = RecordingNavigator::new();
        let mut form = CheckoutForm::from_query(VALID, PricingMode::Catalog);

        run_submission(&mut form, &backend, &navigator).await.unwrap();

        assert_eq!(
            navigator.effects(),
            vec![Navigation::ReplaceDocument("<form></form>".into())]
        );
    }

    #[tokio::test]
    async fn test_missing_payment_url() {
        let backend = MockBackend::new().with_handoff(Err(CheckoutError::NoPaymentUrl));
        let navigator = RecordingNavigator::new();
        let mut form = CheckoutForm::from_query(VALID, PricingMode::Catalog);

        let result = run_submission(&mut form, &backend, &navigator).await;

        assert_eq!(result, Err(CheckoutError::NoPaymentUrl));
        assert_eq!(form.error(), Some("No payment URL returned"));
        assert!(!form.is_loading());
        assert!(form.can_submit());
        assert!(navigator.effects().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let backend = MockBackend::new();
        let navigator = RecordingNavigator::new();
        let mut form = CheckoutForm::from_query("name=Asha&email=bad", PricingMode::Catalog);

        let result = run_submission(&mut form, &backend, &navigator).await;

        assert!(matches!(result, Err(CheckoutError::Validation(_))));
        assert!(backend.payment_calls().is_empty());
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_charged_order_succeeds() {
        let order = Order::new("O1", dec!(900), "CHARGED");
        let backend = MockBackend::new().with_order(order.clone());

        let state = resolve_outcome(&backend, "?order_id=O1", OutcomePolicy::RequireCharged).await;

        assert_eq!(state, OutcomeState::Success(order));
        assert_eq!(backend.order_calls(), vec!["O1".to_string()]);
    }

    #[tokio::test]
    async fn test_pending_order_fails_over() {
        let backend = MockBackend::new().with_order(Order::new("O1", dec!(900), "PENDING"));

        let state = resolve_outcome(&backend, "order_id=O1", OutcomePolicy::RequireCharged).await;

        assert_eq!(
            state,
            OutcomeState::Failure(FailureHandoff {
                order_id: Some("O1".into()),
                amount: Some(dec!(900)),
                status: Some("PENDING".into()),
            })
        );
    }

    #[tokio::test]
    async fn test_missing_order_id_skips_lookup() {
        let backend = MockBackend::new();

        let state = resolve_outcome(&backend, "", OutcomePolicy::RequireCharged).await;

        assert_eq!(state, OutcomeState::Error("No order ID found".into()));
        assert!(backend.order_calls().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_error() {
        let backend = MockBackend::new();

        let state = resolve_outcome(&backend, "order_id=nope", OutcomePolicy::DisplayOnly).await;

        assert_eq!(state, OutcomeState::Error("Failed to fetch order status".into()));
    }
}
