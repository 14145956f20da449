//! HTTP Payment Backend
//!
//! Talks to the checkout backend over JSON:
//!
//! - `POST {base}/initiatePayment` → `{paymentUrl}` or `{htmlForm}`
//! - `GET  {base}/orders/{orderId}` → `{order_id, amount, status}`
//!
//! No retries and no timeout; a failed call is reported once and the caller
//! decides what to show.

use async_trait::async_trait;
use checkout_core::{CheckoutError, Order, PaymentHandoff, PaymentRequest, Result};

use crate::backend::PaymentBackend;
use crate::config::BackendConfig;

/// reqwest-backed client
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(BackendConfig::from_env()?))
    }

    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }
}

fn transport(err: &reqwest::Error) -> CheckoutError {
    CheckoutError::Transport(err.to_string())
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl PaymentBackend for HttpBackend {
    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<PaymentHandoff> {
        let url = self.config.initiate_payment_url();
        tracing::info!(url = %url, selector = %request.selector(), "Creating payment");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Payment creation rejected");
            return Err(CheckoutError::PaymentCreationFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| transport(&e))?;
        let handoff = PaymentHandoff::from_json(&body).inspect_err(|err| {
            tracing::warn!(error = %err, "Payment response carried no usable handoff");
        })?;

        match &handoff {
            PaymentHandoff::Redirect(target) => {
                tracing::info!(target = %target, "Payment session ready (redirect)");
            }
            PaymentHandoff::InlineForm(markup) => {
                tracing::info!(bytes = markup.len(), "Payment session ready (inline form)");
            }
        }

        Ok(handoff)
    }

    async fn fetch_order(&self, order_id: &str) -> Result<Order> {
        let url = self.config.order_url(order_id);
        tracing::debug!(url = %url, order_id = %order_id, "Fetching order status");

        let response = self.client.get(url).send().await.map_err(|e| transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(order_id = %order_id, status = status.as_u16(), "Order lookup failed");
            return Err(CheckoutError::OrderLookupFailed {
                status: status.as_u16(),
            });
        }

        let order: Order = response
            .json()
            .await
            .map_err(|e| CheckoutError::Decode(e.to_string()))?;

        tracing::info!(order_id = %order.order_id, status = %order.status, "Order status received");
        Ok(order)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{Catalog, CheckoutDraft, PricingMode};
    use httpmock::prelude::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Captured fmt-layer output
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn backend(server: &MockServer) -> HttpBackend {
        HttpBackend::new(BackendConfig::new(&server.base_url()).unwrap())
    }

    fn catalog_request() -> PaymentRequest {
        let catalog = Catalog::standard();
        let draft = CheckoutDraft::from_query(
            "name=Asha&email=asha@example.com&phone=98765&address=Goa&product_id=200_WITH_ACCOM",
            PricingMode::Catalog,
            &catalog,
        );
        PaymentRequest::from_draft(&draft, &catalog).unwrap()
    }

    #[tokio::test]
    async fn test_initiate_payment_posts_selector_only() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/initiatePayment")
                    .json_body(json!({
                        "name": "Asha",
                        "email": "asha@example.com",
                        "phone": "98765",
                        "address": "Goa",
                        "product_id": "200_WITH_ACCOM",
                        "product_url": "200_WITH_ACCOM",
                    }));
                then.status(200)
                    .json_body(json!({ "paymentUrl": "https://pay.example/x" }));
            })
            .await;

        let handoff = backend(&server)
            .initiate_payment(&catalog_request())
            .await
            .unwrap();

        assert_eq!(handoff, PaymentHandoff::Redirect("https://pay.example/x".into()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_logs_omit_customer_email() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/initiatePayment");
                then.status(200)
                    .json_body(json!({ "paymentUrl": "https://pay.example/x" }));
            })
            .await;

        backend(&server)
            .initiate_payment(&catalog_request())
            .await
            .unwrap();

        let text = logs.contents();
        assert!(text.contains("Creating payment"), "{text}");
        assert!(text.contains("200_WITH_ACCOM"), "{text}");
        assert!(!text.contains("asha@example.com"), "{text}");
    }

    #[tokio::test]
    async fn test_initiate_payment_inline_form() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/initiatePayment");
                then.status(200)
                    .json_body(json!({ "htmlForm": "<form id=\"pay\"></form>" }));
            })
            .await;

        let handoff = backend(&server)
            .initiate_payment(&catalog_request())
            .await
            .unwrap();
        assert_eq!(handoff, PaymentHandoff::InlineForm("<form id=\"pay\"></form>".into()));
    }

    #[tokio::test]
    async fn test_initiate_payment_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/initiatePayment");
                then.status(502).body("bad gateway");
            })
            .await;

        let err = backend(&server)
            .initiate_payment(&catalog_request())
            .await
            .unwrap_err();
        assert_eq!(err, CheckoutError::PaymentCreationFailed { status: 502 });
        assert_eq!(err.to_string(), "Failed to create payment");
    }

    #[tokio::test]
    async fn test_initiate_payment_empty_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/initiatePayment");
                then.status(200).json_body(json!({}));
            })
            .await;

        let err = backend(&server)
            .initiate_payment(&catalog_request())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No payment URL returned");
    }

    #[tokio::test]
    async fn test_initiate_payment_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/initiatePayment");
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let err = backend(&server)
            .initiate_payment(&catalog_request())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Decode(_)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/orders/O1");
                then.status(200)
                    .json_body(json!({ "order_id": "O1", "amount": 900, "status": "CHARGED" }));
            })
            .await;

        let order = backend(&server).fetch_order("O1").await.unwrap();
        assert_eq!(order, Order::new("O1", dec!(900), "CHARGED"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_order_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/orders/missing");
                then.status(404);
            })
            .await;

        let err = backend(&server).fetch_order("missing").await.unwrap_err();
        assert_eq!(err, CheckoutError::OrderLookupFailed { status: 404 });
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let config = BackendConfig::new("http://127.0.0.1:9").unwrap();
        let err = HttpBackend::new(config).fetch_order("O1").await.unwrap_err();
        assert!(matches!(err, CheckoutError::Transport(_)));
    }
}
