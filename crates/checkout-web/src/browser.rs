//! Browser Effects

use checkout_core::{CheckoutError, Receipt, Result};
use checkout_payments::Navigator;
use wasm_bindgen::{JsCast, JsValue};

fn js_error(err: &JsValue) -> CheckoutError {
    CheckoutError::Transport(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CheckoutError::Config("no browser document".into()))
}

/// Navigator backed by `window.location` and `document`
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| CheckoutError::Config("no browser window".into()))?;
        window.location().set_href(url).map_err(|e| js_error(&e))
    }

    fn replace_document(&self, markup: &str) -> Result<()> {
        let document = document()?;
        let document = document.unchecked_ref::<web_sys::HtmlDocument>();
        document.open().map_err(|e| js_error(&e))?;
        document
            .write(&js_sys::Array::of1(&JsValue::from_str(markup)))
            .map_err(|e| js_error(&e))?;
        document.close().map_err(|e| js_error(&e))
    }
}

/// Offer a receipt as a file download
pub fn download_receipt(receipt: &Receipt) -> Result<()> {
    let document = document()?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&receipt.render()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(Receipt::content_type());
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_error(&e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| js_error(&e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error(&e))?
        .dyn_into()
        .map_err(|_| CheckoutError::Config("anchor element unavailable".into()))?;
    anchor.set_href(&url);
    anchor.set_download(&receipt.file_name());
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| js_error(&e))
}
