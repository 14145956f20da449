//! Terminal Navigation
//!
//! There is no page to navigate in a terminal: a redirect is printed and
//! provider markup is written to a file the user can open in a browser.

use std::path::PathBuf;

use checkout_core::{CheckoutError, Result};
use checkout_payments::Navigator;

pub struct TerminalNavigator {
    form_out: PathBuf,
}

impl TerminalNavigator {
    pub fn new(form_out: impl Into<PathBuf>) -> Self {
        Self {
            form_out: form_out.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn redirect(&self, url: &str) -> Result<()> {
        println!("Continue payment at: {url}");
        Ok(())
    }

    fn replace_document(&self, markup: &str) -> Result<()> {
        std::fs::write(&self.form_out, markup).map_err(|e| {
            CheckoutError::Io(format!("cannot write {}: {e}", self.form_out.display()))
        })?;
        tracing::info!(path = %self.form_out.display(), "Payment form written");
        println!(
            "Payment form saved to {}; open it in a browser to continue",
            self.form_out.display()
        );
        Ok(())
    }
}
