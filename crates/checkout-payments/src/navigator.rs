//! Navigation Effects
//!
//! A [`PaymentHandoff`] is consumed by exactly one of two effects: a
//! full-page redirect or replacing the document with provider markup.

use checkout_core::{PaymentHandoff, Result};

/// Performs the page-level effect of a handoff
pub trait Navigator {
    /// Navigate the whole page to `url`
    fn redirect(&self, url: &str) -> Result<()>;

    /// Replace the current document with `markup`
    fn replace_document(&self, markup: &str) -> Result<()>;
}

/// Apply a handoff through a navigator
pub fn hand_off<N: Navigator + ?Sized>(navigator: &N, handoff: &PaymentHandoff) -> Result<()> {
    match handoff {
        PaymentHandoff::Redirect(url) => navigator.redirect(url),
        PaymentHandoff::InlineForm(markup) => navigator.replace_document(markup),
    }
}
