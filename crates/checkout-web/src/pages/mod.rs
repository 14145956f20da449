//! Page Components

mod checkout;
mod failure;
mod success;

pub use checkout::CheckoutPage;
pub use failure::FailurePage;
pub use success::SuccessPage;
