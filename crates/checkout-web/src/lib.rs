//! checkout-web
//!
//! Leptos-based WASM frontend for the course checkout.
//!
//! | route       | page                                             |
//! |-------------|--------------------------------------------------|
//! | `/`         | checkout form, catalog pricing                   |
//! | `/checkout` | same as `/`                                      |
//! | `/pay`      | checkout form, customer-entered amount (legacy)  |
//! | `/success`  | order outcome, non-charged orders go to failure  |
//! | `/status`   | order outcome, shows any status as-is            |
//! | `/failure`  | failure details handed over in the query string  |

mod api;
mod app;
mod browser;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
