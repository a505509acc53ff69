//! GreenSort web client: recycling education and the points leaderboard.

pub mod api;
pub mod app;
pub mod components;
pub mod diagnostics;
pub mod pages;

pub use app::App;
pub use components::leaderboard_table::LeaderboardTable;
pub use pages::education::EducationPage;
pub use pages::leaderboard::{LeaderboardPage, LeaderboardView};

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
