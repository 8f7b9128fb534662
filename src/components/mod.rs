//! UI Components
//!
//! Reusable Leptos components.

mod filter_panel;
mod login_page;
mod price_slider;
mod results_panel;

pub use filter_panel::FilterPanel;
pub use login_page::LoginPage;
pub use price_slider::PriceRangeSlider;
pub use results_panel::ResultsPanel;
