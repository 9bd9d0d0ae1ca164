//! UI Components
//!
//! Reusable Leptos components for the dashboards.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod toast;

pub use chart::BarChart;
pub use loading::{BootOverlay, InlineLoading};
pub use nav::Nav;
pub use toast::Toast;
