//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod toast;

pub use chart::BarChart;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use toast::Toast;
