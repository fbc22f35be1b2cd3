//! Pages
//!
//! Top-level page components for each route.

pub mod buttons;
pub mod cards;
pub mod dashboard;
pub mod login;
pub mod menus;
pub mod tables;

pub use buttons::Buttons;
pub use cards::Cards;
pub use dashboard::Dashboard;
pub use login::Login;
pub use menus::Menus;
pub use tables::Tables;
