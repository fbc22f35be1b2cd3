//! # Quarterdeck
//!
//! Administrative dashboard for the Quarterdeck storefront, built with
//! Leptos and compiled to WebAssembly.
//!
//! ## Features
//!
//! - **Session-gated navigation**: every route except login sits behind a
//!   guard that re-checks the stored token on each transition
//! - **Shared API client**: one default bearer header for all requests and
//!   centralized handling of rejected sessions
//! - **Canvas charts**: the sales overview rendered without a JS chart lib
//! - **Component showcases**: reference pages for buttons, cards, menus
//!   and tables
//!
//! ## Modules
//!
//! - [`router`]: route table, path constants and the navigation guard
//! - [`session`]: localStorage-backed session store
//! - [`api`]: HTTP client, typed endpoints and the 401 handling
//! - [`pages`]: one component per route
//! - [`components`]: shared UI building blocks
//! - [`state`]: global reactive state

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
