//! API Client
//!
//! Shared HTTP client and typed endpoints for the Quarterdeck REST API.

pub mod client;

pub use client::*;
