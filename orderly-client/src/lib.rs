//! Typed HTTP client for the orderly orders API.
//!
//! Mirrors the frontend's view of the service: create, fetch, list, and
//! replace orders over JSON, with API rejections surfaced as typed errors
//! instead of raw response bodies.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod client;
pub mod error;

pub use client::OrdersClient;
pub use error::ClientError;
