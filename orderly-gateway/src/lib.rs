//! HTTP gateway for the orderly order service.
//!
//! Exposes the order CRUD endpoints over axum and translates handler
//! outcomes into HTTP responses. Authorization-scope enforcement lives in
//! the deployment's edge layer, not here.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
