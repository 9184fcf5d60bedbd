//! Order persistence for the orderly service.
//!
//! Defines the [`OrderStore`] abstraction and the in-process [`MemoryStore`]
//! table implementation.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::OrderStore;
