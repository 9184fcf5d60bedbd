//! Order store abstraction trait.
//!
//! Allows swapping the backing table implementation without changing the
//! request handlers.

use async_trait::async_trait;

use orderly_core::{Order, OrderDraft, OrderId};

use crate::StoreError;

/// Key-value persistence abstraction for orders.
///
/// Implementations must be `Send + Sync` so a single handle can serve
/// concurrent requests. Writes have full-record overwrite semantics: a put
/// replaces the entire stored record, never parts of it.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a draft under a freshly generated identifier and return the
    /// stored order.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing table rejects the write.
    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError>;

    /// Look up an order by identifier; `Ok(None)` when absent.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing table cannot be read.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, StoreError>;

    /// Return every order in the table, in native scan order.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing table cannot be scanned.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Replace or insert the full record under the given identifier and
    /// return the stored order.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing table rejects the write.
    async fn put(&self, id: OrderId, draft: OrderDraft) -> Result<Order, StoreError>;
}
