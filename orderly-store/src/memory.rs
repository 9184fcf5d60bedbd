//! In-memory order table.
//!
//! Keeps the full order set in a `RwLock<HashMap>` keyed by id. The scan
//! order of [`MemoryStore::list`] is the map's iteration order and carries no
//! guarantee.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use orderly_core::{Order, OrderDraft, OrderId};

use crate::store::OrderStore;
use crate::StoreError;

/// Thread-safe in-process order table.
///
/// Carries the table-name label supplied at startup; the label appears in
/// logs and in any error this store reports.
#[derive(Debug)]
pub struct MemoryStore {
    table: String,
    records: RwLock<HashMap<OrderId, Order>>,
}

impl MemoryStore {
    /// Create an empty table with the given name label.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Name label of this table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread
    /// panicked while holding the write lock).
    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        let order = Order::new(OrderId::random(), draft);
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records
            .write()
            .expect("order table write lock poisoned")
            .insert(order.id.clone(), order.clone());
        tracing::debug!(table = %self.table, id = %order.id, "order created");
        Ok(order)
    }

    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let found = self
            .records
            .read()
            .expect("order table read lock poisoned")
            .get(id)
            .cloned();
        Ok(found)
    }

    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let all = self
            .records
            .read()
            .expect("order table read lock poisoned")
            .values()
            .cloned()
            .collect();
        Ok(all)
    }

    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    async fn put(&self, id: OrderId, draft: OrderDraft) -> Result<Order, StoreError> {
        let order = Order::new(id, draft);
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.records
            .write()
            .expect("order table write lock poisoned")
            .insert(order.id.clone(), order.clone());
        tracing::debug!(table = %self.table, id = %order.id, "order replaced");
        Ok(order)
    }
}
