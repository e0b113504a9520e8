//! # Stock Store
//!
//! The persistence contract the adjustment engine is written against. The engine
//! only ever sees a [`StockStore`]; which table backs it is decided at wiring time
//! (see [`crate::lifecycle`]), so tests can hand it a fake.
//!
//! The one write primitive is [`StockStore::conditional_adjust`]: a single atomic
//! call that applies a signed delta, with the floor-at-zero guard evaluated by the
//! store itself, and reports how many rows it changed. `Ok(0)` is how an unknown
//! product shows up; there is no separate existence check.

pub mod actor_store;

pub use actor_store::ActorStockStore;

use crate::model::{ProductId, StockRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Store-level failures. Not-found is never one of them: reads return `None`
/// and conditional updates return zero rows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Insert collided with an existing row.
    #[error("product {0} already exists")]
    Duplicate(ProductId),

    /// The store refused a write that would break a row invariant.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations on the stock table.
#[async_trait]
pub trait StockStore: Send + Sync + 'static {
    /// Atomically add `delta` to the product's stock.
    ///
    /// With `floor_at_zero` a result below zero is stored as zero; without it the
    /// write is refused with [`StoreError::Constraint`]. Returns the number of rows
    /// changed: `1` on success, `0` when no row exists for `product_id`.
    async fn conditional_adjust(
        &self,
        product_id: ProductId,
        delta: i64,
        floor_at_zero: bool,
    ) -> Result<u64, StoreError>;

    /// Read one row.
    async fn get_stock(&self, product_id: ProductId) -> Result<Option<StockRecord>, StoreError>;

    /// Read every row, ordered by product id.
    async fn list_stock(&self) -> Result<Vec<StockRecord>, StoreError>;

    /// Insert a new row.
    async fn insert_stock(&self, product_id: ProductId, stock_level: u64) -> Result<(), StoreError>;

    /// Number of rows.
    async fn count_stock(&self) -> Result<usize, StoreError>;
}
