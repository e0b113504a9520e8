//! # Adjustment Engine
//!
//! Applies a batch of `{product_id, quantity}` requests to the stock store.
//!
//! ## Processing a batch
//!
//! 1. An empty batch fails with [`EngineError::EmptyBatch`] before any store call.
//! 2. Each item is validated on its own ([`validate_item`]). A rejected item is
//!    recorded and skipped; its siblings carry on.
//! 3. Every valid item gets its own task issuing exactly one
//!    [`StockStore::conditional_adjust`]. All tasks run concurrently in a
//!    [`JoinSet`] and the engine waits for every one of them; a failing item never
//!    cancels the others.
//! 4. One changed row counts towards `total_changes`. Zero rows means the product
//!    does not exist. A store error is scoped to its item.
//! 5. `all_succeeded` is true only when no item produced an error.
//!
//! Validation errors come first, in batch order; store outcomes follow in
//! completion order. Items that target the same product are independent atomic
//! updates: two decrements of 10 against a level of 4 both clamp, leaving 0,
//! rather than combining into one -20.
//!
//! A batch with some failed items is reported as failed even though its other
//! items did change the store. Nothing is rolled back.

pub mod error;
pub mod lookup;
pub mod validate;

pub use error::{EngineError, ItemError};
pub use validate::{validate_item, ValidItem};

use crate::model::{AdjustmentRequestItem, BatchResult, Direction};
use crate::store::StockStore;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, instrument, warn, Instrument};

/// The batch adjustment engine. Cheap to clone; clones share the store.
pub struct AdjustmentEngine<S: StockStore> {
    store: Arc<S>,
}

impl<S: StockStore> Clone for AdjustmentEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: StockStore> AdjustmentEngine<S> {
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `batch` in `direction`. See the module docs for the rules.
    #[instrument(skip_all, fields(items = batch.len(), direction = %direction))]
    pub async fn process(
        &self,
        batch: Vec<AdjustmentRequestItem>,
        direction: Direction,
    ) -> Result<BatchResult, EngineError> {
        if batch.is_empty() {
            warn!("Rejected empty batch");
            return Err(EngineError::EmptyBatch);
        }

        let items_processed = batch.len();
        let mut item_errors: Vec<ItemError> = Vec::new();
        let mut tasks = JoinSet::new();

        for (index, item) in batch.iter().enumerate() {
            match validate_item(index, item) {
                Ok(valid) => {
                    let store = Arc::clone(&self.store);
                    tasks.spawn(apply_item(store, valid, direction).in_current_span());
                }
                Err(e) => {
                    warn!(error = %e, "Item rejected");
                    item_errors.push(e);
                }
            }
        }

        let mut total_changes = 0u64;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(rows)) => total_changes += rows,
                Ok(Err(e)) => {
                    warn!(error = %e, "Item failed");
                    item_errors.push(e);
                }
                Err(join_error) => {
                    error!(error = %join_error, "Item task aborted");
                    item_errors.push(ItemError::Aborted {
                        reason: join_error.to_string(),
                    });
                }
            }
        }

        let all_succeeded = item_errors.is_empty();
        info!(total_changes, failed = item_errors.len(), all_succeeded, "Batch finished");

        Ok(BatchResult {
            total_changes,
            item_errors: item_errors.iter().map(ToString::to_string).collect(),
            all_succeeded,
            items_processed,
        })
    }
}

/// One item, one conditional update.
async fn apply_item<S: StockStore>(
    store: Arc<S>,
    item: ValidItem,
    direction: Direction,
) -> Result<u64, ItemError> {
    let ValidItem {
        index,
        product_id,
        quantity,
    } = item;
    match store
        .conditional_adjust(product_id, direction.delta(quantity), direction.floor_at_zero())
        .await
    {
        Ok(0) => Err(ItemError::NotFoundOrUnchanged { index, product_id }),
        Ok(rows) => Ok(rows),
        Err(source) => Err(ItemError::Store {
            index,
            product_id,
            source,
        }),
    }
}
