//! Engine error types.
//!
//! [`EngineError`] aborts a whole call. [`ItemError`] belongs to a single batch
//! item; the engine never propagates it, it renders it into the batch result.

use crate::model::ProductId;
use crate::store::StoreError;
use thiserror::Error;

/// Failures that end an engine call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Precondition: a batch must carry at least one item.
    #[error("No items given")]
    EmptyBatch,

    /// Lookup of a product with no row.
    #[error("Product not found")]
    NotFound(ProductId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Why one batch item did not change stock.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("item {index}: missing product_id")]
    MissingProductId { index: usize },

    #[error("item {index} (product {product_id}): missing or zero quantity")]
    MissingQuantity { index: usize, product_id: ProductId },

    #[error("item {index} (product {product_id}): quantity must be positive, got {quantity}")]
    NonPositiveQuantity {
        index: usize,
        product_id: ProductId,
        quantity: i64,
    },

    /// The conditional update changed zero rows.
    #[error("item {index} (product {product_id}): product not found or inventory unchanged")]
    NotFoundOrUnchanged { index: usize, product_id: ProductId },

    #[error("item {index} (product {product_id}): {source}")]
    Store {
        index: usize,
        product_id: ProductId,
        source: StoreError,
    },

    /// The item's task died before reporting.
    #[error("item task aborted: {reason}")]
    Aborted { reason: String },
}

impl ItemError {
    /// Rejected before reaching the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ItemError::MissingProductId { .. }
                | ItemError::MissingQuantity { .. }
                | ItemError::NonPositiveQuantity { .. }
        )
    }
}
