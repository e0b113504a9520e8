//! Error types for the stock table.

use crate::model::ProductId;
use thiserror::Error;

/// Errors raised by stock rows and the stock client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StockError {
    /// No row for the product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A row for the product already exists.
    #[error("Product already exists: {0}")]
    AlreadyExists(ProductId),

    /// An unclamped adjustment would leave negative stock.
    #[error("Stock for product {product_id} cannot go below zero: level {stock_level}, delta {delta}")]
    NegativeStock {
        product_id: ProductId,
        stock_level: u64,
        delta: i64,
    },

    /// The new level does not fit the column.
    #[error("Stock for product {product_id} overflows: level {stock_level}, delta {delta}")]
    Overflow {
        product_id: ProductId,
        stock_level: u64,
        delta: i64,
    },

    /// The table actor could not be reached or answered with a plumbing error.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StockError {
    fn from(msg: String) -> Self {
        StockError::ActorCommunicationError(msg)
    }
}
