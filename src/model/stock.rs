//! The stock table row.
//!
//! # Actor Framework
//! [`StockRecord`] implements [`ActorEntity`](crate::framework::ActorEntity)
//! (see [`crate::stock_actor::entity`]) so the whole table lives inside one
//! [`ResourceActor`](crate::framework::ResourceActor).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe product identifier, the table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current stock of one product.
///
/// `stock_level` is unsigned: a row can never hold negative inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: ProductId,
    pub stock_level: u64,
    pub last_updated: DateTime<Utc>,
}

impl StockRecord {
    /// Creates a row stamped with the current time.
    pub fn new(product_id: ProductId, stock_level: u64) -> Self {
        Self {
            product_id,
            stock_level,
            last_updated: Utc::now(),
        }
    }
}

/// Insert payload for a new row.
#[derive(Debug, Clone, Deserialize)]
pub struct StockCreate {
    pub stock_level: u64,
}
