//! Bootstrap rows for a fresh table.

use crate::model::ProductId;
use crate::store::{StockStore, StoreError};
use tracing::{debug, info};

/// `(product_id, stock_level)` rows written into an empty table.
pub const SEED_ROWS: [(i64, u64); 5] = [(0, 4), (1, 11), (2, 108), (3, 65), (4, 36)];

/// Seed the table when, and only when, it holds no rows.
///
/// Returns whether anything was written. Restarting against a populated table
/// is a no-op; restarting against an emptied one seeds it again.
pub async fn seed_if_empty<S: StockStore>(store: &S) -> Result<bool, StoreError> {
    let existing = store.count_stock().await?;
    if existing > 0 {
        debug!(existing, "Table already populated, skipping seed");
        return Ok(false);
    }
    for (id, stock_level) in SEED_ROWS {
        store.insert_stock(ProductId(id), stock_level).await?;
    }
    info!(rows = SEED_ROWS.len(), "Seeded stock table");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::FakeStore;

    #[tokio::test]
    async fn test_seeds_empty_table_once() {
        let store = FakeStore::default();

        assert_eq!(seed_if_empty(&store).await, Ok(true));
        assert_eq!(store.count_stock().await, Ok(5));
        assert_eq!(store.level(2), Some(108));

        assert_eq!(seed_if_empty(&store).await, Ok(false));
        assert_eq!(store.count_stock().await, Ok(5));
    }

    #[tokio::test]
    async fn test_leaves_populated_table_alone() {
        let store = FakeStore::with_rows(&[(9, 1)]);

        assert_eq!(seed_if_empty(&store).await, Ok(false));
        assert_eq!(store.level(0), None);
    }
}
