//! Read path and row creation.
//!
//! Unlike batch items, a lookup of an unknown product is its own outcome
//! ([`EngineError::NotFound`]), kept apart from store failures.

use super::{AdjustmentEngine, EngineError};
use crate::model::{ProductId, StockRecord};
use crate::store::StockStore;
use tracing::{debug, info, instrument};

impl<S: StockStore> AdjustmentEngine<S> {
    /// Current stock of one product.
    #[instrument(skip(self))]
    pub async fn get_stock(&self, product_id: ProductId) -> Result<StockRecord, EngineError> {
        let row = self.store().get_stock(product_id).await?;
        debug!(found = row.is_some(), "Lookup");
        row.ok_or(EngineError::NotFound(product_id))
    }

    /// Every row, ordered by product id.
    #[instrument(skip(self))]
    pub async fn list_stock(&self) -> Result<Vec<StockRecord>, EngineError> {
        Ok(self.store().list_stock().await?)
    }

    /// Add a product with an initial level and return its row.
    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        product_id: ProductId,
        stock_level: u64,
    ) -> Result<StockRecord, EngineError> {
        self.store().insert_stock(product_id, stock_level).await?;
        info!("Product added");
        self.get_stock(product_id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::tests::FakeStore;
    use crate::engine::{AdjustmentEngine, EngineError};
    use crate::model::ProductId;
    use crate::store::StoreError;

    #[tokio::test]
    async fn test_get_stock_found_and_missing() {
        let engine = AdjustmentEngine::new(FakeStore::with_rows(&[(1, 11)]));

        assert_eq!(engine.get_stock(ProductId(1)).await.unwrap().stock_level, 11);
        assert_eq!(
            engine.get_stock(ProductId(7)).await,
            Err(EngineError::NotFound(ProductId(7)))
        );
    }

    #[tokio::test]
    async fn test_get_stock_store_failure_is_not_not_found() {
        let engine = AdjustmentEngine::new(FakeStore::with_rows(&[(1, 11)]).broken_for(1));

        let err = engine.get_stock(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, EngineError::Store(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_add_product_rejects_duplicate() {
        let engine = AdjustmentEngine::new(FakeStore::with_rows(&[(1, 11)]));

        let row = engine.add_product(ProductId(5), 20).await.unwrap();
        assert_eq!(row.stock_level, 20);
        assert_eq!(
            engine.add_product(ProductId(1), 3).await,
            Err(EngineError::Store(StoreError::Duplicate(ProductId(1))))
        );
        assert_eq!(engine.list_stock().await.unwrap().len(), 2);
    }
}
