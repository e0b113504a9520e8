//! [`StockStore`] backed by the stock table actor.
//!
//! Every call becomes one message to the actor. The actor applies messages in
//! arrival order, which serializes concurrent writers per row the way a database
//! serializes `UPDATE ... SET stock_level = MAX(stock_level + ?, 0)`.

use super::{StockStore, StoreError};
use crate::clients::{ActorClient, StockClient};
use crate::model::{ProductId, StockRecord};
use crate::stock_actor::StockError;
use async_trait::async_trait;

#[derive(Clone)]
pub struct ActorStockStore {
    client: StockClient,
}

impl ActorStockStore {
    pub fn new(client: StockClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &StockClient {
        &self.client
    }
}

impl From<StockError> for StoreError {
    fn from(e: StockError) -> Self {
        match e {
            StockError::AlreadyExists(id) => StoreError::Duplicate(id),
            StockError::NegativeStock { .. } | StockError::Overflow { .. } => {
                StoreError::Constraint(e.to_string())
            }
            StockError::NotFound(_) | StockError::ActorCommunicationError(_) => {
                StoreError::Unavailable(e.to_string())
            }
        }
    }
}

#[async_trait]
impl StockStore for ActorStockStore {
    async fn conditional_adjust(
        &self,
        product_id: ProductId,
        delta: i64,
        floor_at_zero: bool,
    ) -> Result<u64, StoreError> {
        match self.client.adjust(product_id, delta, floor_at_zero).await {
            Ok(_) => Ok(1),
            Err(StockError::NotFound(_)) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_stock(&self, product_id: ProductId) -> Result<Option<StockRecord>, StoreError> {
        Ok(self.client.get(product_id).await?)
    }

    async fn list_stock(&self) -> Result<Vec<StockRecord>, StoreError> {
        Ok(self.client.list().await?)
    }

    async fn insert_stock(&self, product_id: ProductId, stock_level: u64) -> Result<(), StoreError> {
        self.client.insert(product_id, stock_level).await?;
        Ok(())
    }

    async fn count_stock(&self) -> Result<usize, StoreError> {
        Ok(self.client.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock_actor;

    fn spawn_store() -> ActorStockStore {
        let (actor, client) = stock_actor::new(8);
        tokio::spawn(actor.run(()));
        ActorStockStore::new(StockClient::new(client))
    }

    #[tokio::test]
    async fn test_conditional_adjust_reports_rows_changed() {
        let store = spawn_store();
        store.insert_stock(ProductId(0), 4).await.unwrap();

        assert_eq!(store.conditional_adjust(ProductId(0), -10, true).await, Ok(1));
        assert_eq!(store.conditional_adjust(ProductId(99), -1, true).await, Ok(0));

        let row = store.get_stock(ProductId(0)).await.unwrap().unwrap();
        assert_eq!(row.stock_level, 0);
    }

    #[tokio::test]
    async fn test_unclamped_underflow_is_constraint_error() {
        let store = spawn_store();
        store.insert_stock(ProductId(1), 2).await.unwrap();

        let err = store.conditional_adjust(ProductId(1), -3, false).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
        assert_eq!(store.get_stock(ProductId(1)).await.unwrap().unwrap().stock_level, 2);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let store = spawn_store();
        store.insert_stock(ProductId(3), 65).await.unwrap();

        assert_eq!(
            store.insert_stock(ProductId(3), 1).await,
            Err(StoreError::Duplicate(ProductId(3)))
        );
        assert_eq!(store.count_stock().await, Ok(1));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_product() {
        let store = spawn_store();
        for id in [4, 0, 2] {
            store.insert_stock(ProductId(id), 1).await.unwrap();
        }
        let ids: Vec<i64> = store
            .list_stock()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.product_id.0)
            .collect();
        assert_eq!(ids, vec![0, 2, 4]);
    }
}
