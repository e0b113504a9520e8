use super::seed::seed_if_empty;
use crate::clients::StockClient;
use crate::config::Config;
use crate::engine::AdjustmentEngine;
use crate::store::{ActorStockStore, StoreError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("seeding failed: {0}")]
    Seed(#[from] StoreError),

    #[error("actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running service: the stock table actor plus the engine wired to it.
///
/// # Example
///
/// ```rust
/// use stock_adjust::config::Config;
/// use stock_adjust::lifecycle::InventorySystem;
/// use stock_adjust::model::{AdjustmentRequestItem, Direction, ProductId};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = InventorySystem::start(&Config::default()).await?;
///
///     let result = system
///         .engine
///         .process(vec![AdjustmentRequestItem::new(0, 10)], Direction::Decrement)
///         .await?;
///     assert!(result.all_succeeded);
///     assert_eq!(system.engine.get_stock(ProductId(0)).await?.stock_level, 0);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct InventorySystem {
    pub engine: AdjustmentEngine<ActorStockStore>,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Spawn the table actor, wire the engine to it, and seed an empty table
    /// unless `config.no_seed` is set.
    pub async fn start(config: &Config) -> Result<Self, LifecycleError> {
        let (stock_actor, stock_client) = crate::stock_actor::new(config.channel_capacity);
        let stock_handle = tokio::spawn(stock_actor.run(()));

        let engine = AdjustmentEngine::new(ActorStockStore::new(StockClient::new(stock_client)));

        let system = Self {
            engine,
            handles: vec![stock_handle],
        };

        if !config.no_seed {
            seed_if_empty(system.engine.store()).await?;
        }

        info!(capacity = config.channel_capacity, "Inventory system started");
        Ok(system)
    }

    /// Cheap handle for request handlers.
    pub fn engine(&self) -> AdjustmentEngine<ActorStockStore> {
        self.engine.clone()
    }

    /// Drop the system's engine and wait for the table actor to drain.
    ///
    /// The actor exits once every engine clone is gone, so handlers holding one
    /// (a router, a spawned task) must be dropped first or this waits for them.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down inventory system...");
        drop(self.engine);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::SEED_ROWS;
    use crate::model::ProductId;
    use crate::store::StockStore;

    #[tokio::test]
    async fn test_start_seeds_bootstrap_rows() {
        let system = InventorySystem::start(&Config::default()).await.unwrap();

        let rows = system.engine.list_stock().await.unwrap();
        let levels: Vec<(i64, u64)> = rows.iter().map(|r| (r.product_id.0, r.stock_level)).collect();
        assert_eq!(levels, SEED_ROWS.to_vec());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_no_seed_starts_empty() {
        let config = Config {
            no_seed: true,
            ..Config::default()
        };
        let system = InventorySystem::start(&config).await.unwrap();

        assert_eq!(system.engine.store().count_stock().await, Ok(0));
        assert!(system.engine.get_stock(ProductId(0)).await.is_err());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_outstanding_engines() {
        let system = InventorySystem::start(&Config::default()).await.unwrap();
        let handler_engine = system.engine();

        let pending = tokio::spawn(async move {
            tokio::task::yield_now().await;
            let level = handler_engine.get_stock(ProductId(1)).await.unwrap().stock_level;
            drop(handler_engine);
            level
        });

        system.shutdown().await.unwrap();
        assert_eq!(pending.await.unwrap(), 11);
    }
}
