//! # Stock Adjust
//!
//! Batch stock adjustment over a single product table.
//!
//! A caller sends a list of `{product_id, quantity}` items and a direction.
//! Every valid item becomes one atomic conditional update of the product's
//! stock level; decrements clamp at zero, increments add exactly the quantity.
//! Items run concurrently and independently. The caller gets back how many rows
//! changed and every per-item error.
//!
//! ## Module Tour
//!
//! ### The table ([`framework`], [`stock_actor`], [`clients`])
//! The stock table is a [`framework::ResourceActor`] owning every
//! [`model::StockRecord`]. It applies requests one at a time, so a conditional
//! adjustment is atomic per row no matter how many batches are in flight.
//! [`clients::StockClient`] is the typed handle.
//!
//! ### The store contract ([`store`])
//! [`store::StockStore`] is what the engine is written against. The shipped
//! implementation, [`store::ActorStockStore`], talks to the table actor.
//!
//! ### The engine ([`engine`])
//! [`engine::AdjustmentEngine`] validates, fans out, joins, and aggregates.
//! See its module docs for the batch rules.
//!
//! ### The outside ([`http`], [`config`], [`lifecycle`])
//! An axum router exposes lookups and both adjustment directions.
//! [`lifecycle::InventorySystem`] wires everything and seeds an empty table.
//!
//! ## Quick Start
//!
//! ```rust
//! use stock_adjust::config::Config;
//! use stock_adjust::lifecycle::InventorySystem;
//! use stock_adjust::model::{AdjustmentRequestItem, Direction, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = InventorySystem::start(&Config::default()).await?;
//!
//!     let result = system
//!         .engine
//!         .process(vec![AdjustmentRequestItem::new(1, 5)], Direction::Increment)
//!         .await?;
//!     assert_eq!(result.total_changes, 1);
//!     assert_eq!(system.engine.get_stock(ProductId(1)).await?.stock_level, 16);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod config;
pub mod engine;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod stock_actor;
pub mod store;
