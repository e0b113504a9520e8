//! # Stock Table Actor
//!
//! The single table of the system: one [`StockRecord`] per product, owned by one
//! [`ResourceActor`]. All writers, from every batch and every request, go through
//! its mailbox, so each [`StockAction::Adjust`] is atomic per row.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`StockRecord`]
//! - [`error`] - [`StockError`]
//! - [`actions`] - [`StockAction`] and [`StockActionResult`]
//! - [`new()`] - factory returning the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use stock_adjust::clients::StockClient;
//! use stock_adjust::model::ProductId;
//! use stock_adjust::stock_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = stock_actor::new(32);
//!     let client = StockClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     client.insert(ProductId(1), 11).await?;
//!     let level = client.adjust(ProductId(1), -20, true).await?;
//!     assert_eq!(level, 0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::StockRecord;

/// Creates the stock table actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<StockRecord>, ResourceClient<StockRecord>) {
    ResourceActor::new(buffer_size)
}
