//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod stock_client;

pub use actor_client::*;
pub use stock_client::*;
