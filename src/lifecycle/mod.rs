//! Process lifecycle: wiring, bootstrap data, and logging setup.

pub mod inventory_system;
pub mod seed;
pub mod tracing;

pub use inventory_system::{InventorySystem, LifecycleError};
pub use seed::{seed_if_empty, SEED_ROWS};
pub use self::tracing::setup_tracing;
