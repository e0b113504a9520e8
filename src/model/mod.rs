//! Pure data structures: the stock row and the batch adjustment DTOs.

pub mod adjustment;
pub mod stock;

pub use adjustment::*;
pub use stock::*;
