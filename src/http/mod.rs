//! Axum router and handlers for the inventory API.
//!
//! [`build_router`] is the single entry point. Middleware (request tracing) is
//! attached in `main.rs` so tests can drive the bare router.
//!
//! Every error body is `{"error": "<message>"}`.

pub mod errors;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use crate::engine::AdjustmentEngine;
use crate::store::StockStore;

/// Switches that change which routes are mounted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Mount `GET /api/all_items`.
    pub expose_all_items: bool,
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            expose_all_items: config.expose_all_items,
        }
    }
}

pub fn build_router<S: StockStore>(engine: AdjustmentEngine<S>, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/api/inventory", post(handlers::create_stock::<S>))
        .route("/api/inventory/decrement", post(handlers::decrement::<S>))
        .route("/api/inventory/increment", post(handlers::increment::<S>))
        .route("/api/inventory/:id", get(handlers::get_stock::<S>));

    if options.expose_all_items {
        router = router.route("/api/all_items", get(handlers::all_items::<S>));
    }

    router.fallback(handlers::not_found).with_state(engine)
}
