//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber.
//!
//! Verbosity comes from `RUST_LOG` and defaults to `info`:
//!
//! ```bash
//! RUST_LOG=debug cargo run                          # every table request
//! RUST_LOG=stock_adjust::engine=debug cargo run     # engine only
//! ```
//!
//! ## What gets traced
//!
//! - **Table actor**: startup, shutdown, and every Create/Get/Action with the
//!   product id (`entity_type="StockRecord"`).
//! - **Engine**: one `process` span per batch carrying `items` and `direction`,
//!   a warning per rejected or failed item, and a closing `Batch finished` line
//!   with `total_changes` and `failed`.
//! - **HTTP**: a span per request from `tower_http::trace::TraceLayer`.
//!
//! A decrement batch with one unknown product looks like this at `info`:
//!
//! ```text
//! INFO process{items=2 direction=decrement}: Action ok id=2 outcome=Adjusted { stock_level: 100 }
//! WARN process{items=2 direction=decrement}: Not found id=99
//! WARN process{items=2 direction=decrement}: Item failed error=item 1 (product 99): product not found or inventory unchanged
//! INFO process{items=2 direction=decrement}: Batch finished total_changes=1 failed=1 all_succeeded=false
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();
}
