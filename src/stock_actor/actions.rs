//! Custom actions for the stock table.
//!
//! These are applied by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! inside the table actor, one at a time.

/// Row mutations understood by [`StockRecord`](crate::model::StockRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Conditional adjustment: add `delta` to the current level.
    ///
    /// When the result would go negative, `floor_at_zero` clamps it to zero;
    /// without it the adjustment is refused and the row is left untouched.
    Adjust { delta: i64, floor_at_zero: bool },
}

/// Results from [`StockAction`]s, one variant per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockActionResult {
    /// The row was rewritten; carries the new level.
    Adjusted { stock_level: u64 },
}
