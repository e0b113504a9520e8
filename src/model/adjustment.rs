//! Batch adjustment DTOs: what a caller sends and what the engine hands back.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which way a batch moves stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increment,
    Decrement,
}

impl Direction {
    /// Decrements clamp at zero; increments never need to.
    pub fn floor_at_zero(self) -> bool {
        matches!(self, Direction::Decrement)
    }

    /// Signed delta for a validated, positive quantity.
    pub fn delta(self, quantity: i64) -> i64 {
        match self {
            Direction::Increment => quantity,
            Direction::Decrement => -quantity,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Increment => f.write_str("increment"),
            Direction::Decrement => f.write_str("decrement"),
        }
    }
}

/// One `{product_id, quantity}` request as it arrives on the wire.
///
/// Both fields are optional here; a missing one is a per-item validation
/// failure reported by the engine, not a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRequestItem {
    #[serde(default, alias = "productId")]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl AdjustmentRequestItem {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id: Some(product_id),
            quantity: Some(quantity),
        }
    }
}

/// Outcome of one batch.
///
/// `total_changes` counts rows the store actually changed, even when
/// `all_succeeded` is false. Callers decide what to surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub total_changes: u64,
    pub item_errors: Vec<String>,
    pub all_succeeded: bool,
    pub items_processed: usize,
}

impl BatchResult {
    /// `"<n> item(s) processed."`
    pub fn summary(&self) -> String {
        format!("{} item(s) processed.", self.items_processed)
    }

    /// Every item error joined into one message.
    pub fn error_message(&self) -> String {
        self.item_errors.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accepts_both_key_spellings() {
        let snake: AdjustmentRequestItem =
            serde_json::from_str(r#"{"product_id": 2, "quantity": 8}"#).unwrap();
        let camel: AdjustmentRequestItem =
            serde_json::from_str(r#"{"productId": 2, "quantity": 8}"#).unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake, AdjustmentRequestItem::new(2, 8));
    }

    #[test]
    fn test_item_missing_fields_parse_as_none() {
        let item: AdjustmentRequestItem = serde_json::from_str(r#"{"quantity": 5}"#).unwrap();
        assert_eq!(item.product_id, None);
        assert_eq!(item.quantity, Some(5));

        let item: AdjustmentRequestItem =
            serde_json::from_str(r#"{"product_id": 0, "quantity": null}"#).unwrap();
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn test_direction_delta_and_floor() {
        assert_eq!(Direction::Increment.delta(5), 5);
        assert_eq!(Direction::Decrement.delta(5), -5);
        assert!(Direction::Decrement.floor_at_zero());
        assert!(!Direction::Increment.floor_at_zero());
    }

    #[test]
    fn test_batch_result_messages() {
        let result = BatchResult {
            total_changes: 1,
            item_errors: vec!["a".into(), "b".into()],
            all_succeeded: false,
            items_processed: 3,
        };
        assert_eq!(result.summary(), "3 item(s) processed.");
        assert_eq!(result.error_message(), "a; b");
    }
}
