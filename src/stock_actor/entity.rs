//! [`ActorEntity`] implementation for [`StockRecord`].
//!
//! The interesting part is [`StockAction::Adjust`]: the guard (clamp or refuse)
//! and the write happen in the same call, inside the actor, so there is no window
//! between reading the level and storing the new one.

use super::actions::{StockAction, StockActionResult};
use super::error::StockError;
use crate::framework::ActorEntity;
use crate::model::{ProductId, StockCreate, StockRecord};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for StockRecord {
    type Id = ProductId;
    type Create = StockCreate;
    type Action = StockAction;
    type ActionResult = StockActionResult;
    type Context = ();
    type Error = StockError;

    fn from_create_params(id: ProductId, params: StockCreate) -> Result<Self, StockError> {
        Ok(Self::new(id, params.stock_level))
    }

    async fn handle_action(
        &mut self,
        action: StockAction,
        _ctx: &(),
    ) -> Result<StockActionResult, StockError> {
        match action {
            StockAction::Adjust {
                delta,
                floor_at_zero,
            } => {
                let stock_level = self.adjusted_level(delta, floor_at_zero)?;
                self.stock_level = stock_level;
                self.last_updated = Utc::now();
                Ok(StockActionResult::Adjusted { stock_level })
            }
        }
    }
}

impl StockRecord {
    fn adjusted_level(&self, delta: i64, floor_at_zero: bool) -> Result<u64, StockError> {
        let target = i128::from(self.stock_level) + i128::from(delta);
        if target < 0 {
            return if floor_at_zero {
                Ok(0)
            } else {
                Err(StockError::NegativeStock {
                    product_id: self.product_id,
                    stock_level: self.stock_level,
                    delta,
                })
            };
        }
        u64::try_from(target).map_err(|_| StockError::Overflow {
            product_id: self.product_id,
            stock_level: self.stock_level,
            delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: u64) -> StockRecord {
        StockRecord::new(ProductId(0), level)
    }

    async fn adjust(row: &mut StockRecord, delta: i64, floor_at_zero: bool) -> Result<u64, StockError> {
        row.handle_action(StockAction::Adjust { delta, floor_at_zero }, &())
            .await
            .map(|StockActionResult::Adjusted { stock_level }| stock_level)
    }

    #[tokio::test]
    async fn test_decrement_clamps_at_zero() {
        let mut r = row(4);
        assert_eq!(adjust(&mut r, -10, true).await, Ok(0));
        assert_eq!(r.stock_level, 0);
    }

    #[tokio::test]
    async fn test_decrement_within_stock() {
        let mut r = row(108);
        assert_eq!(adjust(&mut r, -8, true).await, Ok(100));
    }

    #[tokio::test]
    async fn test_unclamped_negative_is_refused_and_row_unchanged() {
        let mut r = row(4);
        let before = r.clone();
        let err = adjust(&mut r, -5, false).await.unwrap_err();
        assert!(matches!(err, StockError::NegativeStock { stock_level: 4, delta: -5, .. }));
        assert_eq!(r, before);
    }

    #[tokio::test]
    async fn test_increment_overflow_is_refused() {
        let mut r = row(u64::MAX);
        let err = adjust(&mut r, 1, false).await.unwrap_err();
        assert!(matches!(err, StockError::Overflow { .. }));
        assert_eq!(r.stock_level, u64::MAX);
    }

    #[tokio::test]
    async fn test_adjust_refreshes_timestamp() {
        let mut r = row(11);
        r.last_updated = chrono::DateTime::<Utc>::default();
        assert_eq!(adjust(&mut r, 5, false).await, Ok(16));
        assert!(r.last_updated > chrono::DateTime::<Utc>::default());
    }
}
