//! # Stock Client
//!
//! High-level API for the stock table actor. Wraps a `ResourceClient<StockRecord>`
//! and turns framework errors back into [`StockError`]s.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ProductId, StockCreate, StockRecord};
use crate::stock_actor::{StockAction, StockActionResult, StockError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the stock table actor.
#[derive(Clone)]
pub struct StockClient {
    inner: ResourceClient<StockRecord>,
}

impl StockClient {
    pub fn new(inner: ResourceClient<StockRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<StockRecord> for StockClient {
    type Error = StockError;

    fn inner(&self) -> &ResourceClient<StockRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> StockError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<StockError>() {
                Ok(stock) => *stock,
                Err(other) => StockError::ActorCommunicationError(other.to_string()),
            },
            other => StockError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl StockClient {
    /// Insert a new row for `id`.
    #[instrument(skip(self))]
    pub async fn insert(&self, id: ProductId, stock_level: u64) -> Result<ProductId, StockError> {
        debug!("Sending request");
        self.inner
            .create(id, StockCreate { stock_level })
            .await
            .map_err(|e| match e {
                FrameworkError::AlreadyExists(_) => StockError::AlreadyExists(id),
                other => Self::map_error(other),
            })
    }

    /// Conditionally adjust the stock of `id` by `delta`.
    ///
    /// Returns the new level. See [`StockAction::Adjust`] for the guard.
    #[instrument(skip(self))]
    pub async fn adjust(&self, id: ProductId, delta: i64, floor_at_zero: bool) -> Result<u64, StockError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, StockAction::Adjust { delta, floor_at_zero })
            .await
        {
            Ok(StockActionResult::Adjusted { stock_level }) => Ok(stock_level),
            Err(e) if e.is_not_found() => Err(StockError::NotFound(id)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_adjust_sends_conditional_action() {
        let (client, mut receiver) = create_mock_client::<StockRecord>(10);
        let stock_client = StockClient::new(client);

        let task = tokio::spawn(async move { stock_client.adjust(ProductId(0), -10, true).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(0));
        assert_eq!(
            action,
            StockAction::Adjust {
                delta: -10,
                floor_at_zero: true
            }
        );
        responder
            .send(Ok(StockActionResult::Adjusted { stock_level: 0 }))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(0));
    }

    #[tokio::test]
    async fn test_adjust_maps_missing_row() {
        let mut mock = MockClient::<StockRecord>::new();
        mock.expect_action(ProductId(99))
            .return_err(FrameworkError::NotFound("99".into()));

        let client = StockClient::new(mock.client());
        assert_eq!(
            client.adjust(ProductId(99), -1, true).await,
            Err(StockError::NotFound(ProductId(99)))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_adjust_recovers_row_error() {
        let mut mock = MockClient::<StockRecord>::new();
        let refused = StockError::NegativeStock {
            product_id: ProductId(1),
            stock_level: 2,
            delta: -3,
        };
        mock.expect_action(ProductId(1))
            .return_err(FrameworkError::EntityError(Box::new(refused.clone())));

        let client = StockClient::new(mock.client());
        assert_eq!(client.adjust(ProductId(1), -3, false).await, Err(refused));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client::<StockRecord>(1);
        drop(receiver);

        let err = StockClient::new(client).get(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, StockError::ActorCommunicationError(_)));
    }
}
