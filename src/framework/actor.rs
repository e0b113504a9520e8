//! # Table Actor
//!
//! `ResourceActor` is the server half of a table. It owns every row of one
//! [`ActorEntity`] type and answers requests strictly one at a time, so a row is
//! never read by one request while another is halfway through changing it. That
//! gives each [`ResourceRequest::Action`] compare-and-set semantics without a lock.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a table of rows.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop; drop every client to stop it.
///
/// ```rust
/// use stock_adjust::framework::ResourceActor;
/// use stock_adjust::model::{ProductId, StockCreate, StockRecord};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<StockRecord>::new(8);
///     let handle = tokio::spawn(actor.run(()));
///
///     client.create(ProductId(7), StockCreate { stock_level: 3 }).await.unwrap();
///     assert_eq!(client.count().await.unwrap(), 1);
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    rows: BTreeMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new actor and its client.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: BTreeMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "StockRecord" rather than "stock_adjust::model::stock::StockRecord"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Create");
                    if self.rows.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }
                    let result = match T::from_create_params(id.clone(), params) {
                        Ok(mut row) => match row.on_create(&context).await {
                            Ok(()) => {
                                self.rows.insert(id.clone(), row);
                                info!(entity_type, %id, size = self.rows.len(), "Created");
                                Ok(id)
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let row = self.rows.get(&id).cloned();
                    debug!(entity_type, %id, found = row.is_some(), "Get");
                    let _ = respond_to.send(Ok(row));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.rows.len(), "List");
                    let _ = respond_to.send(Ok(self.rows.values().cloned().collect()));
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.rows.len()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(row) = self.rows.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = row
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(entity_type, %id, ?outcome, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.rows.len(), "Shutdown");
    }
}
