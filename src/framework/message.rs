//! # Table Messages
//!
//! Requests a [`ResourceClient`](crate::framework::ResourceClient) sends to its
//! [`ResourceActor`](crate::framework::ResourceActor). Every request carries a
//! oneshot sender the actor answers on.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Create**: insert a row under an explicit key; fails if the key is taken.
/// - **Get**: fetch a snapshot of one row.
/// - **List**: snapshot of every row, ordered by key.
/// - **Count**: number of rows.
/// - **Action**: apply a row-specific mutation atomically.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
