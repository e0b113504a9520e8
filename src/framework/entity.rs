//! # ActorEntity Trait
//!
//! The contract a row type implements to live inside a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! A row is addressed by an explicit, caller-chosen key (`Id`). Rows are inserted
//! once with a `Create` payload and afterwards only mutated through `Action`s, which
//! the actor applies one at a time. That sequential application is what makes every
//! action a self-contained atomic operation on its row: no other request can observe
//! or modify the row between reading its current value and writing the new one.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any row type must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so an implementation may await other actors. The
/// `Context` type is injected by `ResourceActor::run`, which lets dependencies be
/// bound after construction. Use `()` when the row needs nothing.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The table key (e.g. a product id). Rows are kept ordered by it.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// Payload used to insert a new row.
    type Create: Send + Sync + Debug;

    /// Row-specific mutation (e.g. a conditional stock adjustment).
    type Action: Send + Sync + Debug;

    /// The value an action reports back on success.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the hooks.
    type Context: Send + Sync;

    /// One error enum per row type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the row from its key and insert payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the row becomes visible.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an action to the row.
    ///
    /// On `Err` the row must be left exactly as it was.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
