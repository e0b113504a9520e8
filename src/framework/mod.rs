//! Generic table actors.
//!
//! A table is a keyed collection of rows owned by a single Tokio task. Requests reach
//! it over a bounded mailbox and are applied one after another, which makes every
//! row mutation atomic with respect to every other request.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait a row type implements
//! - [`ResourceActor`] - the task that owns the rows
//! - [`ResourceClient`] - cloneable async handle to the actor
//! - [`FrameworkError`] - plumbing failures (closed mailbox, missing row, ...)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
