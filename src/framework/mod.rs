//! Generic resource runtime.
//!
//! One [`ResourceActor`] per entity type owns that type's rows and processes requests
//! sequentially, which is what makes each versioned write an atomic compare-and-swap.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store for one entity type
//! - [`ResourceClient`] - Typed, cloneable handle that sends requests to the actor
//! - [`FrameworkError`] - Transport-level failures (closed actor, missing row, entity error)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

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
