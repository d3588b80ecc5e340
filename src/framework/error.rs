//! # Framework Errors
//!
//! Failures of the request/response plumbing itself. Entity-level rejections travel inside
//! [`FrameworkError::EntityError`] and are recovered by
//! [`StoreError::from`](crate::error::StoreError).

/// Errors that can occur within the resource runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
