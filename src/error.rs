//! # Store Errors
//!
//! One closed taxonomy shared by every resource. The concurrency, stock and discount
//! modules all reject with a [`StoreError`], and the transport layer turns it into a
//! status code through [`StoreError::status_code`] instead of matching per handler.

use crate::framework::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by the versioned-mutation core and the resource clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An identifier of zero was supplied.
    #[error("Identifier must be non-zero")]
    ZeroId,

    /// The expected version is not a valid version number (must be >= 1).
    #[error("Invalid version: {0}")]
    InvalidVersion(i64),

    /// The optimistic lock failed: somebody else wrote first.
    #[error("Version conflict: expected version {expected}, found {actual} (reload and retry)")]
    VersionConflict { expected: i64, actual: i64 },

    /// A non-positive delta or a negative target quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A decrease larger than the stock on hand.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// A discount was attempted while `allow_discount` is off.
    #[error("Discount not allowed for this product")]
    DiscountNotAllowed,

    /// Discount percentage outside the open interval (0, 100).
    #[error("Invalid discount percent: {0}")]
    InvalidPercent(Decimal),

    /// A price that is zero or negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    /// Any other malformed input (e.g. a blank name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unclassified failure of the backing store.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl StoreError {
    /// Maps the error to the HTTP status the transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound(_) => 404,
            StoreError::VersionConflict { .. } | StoreError::DiscountNotAllowed => 409,
            StoreError::ZeroId
            | StoreError::InvalidVersion(_)
            | StoreError::InvalidQuantity(_)
            | StoreError::InsufficientStock { .. }
            | StoreError::InvalidPercent(_)
            | StoreError::InvalidPrice(_)
            | StoreError::Validation(_) => 400,
            StoreError::Persistence(_) => 500,
        }
    }

    /// Only a version conflict can succeed on a later attempt, and only after the caller
    /// reloads and recomputes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::VersionConflict { .. })
    }
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => StoreError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<StoreError>() {
                Ok(store_error) => *store_error,
                Err(other) => StoreError::Persistence(other.to_string()),
            },
            other => StoreError::Persistence(other.to_string()),
        }
    }
}
