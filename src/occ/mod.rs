//! # Optimistic Concurrency Control
//!
//! Every mutation of a [`VersionedEntity`] goes through [`apply`]: the caller states the
//! version it believes is current, the controller compares it with the snapshot it was
//! handed, and either runs the mutation and bumps the version by exactly one, or rejects.
//!
//! The controller is a pure decision function. It performs no I/O and never retries; the
//! resource actor that owns the row runs it inside a single request, which makes the
//! read-compare-write cycle atomic.
//!
//! ```rust
//! use stockroom::occ::{self, VersionedEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Flag { version: i64, status: bool }
//!
//! impl VersionedEntity for Flag {
//!     fn version(&self) -> i64 { self.version }
//!     fn set_version(&mut self, version: i64) { self.version = version; }
//!     fn status(&self) -> bool { self.status }
//!     fn set_status(&mut self, status: bool) { self.status = status; }
//! }
//!
//! let flag = Flag { version: 1, status: true };
//! let flag = occ::disable(flag, 1).unwrap();
//! assert_eq!((flag.version, flag.status), (2, false));
//! assert!(occ::enable(flag, 1).is_err()); // stale token
//! ```

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// A mutable resource carrying a monotonic version and an enabled/disabled status.
pub trait VersionedEntity: Clone {
    /// Current version (>= 1 for any persisted entity).
    fn version(&self) -> i64;

    /// Only [`apply`] should call this.
    fn set_version(&mut self, version: i64);

    /// `true` when enabled.
    fn status(&self) -> bool;

    fn set_status(&mut self, status: bool);
}

/// Which version a mutation expects to find in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedVersion {
    /// Whatever version is stored when the request is processed. The read and the write
    /// happen in the same actor step, so this is still a compare-and-swap.
    Latest,
    /// A token the caller read earlier.
    Exact(i64),
}

impl ExpectedVersion {
    /// Resolves against the version of the freshly loaded snapshot.
    pub fn resolve(self, current: i64) -> i64 {
        match self {
            ExpectedVersion::Latest => current,
            ExpectedVersion::Exact(version) => version,
        }
    }
}

impl From<i64> for ExpectedVersion {
    fn from(version: i64) -> Self {
        ExpectedVersion::Exact(version)
    }
}

/// Rejects the zero identifier before any lookup happens.
pub fn ensure_id(raw: u32) -> Result<(), StoreError> {
    if raw == 0 {
        return Err(StoreError::ZeroId);
    }
    Ok(())
}

/// Compares the stored version with the caller's expectation.
///
/// A non-positive expectation is a programming error and fails with
/// [`StoreError::InvalidVersion`] even if it happens to equal the stored value.
pub fn check_version(actual: i64, expected: i64) -> Result<(), StoreError> {
    if expected <= 0 {
        return Err(StoreError::InvalidVersion(expected));
    }
    if actual != expected {
        return Err(StoreError::VersionConflict { expected, actual });
    }
    Ok(())
}

/// Runs `mutate` against `current` if `expected` is still the stored version.
///
/// On success the returned snapshot carries `current.version() + 1`, whatever `mutate`
/// did to the version field. On failure nothing is returned, so the caller has nothing to
/// persist. `mutate` may reject on its own (stock and discount rules do); its error is
/// passed through unchanged.
pub fn apply<E, F>(current: E, expected: i64, mutate: F) -> Result<E, StoreError>
where
    E: VersionedEntity,
    F: FnOnce(E) -> Result<E, StoreError>,
{
    let base = current.version();
    check_version(base, expected)?;
    let version = base
        .checked_add(1)
        .ok_or(StoreError::InvalidVersion(base))?;
    let mut next = mutate(current)?;
    next.set_version(version);
    Ok(next)
}

/// Sets `status = true`. Allowed from either state; always bumps the version.
pub fn enable<E: VersionedEntity>(current: E, expected: i64) -> Result<E, StoreError> {
    apply(current, expected, |mut entity| {
        entity.set_status(true);
        Ok(entity)
    })
}

/// Sets `status = false`. Allowed from either state; always bumps the version.
pub fn disable<E: VersionedEntity>(current: E, expected: i64) -> Result<E, StoreError> {
    apply(current, expected, |mut entity| {
        entity.set_status(false);
        Ok(entity)
    })
}
