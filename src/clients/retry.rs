//! Caller-side retry for version conflicts.
//!
//! The core never retries. A caller that wants to can wrap a *read-recompute-write*
//! closure in [`retry_on_conflict`]; each attempt must reload the entity so it sends a
//! fresh version token. Only [`StoreError::VersionConflict`] is retried.

use crate::error::StoreError;
use crate::lifecycle::config::RetryConfig;
use backon::{ExponentialBuilder, Retryable};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Exponential backoff with jitter for conflict retries.
pub fn conflict_backoff(config: &RetryConfig) -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(config.min_delay())
        .with_max_delay(config.max_delay())
        .with_max_times(config.max_attempts)
        .with_jitter()
}

/// Runs `operation` until it succeeds, fails with a non-conflict error, or the attempts run
/// out. The last error is returned.
pub async fn retry_on_conflict<T, F, Fut>(
    config: &RetryConfig,
    operation: F,
) -> Result<T, StoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    operation
        .retry(conflict_backoff(config))
        .when(StoreError::is_retryable)
        .notify(|err: &StoreError, dur: Duration| {
            warn!(error = %err, delay = ?dur, "Version conflict, retrying");
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig {
            min_delay_ms: 1,
            max_delay_ms: 2,
            max_attempts: 3,
        }
    }

    #[tokio::test]
    async fn test_conflicts_are_retried() {
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let result = retry_on_conflict(&fast(), || async move {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(StoreError::VersionConflict {
                    expected: 1,
                    actual: 2,
                })
            } else {
                Ok(42)
            }
        })
        .await;
        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_other_errors_are_returned_at_once() {
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let result: Result<(), _> = retry_on_conflict(&fast(), || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::InsufficientStock {
                requested: 2,
                available: 1,
            })
        })
        .await;
        assert!(matches!(result, Err(StoreError::InsufficientStock { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let result: Result<(), _> = retry_on_conflict(&fast(), || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::VersionConflict {
                expected: 1,
                actual: 9,
            })
        })
        .await;
        assert!(result.unwrap_err().is_retryable());
        // one initial attempt plus max_attempts retries
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
