//! Bounded retry loop with a fixed pause
//!
//! Every failure is retried the same way, whatever the error. Attempts run
//! strictly one after another.
//!
//! # Example
//!
//! ```rust,ignore
//! use application::retry::{RetryPolicy, with_retry};
//!
//! let outcome = with_retry(&RetryPolicy::default(), || async {
//!     transit.departures("900000100003", 60).await
//! }).await;
//! ```

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default number of retries after the first attempt
pub const DEFAULT_RETRIES: u32 = 3;

/// Default pause between attempts
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// How often to retry and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retries: u32,
    /// Pause between two attempts
    pub pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            pause: DEFAULT_PAUSE,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(retries: u32, pause: Duration) -> Self {
        Self { retries, pause }
    }

    /// Build a policy from a signed retry count, clamping negatives to zero
    #[must_use]
    pub fn clamped(retries: i64, pause: Duration) -> Self {
        let retries = u32::try_from(retries.max(0)).unwrap_or(u32::MAX);
        Self { retries, pause }
    }

    /// Upper bound on the number of attempts
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

/// Final result of a retried operation
#[derive(Debug)]
pub struct RetryResult<T, E> {
    /// Result of the last attempt
    pub result: Result<T, E>,
    /// Number of attempts made (1 = no retries, 2 = one retry, etc.)
    pub attempts: u32,
}

impl<T, E> RetryResult<T, E> {
    /// Convert to standard Result, discarding metadata
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Run `operation` until it succeeds or the policy's attempts are used up
///
/// Sleeps `policy.pause` between attempts but not after the last one.
pub async fn with_retry<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> RetryResult<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts();
    let mut attempts = 0u32;

    loop {
        attempts += 1;

        match operation().await {
            Ok(value) => {
                if attempts > 1 {
                    debug!(attempts, "Operation succeeded after retries");
                }
                return RetryResult {
                    result: Ok(value),
                    attempts,
                };
            },
            Err(err) if attempts >= max_attempts => {
                warn!(attempts, error = %err, "Operation failed, giving up");
                return RetryResult {
                    result: Err(err),
                    attempts,
                };
            },
            Err(err) => {
                warn!(
                    attempt = attempts,
                    max_attempts,
                    pause_ms = u64::try_from(policy.pause.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "Operation failed, retrying"
                );
                if !policy.pause.is_zero() {
                    tokio::time::sleep(policy.pause).await;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.retries, 3);
        assert_eq!(policy.pause, Duration::from_secs(1));
        assert_eq!(policy.max_attempts(), 4);
    }

    #[test]
    fn negative_retries_clamp_to_zero() {
        let policy = RetryPolicy::clamped(-5, Duration::ZERO);
        assert_eq!(policy.retries, 0);
        assert_eq!(policy.max_attempts(), 1);
    }

    #[test]
    fn huge_retries_saturate() {
        let policy = RetryPolicy::clamped(i64::MAX, Duration::ZERO);
        assert_eq!(policy.retries, u32::MAX);
        assert_eq!(policy.max_attempts(), u32::MAX);
    }

    #[tokio::test]
    async fn first_success_stops_the_loop() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let outcome = with_retry(&RetryPolicy::new(3, Duration::ZERO), || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>("ok")
            }
        })
        .await;

        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.into_result().unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn succeeds_after_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let outcome = with_retry(&RetryPolicy::new(3, Duration::ZERO), || {
            let counter = Arc::clone(&counter);
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err("boom".to_string())
                } else {
                    Ok(7)
                }
            }
        })
        .await;

        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.into_result().unwrap(), 7);
    }

    #[tokio::test]
    async fn exhausts_retries_plus_one_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let outcome = with_retry(&RetryPolicy::new(2, Duration::ZERO), || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>("still down".to_string())
            }
        })
        .await;

        assert_eq!(outcome.attempts, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(outcome.into_result().unwrap_err(), "still down");
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_only_between_attempts() {
        let start = tokio::time::Instant::now();

        let outcome = with_retry(&RetryPolicy::new(2, Duration::from_secs(1)), || async {
            Err::<(), _>("down")
        })
        .await;

        assert_eq!(outcome.attempts, 3);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_secs(3));
    }
}
