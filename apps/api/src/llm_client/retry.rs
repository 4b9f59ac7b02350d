//! Fixed-backoff retry policy for calls to the content service.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Total attempts per generation, first call included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Wait between a rate-limited attempt and the next one.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);

/// Why a retried operation gave up.
#[derive(Debug)]
pub enum RetryError<E> {
    /// Every attempt failed with a retryable error.
    Exhausted { attempts: u32, last: E },
    /// A non-retryable error; returned without waiting.
    Aborted(E),
}

/// Retry up to `max_attempts` times, sleeping `backoff` after each failure
/// that `is_retryable` accepts. Other failures end the loop immediately.
pub struct RetryPolicy<E> {
    pub max_attempts: u32,
    pub backoff: Duration,
    pub is_retryable: fn(&E) -> bool,
}

impl<E> Clone for RetryPolicy<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RetryPolicy<E> {}

impl<E> std::fmt::Debug for RetryPolicy<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}

impl<E> RetryPolicy<E> {
    pub fn new(max_attempts: u32, backoff: Duration, is_retryable: fn(&E) -> bool) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
            is_retryable,
        }
    }

    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if !(self.is_retryable)(&e) => return Err(RetryError::Aborted(e)),
                Err(e) if attempt >= self.max_attempts => {
                    return Err(RetryError::Exhausted {
                        attempts: attempt,
                        last: e,
                    })
                }
                Err(_) => {
                    warn!(
                        "Attempt {}/{} was throttled, retrying after {}ms...",
                        attempt,
                        self.max_attempts,
                        self.backoff.as_millis()
                    );
                    tokio::time::sleep(self.backoff).await;
                    attempt += 1;
                }
            }
        }
    }
}
