//! Site content generation — bounded-retry wrapper around the content service.
//!
//! Flow: complete (≤ 3 attempts, 5 s apart, only while throttled) → strip fences.
//! The returned markup is otherwise passed through untouched.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::HTML_ONLY_SYSTEM;
use crate::llm_client::retry::{RetryError, RetryPolicy, DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS};
use crate::llm_client::{strip_html_fences, LlmError, TextCompletion};

#[derive(Clone)]
pub struct ContentGenerator {
    backend: Arc<dyn TextCompletion>,
    policy: RetryPolicy<LlmError>,
}

impl ContentGenerator {
    pub fn new(backend: Arc<dyn TextCompletion>) -> Self {
        Self::with_backoff(backend, DEFAULT_MAX_ATTEMPTS, DEFAULT_BACKOFF)
    }

    pub fn with_backoff(
        backend: Arc<dyn TextCompletion>,
        max_attempts: u32,
        backoff: Duration,
    ) -> Self {
        Self {
            backend,
            policy: RetryPolicy::new(max_attempts, backoff, LlmError::is_rate_limited),
        }
    }

    /// Generates page markup for `prompt`.
    ///
    /// Throttling is retried within the policy budget and then reported as
    /// `AppError::RateLimited`; any other failure is reported at once as
    /// `AppError::ServiceUnavailable`.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let backend = &self.backend;
        let max_attempts = self.policy.max_attempts;

        let raw = self
            .policy
            .run(move |attempt| {
                info!("Requesting site content (attempt {attempt}/{max_attempts})");
                backend.complete(prompt, HTML_ONLY_SYSTEM)
            })
            .await
            .map_err(|e| match e {
                RetryError::Exhausted { attempts, last } => {
                    warn!("Content service throttled on all {attempts} attempts: {last}");
                    AppError::RateLimited { attempts }
                }
                RetryError::Aborted(e) => AppError::ServiceUnavailable(e.to_string()),
            })?;

        let html = strip_html_fences(&raw);
        info!("Generated {} bytes of site markup", html.len());
        Ok(html)
    }
}
