//! Retry loop: send, classify, back off, repeat.
//!
//! The loop ends on a terminal classification, on cancellation, or (only when
//! configured) when the attempt ceiling is reached. Without a ceiling a live
//! but failing server is retried until the caller's signal fires.
//!
//! Cancellation is checked before every attempt and interrupts the backoff
//! sleep. A transport call already in flight is left to finish; its result is
//! dropped by the loop.

use crate::client::backoff::BackoffPolicy;
use crate::client::classify::classify_attempt;
use crate::client::config::ClientConfig;
use crate::client::transport::Transport;
use crate::error::ApiError;
use crate::types::{ClassifiedOutcome, ExecutionResult, PreparedRequest};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Drives one logical operation through as many attempts as it needs.
#[derive(Clone)]
pub struct RetryLoop {
    transport: Arc<dyn Transport>,
    backoff: BackoffPolicy,
    max_attempts: Option<u32>,
    enable_logging: bool,
}

impl RetryLoop {
    /// Create a loop with no attempt ceiling.
    pub fn new(transport: Arc<dyn Transport>, backoff: BackoffPolicy) -> Self {
        RetryLoop {
            transport,
            backoff,
            max_attempts: None,
            enable_logging: true,
        }
    }

    /// Create a loop from client configuration.
    pub fn from_config(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        RetryLoop::new(transport, config.backoff)
            .with_max_attempts(config.max_attempts)
            .with_logging(config.enable_logging)
    }

    /// Stop after `max_attempts` transport calls on retryable failures.
    /// `None` (or `Some(0)`) means no ceiling.
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts.filter(|n| *n > 0);
        self
    }

    /// Enable or disable tracing events.
    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.enable_logging = enable_logging;
        self
    }

    /// Whether tracing events are emitted.
    pub fn logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Run the loop until a terminal outcome.
    ///
    /// Returns `None` if `cancel` is observed first; the loop then produces no
    /// result. Retryable failures are never returned as such.
    pub async fn run<T>(
        &self,
        request: &PreparedRequest,
        cancel: &CancellationToken,
    ) -> Option<ExecutionResult<T>>
    where
        T: DeserializeOwned + Send,
    {
        let endpoint = request.endpoint();
        let mut attempt: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                if self.enable_logging {
                    tracing::debug!(endpoint, attempt, "cancelled before next attempt");
                }
                return None;
            }

            let result = self.transport.send(request).await;
            let outcome = classify_attempt::<T>(&result, endpoint);
            drop(result);

            let error = match outcome {
                ClassifiedOutcome::Success(payload) => return Some(Ok(payload)),
                ClassifiedOutcome::Terminal(e) => {
                    self.report_terminal(endpoint, &e);
                    return Some(Err(e));
                }
                ClassifiedOutcome::Retryable(e) => e,
            };

            self.report_retryable(endpoint, &error);

            let calls = attempt.saturating_add(1);
            if let Some(max) = self.max_attempts {
                if calls >= max {
                    return Some(Err(ApiError::AttemptsExhausted {
                        attempts: calls,
                        last: Box::new(error),
                    }));
                }
            }

            let delay = self.backoff.delay(attempt);
            if self.enable_logging {
                tracing::info!(
                    endpoint,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying in {:?}",
                    delay
                );
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    if self.enable_logging {
                        tracing::debug!(endpoint, attempt, "cancelled during backoff");
                    }
                    return None;
                }
                _ = sleep(delay) => {}
            }

            attempt = calls;
        }
    }

    fn report_retryable(&self, endpoint: &str, error: &ApiError) {
        if !self.enable_logging {
            return;
        }
        match error {
            ApiError::Transport {
                timeout, message, ..
            } => {
                tracing::error!(kind = "RequestError", timeout = *timeout, endpoint, "{}", message);
            }
            ApiError::Server { status, message } => {
                tracing::error!(kind = "ResponseError", status = *status, endpoint, "{}", message);
            }
            other => {
                tracing::error!(endpoint, "{}", other);
            }
        }
    }

    fn report_terminal(&self, endpoint: &str, error: &ApiError) {
        if !self.enable_logging {
            return;
        }
        if let ApiError::Read(message) = error {
            tracing::error!(kind = "ReadError", endpoint, "{}", message);
        }
    }
}
