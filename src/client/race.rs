//! Race a retry loop against cancellation.
//!
//! The retry loop runs as its own task and hands its single result back over
//! a oneshot channel. The caller's side waits on whichever comes first:
//!
//! 1. the caller's [`CancellationToken`] -> [`ApiError::Cancelled`]
//! 2. the deadline derived from the timeout -> [`ApiError::DeadlineExceeded`]
//! 3. the worker's result
//!
//! When the race is lost the worker is told to stop (no new attempts, backoff
//! interrupted) but an in-flight transport call is not aborted. Whatever it
//! eventually produces is dropped together with the channel.

use crate::client::retry::RetryLoop;
use crate::error::ApiError;
use crate::types::{ExecutionResult, PreparedRequest};
use serde::de::DeserializeOwned;
use std::future::pending;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Cancellation signal threaded through one logical operation: an explicit
/// token, an optional timeout, or both.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    token: CancellationToken,
    timeout: Option<Duration>,
}

impl CancelSignal {
    /// A signal that never fires on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire when `token` is cancelled.
    pub fn from_token(token: CancellationToken) -> Self {
        CancelSignal {
            token,
            timeout: None,
        }
    }

    /// Also fire once `timeout` has elapsed from the start of the race.
    /// A zero duration disables the deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Remove any deadline.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// The explicit cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Fire the signal.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if the explicit token has fired.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Run `request` through `engine` on a separate task and race it against `signal`.
///
/// # Errors
///
/// - [`ApiError::Cancelled`] if the token fires first
/// - [`ApiError::DeadlineExceeded`] if the timeout elapses first
/// - [`ApiError::WorkerLost`] if the worker task dies without a result
/// - otherwise the terminal error produced by the retry loop
pub async fn run<T>(
    engine: RetryLoop,
    request: PreparedRequest,
    signal: &CancelSignal,
) -> ExecutionResult<T>
where
    T: DeserializeOwned + Send + 'static,
{
    if signal.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    let deadline = signal
        .timeout
        .and_then(|timeout| Instant::now().checked_add(timeout).map(|at| (at, timeout)));

    let worker_token = signal.token.child_token();
    // Stops the worker on every exit path, including this future being dropped.
    let _abandon = worker_token.clone().drop_guard();

    let logging = engine.logging_enabled();
    let endpoint = request.endpoint().to_string();

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        if let Some(result) = engine.run::<T>(&request, &worker_token).await {
            let _ = tx.send(result);
        }
    });

    let expired = async {
        match deadline {
            Some((at, _)) => sleep_until(at).await,
            None => pending::<()>().await,
        }
    };

    tokio::select! {
        biased;

        _ = signal.token.cancelled() => {
            if logging {
                tracing::debug!(endpoint = %endpoint, "request cancelled by caller");
            }
            Err(ApiError::Cancelled)
        }
        _ = expired => {
            let timeout = deadline.map(|(_, t)| t).unwrap_or_default();
            if logging {
                tracing::warn!(
                    endpoint = %endpoint,
                    timeout_ms = timeout.as_millis() as u64,
                    "deadline exceeded, abandoning request"
                );
            }
            Err(ApiError::DeadlineExceeded(timeout))
        }
        handoff = rx => handoff.unwrap_or(Err(ApiError::WorkerLost)),
    }
}
