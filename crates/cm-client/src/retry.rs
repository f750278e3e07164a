use crate::ClientError;

use cm_config::RetryConfig;

use std::fmt::Display;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::sleep;

/// Longest `Retry-After` the client is willing to sit out.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Definitive answer from the API.
    Stop,
    /// Transient failure, follow the backoff schedule.
    Backoff,
    /// The API named the pause through `Retry-After`.
    After(Duration),
}

pub trait Retryable {
    fn retry_decision(&self) -> RetryDecision;
}

impl Retryable for ClientError {
    fn retry_decision(&self) -> RetryDecision {
        match self {
            ClientError::Api {
                status: 429,
                retry_after: Some(delay),
                ..
            } => RetryDecision::After((*delay).min(MAX_RETRY_AFTER)),
            ClientError::Api { status, .. } if *status == 429 || *status >= 500 => {
                RetryDecision::Backoff
            }
            ClientError::Http { source, .. } => match source.status() {
                Some(status) if status.as_u16() == 429 || status.is_server_error() => {
                    RetryDecision::Backoff
                }
                Some(_) => RetryDecision::Stop,
                None if source.is_timeout() || source.is_connect() || source.is_request() => {
                    RetryDecision::Backoff
                }
                None => RetryDecision::Stop,
            },
            _ => RetryDecision::Stop,
        }
    }
}

/// `Retry-After` in its delta-seconds form. HTTP dates fall back to backoff.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

/// Runs `request` until it succeeds, fails for good, or `config.max_attempts`
/// is used up.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation: &str,
    mut request: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display + Retryable,
{
    let mut attempt = 1;

    loop {
        let error = match request().await {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        let delay = match error.retry_decision() {
            _ if attempt >= config.max_attempts => None,
            RetryDecision::Stop => None,
            RetryDecision::Backoff => Some(jittered(config.backoff_delay(attempt), config.jitter)),
            RetryDecision::After(delay) => Some(delay),
        };

        let Some(delay) = delay else {
            if attempt > 1 {
                warn!("{operation}: giving up after {attempt} attempts: {error}");
            }
            return Err(error);
        };

        debug!("{operation}: attempt {attempt} failed ({error}), retrying in {delay:?}");
        sleep(delay).await;
        attempt += 1;
    }
}

fn jittered(delay: Duration, jitter: bool) -> Duration {
    if jitter {
        delay.mul_f64(rand::random_range(0.5..1.5))
    } else {
        delay
    }
}
