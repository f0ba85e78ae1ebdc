//! Bounded retry with exponential backoff.
//!
//! [`RetryExecutor`] wraps an unreliable payment attempt in an explicit
//! retry loop driven by an immutable [`RetryPolicy`]. Retryable faults are
//! absorbed and re-attempted up to the redelivery budget; terminal faults
//! and exhausted budgets come back as [`PipelineResult::Rejected`] values,
//! never as propagated errors.

use crate::errors::PaymentError;
use crate::payment::AttemptOutcome;
use crate::pipeline::PipelineResult;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Configuration for retry behavior.
///
/// `max_redeliveries` counts *additional* attempts after the first, so the
/// executor performs at most `max_redeliveries + 1` attempts in total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum redeliveries after the initial attempt.
    pub max_redeliveries: u32,
    /// Delay before the first redelivery, in milliseconds.
    pub initial_delay_ms: u64,
    /// Multiplier applied to the delay per redelivery. Must be >= 1;
    /// smaller values are treated as 1.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_redeliveries: 3,
            initial_delay_ms: 1000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum redeliveries.
    #[must_use]
    pub fn with_max_redeliveries(mut self, redeliveries: u32) -> Self {
        self.max_redeliveries = redeliveries;
        self
    }

    /// Sets the initial delay.
    #[must_use]
    pub fn with_initial_delay_ms(mut self, delay: u64) -> Self {
        self.initial_delay_ms = delay;
        self
    }

    /// Sets the backoff multiplier.
    #[must_use]
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Total attempts this policy allows.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_redeliveries + 1
    }

    /// The delay to wait before overall attempt `attempt` (1-based).
    ///
    /// The first attempt has zero delay; attempt n >= 2 waits
    /// `initial_delay * multiplier^(n - 2)`.
    #[must_use]
    pub fn delay_before_attempt(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let multiplier = self.backoff_multiplier.max(1.0);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = (self.initial_delay_ms as f64 * multiplier.powi((attempt - 2) as i32)) as u64;
        Duration::from_millis(ms)
    }
}

/// Drives a fallible payment attempt under a [`RetryPolicy`].
#[derive(Debug, Clone, Default)]
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    /// Creates an executor with the given policy.
    #[must_use]
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Returns the executor's policy.
    #[must_use]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Executes `op` under the retry policy.
    ///
    /// - Success on any attempt returns [`PipelineResult::Processed`]
    ///   immediately.
    /// - A terminal fault returns [`PipelineResult::Rejected`] immediately,
    ///   bypassing any remaining retries.
    /// - A retryable fault suspends for the backoff delay and re-attempts,
    ///   until `max_redeliveries` extra attempts are spent; exhaustion
    ///   returns [`PipelineResult::Rejected`].
    ///
    /// The backoff suspension is an async sleep; concurrent pipeline runs
    /// are not blocked by it.
    pub async fn execute<F, Fut>(&self, mut op: F) -> PipelineResult
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AttemptOutcome>,
    {
        let mut attempt: u32 = 1;

        loop {
            match op().await {
                Ok(payload) => {
                    tracing::debug!(attempt, "payment attempt succeeded");
                    return PipelineResult::Processed(payload);
                }
                Err(PaymentError::Terminal(cause)) => {
                    tracing::warn!(attempt, %cause, "terminal failure, not retrying");
                    return PipelineResult::Rejected(cause);
                }
                Err(PaymentError::Retryable(cause)) => {
                    if attempt >= self.policy.max_attempts() {
                        tracing::warn!(attempt, %cause, "redeliveries exhausted, rejecting");
                        return PipelineResult::Rejected(cause);
                    }
                    attempt += 1;
                    let delay = self.policy.delay_before_attempt(attempt);
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        %cause,
                        "retryable failure, backing off before redelivery"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
