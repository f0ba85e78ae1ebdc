//! Payment operations and the simulated unreliable gateway.

use crate::errors::PaymentError;
use crate::order::Order;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::fmt::Debug;

/// The outcome of a single payment attempt: a success payload, or a fault
/// classified as retryable or terminal.
pub type AttemptOutcome = Result<String, PaymentError>;

/// Trait for downstream payment operations.
///
/// This is the seam between the retry executor and the real (or simulated)
/// payment dependency. Implementations classify their faults into
/// [`PaymentError::Retryable`] vs [`PaymentError::Terminal`]; the executor
/// never second-guesses that classification.
#[async_trait]
pub trait PaymentOperation: Send + Sync + Debug {
    /// Attempts to process payment for an order.
    async fn attempt(&self, order: &Order) -> AttemptOutcome;
}

/// Number of leading failures the default [`FlakyPaymentGateway`] injects.
pub const DEFAULT_FAILURES_BEFORE_SUCCESS: u32 = 2;

/// A simulated unreliable payment dependency.
///
/// Fails its first `failures_before_success` calls with a retryable fault,
/// then succeeds and resets its counter so the next logical order sees the
/// same fail-then-succeed cycle. A production implementation would instead
/// classify real faults (timeout vs permanent rejection) and carry no
/// call-count state.
///
/// The counter is per-instance. Instantiate one gateway per order (or per
/// test scenario); sharing one instance across concurrently processed
/// orders interleaves the counters and is not a supported configuration.
#[derive(Debug)]
pub struct FlakyPaymentGateway {
    failures_before_success: u32,
    calls: Mutex<u32>,
}

impl Default for FlakyPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl FlakyPaymentGateway {
    /// Creates a gateway that fails twice, then succeeds on the third call.
    #[must_use]
    pub fn new() -> Self {
        Self::failing(DEFAULT_FAILURES_BEFORE_SUCCESS)
    }

    /// Creates a gateway that fails its first `failures` calls.
    #[must_use]
    pub fn failing(failures: u32) -> Self {
        Self {
            failures_before_success: failures,
            calls: Mutex::new(0),
        }
    }

    /// Returns how many attempts this instance has seen in the current
    /// fail-then-succeed cycle.
    #[must_use]
    pub fn call_count(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait]
impl PaymentOperation for FlakyPaymentGateway {
    async fn attempt(&self, order: &Order) -> AttemptOutcome {
        let mut calls = self.calls.lock();
        *calls += 1;
        tracing::debug!(attempt = *calls, order_id = %order.id(), "payment gateway called");

        if *calls <= self.failures_before_success {
            return Err(PaymentError::retryable(
                "Payment service temporarily unavailable",
            ));
        }

        // Reset for the next logical order.
        *calls = 0;
        Ok(format!(
            "Payment processed successfully for order: {}",
            order.id()
        ))
    }
}
