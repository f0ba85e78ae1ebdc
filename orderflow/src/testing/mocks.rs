//! Mock payment operations for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use crate::errors::PaymentError;
use crate::order::Order;
use crate::payment::{AttemptOutcome, PaymentOperation};

/// A payment operation that replays a scripted sequence of outcomes and
/// records how many times it was called.
///
/// Once the script is exhausted, every further call repeats the last
/// scripted outcome.
#[derive(Debug)]
pub struct ScriptedPayment {
    script: Mutex<VecDeque<AttemptOutcome>>,
    fallback: AttemptOutcome,
    call_count: Mutex<u32>,
}

impl ScriptedPayment {
    /// Creates a mock replaying `outcomes` in order; the last outcome is
    /// repeated once the script runs out.
    ///
    /// # Panics
    ///
    /// Panics if `outcomes` is empty.
    #[must_use]
    pub fn new(outcomes: Vec<AttemptOutcome>) -> Self {
        assert!(!outcomes.is_empty(), "script must contain at least one outcome");
        let fallback = outcomes
            .last()
            .cloned()
            .unwrap_or_else(|| unreachable!());
        Self {
            script: Mutex::new(outcomes.into()),
            fallback,
            call_count: Mutex::new(0),
        }
    }

    /// A mock that fails every call with the same retryable cause.
    #[must_use]
    pub fn always_retryable(cause: impl Into<String>) -> Self {
        Self::new(vec![Err(PaymentError::retryable(cause))])
    }

    /// A mock that fails every call with the same terminal cause.
    #[must_use]
    pub fn always_terminal(cause: impl Into<String>) -> Self {
        Self::new(vec![Err(PaymentError::terminal(cause))])
    }

    /// A mock that fails `failures` times with a retryable cause, then
    /// succeeds with `payload` on every later call.
    #[must_use]
    pub fn failing_then_succeeding(failures: u32, payload: impl Into<String>) -> Self {
        let mut outcomes: Vec<AttemptOutcome> = (0..failures)
            .map(|_| Err(PaymentError::retryable("Payment service temporarily unavailable")))
            .collect();
        outcomes.push(Ok(payload.into()));
        Self::new(outcomes)
    }

    /// Returns the number of attempts made against this mock.
    #[must_use]
    pub fn call_count(&self) -> u32 {
        *self.call_count.lock()
    }

    /// Resets call tracking, leaving the remaining script intact.
    pub fn reset_calls(&self) {
        *self.call_count.lock() = 0;
    }
}

#[async_trait]
impl PaymentOperation for ScriptedPayment {
    async fn attempt(&self, _order: &Order) -> AttemptOutcome {
        *self.call_count.lock() += 1;
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order::new("ORD-TEST", 1500.0).unwrap()
    }

    #[tokio::test]
    async fn test_script_replays_in_order() {
        let mock = ScriptedPayment::failing_then_succeeding(2, "paid");
        let order = order();

        assert!(mock.attempt(&order).await.is_err());
        assert!(mock.attempt(&order).await.is_err());
        assert_eq!(mock.attempt(&order).await.unwrap(), "paid");
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_script_repeats_last_outcome() {
        let mock = ScriptedPayment::new(vec![Ok("paid".to_string())]);
        let order = order();

        assert!(mock.attempt(&order).await.is_ok());
        assert!(mock.attempt(&order).await.is_ok());
    }

    #[tokio::test]
    async fn test_always_terminal() {
        let mock = ScriptedPayment::always_terminal("card declined");
        let err = mock.attempt(&order()).await.unwrap_err();
        assert!(!err.is_retryable());
    }
}
