//! Error types for the orderflow pipeline.
//!
//! The payment taxonomy is the core failure-containment contract: a
//! [`PaymentError::Retryable`] is expected to self-resolve and is eligible
//! for backoff retry, while a [`PaymentError::Terminal`] must surface
//! immediately and is never retried.

use thiserror::Error;

/// A fault reported by a payment operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// A transient downstream fault, eligible for bounded re-attempt.
    #[error("retryable payment failure: {0}")]
    Retryable(String),

    /// A fault the operation itself deems unrecoverable; never retried.
    #[error("terminal payment failure: {0}")]
    Terminal(String),
}

impl PaymentError {
    /// Creates a retryable failure.
    #[must_use]
    pub fn retryable(cause: impl Into<String>) -> Self {
        Self::Retryable(cause.into())
    }

    /// Creates a terminal failure.
    #[must_use]
    pub fn terminal(cause: impl Into<String>) -> Self {
        Self::Terminal(cause.into())
    }

    /// Returns true if this fault may be retried under a policy.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Retryable(_))
    }

    /// Returns the human-readable cause, without the taxonomy prefix.
    #[must_use]
    pub fn cause(&self) -> &str {
        match self {
            Self::Retryable(cause) | Self::Terminal(cause) => cause,
        }
    }
}

/// Error raised when constructing an [`Order`](crate::order::Order) from
/// invalid caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// The order identifier was empty.
    #[error("order id must not be empty")]
    EmptyId,

    /// The order amount was negative.
    #[error("order amount must be non-negative, got {amount}")]
    NegativeAmount {
        /// The rejected amount.
        amount: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let err = PaymentError::retryable("temporarily unavailable");
        assert!(err.is_retryable());
        assert_eq!(err.cause(), "temporarily unavailable");
    }

    #[test]
    fn test_terminal_classification() {
        let err = PaymentError::terminal("card declined");
        assert!(!err.is_retryable());
        assert_eq!(err.cause(), "card declined");
    }

    #[test]
    fn test_payment_error_display() {
        let err = PaymentError::retryable("timeout");
        assert_eq!(err.to_string(), "retryable payment failure: timeout");
    }

    #[test]
    fn test_order_error_display() {
        let err = OrderError::NegativeAmount { amount: -5.0 };
        assert!(err.to_string().contains("-5"));
    }
}
