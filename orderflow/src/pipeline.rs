//! The order processing pipeline.
//!
//! [`OrderPipeline`] composes the router, the retry executor, and a payment
//! operation into a single "process one order" entry point. It performs no
//! error translation of its own: both success and exhausted-retry failure
//! are ordinary [`PipelineResult`] values.

use crate::config::PipelineConfig;
use crate::order::Order;
use crate::payment::PaymentOperation;
use crate::retry::RetryExecutor;
use crate::routing::{OrderRouter, PathSelector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The externally observable outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineResult {
    /// The order was processed; carries the success payload.
    Processed(String),
    /// The order was rejected after a terminal fault or an exhausted retry
    /// budget; carries the failure cause.
    Rejected(String),
}

impl PipelineResult {
    /// Returns true for a processed result.
    #[must_use]
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed(_))
    }

    /// Returns true for a rejected result.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the payload or cause text.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Processed(text) | Self::Rejected(text) => text,
        }
    }
}

/// Routes orders and drives high-value ones through the payment operation
/// under retry.
///
/// One `process` invocation runs the router, the executor, and the payment
/// operation sequentially on the calling task; the only suspension point is
/// the executor's backoff sleep. Multiple invocations may run concurrently,
/// subject to the payment operation's own sharing discipline (see
/// [`FlakyPaymentGateway`](crate::payment::FlakyPaymentGateway)).
#[derive(Debug, Clone)]
pub struct OrderPipeline {
    router: OrderRouter,
    executor: RetryExecutor,
    payment: Arc<dyn PaymentOperation>,
}

impl OrderPipeline {
    /// Creates a pipeline from a configuration and a payment operation.
    #[must_use]
    pub fn new(config: PipelineConfig, payment: Arc<dyn PaymentOperation>) -> Self {
        Self {
            router: OrderRouter::with_threshold(config.high_value_threshold),
            executor: RetryExecutor::new(config.retry),
            payment,
        }
    }

    /// Processes one order to completion.
    ///
    /// Standard orders are transformed directly with zero downstream calls;
    /// high-value orders go through the payment operation under the
    /// configured retry policy.
    pub async fn process(&self, order: &Order) -> PipelineResult {
        let path = self.router.route(order);
        tracing::info!(order_id = %order.id(), amount = order.amount(), %path, "routing order");

        match path {
            PathSelector::Standard => PipelineResult::Processed(format!(
                "Order {} processed without payment",
                order.id()
            )),
            PathSelector::HighValue => {
                self.executor
                    .execute(|| self.payment.attempt(order))
                    .await
            }
        }
    }
}
