//! The caller-facing boundary, minus transport.
//!
//! The surrounding service exposes the pipeline over a request/response
//! entry point; this module is that boundary's contract without the wire:
//! string rendering of results and the two canned probe orders the service
//! uses to exercise each path.

use crate::order::Order;
use crate::pipeline::{OrderPipeline, PipelineResult};

/// Renders a pipeline result as the boundary's human-readable string.
#[must_use]
pub fn render_result(result: &PipelineResult) -> String {
    match result {
        PipelineResult::Processed(payload) => format!("Success: {payload}"),
        PipelineResult::Rejected(cause) => format!("Failed after retries: {cause}"),
    }
}

/// Accepts raw order fields, runs the pipeline, and renders the outcome.
///
/// Invalid input never reaches the pipeline; it is folded into the same
/// failure rendering the boundary uses for rejected orders.
pub async fn submit(pipeline: &OrderPipeline, id: &str, amount: f64) -> String {
    match Order::new(id, amount) {
        Ok(order) => render_result(&pipeline.process(&order).await),
        Err(err) => format!("Failed after retries: {err}"),
    }
}

/// The canned high-value probe order: above the default threshold, so it
/// exercises the payment path and eventually succeeds after retries.
#[must_use]
pub fn high_value_probe() -> Order {
    // Construction cannot fail for these literals.
    Order::new("ORD-001", 1500.00).unwrap_or_else(|_| unreachable!())
}

/// The canned standard probe order: below the threshold, always succeeds
/// without a payment call.
#[must_use]
pub fn standard_probe() -> Order {
    Order::new("ORD-002", 500.00).unwrap_or_else(|_| unreachable!())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::payment::FlakyPaymentGateway;
    use crate::retry::RetryPolicy;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_render_processed() {
        let result = PipelineResult::Processed("done".to_string());
        assert_eq!(render_result(&result), "Success: done");
    }

    #[test]
    fn test_render_rejected() {
        let result = PipelineResult::Rejected("no luck".to_string());
        assert_eq!(render_result(&result), "Failed after retries: no luck");
    }

    #[test]
    fn test_probe_orders() {
        assert_eq!(high_value_probe().id(), "ORD-001");
        assert!((high_value_probe().amount() - 1500.00).abs() < f64::EPSILON);
        assert_eq!(standard_probe().id(), "ORD-002");
        assert!((standard_probe().amount() - 500.00).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_submit_renders_pipeline_outcome() {
        let config = PipelineConfig::default()
            .with_retry(RetryPolicy::new().with_initial_delay_ms(1));
        let pipeline = OrderPipeline::new(config, Arc::new(FlakyPaymentGateway::new()));

        let rendered = submit(&pipeline, "ORD-002", 500.00).await;
        assert_eq!(rendered, "Success: Order ORD-002 processed without payment");
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_input() {
        let pipeline = OrderPipeline::new(
            PipelineConfig::default(),
            Arc::new(FlakyPaymentGateway::new()),
        );

        let rendered = submit(&pipeline, "", 10.0).await;
        assert_eq!(rendered, "Failed after retries: order id must not be empty");
    }
}
