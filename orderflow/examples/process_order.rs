//! Drives both canned probe orders through the pipeline with logging on.
//!
//! ```sh
//! cargo run --example process_order
//! ```

use anyhow::Result;
use orderflow::boundary;
use orderflow::config::PipelineConfig;
use orderflow::observability::init_tracing;
use orderflow::payment::FlakyPaymentGateway;
use orderflow::pipeline::OrderPipeline;
use orderflow::retry::RetryPolicy;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // Short delays so the retry cycle is visible without the full backoff.
    let config = PipelineConfig::default().with_retry(
        RetryPolicy::new()
            .with_max_redeliveries(3)
            .with_initial_delay_ms(100),
    );
    let pipeline = OrderPipeline::new(config, Arc::new(FlakyPaymentGateway::new()));

    let high = boundary::high_value_probe();
    println!("{}", boundary::submit(&pipeline, high.id(), high.amount()).await);

    let standard = boundary::standard_probe();
    println!(
        "{}",
        boundary::submit(&pipeline, standard.id(), standard.amount()).await
    );

    Ok(())
}
