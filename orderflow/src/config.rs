//! Pipeline configuration.
//!
//! Everything the original system carried as inline literals is an explicit
//! configuration value here: the routing threshold and the retry policy.

use crate::retry::RetryPolicy;
use crate::routing::DEFAULT_HIGH_VALUE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Configuration for an [`OrderPipeline`](crate::pipeline::OrderPipeline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Amount above which an order takes the high-value path.
    pub high_value_threshold: f64,
    /// Retry policy applied to the payment operation.
    pub retry: RetryPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: DEFAULT_HIGH_VALUE_THRESHOLD,
            retry: RetryPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a config with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the high-value threshold.
    #[must_use]
    pub fn with_high_value_threshold(mut self, threshold: f64) -> Self {
        self.high_value_threshold = threshold;
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = PipelineConfig::default();
        assert!((config.high_value_threshold - 1000.0).abs() < f64::EPSILON);
        assert_eq!(config.retry.max_redeliveries, 3);
        assert_eq!(config.retry.initial_delay_ms, 1000);
        assert!((config.retry.backoff_multiplier - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_high_value_threshold(250.0)
            .with_retry(RetryPolicy::new().with_max_redeliveries(1));

        assert!((config.high_value_threshold - 250.0).abs() < f64::EPSILON);
        assert_eq!(config.retry.max_redeliveries, 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
