//! Content-based routing over order amounts.
//!
//! Path selection reads only the order itself: no downstream dependency is
//! consulted to make the decision, so routing is a pure, total function
//! that can be tested in isolation.

use crate::order::Order;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default amount above which an order takes the high-value path.
pub const DEFAULT_HIGH_VALUE_THRESHOLD: f64 = 1000.0;

/// The processing path selected for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSelector {
    /// Amount above the threshold; goes through the payment operation
    /// under retry.
    HighValue,
    /// Amount at or below the threshold; processed directly with no
    /// downstream call.
    Standard,
}

impl fmt::Display for PathSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighValue => write!(f, "high_value"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// Selects a processing path from an order's amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderRouter {
    threshold: f64,
}

impl Default for OrderRouter {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_HIGH_VALUE_THRESHOLD,
        }
    }
}

impl OrderRouter {
    /// Creates a router with the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router with an explicit threshold.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Routes an order by its amount.
    ///
    /// `HighValue` iff the amount is strictly greater than the threshold;
    /// an amount exactly at the threshold routes `Standard`.
    #[must_use]
    pub fn route(&self, order: &Order) -> PathSelector {
        if order.amount() > self.threshold {
            PathSelector::HighValue
        } else {
            PathSelector::Standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(amount: f64) -> Order {
        Order::new("ORD-TEST", amount).unwrap()
    }

    #[test]
    fn test_above_threshold_is_high_value() {
        let router = OrderRouter::new();
        assert_eq!(router.route(&order(1500.0)), PathSelector::HighValue);
        assert_eq!(router.route(&order(1000.01)), PathSelector::HighValue);
    }

    #[test]
    fn test_below_threshold_is_standard() {
        let router = OrderRouter::new();
        assert_eq!(router.route(&order(500.0)), PathSelector::Standard);
        assert_eq!(router.route(&order(0.0)), PathSelector::Standard);
    }

    #[test]
    fn test_exactly_at_threshold_is_standard() {
        let router = OrderRouter::new();
        assert_eq!(router.route(&order(1000.0)), PathSelector::Standard);
    }

    #[test]
    fn test_custom_threshold() {
        let router = OrderRouter::with_threshold(50.0);
        assert_eq!(router.route(&order(51.0)), PathSelector::HighValue);
        assert_eq!(router.route(&order(50.0)), PathSelector::Standard);
    }

    #[test]
    fn test_route_is_idempotent() {
        let router = OrderRouter::new();
        let o = order(1500.0);
        assert_eq!(router.route(&o), router.route(&o));
    }

    #[test]
    fn test_path_selector_display() {
        assert_eq!(PathSelector::HighValue.to_string(), "high_value");
        assert_eq!(PathSelector::Standard.to_string(), "standard");
    }
}
