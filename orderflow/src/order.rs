//! The order value type.

use crate::errors::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An incoming order record.
///
/// Orders are immutable once constructed: the caller assigns the id
/// (uniqueness is not enforced here) and the amount, the pipeline only
/// reads them. An order lives for one pipeline run and is not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    amount: f64,
}

impl Order {
    /// Creates a new order, validating the caller-supplied fields.
    ///
    /// The id must be non-empty and the amount non-negative.
    pub fn new(id: impl Into<String>, amount: f64) -> Result<Self, OrderError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if amount < 0.0 {
            return Err(OrderError::NegativeAmount { amount });
        }
        Ok(Self { id, amount })
    }

    /// Returns the caller-assigned order identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the order amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order[id={}, amount={:.2}]", self.id, self.amount)
    }
}
