//! Orders

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by order status rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderStatusError {
    /// The requested status is not the next step.
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: OrderStatus,

        /// Requested status.
        to: OrderStatus,
    },

    /// A status string was not recognised.
    #[error("unknown order status: {0}")]
    UnknownStatus(String),
}

/// Fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet shipped.
    #[default]
    Pending,

    /// Handed to the courier.
    Shipped,

    /// Received by the customer.
    Delivered,
}

impl OrderStatus {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    /// The status that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Shipped),
            Self::Shipped => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    /// Move to `to`, which must be exactly one step ahead.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStatusError::InvalidTransition`] for any other target.
    pub fn advance_to(self, to: Self) -> Result<Self, OrderStatusError> {
        if self.next() == Some(to) {
            Ok(to)
        } else {
            Err(OrderStatusError::InvalidTransition { from: self, to })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            other => Err(OrderStatusError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_moves_one_step_forward() -> TestResult {
        let shipped = OrderStatus::Pending.advance_to(OrderStatus::Shipped)?;
        let delivered = shipped.advance_to(OrderStatus::Delivered)?;

        assert_eq!(delivered, OrderStatus::Delivered);

        Ok(())
    }

    #[test]
    fn skipping_or_reversing_is_rejected() {
        assert!(
            OrderStatus::Pending
                .advance_to(OrderStatus::Delivered)
                .is_err()
        );
        assert!(OrderStatus::Shipped.advance_to(OrderStatus::Pending).is_err());
        assert!(
            OrderStatus::Delivered
                .advance_to(OrderStatus::Delivered)
                .is_err()
        );
    }

    #[test]
    fn parses_stored_values() -> TestResult {
        assert_eq!("shipped".parse::<OrderStatus>()?, OrderStatus::Shipped);
        assert!("lost".parse::<OrderStatus>().is_err());

        Ok(())
    }
}
