//! Catalog
//!
//! Vendor submissions start out `pending` and only become publicly visible
//! once an admin approves them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    money::MAX_AMOUNT,
    validation::{ValidationErrors, is_http_url},
};

/// Errors raised by catalog rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A review was attempted on a product that is not awaiting one.
    #[error("cannot {decision} a product that is {from}")]
    InvalidTransition {
        /// Current status.
        from: ProductStatus,

        /// Attempted decision.
        decision: ReviewDecision,
    },

    /// A status string was not recognised.
    #[error("unknown product status: {0}")]
    UnknownStatus(String),
}

/// Product approval status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Awaiting admin review.
    #[default]
    Pending,

    /// Visible to customers.
    Approved,

    /// Refused by an admin.
    Rejected,
}

impl ProductStatus {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether customers may see and buy the product.
    pub fn is_public(self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Status after an admin `decision`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidTransition`] unless the product is
    /// pending.
    pub fn review(self, decision: ReviewDecision) -> Result<Self, CatalogError> {
        match (self, decision) {
            (Self::Pending, ReviewDecision::Approve) => Ok(Self::Approved),
            (Self::Pending, ReviewDecision::Reject) => Ok(Self::Rejected),
            (from, decision) => Err(CatalogError::InvalidTransition { from, decision }),
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(CatalogError::UnknownStatus(other.to_string())),
        }
    }
}

/// Admin review outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    /// Publish the product.
    Approve,

    /// Refuse the product.
    Reject,
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        })
    }
}

/// Product fields a vendor submits or edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSubmission<'a> {
    /// Display name.
    pub name: &'a str,

    /// Long description.
    pub description: &'a str,

    /// Unit price in minor units.
    pub price: u64,

    /// Category name.
    pub category: &'a str,

    /// Absolute image URL.
    pub image_url: &'a str,
}

impl ProductSubmission<'_> {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns every rejected field at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        errors.min_chars("name", self.name, 3);
        errors.min_chars("description", self.description, 10);

        if self.price == 0 {
            errors.push("price", "must be greater than zero");
        } else if self.price > MAX_AMOUNT {
            errors.push("price", "is too large");
        }

        if self.category.trim().is_empty() {
            errors.push("category", "is required");
        }

        if !is_http_url(self.image_url) {
            errors.push("image_url", "must be an absolute http(s) URL");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn submission() -> ProductSubmission<'static> {
        ProductSubmission {
            name: "Jollof Rice",
            description: "Smoky party jollof with plantain.",
            price: 2_500_00,
            category: "Food",
            image_url: "https://images.example.com/jollof.png",
        }
    }

    #[test]
    fn pending_products_can_be_approved_or_rejected() -> TestResult {
        assert_eq!(
            ProductStatus::Pending.review(ReviewDecision::Approve)?,
            ProductStatus::Approved
        );
        assert_eq!(
            ProductStatus::Pending.review(ReviewDecision::Reject)?,
            ProductStatus::Rejected
        );

        Ok(())
    }

    #[test]
    fn reviewed_products_cannot_be_reviewed_again() {
        let result = ProductStatus::Approved.review(ReviewDecision::Reject);

        assert_eq!(
            result,
            Err(CatalogError::InvalidTransition {
                from: ProductStatus::Approved,
                decision: ReviewDecision::Reject,
            })
        );
    }

    #[test]
    fn only_approved_is_public() {
        assert!(ProductStatus::Approved.is_public());
        assert!(!ProductStatus::Pending.is_public());
        assert!(!ProductStatus::Rejected.is_public());
    }

    #[test]
    fn status_round_trips_through_strings() -> TestResult {
        for status in [
            ProductStatus::Pending,
            ProductStatus::Approved,
            ProductStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ProductStatus>()?, status);
        }

        assert!(matches!(
            "archived".parse::<ProductStatus>(),
            Err(CatalogError::UnknownStatus(value)) if value == "archived"
        ));

        Ok(())
    }

    #[test]
    fn valid_submission_passes() {
        assert_eq!(submission().validate(), Ok(()));
    }

    #[test]
    fn price_is_capped_at_max_amount() {
        let at_ceiling = ProductSubmission {
            price: MAX_AMOUNT,
            ..submission()
        };
        let above = ProductSubmission {
            price: u64::MAX,
            ..submission()
        };

        assert_eq!(at_ceiling.validate(), Ok(()));

        let errors = above.validate().err().unwrap_or_default();

        assert!(errors.has("price"), "price above the ceiling should be rejected");
    }

    #[test]
    fn invalid_submission_reports_every_field() {
        let invalid = ProductSubmission {
            name: " ab ",
            description: "short",
            price: 0,
            category: "  ",
            image_url: "not-a-url",
        };

        let errors = invalid.validate().err().unwrap_or_default();

        for field in ["name", "description", "price", "category", "image_url"] {
            assert!(errors.has(field), "{field} should be rejected");
        }
    }
}
