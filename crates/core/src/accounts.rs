//! Accounts

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Minimum password length in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Unrecognised role string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Shops and checks out.
    #[default]
    Customer,

    /// Sells products.
    Vendor,

    /// Reviews products and fulfils orders.
    Admin,
}

impl Role {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Vendor => "vendor",
            Self::Admin => "admin",
        }
    }

    /// Whether the role may be chosen at sign-up.
    pub fn is_self_service(self) -> bool {
        matches!(self, Self::Customer | Self::Vendor)
    }

    /// Whether the role may manage an inventory.
    pub fn can_manage_inventory(self) -> bool {
        matches!(self, Self::Vendor | Self::Admin)
    }

    /// Whether the role may review products and fulfil orders.
    pub fn can_review(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "vendor" => Ok(Self::Vendor),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Sign-up fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration<'a> {
    /// Login email.
    pub email: &'a str,

    /// Plain-text password.
    pub password: &'a str,

    /// Display name.
    pub full_name: &'a str,
}

impl Registration<'_> {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns every rejected field at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        errors.email("email", self.email);

        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push(
                "password",
                format!("must be at least {MIN_PASSWORD_CHARS} characters"),
            );
        }

        if self.full_name.trim().is_empty() {
            errors.push("full_name", "is required");
        }

        errors.into_result()
    }
}

/// Canonical form of an email used for lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
