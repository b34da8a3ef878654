//! Input validation helpers shared by the submission types.

use std::fmt;

use smallvec::SmallVec;
use url::Url;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as it appears in request payloads.
    pub field: &'static str,

    /// Human-readable reason.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors found while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: SmallVec<[FieldError; 4]>,
}

impl ValidationErrors {
    /// Record a rejected field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Field errors in the order they were found.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether `field` was rejected.
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Whether nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when empty, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field was rejected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Require at least `min` characters after trimming.
    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize) {
        if value.trim().chars().count() < min {
            self.push(field, format!("must be at least {min} characters"));
        }
    }

    /// Require a plausible `local@domain.tld` address.
    pub fn email(&mut self, field: &'static str, value: &str) {
        if !is_email(value) {
            self.push(field, "must be a valid email address");
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }

            write!(f, "{error}")?;
            first = false;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Whether `value` looks like `local@domain.tld`.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();

    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && !tld.is_empty() && !host.starts_with('.') && !host.ends_with('.')
}

/// Whether `value` is an absolute `http(s)` URL with a host.
pub fn is_http_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value.trim()) else {
        return false;
    };

    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|host| !host.is_empty())
}
