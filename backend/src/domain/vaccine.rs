//! Vaccine catalog entities and their field rules.
//!
//! A [`Vaccine`] owns its [`VaccineType`] by value; no type instance is
//! shared across records. Field rules are evaluated in a fixed order —
//! type completeness first, then code length — and only the first violation
//! is reported, so the outcome is deterministic for identical input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters permitted in a vaccine code.
pub const MAX_CODE_LENGTH: usize = 10;

/// Classification a vaccine belongs to, identified by a short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineType {
    /// Short identifying code. Must be non-empty when the owning vaccine is
    /// created or updated.
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

impl VaccineType {
    /// Construct a vaccine type.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// True when the type carries a usable, non-blank code.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.code.trim().is_empty()
    }
}

/// A catalog record identified by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    /// Identifying code, at most [`MAX_CODE_LENGTH`] characters. The code is
    /// the record's immutable identity; registry-wide uniqueness is enforced
    /// at the store seam, not here.
    pub code: String,
    /// Human-readable description.
    pub description: String,
    /// Owned classification value.
    pub vaccine_type: VaccineType,
}

/// Field-rule violations reported by [`Vaccine::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VaccineValidationError {
    /// The owned vaccine type is missing its code.
    #[error("vaccine type is incomplete: it must carry a non-empty code")]
    TypeIncomplete,
    /// The vaccine code exceeds the permitted length.
    #[error("vaccine code must not exceed {MAX_CODE_LENGTH} characters (got {length})")]
    CodeTooLong {
        /// Observed character count.
        length: usize,
    },
}

impl Vaccine {
    /// Construct a vaccine record.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        vaccine_type: VaccineType,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            vaccine_type,
        }
    }

    /// Check field rules in fixed order: completeness, then length.
    ///
    /// Violations are rejected, never repaired; a too-long code is not
    /// truncated.
    pub fn validate(&self) -> Result<(), VaccineValidationError> {
        if !self.vaccine_type.is_complete() {
            return Err(VaccineValidationError::TypeIncomplete);
        }
        let length = self.code.chars().count();
        if length > MAX_CODE_LENGTH {
            return Err(VaccineValidationError::CodeTooLong { length });
        }
        Ok(())
    }
}
