//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. The HTTP inbound adapter maps them to
//! status codes and a JSON error payload; the domain only records what went
//! wrong, never how it is rendered.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::TraceId;

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A malformed identifier supplied by the caller. A programming-contract
    /// violation, not a domain rule.
    InvalidArgument,
    /// A field-length or completeness rule failed.
    ConstraintViolation,
    /// A create collided with an existing vaccine code.
    DuplicateKey,
    /// An update or lookup referenced an absent vaccine code.
    NotFound,
    /// An unexpected error occurred inside the domain or a collaborator.
    InternalError,
    /// The backing store could not be reached.
    ServiceUnavailable,
}

/// Failure payload reported by validation and registry logic.
///
/// Constructors capture the trace identifier currently in scope so error
/// payloads are correlated with request logs automatically.
///
/// # Examples
/// ```
/// use vaxreg::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("missing");
/// assert_eq!(err.code, ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, e.g. the violated rule or the
    /// colliding code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the in-scope trace identifier.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use vaxreg::domain::Error;
    ///
    /// let err = Error::constraint_violation("code too long")
    ///     .with_details(json!({ "rule": "code_too_long" }));
    /// assert!(err.details.is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// Convenience constructor for [`ErrorCode::ConstraintViolation`].
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConstraintViolation, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateKey`].
    pub fn duplicate_key(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateKey, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
