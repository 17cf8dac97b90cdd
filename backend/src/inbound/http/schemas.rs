//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration; the wrappers mirror their
//! corresponding domain types but live in the inbound adapter layer where
//! framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A malformed identifier supplied by the caller.
    #[schema(rename = "invalid_argument")]
    InvalidArgument,
    /// A field-length or completeness rule failed.
    #[schema(rename = "constraint_violation")]
    ConstraintViolation,
    /// A create collided with an existing vaccine code.
    #[schema(rename = "duplicate_key")]
    DuplicateKey,
    /// An update or lookup referenced an absent vaccine code.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
    /// The backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "duplicate_key")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "vaccine code Z0 is already registered")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}
