//! Vaccine registry backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped tracing middleware re-exported for server wiring.
pub use middleware::trace::Trace;
/// Correlation identifier attached to logs and error payloads.
pub use domain::TraceId;
