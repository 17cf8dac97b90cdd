//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::VaccineRegistry;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registry use-cases backing the vaccine endpoints.
    pub vaccines: Arc<dyn VaccineRegistry>,
}

impl HttpState {
    /// Construct state over a registry implementation.
    pub fn new(vaccines: Arc<dyn VaccineRegistry>) -> Self {
        Self { vaccines }
    }
}
