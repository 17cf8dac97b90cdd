//! Domain entities, services, and ports for the vaccine registry.
//!
//! Purpose: hold the validation, identity-enforcement, and error taxonomy
//! that sits between the HTTP boundary and the persistence boundary. Inbound
//! adapters translate these types to wire representations; outbound adapters
//! implement the ports.
//!
//! Public surface:
//! - [`Vaccine`] / [`VaccineType`] — catalog entities and field rules.
//! - [`VaccineRegistryService`] — orchestrates validation against the store.
//! - [`Error`] / [`ErrorCode`] — transport-agnostic failure payload.
//! - [`TraceId`] — request correlation identifier.

pub mod error;
pub mod ports;
pub mod registry_service;
pub mod trace_id;
pub mod vaccine;

pub use self::error::{Error, ErrorCode};
pub use self::registry_service::VaccineRegistryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::vaccine::{MAX_CODE_LENGTH, Vaccine, VaccineType, VaccineValidationError};
