//! Driving port for registry use-cases.
//!
//! HTTP handlers depend on this trait instead of the concrete service so they
//! remain testable without I/O.

use async_trait::async_trait;

use crate::domain::{Error, Vaccine};

/// Registry operations exposed to inbound adapters.
///
/// All failure modes are carried in [`Error`]: constraint violations and key
/// collisions for mutations, `NotFound` for reads of absent codes. Absence is
/// not a fault for [`exists`](Self::exists) and [`delete`](Self::delete) —
/// both encode it in their boolean result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaccineRegistry: Send + Sync {
    /// Return every registered vaccine in store-defined order. An empty
    /// registry yields an empty vector, not an error.
    async fn list(&self) -> Result<Vec<Vaccine>, Error>;

    /// Return the vaccine registered under `code`.
    ///
    /// A blank code is an `InvalidArgument` contract violation; a valid but
    /// absent code is `NotFound`.
    async fn find(&self, code: &str) -> Result<Vaccine, Error>;

    /// Return whether a vaccine is registered under `code`.
    ///
    /// Shares the blank-code contract with [`find`](Self::find) but never
    /// faults for absence.
    async fn exists(&self, code: &str) -> Result<bool, Error>;

    /// Validate and register a new vaccine, returning the stored record.
    async fn create(&self, vaccine: Vaccine) -> Result<Vaccine, Error>;

    /// Validate and fully replace the vaccine registered under
    /// `vaccine.code`, returning the stored record.
    async fn update(&self, vaccine: Vaccine) -> Result<Vaccine, Error>;

    /// Remove the vaccine registered under `code`.
    ///
    /// Returns `true` when a record was removed, `false` when there was
    /// nothing to delete. Deleting an absent code is a no-op success.
    async fn delete(&self, code: &str) -> Result<bool, Error>;
}
