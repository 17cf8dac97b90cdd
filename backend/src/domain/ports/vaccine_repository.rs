//! Port for vaccine persistence.
//!
//! The [`VaccineRepository`] trait defines the contract the registry expects
//! from a code-keyed store. Mutating operations are conditional writes: the
//! store, not the caller, decides whether a code is free or taken, so
//! uniqueness holds under concurrent creators without a separate pre-check.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Vaccine;

/// Failures surfaced by vaccine store adapters.
///
/// Store faults are opaque to the registry: they are always fatal to the
/// current operation and never silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VaccineRepositoryError {
    /// Store connection could not be established.
    #[error("vaccine store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("vaccine store query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl VaccineRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for code-keyed vaccine storage.
///
/// Implementations must provide read-your-writes consistency within a single
/// process: a record persisted by [`insert_if_absent`](Self::insert_if_absent)
/// is observable by an immediately following
/// [`find_by_code`](Self::find_by_code).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VaccineRepository: Send + Sync {
    /// Fetch every stored record in store-defined order.
    async fn list_all(&self) -> Result<Vec<Vaccine>, VaccineRepositoryError>;

    /// Fetch the record stored under `code`, if any.
    async fn find_by_code(&self, code: &str) -> Result<Option<Vaccine>, VaccineRepositoryError>;

    /// Store `vaccine` only when its code is not yet taken.
    ///
    /// Returns `false` when the code is already present; the store is left
    /// unchanged in that case. The check and the insert are atomic with
    /// respect to other writers.
    async fn insert_if_absent(&self, vaccine: &Vaccine) -> Result<bool, VaccineRepositoryError>;

    /// Replace the record stored under `vaccine.code` entirely.
    ///
    /// Returns `false` when no record exists under that code; nothing is
    /// written in that case.
    async fn replace(&self, vaccine: &Vaccine) -> Result<bool, VaccineRepositoryError>;

    /// Remove the record stored under `code`.
    ///
    /// Returns `true` when a record was removed and `false` when the code
    /// was absent.
    async fn remove_by_code(&self, code: &str) -> Result<bool, VaccineRepositoryError>;
}
