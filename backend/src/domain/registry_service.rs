//! Registry manager orchestrating validation against the store.
//!
//! Field rules run before any write. Uniqueness and identity are not
//! pre-checked against a snapshot of existing codes; the store's conditional
//! writes decide them atomically, and a lost write surfaces as the matching
//! typed failure. The observable rule order for callers is therefore
//! completeness, length, then uniqueness (create) or identity (update).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{VaccineRegistry, VaccineRepository, VaccineRepositoryError};
use crate::domain::{Error, MAX_CODE_LENGTH, Vaccine, VaccineValidationError};

/// Registry service implementing the driving port over a store port.
#[derive(Clone)]
pub struct VaccineRegistryService<R> {
    repository: Arc<R>,
}

impl<R> VaccineRegistryService<R> {
    /// Create a new service over the given store adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> VaccineRegistryService<R>
where
    R: VaccineRepository,
{
    fn map_store_error(error: VaccineRepositoryError) -> Error {
        match error {
            VaccineRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("vaccine store unavailable: {message}"))
            }
            VaccineRepositoryError::Query { message } => {
                Error::internal(format!("vaccine store error: {message}"))
            }
        }
    }

    fn map_validation_error(error: &VaccineValidationError) -> Error {
        let details = match error {
            VaccineValidationError::TypeIncomplete => json!({ "rule": "type_incomplete" }),
            VaccineValidationError::CodeTooLong { length } => json!({
                "rule": "code_too_long",
                "length": length,
                "maxLength": MAX_CODE_LENGTH,
            }),
        };
        Error::constraint_violation(error.to_string()).with_details(details)
    }

    fn duplicate_code(code: &str) -> Error {
        Error::duplicate_key(format!("vaccine code {code} is already registered"))
            .with_details(json!({ "code": code }))
    }

    fn unknown_code(code: &str) -> Error {
        Error::not_found(format!("no vaccine registered under code {code}"))
            .with_details(json!({ "code": code }))
    }

    /// Reject blank identifiers before touching the store.
    ///
    /// The identifier contract of `find`/`exists`: a missing code is a
    /// caller bug, distinct from a valid code that is simply absent.
    fn ensure_code_argument(code: &str) -> Result<(), Error> {
        if code.trim().is_empty() {
            return Err(Error::invalid_argument("vaccine code must be provided"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> VaccineRegistry for VaccineRegistryService<R>
where
    R: VaccineRepository,
{
    async fn list(&self) -> Result<Vec<Vaccine>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(Self::map_store_error)
    }

    async fn find(&self, code: &str) -> Result<Vaccine, Error> {
        Self::ensure_code_argument(code)?;
        self.repository
            .find_by_code(code)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Self::unknown_code(code))
    }

    async fn exists(&self, code: &str) -> Result<bool, Error> {
        Self::ensure_code_argument(code)?;
        let found = self
            .repository
            .find_by_code(code)
            .await
            .map_err(Self::map_store_error)?;
        Ok(found.is_some())
    }

    async fn create(&self, vaccine: Vaccine) -> Result<Vaccine, Error> {
        vaccine
            .validate()
            .map_err(|err| Self::map_validation_error(&err))?;

        let inserted = self
            .repository
            .insert_if_absent(&vaccine)
            .await
            .map_err(Self::map_store_error)?;
        if !inserted {
            return Err(Self::duplicate_code(&vaccine.code));
        }

        info!(code = %vaccine.code, "vaccine registered");
        Ok(vaccine)
    }

    async fn update(&self, vaccine: Vaccine) -> Result<Vaccine, Error> {
        vaccine
            .validate()
            .map_err(|err| Self::map_validation_error(&err))?;

        let replaced = self
            .repository
            .replace(&vaccine)
            .await
            .map_err(Self::map_store_error)?;
        if !replaced {
            return Err(Self::unknown_code(&vaccine.code));
        }

        info!(code = %vaccine.code, "vaccine updated");
        Ok(vaccine)
    }

    async fn delete(&self, code: &str) -> Result<bool, Error> {
        let removed = self
            .repository
            .remove_by_code(code)
            .await
            .map_err(Self::map_store_error)?;
        if removed {
            info!(code = %code, "vaccine removed");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockVaccineRepository;
    use crate::domain::vaccine::VaccineType;

    fn sample_vaccine(code: &str) -> Vaccine {
        Vaccine::new(code, "Default description", VaccineType::new("TT", "Default description"))
    }

    fn make_service(repository: MockVaccineRepository) -> VaccineRegistryService<MockVaccineRepository> {
        VaccineRegistryService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn create_persists_and_returns_the_record() {
        let vaccine = sample_vaccine("Z0");
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_insert_if_absent()
            .withf(|candidate| candidate.code == "Z0")
            .times(1)
            .return_once(|_| Ok(true));

        let created = make_service(repository)
            .create(vaccine.clone())
            .await
            .expect("create succeeds");
        assert_eq!(created, vaccine);
    }

    #[tokio::test]
    async fn create_reports_duplicate_key_when_code_is_taken() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_insert_if_absent()
            .times(1)
            .return_once(|_| Ok(false));

        let error = make_service(repository)
            .create(sample_vaccine("Z0"))
            .await
            .expect_err("duplicate create rejected");
        assert_eq!(error.code, ErrorCode::DuplicateKey);
    }

    #[tokio::test]
    async fn create_rejects_incomplete_type_without_touching_the_store() {
        let mut repository = MockVaccineRepository::new();
        repository.expect_insert_if_absent().times(0);

        let vaccine = Vaccine::new(
            "Z0",
            "Default description",
            VaccineType::new("", "Default description"),
        );
        let error = make_service(repository)
            .create(vaccine)
            .await
            .expect_err("incomplete type rejected");
        assert_eq!(error.code, ErrorCode::ConstraintViolation);
    }

    #[tokio::test]
    async fn create_rejects_overlong_code_without_touching_the_store() {
        let mut repository = MockVaccineRepository::new();
        repository.expect_insert_if_absent().times(0);

        let error = make_service(repository)
            .create(sample_vaccine("Very-Very-Very-Very-Very-Very-Very"))
            .await
            .expect_err("overlong code rejected");
        assert_eq!(error.code, ErrorCode::ConstraintViolation);
    }

    #[tokio::test]
    async fn create_accepts_code_at_the_length_boundary() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_insert_if_absent()
            .times(1)
            .return_once(|_| Ok(true));

        let created = make_service(repository)
            .create(sample_vaccine("ABCDEFGHIJ"))
            .await
            .expect("ten-character code accepted");
        assert_eq!(created.code, "ABCDEFGHIJ");
    }

    #[tokio::test]
    async fn update_replaces_an_existing_record() {
        let vaccine = sample_vaccine("Z0");
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_replace()
            .withf(|candidate| candidate.code == "Z0")
            .times(1)
            .return_once(|_| Ok(true));

        let updated = make_service(repository)
            .update(vaccine.clone())
            .await
            .expect("update succeeds");
        assert_eq!(updated, vaccine);
    }

    #[tokio::test]
    async fn update_reports_not_found_for_an_unregistered_code() {
        let mut repository = MockVaccineRepository::new();
        repository.expect_replace().times(1).return_once(|_| Ok(false));

        let error = make_service(repository)
            .update(sample_vaccine("Z9"))
            .await
            .expect_err("unknown code rejected");
        assert_eq!(error.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_validates_fields_before_identity() {
        // The store is never consulted when field rules fail.
        let mut repository = MockVaccineRepository::new();
        repository.expect_replace().times(0);

        let error = make_service(repository)
            .update(sample_vaccine("Very-Very-Very-Very-Very-Very-Very"))
            .await
            .expect_err("overlong code rejected");
        assert_eq!(error.code, ErrorCode::ConstraintViolation);
    }

    #[tokio::test]
    async fn find_returns_the_stored_record() {
        let vaccine = sample_vaccine("Z0");
        let stored = vaccine.clone();
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_find_by_code()
            .withf(|code| code == "Z0")
            .times(1)
            .return_once(move |_| Ok(Some(stored)));

        let found = make_service(repository).find("Z0").await.expect("find succeeds");
        assert_eq!(found, vaccine);
    }

    #[tokio::test]
    async fn find_reports_not_found_for_an_absent_code() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_find_by_code()
            .times(1)
            .return_once(|_| Ok(None));

        let error = make_service(repository)
            .find("Z9")
            .await
            .expect_err("absent code faults");
        assert_eq!(error.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn find_rejects_a_blank_code_before_touching_the_store() {
        let mut repository = MockVaccineRepository::new();
        repository.expect_find_by_code().times(0);

        let error = make_service(repository)
            .find("   ")
            .await
            .expect_err("blank code rejected");
        assert_eq!(error.code, ErrorCode::InvalidArgument);
    }

    #[tokio::test]
    async fn exists_encodes_absence_as_false() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_find_by_code()
            .times(1)
            .return_once(|_| Ok(None));

        let present = make_service(repository)
            .exists("Z9")
            .await
            .expect("absence is not a fault");
        assert!(!present);
    }

    #[tokio::test]
    async fn exists_rejects_a_blank_code() {
        let mut repository = MockVaccineRepository::new();
        repository.expect_find_by_code().times(0);

        let error = make_service(repository)
            .exists("")
            .await
            .expect_err("blank code rejected");
        assert_eq!(error.code, ErrorCode::InvalidArgument);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_remove_by_code()
            .withf(|code| code == "Z0")
            .times(1)
            .return_once(|_| Ok(true));

        let removed = make_service(repository).delete("Z0").await.expect("delete succeeds");
        assert!(removed);
    }

    #[tokio::test]
    async fn delete_of_an_absent_code_is_a_no_op_success() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_remove_by_code()
            .times(1)
            .return_once(|_| Ok(false));

        let removed = make_service(repository)
            .delete("Z9")
            .await
            .expect("absence is not a fault");
        assert!(!removed);
    }

    #[tokio::test]
    async fn store_connection_faults_map_to_service_unavailable() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .return_once(|| Err(VaccineRepositoryError::connection("refused")));

        let error = make_service(repository).list().await.expect_err("fault propagates");
        assert_eq!(error.code, ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn store_query_faults_map_to_internal_error() {
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_find_by_code()
            .times(1)
            .return_once(|_| Err(VaccineRepositoryError::query("timed out")));

        let error = make_service(repository)
            .find("Z0")
            .await
            .expect_err("fault propagates");
        assert_eq!(error.code, ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn list_passes_records_through_unchanged() {
        let records = vec![sample_vaccine("Z0"), sample_vaccine("Z1")];
        let returned = records.clone();
        let mut repository = MockVaccineRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .return_once(move || Ok(returned));

        let listed = make_service(repository).list().await.expect("list succeeds");
        assert_eq!(listed, records);
    }
}
