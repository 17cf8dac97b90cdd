//! In-memory implementation of the vaccine store port.
//!
//! Records live in a code-keyed map behind a reader-writer lock. Conditional
//! writes hold the write lock across their check and mutation, so at most one
//! record per code survives concurrent creators. Iteration order is the map's
//! key order, which is this store's "store-defined order".

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::Vaccine;
use crate::domain::ports::{VaccineRepository, VaccineRepositoryError};

/// Code-keyed vaccine store held entirely in process memory.
///
/// Each instance is an isolated store; construct one per server (or per
/// test) and hand it to the registry service.
#[derive(Debug, Default)]
pub struct InMemoryVaccineRepository {
    records: RwLock<BTreeMap<String, Vaccine>>,
}

impl InMemoryVaccineRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(
        &self,
    ) -> Result<RwLockReadGuard<'_, BTreeMap<String, Vaccine>>, VaccineRepositoryError> {
        self.records
            .read()
            .map_err(|_| VaccineRepositoryError::query("vaccine store lock poisoned"))
    }

    fn write_guard(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Vaccine>>, VaccineRepositoryError> {
        self.records
            .write()
            .map_err(|_| VaccineRepositoryError::query("vaccine store lock poisoned"))
    }
}

#[async_trait]
impl VaccineRepository for InMemoryVaccineRepository {
    async fn list_all(&self) -> Result<Vec<Vaccine>, VaccineRepositoryError> {
        Ok(self.read_guard()?.values().cloned().collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Vaccine>, VaccineRepositoryError> {
        Ok(self.read_guard()?.get(code).cloned())
    }

    async fn insert_if_absent(&self, vaccine: &Vaccine) -> Result<bool, VaccineRepositoryError> {
        let mut records = self.write_guard()?;
        match records.entry(vaccine.code.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(vaccine.clone());
                Ok(true)
            }
        }
    }

    async fn replace(&self, vaccine: &Vaccine) -> Result<bool, VaccineRepositoryError> {
        let mut records = self.write_guard()?;
        match records.get_mut(&vaccine.code) {
            Some(stored) => {
                *stored = vaccine.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_by_code(&self, code: &str) -> Result<bool, VaccineRepositoryError> {
        Ok(self.write_guard()?.remove(code).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::VaccineType;

    fn sample_vaccine(code: &str) -> Vaccine {
        Vaccine::new(code, "Default description", VaccineType::new("TT", "Default description"))
    }

    #[tokio::test]
    async fn stored_records_are_observable_immediately() {
        let store = InMemoryVaccineRepository::new();
        let vaccine = sample_vaccine("Z0");

        assert!(store.insert_if_absent(&vaccine).await.expect("insert succeeds"));
        let found = store.find_by_code("Z0").await.expect("lookup succeeds");
        assert_eq!(found, Some(vaccine));
    }

    #[tokio::test]
    async fn second_insert_under_the_same_code_is_refused() {
        let store = InMemoryVaccineRepository::new();
        let first = sample_vaccine("Z0");
        let mut second = sample_vaccine("Z0");
        second.description = "Another description".into();

        assert!(store.insert_if_absent(&first).await.expect("insert succeeds"));
        assert!(!store.insert_if_absent(&second).await.expect("insert evaluates"));

        // The original record survives the refused insert.
        let found = store.find_by_code("Z0").await.expect("lookup succeeds");
        assert_eq!(found, Some(first));
    }

    #[tokio::test]
    async fn replace_overwrites_the_whole_record() {
        let store = InMemoryVaccineRepository::new();
        store
            .insert_if_absent(&sample_vaccine("Z0"))
            .await
            .expect("insert succeeds");

        let mut replacement = sample_vaccine("Z0");
        replacement.description = "New-description".into();
        assert!(store.replace(&replacement).await.expect("replace succeeds"));

        let found = store.find_by_code("Z0").await.expect("lookup succeeds");
        assert_eq!(found, Some(replacement));
    }

    #[tokio::test]
    async fn replace_of_an_absent_code_writes_nothing() {
        let store = InMemoryVaccineRepository::new();
        assert!(!store.replace(&sample_vaccine("Z9")).await.expect("replace evaluates"));
        assert!(store.list_all().await.expect("list succeeds").is_empty());
    }

    #[tokio::test]
    async fn remove_reports_presence_and_is_idempotent() {
        let store = InMemoryVaccineRepository::new();
        store
            .insert_if_absent(&sample_vaccine("Z0"))
            .await
            .expect("insert succeeds");

        assert!(store.remove_by_code("Z0").await.expect("remove succeeds"));
        assert!(!store.remove_by_code("Z0").await.expect("remove evaluates"));
    }

    #[tokio::test]
    async fn list_follows_key_order() {
        let store = InMemoryVaccineRepository::new();
        for code in ["B1", "A0", "C2"] {
            store
                .insert_if_absent(&sample_vaccine(code))
                .await
                .expect("insert succeeds");
        }

        let codes: Vec<String> = store
            .list_all()
            .await
            .expect("list succeeds")
            .into_iter()
            .map(|vaccine| vaccine.code)
            .collect();
        assert_eq!(codes, ["A0", "B1", "C2"]);
    }

    #[tokio::test]
    async fn concurrent_creators_admit_exactly_one_record_per_code() {
        let store = Arc::new(InMemoryVaccineRepository::new());
        let mut tasks = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                store.insert_if_absent(&sample_vaccine("Z0")).await
            }));
        }

        let mut admitted = 0;
        for task in tasks {
            if task.await.expect("task completes").expect("insert evaluates") {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 1);
        assert_eq!(store.list_all().await.expect("list succeeds").len(), 1);
    }
}
