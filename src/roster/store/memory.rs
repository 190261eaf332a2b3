use super::RecordStore;
use crate::error::Result;
use crate::model::Employee;

/// In-memory store for tests. Holds the record set directly, no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Employee>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Employee]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewEmployee;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed the store with records carrying the given ids, newest first.
        pub fn with_ids(mut self, ids: &[u64]) -> Self {
            let records: Vec<Employee> = ids
                .iter()
                .map(|&id| NewEmployee::new(format!("Employee {}", id), "Staff").with_id(id))
                .collect();
            self.store.save(&records).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_contents() {
        let mut fixture = StoreFixture::new().with_ids(&[1, 2]);
        fixture.store.save(&[]).unwrap();
        assert!(fixture.store.load().unwrap().is_empty());
    }
}
