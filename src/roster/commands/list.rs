use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

/// Return the full record set, newest first (store order).
pub fn run<S: RecordStore>(store: &S) -> Result<Vec<Employee>> {
    store.load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_list_empty_store() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().is_empty());
    }

    #[test]
    fn test_list_returns_store_order() {
        let fixture = StoreFixture::new().with_ids(&[3, 1, 2]);
        let records = run(&fixture.store).unwrap();
        let ids: Vec<u64> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
