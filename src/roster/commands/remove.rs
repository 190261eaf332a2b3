use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

/// Remove every record with the given id and return how many were dropped.
///
/// Under the uniqueness invariant at most one record matches, but the filter
/// deliberately removes all matches so a store with duplicated ids still comes
/// out clean. Removing an id that is not present is not an error; the set is
/// rewritten unchanged and `Ok(0)` is returned.
pub fn run<S: RecordStore>(store: &mut S, id: u64) -> Result<usize> {
    let records = store.load()?;
    let before = records.len();
    let kept: Vec<Employee> = records.into_iter().filter(|e| e.id != id).collect();
    let removed = before - kept.len();
    store.save(&kept)?;
    Ok(removed)
}
