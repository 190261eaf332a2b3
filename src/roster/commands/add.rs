use crate::error::Result;
use crate::model::{next_id, Employee, NewEmployee};
use crate::store::RecordStore;

/// Add a record to the store and return it with its assigned id.
///
/// The id is `max(existing ids) + 1` (1 for an empty store) unless
/// `id_override` forces a specific value. The new record is prepended, so the
/// on-disk array stays ordered newest first.
pub fn run<S: RecordStore>(
    store: &mut S,
    new: NewEmployee,
    id_override: Option<u64>,
) -> Result<Employee> {
    let mut records = store.load()?;
    let id = id_override.unwrap_or_else(|| next_id(&records));
    let employee = new.with_id(id);
    records.insert(0, employee.clone());
    store.save(&records)?;
    Ok(employee)
}
