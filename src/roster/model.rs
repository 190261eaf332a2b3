use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A persisted employee record.
///
/// `id` is assigned by the store at persist time and is unique within a store.
/// Fields beyond `name` and `position` are opaque pass-through data: whatever
/// extra keys the file carries are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub position: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An employee as supplied by the caller: no id yet.
///
/// Records only become [`Employee`]s when the add command assigns an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub extra: BTreeMap<String, Value>,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_id(self, id: u64) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            extra: self.extra,
        }
    }
}

/// Next identifier for a record set: `max(ids) + 1`, or `1` when empty.
pub fn next_id(records: &[Employee]) -> u64 {
    records.iter().map(|e| e.id).max().unwrap_or(0) + 1
}
