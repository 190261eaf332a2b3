use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<Employee>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RosterError::Io(e)),
        };
        let records: Vec<Employee> =
            serde_json::from_str(&content).map_err(RosterError::Decode)?;
        Ok(records)
    }

    fn save(&mut self, records: &[Employee]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(RosterError::Encode)?;
        fs::write(&self.path, content).map_err(RosterError::Io)?;
        Ok(())
    }
}
