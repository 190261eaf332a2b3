use crate::error::{Result, RosterError};
use crate::model::Employee;
use crate::store::RecordStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Export the current record set as a YAML file at `target`, overwriting any
/// prior contents. Returns the path written.
///
/// Export is one-directional; there is no import from the YAML side.
pub fn run<S: RecordStore>(store: &S, target: &Path) -> Result<PathBuf> {
    let records = store.load()?;
    let rendered = render(&records)?;
    fs::write(target, rendered).map_err(RosterError::Io)?;
    Ok(target.to_path_buf())
}

/// Render the record set as multi-document YAML: one block-style document per
/// record, each opened by a `---` marker. Every field round-trips, including
/// opaque extras, though nothing reads this format back.
pub fn render(records: &[Employee]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str("---\n");
        out.push_str(&serde_yaml::to_string(record).map_err(RosterError::Export)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewEmployee;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_render_empty_set() {
        assert_eq!(render(&[]).unwrap(), "");
    }

    #[test]
    fn test_render_one_document_per_record() {
        let records = vec![
            NewEmployee::new("Bob", "Clerk").with_id(2),
            NewEmployee::new("Ann", "Chief").with_id(1),
        ];
        let out = render(&records).unwrap();

        assert_eq!(out.matches("---\n").count(), 2);
        assert!(out.contains("name: Bob"));
        assert!(out.contains("position: Chief"));
        // Store order is preserved, newest first.
        assert!(out.find("Bob").unwrap() < out.find("Ann").unwrap());
    }

    #[test]
    fn test_render_includes_extra_fields() {
        let mut new = NewEmployee::new("Ada", "Engineer");
        new.extra
            .insert("office".to_string(), serde_json::Value::from("B2"));
        let out = render(&[new.with_id(1)]).unwrap();
        assert!(out.contains("office: B2"));
    }

    #[test]
    fn test_run_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("employees.yaml");
        fs::write(&target, "stale contents").unwrap();

        let fixture = StoreFixture::new().with_ids(&[1]);
        let written = run(&fixture.store, &target).unwrap();

        assert_eq!(written, target);
        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.starts_with("---\n"));
        assert!(!contents.contains("stale"));
    }
}
