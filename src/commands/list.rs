use std::io::Write;

use tabled::Tabled;

use crate::error::Result;
use crate::output;
use crate::registry::RecordAppender;
use crate::types::RegistryEntry;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Auth")]
    auth: String,
}

impl From<&RegistryEntry> for EntryRow {
    fn from(entry: &RegistryEntry) -> Self {
        Self {
            name: if entry.name.is_empty() {
                "-".to_string()
            } else {
                entry.name.clone()
            },
            id: entry.id.clone(),
            auth: entry.auth.clone(),
        }
    }
}

pub fn run(appender: &RecordAppender, json: bool, out: &mut impl Write) -> Result<()> {
    let entries = appender.entries()?;

    if entries.is_empty() && !json {
        writeln!(out, "No records found.")?;
        return Ok(());
    }

    output::print_table(out, &entries, json, |entry| EntryRow::from(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRecord;

    #[test]
    fn test_list_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let appender = RecordAppender::new(dir.path().join("dlg_registry.dat"));

        let mut out = Vec::new();
        run(&appender, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No records found.\n");
    }

    #[test]
    fn test_list_shows_records() {
        let dir = tempfile::tempdir().unwrap();
        let appender = RecordAppender::new(dir.path().join("dlg_registry.dat"));
        appender.register(UserRecord::new("ABC123", "a@b.com")).unwrap();
        appender.register(UserRecord::new("XYZ789", "c@d.com")).unwrap();

        let mut out = Vec::new();
        run(&appender, false, &mut out).unwrap();
        let table = String::from_utf8(out).unwrap();
        assert!(table.contains("ABC123"));
        assert!(table.contains("XYZ789"));
        assert!(table.contains("QUANTUM"));
        assert!(table.find("ABC123").unwrap() < table.find("XYZ789").unwrap());
    }

    #[test]
    fn test_list_json_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let appender = RecordAppender::new(dir.path().join("dlg_registry.dat"));

        let mut out = Vec::new();
        run(&appender, true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_list_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let appender = RecordAppender::new(dir.path().join("dlg_registry.dat"));
        appender.register(UserRecord::new("ABC123", "a@b.com")).unwrap();
        appender.register(UserRecord::new("a|ID:b", "c@d.com")).unwrap();

        let mut out = Vec::new();
        run(&appender, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "name": "", "id": "ABC123", "auth": "QUANTUM" },
                { "name": "", "id": "a|ID:b", "auth": "QUANTUM" },
            ])
        );
    }
}
