use std::sync::LazyLock;

use regex::bytes::Regex;
use serde::Serialize;

static RECORD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s-u)^USER:(.*?)\|ID:(.*)\|AUTH:([^|]*)$").unwrap());

/// A record read back from the registry file. Fields are decoded lossily for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: String,
    pub id: String,
    pub auth: String,
}

impl RegistryEntry {
    /// Parse one line (with or without its terminator). Returns `None` for
    /// anything that isn't a record.
    pub fn parse(line: &[u8]) -> Option<Self> {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let cap = RECORD_LINE.captures(line)?;
        let field = |i: usize| String::from_utf8_lossy(&cap[i]).into_owned();
        Some(Self {
            name: field(1),
            id: field(2),
            auth: field(3),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRecord;

    #[test]
    fn test_parse_written_line() {
        let line = UserRecord::new("ABC123", "a@b.com").to_line();
        let entry = RegistryEntry::parse(&line).unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.id, "ABC123");
        assert_eq!(entry.auth, "QUANTUM");
    }

    #[test]
    fn test_parse_crlf_line() {
        let entry = RegistryEntry::parse(b"USER:Ada|ID:42|AUTH:QUANTUM\r\n").unwrap();
        assert_eq!(entry.name, "Ada");
        assert_eq!(entry.id, "42");
    }

    #[test]
    fn test_parse_id_containing_separator() {
        let line = UserRecord::new("a|ID:b", "a@b.com").to_line();
        let entry = RegistryEntry::parse(&line).unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.id, "a|ID:b");
    }

    #[test]
    fn test_parse_non_utf8_id() {
        let line = UserRecord::new(&b"ab\xe9c"[..], "a@b.com").to_line();
        let entry = RegistryEntry::parse(&line).unwrap();
        assert_eq!(entry.id, "ab\u{FFFD}c");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(RegistryEntry::parse(b"").is_none());
        assert!(RegistryEntry::parse(b"hello world").is_none());
        assert!(RegistryEntry::parse(b"ID:1|AUTH:QUANTUM").is_none());
    }
}
