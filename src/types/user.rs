/// Tag closing every record line.
pub const AUTH_TAG: &str = "QUANTUM";

/// One registration, built fresh per invocation and consumed by the append.
///
/// Fields hold the bytes exactly as they were read, so a record written from
/// non-UTF-8 input reaches the file unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub name: Vec<u8>,
    pub email: Vec<u8>,
    pub id: Vec<u8>,
}

impl UserRecord {
    pub fn new(id: impl Into<Vec<u8>>, email: impl Into<Vec<u8>>) -> Self {
        Self {
            name: Vec::new(),
            email: email.into(),
            id: id.into(),
        }
    }

    /// Identifier for console and log output.
    pub fn display_id(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }

    /// Render the registry line, terminator included. The email is not part of it.
    pub fn to_line(&self) -> Vec<u8> {
        let mut line = Vec::with_capacity(self.name.len() + self.id.len() + 24);
        line.extend_from_slice(b"USER:");
        line.extend_from_slice(&self.name);
        line.extend_from_slice(b"|ID:");
        line.extend_from_slice(&self.id);
        line.extend_from_slice(b"|AUTH:");
        line.extend_from_slice(AUTH_TAG.as_bytes());
        line.push(b'\n');
        line
    }
}
