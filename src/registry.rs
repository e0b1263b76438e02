use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::types::{RegistryEntry, UserRecord};

/// Appends registration records to the registry file, one line per record.
pub struct RecordAppender {
    path: PathBuf,
}

impl RecordAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record` as a single line. The file is created when missing and
    /// never truncated. Any open or write failure is `TargetUnavailable`; a
    /// failed write may leave a partial line behind.
    pub fn register(&self, record: UserRecord) -> Result<()> {
        let line = record.to_line();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), "opened registry for append");

        file.write_all(&line).map_err(|e| self.unavailable(e))?;
        debug!(id = %record.display_id(), bytes = line.len(), "appended record");

        Ok(())
    }

    /// Read every record back in file order. A missing file has no records.
    pub fn entries(&self) -> Result<Vec<RegistryEntry>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.unavailable(e)),
        };

        let mut entries = Vec::new();
        for (idx, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line = line.map_err(|e| self.unavailable(e))?;
            match RegistryEntry::parse(&line) {
                Some(entry) => entries.push(entry),
                None => warn!(line = idx + 1, "skipping malformed registry line"),
            }
        }

        Ok(entries)
    }

    fn unavailable(&self, source: std::io::Error) -> RegistryError {
        debug!(path = %self.path.display(), error = %source, "registry file unavailable");
        RegistryError::TargetUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}
