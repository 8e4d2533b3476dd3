//! JSON-file store for notified posting ids.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::StoreError;

/// Stores the ids of postings that have already been emailed.
///
/// The backing file is a JSON array of strings, read once at startup and
/// replaced wholesale at the end of a run that found anything new. A missing
/// file is an empty set. A file that exists but does not parse is an error:
/// treating it as empty would re-notify the entire backlog, so the run
/// aborts and leaves the file for the operator to inspect.
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the seen set. A missing file yields an empty set.
    pub fn load(&self) -> Result<HashSet<String>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file, starting with empty seen set");
                return Ok(HashSet::new());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let ids: Vec<String> = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        debug!(count = ids.len(), path = %self.path.display(), "loaded seen set");
        Ok(ids.into_iter().collect())
    }

    /// Replace the backing file with the given set.
    ///
    /// Writes to a temp file in the target directory and renames it over the
    /// state file, so a crash mid-write cannot leave a truncated file behind.
    pub fn save(&self, seen: &HashSet<String>) -> Result<(), StoreError> {
        let ids: Vec<&String> = seen.iter().collect();
        let json = serde_json::to_string(&ids)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        info!(count = seen.len(), path = %self.path.display(), "saved seen set");
        Ok(())
    }
}
