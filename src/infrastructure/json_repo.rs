use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::Todo;

/// JSON-array-on-disk repository. The file is the sole owner of state; every
/// command loads it fully and saves by rewriting the whole array.
#[derive(Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl TodoRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Todo>, TodoError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(TodoError::Load { source }),
        };
        match serde_json::from_str(&raw) {
            Ok(todos) => Ok(todos),
            Err(e) => {
                // Malformed content (bad JSON, non-array root) is treated as an
                // empty collection; the next save overwrites it.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "todo file is not a valid JSON array, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, todos: &[Todo]) -> Result<(), TodoError> {
        let json = serde_json::to_string(todos)
            .map_err(|e| TodoError::Save { source: e.into() })?;
        // Temp file in the target directory, then rename over the target, so a
        // crash mid-write never leaves a truncated file.
        let write_atomically = || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
            tmp.write_all(json.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&self.path).map_err(|e| e.error)?;
            Ok(())
        };
        write_atomically().map_err(|source| TodoError::Save { source })?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "saved todos");
        Ok(())
    }
}
