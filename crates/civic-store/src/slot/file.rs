use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::SlotError;

use super::{check_quota, KeyValueSlot};

/// A slot stored as `{dir}/{key}.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers see either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
    key: String,
    quota_bytes: Option<usize>,
}

impl FileSlot {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
            quota_bytes: None,
        }
    }

    /// Refuse writes larger than `bytes`. Zero disables the limit.
    #[must_use]
    pub const fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = if bytes == 0 { None } else { Some(bytes) };
        self
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    /// Directory holding the backing file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// First free backup path: `{key}.json.bak`, then `{key}.json.bak.1`, ...
    fn backup_path(&self) -> PathBuf {
        let base = format!("{}.json.bak", self.key);
        let mut candidate = self.dir.join(&base);
        let mut n = 1_u32;
        while candidate.exists() {
            candidate = self.dir.join(format!("{base}.{n}"));
            n += 1;
        }
        candidate
    }

    fn io_error(path: &Path, source: std::io::Error) -> SlotError {
        SlotError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl KeyValueSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, SlotError> {
        let path = self.path();
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Self::io_error(&path, error)),
        }
    }

    fn write(&mut self, value: &str) -> Result<(), SlotError> {
        check_quota(&self.key, value, self.quota_bytes)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(&self.dir, e))?;

        let path = self.path();
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| Self::io_error(&self.dir, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|e| Self::io_error(tmp.path(), e))?;
        tmp.persist(&path)
            .map_err(|e| Self::io_error(&path, e.error))?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn set_aside(&mut self) -> Result<Option<String>, SlotError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let backup = self.backup_path();
        std::fs::rename(&path, &backup).map_err(|e| Self::io_error(&path, e))?;
        tracing::debug!(from = %path.display(), to = %backup.display(), "slot value set aside");
        Ok(Some(backup.display().to_string()))
    }
}
