//! Size-capped append-only file.
//!
//! Before each write the current file is checked against a size limit. When
//! it is over, the file is renamed with a UTC timestamp suffix
//! (`traces.json.20261019T101500.123`) and a fresh file is started. Only the
//! newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file grows past this many bytes.
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept after rotation.
pub const DEFAULT_MAX_BACKUPS: usize = 2;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Opens lazily on first write.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening or writing fails, or if the
    /// handle lock is poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        let over_limit = fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes);
        if over_limit {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup_prefix(&self) -> Option<String> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
    }

    fn rotate(&self) -> io::Result<()> {
        let Some(prefix) = self.backup_prefix() else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "trace path has no file name"));
        };

        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let backup = self.path.with_file_name(format!("{prefix}{stamp}"));
        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }

        let Some(dir) = self.path.parent() else {
            return Ok(());
        };

        // Timestamp suffixes sort chronologically as strings.
        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        backups.sort();

        let excess = backups.len().saturating_sub(self.max_backups);
        for old in backups.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = RotatingFile::new(dir.path().join("traces.json"));
        file.append_line("{\"a\":1}").expect("write");
        file.append_line("{\"b\":2}").expect("write");

        let contents = fs::read_to_string(file.path()).expect("read");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotation_keeps_bounded_backups() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = RotatingFile::with_limits(dir.path().join("traces.json"), 8, 2);

        for i in 0..6 {
            file.append_line(&format!("line number {i}")).expect("write");
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        let backups = fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("traces.json."))
            .count();
        assert!(backups <= 2);

        let current = fs::read_to_string(file.path()).expect("read");
        assert_eq!(current, "line number 5\n");
    }
}
