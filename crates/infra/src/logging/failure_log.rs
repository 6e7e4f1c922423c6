//! Plain-text failure log, newest entry first
//!
//! Every entry is prepended to `logs/http.log`. Prepending is a full
//! read-modify-write of the file, so writers inside this process are
//! serialized by a mutex; nothing coordinates with other processes.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tokentray_core::FailureLog;
use tokentray_domain::FailureEntry;
use tracing::{debug, warn};

/// Failure log stored in a single text file
#[derive(Debug)]
pub struct FileFailureLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileFailureLog {
    /// Log at `path`; nothing is created until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log directory and an empty log file if absent, so the
    /// file can be opened before anything has failed.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    pub fn ensure_exists(&self) -> io::Result<()> {
        let _guard = self.lock.lock();
        self.create_parent()?;
        if !self.path.exists() {
            fs::write(&self.path, "")?;
            debug!(path = %self.path.display(), "failure_log.created");
        }
        Ok(())
    }

    fn create_parent(&self) -> io::Result<()> {
        match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => fs::create_dir_all(parent),
            None => Ok(()),
        }
    }

    fn prepend(&self, block: &str) -> io::Result<()> {
        let _guard = self.lock.lock();
        self.create_parent()?;

        let existing = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err),
        };

        let mut contents = String::with_capacity(block.len() + existing.len());
        contents.push_str(block);
        contents.push_str(&existing);
        fs::write(&self.path, contents)
    }
}

impl FailureLog for FileFailureLog {
    fn record(&self, entry: FailureEntry) {
        if let Err(err) = self.prepend(&entry.render()) {
            warn!(
                path = %self.path.display(),
                environment = %entry.environment,
                error = %err,
                "failure_log.write_failed"
            );
        }
    }
}
