//! Append-only log file sink

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{LogError, LogResult};

/// A log file opened for appending
///
/// Lines are written uncolored, one `write_all` per line so concurrent
/// writers never split a line. Once closed every write returns
/// [`LogError::Cleared`].
pub struct LogFile {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl LogFile {
    /// Open `path` for appending, creating it if it does not exist
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o640);
        }
        let file = options
            .open(&path)
            .map_err(|e| LogError::open(&path, e))?;

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.file.lock().is_none()
    }

    /// Append `line` followed by a newline
    pub fn write_line(&self, line: &str) -> LogResult<()> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or(LogError::Cleared)?;

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Flush to disk and release the file handle
    ///
    /// Closing an already closed file is a no-op.
    pub fn close(&self) -> LogResult<()> {
        let file = self.file.lock().take();
        match file {
            Some(mut file) => {
                file.flush()?;
                file.sync_data()?;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for LogFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogFile")
            .field("path", &self.path)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Append `line` to `file`
pub fn write_file_log(file: &LogFile, line: &str) -> LogResult<()> {
    file.write_line(line)
}
