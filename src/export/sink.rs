use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;

/// Destination for generated files.
pub trait DownloadSink {
    /// Store `bytes` under `file_name`; returns where they went.
    fn save(&mut self, bytes: &[u8], file_name: &str) -> AppResult<PathBuf>;
}

/// Writes into a directory on disk.
pub struct FileSink {
    pub dir: PathBuf,
    pub force: bool,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            dir: dir.into(),
            force,
        }
    }
}

impl DownloadSink for FileSink {
    fn save(&mut self, bytes: &[u8], file_name: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);

        if !ensure_writable(&path, self.force) {
            return Err(AppError::Cancelled(format!(
                "'{}' was not overwritten",
                path.display()
            )));
        }

        fs::write(&path, bytes)?;
        debug!("wrote {} byte(s) to {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// Keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: Vec<(String, Vec<u8>)>,
}

impl DownloadSink for MemorySink {
    fn save(&mut self, bytes: &[u8], file_name: &str) -> AppResult<PathBuf> {
        self.files.push((file_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}
