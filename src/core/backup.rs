use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::errors::{AppError, AppResult};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest`, zipping it when `compress` is set.
    /// Returns the path actually written. The caller has already settled
    /// any overwrite question.
    pub fn backup(db_path: &Path, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        if !db_path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", db_path.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::copy(db_path, dest)?;
        debug!("copied {} to {}", db_path.display(), dest.display());

        if !compress {
            return Ok(dest.to_path_buf());
        }

        let zipped = compress_backup(dest)?;
        if zipped != dest {
            fs::remove_file(dest)?;
        }

        Ok(zipped)
    }
}

/// Zip `path` next to itself (`.zip` extension).
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Other(format!("not a file: {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    Ok(zip_path)
}
