use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AppError, Result};

/// Largest file accepted for import: 10 MiB.
pub const MAX_IMPORT_BYTES: u64 = 10 * 1024 * 1024;

/// Validates an import path from its metadata alone and returns the file
/// size. Nothing is read from the file.
pub fn check_import_file(path: &Path) -> Result<u64> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        return Err(AppError::NotAFile(path.to_path_buf()));
    }

    let is_csv = path
        .file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(AppError::WrongExtension(path.to_path_buf()));
    }

    let size = metadata.len();
    if size == 0 {
        return Err(AppError::EmptyFile(path.to_path_buf()));
    }
    if size > MAX_IMPORT_BYTES {
        return Err(AppError::TooLarge {
            size,
            limit: MAX_IMPORT_BYTES,
        });
    }

    tracing::debug!("Import file {} passed checks", path.display());
    Ok(size)
}
