use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::exceptions::RollbookError;

/// Atomically replace the contents of `path` using a temporary file + rename.
pub fn atomic_write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), RollbookError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Create the temp file in the same directory so the rename never crosses
    // a filesystem boundary
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(text.as_bytes())?;

    // Persist replaces the destination path atomically
    temp_file
        .persist(path)
        .map_err(|e| RollbookError::Io(e.error))?;

    Ok(())
}
