//! Lists the covers waiting in the source directory.

use crate::error::{CoverError, Result};

use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Returns the names of everything directly inside `dir`.
///
/// Not recursive. Subdirectories are listed like files; matching decides
/// what gets moved. Order is whatever the file system yields.
pub fn list_entries(dir: &Path) -> Result<Vec<OsString>> {
    let read_dir_err = |source: std::io::Error| CoverError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        names.push(entry.map_err(read_dir_err)?.file_name());
    }

    log::debug!("Found {} entries in {}", names.len(), dir.display());
    Ok(names)
}
