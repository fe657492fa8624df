//! Moves matched covers into the destination directory under their new name.
//!
//! Each entry is independent: a failed move is reported on the output sink
//! and the batch carries on. Nothing is retried or rolled back.

use crate::error::Result;
use crate::layout::Layout;
use crate::mapping::CoverMap;

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};

/// A matched entry that could not be moved.
#[derive(Debug)]
pub struct RenameFailure {
    pub old_name: String,
    pub new_name: String,
    pub error: io::Error,
}

/// Tally of one pass over the source directory.
///
/// Successful moves are only counted.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub moved: usize,
    /// Entries with no mapping; left untouched.
    pub skipped: usize,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Line printed for an entry that could not be moved.
pub fn failure_message(old_name: &str, new_name: &str) -> String {
    format!("File {old_name} could not be renamed to {new_name}!")
}

/// Moves every entry found in `map` from the source to the destination directory.
///
/// Failures are written to `out` one line each, in listing order. Only an
/// error writing to `out` stops the batch.
pub fn rename_matched<W: Write>(
    layout: &Layout,
    map: &CoverMap,
    entries: &[OsString],
    out: &mut W,
) -> Result<RenameReport> {
    let mut report = RenameReport::default();

    for entry in entries {
        let Some((old_name, new_name)) = entry
            .to_str()
            .and_then(|name| map.get(name).map(|target| (name, target)))
        else {
            log::debug!("Skipping unmapped entry {}", entry.to_string_lossy());
            report.skipped += 1;
            continue;
        };

        let from = layout.source_dir.join(old_name);
        let to = layout.dest_dir.join(new_name);

        match fs::rename(&from, &to) {
            Ok(()) => {
                log::info!("Moved: {} → {}", from.display(), to.display());
                report.moved += 1;
            }
            Err(error) => {
                log::warn!(
                    "Failed to move {} → {}: {}",
                    from.display(),
                    to.display(),
                    error
                );
                writeln!(out, "{}", failure_message(old_name, new_name))?;
                report.failures.push(RenameFailure {
                    old_name: old_name.to_string(),
                    new_name: new_name.to_string(),
                    error,
                });
            }
        }
    }

    Ok(report)
}
