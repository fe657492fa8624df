//! Fixed on-disk locations used by a conversion run.

use std::path::{Path, PathBuf};

/// Mapping file, relative to the working directory.
pub const MAPPING_FILE: &str = "biblio_copy.csv";

/// Directory holding covers named by their old identifier.
pub const SOURCE_DIR: &str = "originalCovers/coverimages/";

/// Directory receiving covers named by their new identifier. Never created.
pub const DEST_DIR: &str = "convertedCovers/";

/// Where the mapping is read from and where covers move between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub mapping_file: PathBuf,
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
}

impl Layout {
    /// The standard layout resolved against `root` instead of the working directory.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            mapping_file: root.join(MAPPING_FILE),
            source_dir: root.join(SOURCE_DIR),
            dest_dir: root.join(DEST_DIR),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            mapping_file: PathBuf::from(MAPPING_FILE),
            source_dir: PathBuf::from(SOURCE_DIR),
            dest_dir: PathBuf::from(DEST_DIR),
        }
    }
}
