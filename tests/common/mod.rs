use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SOURCE_DIR: &str = "originalCovers/coverimages";
pub const DEST_DIR: &str = "convertedCovers";

/// Working directory with a mapping file, a source directory holding `covers`,
/// and (optionally) the destination directory.
#[allow(unused)]
pub fn create_cover_tree(csv: &str, covers: &[&str], with_dest: bool) -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(temp.path().join("biblio_copy.csv"), csv).unwrap();

    let source = temp.path().join(SOURCE_DIR);
    fs::create_dir_all(&source).unwrap();
    for name in covers {
        fs::write(source.join(name), format!("image data for {name}")).unwrap();
    }

    if with_dest {
        fs::create_dir(temp.path().join(DEST_DIR)).unwrap();
    }

    temp
}

#[allow(unused)]
pub fn source_path(root: &Path, name: &str) -> PathBuf {
    root.join(SOURCE_DIR).join(name)
}

#[allow(unused)]
pub fn dest_path(root: &Path, name: &str) -> PathBuf {
    root.join(DEST_DIR).join(name)
}

/// Helper to run the converter in `root`
pub fn run_convert(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("cover-rename");
    cmd.args(extra_args).env_remove("RUST_LOG").current_dir(root);

    cmd.assert()
}
