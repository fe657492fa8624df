use crate::error::Result;
use crate::layout::Layout;
use crate::mapping::load_mapping;
use crate::renamer::{RenameReport, rename_matched};
use crate::walker::list_entries;

use std::io;

/// Runs one conversion: load the mapping, list the source directory, move matches.
///
/// Setup failures abort before any file is moved. Per-file failures are
/// printed to stdout and counted in the returned report.
pub fn execute(layout: &Layout) -> Result<RenameReport> {
    let map = load_mapping(&layout.mapping_file)?;
    let entries = list_entries(&layout.source_dir)?;

    log::debug!(
        "Moving covers from {} to {}",
        layout.source_dir.display(),
        layout.dest_dir.display()
    );

    let stdout = io::stdout();
    let report = rename_matched(layout, &map, &entries, &mut stdout.lock())?;

    log::info!(
        "{} moved, {} failed, {} skipped",
        report.moved,
        report.failed(),
        report.skipped
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_source_dir_aborts_after_loading_mapping() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::rooted_at(temp.path());
        fs::write(&layout.mapping_file, "1001,x,y,2001\n").unwrap();

        let err = execute(&layout).unwrap_err();
        assert!(matches!(err, CoverError::ReadDir { .. }));
    }

    #[test]
    fn short_row_aborts_before_any_move() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::rooted_at(temp.path());
        fs::create_dir_all(&layout.source_dir).unwrap();
        fs::create_dir_all(&layout.dest_dir).unwrap();
        fs::write(layout.source_dir.join("1001.jpg"), b"a").unwrap();
        fs::write(&layout.mapping_file, "1001,x,y,2001\nbroken\n").unwrap();

        let err = execute(&layout).unwrap_err();
        assert!(matches!(err, CoverError::ShortRow { fields: 1, .. }));
        assert!(layout.source_dir.join("1001.jpg").exists());
    }

    #[test]
    fn full_run_moves_matches() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::rooted_at(temp.path());
        fs::create_dir_all(&layout.source_dir).unwrap();
        fs::create_dir_all(&layout.dest_dir).unwrap();
        fs::write(layout.source_dir.join("1001.jpg"), b"a").unwrap();
        fs::write(layout.source_dir.join("9999.jpg"), b"b").unwrap();
        fs::write(&layout.mapping_file, "1001,x,y,2001\n").unwrap();

        let report = execute(&layout).unwrap();
        assert_eq!((report.moved, report.failed(), report.skipped), (1, 0, 1));
        assert!(layout.dest_dir.join("2001.jpg").exists());
    }
}
