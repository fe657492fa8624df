//! Loads the old-to-new cover filename mapping from CSV.
//!
//! Records are positional: column 1 holds the old identifier and column 4 the
//! new one. There is no header handling, so a header line becomes an ordinary
//! entry. Later rows overwrite earlier rows with the same old identifier.
//! An empty line is a record with no fields and fails like any short row.

use crate::error::{CoverError, Result};

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Extension appended to both identifiers to form file names.
pub const COVER_EXTENSION: &str = ".jpg";

const OLD_ID_COLUMN: usize = 0;
const NEW_ID_COLUMN: usize = 3;

/// Source file name to destination file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverMap {
    entries: HashMap<String, String>,
}

impl CoverMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mapping, returning the value it replaced.
    pub fn insert(&mut self, from: String, to: String) -> Option<String> {
        self.entries.insert(from, to)
    }

    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries.get(from).map(String::as_str)
    }

    pub fn contains(&self, from: &str) -> bool {
        self.entries.contains_key(from)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Appends the cover extension to an identifier.
pub fn cover_file_name(id: &str) -> String {
    format!("{id}{COVER_EXTENSION}")
}

/// Reads the mapping file at `path`.
///
/// The file handle is released before this returns.
pub fn load_mapping(path: &Path) -> Result<CoverMap> {
    let data = fs::read(path).map_err(|source| CoverError::CsvOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading mapping from {}", path.display());
    collect(&data)
}

/// Reads a mapping from any CSV source.
pub fn load_mapping_from_reader<R: io::Read>(mut rdr: R) -> Result<CoverMap> {
    let mut data = Vec::new();
    rdr.read_to_end(&mut data)?;
    collect(&data)
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(b',').has_headers(false).flexible(true);
    builder
}

fn collect(data: &[u8]) -> Result<CoverMap> {
    let mut reader = reader_builder().from_reader(data);
    let mut map = CoverMap::new();
    let mut record = StringRecord::new();
    let mut after_cr = false;

    loop {
        let start = reader.position().clone();
        let more = reader.read_record(&mut record)?;
        let end = reader.position().byte() as usize;
        let span = &data[start.byte() as usize..end];

        // The csv reader drops empty lines; each one is a zero-field row.
        let leading = leading_line_breaks(span, after_cr);
        if leading.blank > 0 {
            return Err(CoverError::ShortRow {
                line: start.line() + leading.carried,
                fields: 0,
            });
        }
        if !more {
            break;
        }
        after_cr = span.last() == Some(&b'\r');

        let line = start.line() + leading.carried;
        let (from, to) = entry_for(&record, line)?;
        if let Some(previous) = map.insert(from.clone(), to.clone()) {
            log::debug!("Duplicate key {from}: {previous} replaced by {to}");
        } else {
            log::trace!("Mapped {from} → {to}");
        }
    }

    log::debug!("Loaded {} mapping entries", map.len());
    Ok(map)
}

struct LeadingBreaks {
    /// `\n` finishing a CRLF terminator whose `\r` ended the previous read.
    carried: u64,
    blank: u64,
}

fn leading_line_breaks(span: &[u8], after_cr: bool) -> LeadingBreaks {
    let mut rest = span;
    let mut carried = 0;
    if after_cr {
        if let [b'\n', tail @ ..] = rest {
            rest = tail;
            carried = 1;
        }
    }

    let mut blank = 0;
    loop {
        rest = match rest {
            [b'\r', b'\n', tail @ ..] | [b'\n' | b'\r', tail @ ..] => tail,
            _ => return LeadingBreaks { carried, blank },
        };
        blank += 1;
    }
}

fn entry_for(record: &StringRecord, line: u64) -> Result<(String, String)> {
    match (record.get(OLD_ID_COLUMN), record.get(NEW_ID_COLUMN)) {
        (Some(old), Some(new)) => Ok((cover_file_name(old), cover_file_name(new))),
        _ => Err(CoverError::ShortRow {
            line,
            fields: record.len(),
        }),
    }
}
