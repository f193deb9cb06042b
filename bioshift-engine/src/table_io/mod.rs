//! Reading replicate files and writing two-column artifacts.
//!
//! Replicate files are plain comma-separated text: a header row naming at
//! least the `Element` and `Observed Shift` columns, then one observation
//! per row. Quoting and embedded commas are not part of the data contract.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use bioshift_core::constants::{ELEMENT_COLUMN, SHIFT_COLUMN};
use bioshift_core::errors::TableError;
use bioshift_core::types::collections::BTreeMap;
use bioshift_core::types::Shift;

/// Observations read from one replicate file, in file order.
#[derive(Debug)]
pub struct ReplicateTable {
    pub path: PathBuf,
    pub records: Vec<(String, Shift)>,
    /// Rows dropped for having too few cells, an empty element, or an
    /// unparsable shift value.
    pub rows_skipped: usize,
}

/// Read one replicate file.
///
/// Missing `Element` or `Observed Shift` columns reject the whole file;
/// malformed rows are skipped individually with a warning.
pub fn read_replicate(path: &Path) -> Result<ReplicateTable, TableError> {
    let raw = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = raw.lines();
    let header = lines.next().ok_or_else(|| TableError::Empty {
        path: path.to_path_buf(),
    })?;

    let columns: Vec<&str> = header
        .trim_start_matches('\u{feff}')
        .split(',')
        .map(str::trim)
        .collect();
    let element_idx = find_column(&columns, ELEMENT_COLUMN, path)?;
    let shift_idx = find_column(&columns, SHIFT_COLUMN, path)?;

    let mut records = Vec::new();
    let mut rows_skipped = 0usize;
    for (line_no, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').collect();
        let parsed = cells
            .get(element_idx)
            .map(|c| c.trim())
            .filter(|e| !e.is_empty())
            .zip(cells.get(shift_idx).and_then(|c| Shift::parse(c)));
        match parsed {
            Some((element, shift)) => records.push((element.to_string(), shift)),
            None => {
                rows_skipped += 1;
                // Header is line 1; the first data row is line 2.
                warn!("skipping malformed row {} in {}", line_no + 2, path.display());
            }
        }
    }

    Ok(ReplicateTable {
        path: path.to_path_buf(),
        records,
        rows_skipped,
    })
}

fn find_column(columns: &[&str], name: &'static str, path: &Path) -> Result<usize, TableError> {
    columns
        .iter()
        .position(|c| *c == name)
        .ok_or(TableError::MissingColumn {
            path: path.to_path_buf(),
            column: name,
        })
}

/// Write a resolved table as a two-column artifact, one row per element
/// in table order. Any failure here is fatal to the caller.
pub fn write_table(path: &Path, table: &BTreeMap<String, Shift>) -> Result<(), TableError> {
    let mut out = String::with_capacity(32 + table.len() * 16);
    let _ = writeln!(out, "{ELEMENT_COLUMN},{SHIFT_COLUMN}");
    for (element, shift) in table {
        let _ = writeln!(out, "{element},{shift}");
    }
    fs::write(path, out).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}
