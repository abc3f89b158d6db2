//! Sample-table reading.
//!
//! The collaborator writes a plain comma-separated table: a header row
//! naming each column, then one row per sample with decimal values and no
//! unit markers. Only the three configured columns are read; any others
//! are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use relief_grid::Sample;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Names of the three table columns to read.
///
/// Defaults match the reference table: `T` and `v` for the independent
/// variables, `p` for the dependent one.
///
/// # Example
///
/// ```
/// use relief_io::TableColumns;
///
/// let cols = TableColumns::new("temp", "vol", "pressure");
/// assert_eq!(cols.w, "pressure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumns {
    /// Column holding the first independent variable.
    pub u: String,
    /// Column holding the second independent variable.
    pub v: String,
    /// Column holding the dependent variable.
    pub w: String,
}

impl Default for TableColumns {
    fn default() -> Self {
        Self::new("T", "v", "p")
    }
}

impl TableColumns {
    /// Create a column selection from the three column names.
    pub fn new(u: impl Into<String>, v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            w: w.into(),
        }
    }
}

/// Load samples from a comma-separated table file.
///
/// Blank lines and lines starting with `#` are skipped. The first
/// remaining line is the header; every later line must carry parseable
/// decimal values in the three selected columns. The core assumes clean
/// numeric input, so a malformed value is an error rather than a skipped
/// row; the caller is responsible for dropping failed lookups before they
/// reach the table.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a configured column is
/// missing from the header, a row is too short, or a value fails to
/// parse.
pub fn load_samples<P: AsRef<Path>>(path: P, columns: &TableColumns) -> IoResult<Vec<Sample>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let mut lines = reader.lines().enumerate();

    // Header: the first non-blank, non-comment line.
    let (u_idx, v_idx, w_idx) = loop {
        let Some((_, line)) = lines.next() else {
            return Err(IoError::invalid_content("table has no header row"));
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let header: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        break (
            find_column(&header, &columns.u)?,
            find_column(&header, &columns.v)?,
            find_column(&header, &columns.w)?,
        );
    };
    let needed = u_idx.max(v_idx).max(w_idx) + 1;

    let mut samples = Vec::new();
    for (line_no, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() < needed {
            return Err(IoError::invalid_content(format!(
                "line {}: expected at least {needed} fields, got {}",
                line_no + 1,
                fields.len()
            )));
        }

        samples.push(Sample::new(
            fields[u_idx].parse()?,
            fields[v_idx].parse()?,
            fields[w_idx].parse()?,
        ));
    }

    debug!(
        sample_count = samples.len(),
        path = %path.display(),
        "loaded sample table"
    );

    Ok(samples)
}

fn find_column(header: &[&str], name: &str) -> IoResult<usize> {
    header
        .iter()
        .position(|&h| h == name)
        .ok_or_else(|| IoError::MissingColumn {
            column: name.to_string(),
        })
}
