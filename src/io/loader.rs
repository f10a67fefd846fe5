use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::EconError;
use crate::models::{Cell, DataTable};

/// Conventions of the source file: preamble and footer line counts, and
/// the grouping character used inside numeric cells.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Non-data lines before the header row.
    pub skip_header: usize,
    /// Non-data lines at the end of the file.
    pub skip_footer: usize,
    /// Thousands separator inside numeric-looking cells.
    pub thousands: Option<char>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        // county_economic_status_2024.csv: 4 preamble lines, 2 footer
        // lines, comma-grouped currency values.
        Self {
            skip_header: 4,
            skip_footer: 2,
            thousands: Some(','),
        }
    }
}

fn parse_table<R: Read>(rdr: R, options: &LoadOptions) -> Result<DataTable, EconError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut raw_rows: Vec<csv::StringRecord> = Vec::new();
    for result in csv_reader.records() {
        raw_rows.push(result?);
    }

    // Header row plus skipped preamble and footer must all be present.
    let minimum = options.skip_header + options.skip_footer + 1;
    if raw_rows.len() < minimum {
        return Err(EconError::Load(format!(
            "file has {} rows, need at least {} (skip {} header + {} footer + header row)",
            raw_rows.len(),
            minimum,
            options.skip_header,
            options.skip_footer
        )));
    }

    let body = &raw_rows[options.skip_header..raw_rows.len() - options.skip_footer];
    let columns: Vec<String> = body[0].iter().map(|s| s.to_string()).collect();

    let rows: Vec<Vec<Cell>> = body[1..]
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|cell| Cell::parse(cell, options.thousands))
                .collect()
        })
        .collect();

    debug!(
        columns = columns.len(),
        rows = rows.len(),
        "parsed delimited source"
    );

    Ok(DataTable::new(columns, rows))
}

/// Load a delimited source file into a [`DataTable`], applying the
/// header/footer skip counts and per-cell auto-typing.
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<DataTable, EconError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading dataset");
    let file = File::open(path)?;
    parse_table(file, options)
}

/// Load a delimited source from in-memory bytes.
pub fn load_csv_from_bytes(data: &[u8], options: &LoadOptions) -> Result<DataTable, EconError> {
    parse_table(data, options)
}
