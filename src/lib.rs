pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use error::EconError;
pub use io::{load_csv, load_csv_from_bytes, LoadOptions};
pub use models::{Cell, CountyRecord, DataTable, StateAggregate};

/// Run the full ingest pipeline: load, normalize the schema, coerce the
/// numeric columns, and extract typed county records.
pub fn load_records(
    path: impl AsRef<std::path::Path>,
    options: &LoadOptions,
) -> Result<Vec<CountyRecord>, EconError> {
    let mut table = load_csv(path, options)?;
    io::normalize_schema(&mut table)?;
    io::coerce_numeric(&mut table)?;
    CountyRecord::from_table(&table)
}
