mod loader;
mod schema;
mod coerce;

pub use loader::{load_csv, load_csv_from_bytes, LoadOptions};
pub use schema::{normalize_schema, COLUMN_LABELS};
pub use coerce::{coerce_numeric, NUMERIC_FIELDS};
