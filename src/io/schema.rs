use tracing::debug;

use crate::error::EconError;
use crate::models::DataTable;

/// Logical schema of the dataset, assigned positionally to the first 15
/// columns regardless of the source header text.
pub const COLUMN_LABELS: [&str; 15] = [
    "FIPS",
    "State",
    "County",
    "ArcCounty",
    "EconStatus2024",
    "UnempRate",
    "Income2021",
    "Poverty",
    "UnempPctUS",
    "PCMIPctUS",
    "PCMInvUS",
    "PovertyPctUS",
    "CompIndex2024",
    "IndexRank",
    "Quartile",
];

/// Relabel the loaded table to the fixed logical schema and drop the
/// leading units/legend artifact row.
///
/// The drop is not index-based filtering: exactly one leading row goes,
/// whatever it contains. Every remaining row must carry all 15 cells;
/// the loader parses leniently, so ragged rows surface here as fatal
/// schema errors rather than panics downstream.
pub fn normalize_schema(table: &mut DataTable) -> Result<(), EconError> {
    if table.num_columns() != COLUMN_LABELS.len() {
        return Err(EconError::Schema {
            expected: COLUMN_LABELS.len(),
            found: table.num_columns(),
        });
    }

    table.columns = COLUMN_LABELS.iter().map(|s| s.to_string()).collect();

    if !table.rows.is_empty() {
        table.rows.remove(0);
    }

    for row in &table.rows {
        if row.len() != COLUMN_LABELS.len() {
            return Err(EconError::Schema {
                expected: COLUMN_LABELS.len(),
                found: row.len(),
            });
        }
    }

    debug!(rows = table.num_rows(), "normalized schema");
    Ok(())
}
