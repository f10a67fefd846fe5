use tracing::debug;

use crate::error::EconError;
use crate::models::{Cell, DataTable};

/// Columns converted to numeric for the analysis stages.
pub const NUMERIC_FIELDS: [&str; 3] = ["Income2021", "Poverty", "UnempRate"];

/// Coerce the analysis columns to numeric cells.
///
/// A text cell that parses becomes a number; one that does not becomes
/// missing. Nothing aborts on a bad cell, and coercing an already-coerced
/// table changes nothing.
pub fn coerce_numeric(table: &mut DataTable) -> Result<(), EconError> {
    for field in NUMERIC_FIELDS {
        let idx = table.column_index(field)?;
        let mut newly_missing = 0usize;

        for row in &mut table.rows {
            row[idx] = match &row[idx] {
                Cell::Number(n) => Cell::Number(*n),
                Cell::Text(s) => match s.parse::<f64>() {
                    Ok(n) => Cell::Number(n),
                    Err(_) => {
                        newly_missing += 1;
                        Cell::Missing
                    }
                },
                Cell::Missing => Cell::Missing,
            };
        }

        if newly_missing > 0 {
            debug!(field, newly_missing, "unparsable cells coerced to missing");
        }
    }

    Ok(())
}
