use serde::{Deserialize, Serialize};

use crate::error::EconError;

/// Per-state summary derived from the county records.
///
/// Recomputed fresh on every run; a state whose counties all have a
/// missing value for some field gets `None` for that statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateAggregate {
    pub state: String,
    /// Number of county records, including ones with missing numeric fields.
    pub counties: usize,
    pub mean_income: Option<f64>,
    pub median_income: Option<f64>,
    pub mean_poverty: Option<f64>,
    pub mean_unemp: Option<f64>,
}

impl StateAggregate {
    /// Sort key for ranking aggregates by a named field.
    pub fn sort_key(&self, field: &str) -> Result<Option<f64>, EconError> {
        match field {
            "counties" => Ok(Some(self.counties as f64)),
            "mean_income" => Ok(self.mean_income),
            "median_income" => Ok(self.median_income),
            "mean_poverty" => Ok(self.mean_poverty),
            "mean_unemp" => Ok(self.mean_unemp),
            other => Err(EconError::FieldNotFound(other.to_string())),
        }
    }
}
