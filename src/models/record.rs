use serde::{Deserialize, Serialize};

use super::{Cell, DataTable};
use crate::error::EconError;

/// One county's row of economic data, extracted from the normalized and
/// coerced table.
///
/// The three analysis fields are explicit optionals: a source cell that
/// could not be parsed as numeric is `None`, excluded from mean/median/std
/// computations but still counted in per-state county totals. The derived
/// percentile and index columns are carried through unchanged as cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountyRecord {
    pub fips: String,
    pub state: String,
    pub county: String,
    pub arc_county: String,
    pub econ_status_2024: String,
    pub unemp_rate: Option<f64>,
    pub income_2021: Option<f64>,
    pub poverty: Option<f64>,
    pub unemp_pct_us: Cell,
    pub pcmi_pct_us: Cell,
    pub pcm_inv_us: Cell,
    pub poverty_pct_us: Cell,
    pub comp_index_2024: Cell,
    pub index_rank: Cell,
    pub quartile: Cell,
}

impl CountyRecord {
    /// Build typed records from a table that has been through the schema
    /// normalizer and type coercer.
    pub fn from_table(table: &DataTable) -> Result<Vec<CountyRecord>, EconError> {
        let col = |name: &str| table.column_index(name);

        let fips = col("FIPS")?;
        let state = col("State")?;
        let county = col("County")?;
        let arc_county = col("ArcCounty")?;
        let econ_status = col("EconStatus2024")?;
        let unemp_rate = col("UnempRate")?;
        let income = col("Income2021")?;
        let poverty = col("Poverty")?;
        let unemp_pct_us = col("UnempPctUS")?;
        let pcmi_pct_us = col("PCMIPctUS")?;
        let pcm_inv_us = col("PCMInvUS")?;
        let poverty_pct_us = col("PovertyPctUS")?;
        let comp_index = col("CompIndex2024")?;
        let index_rank = col("IndexRank")?;
        let quartile = col("Quartile")?;

        let records = table
            .rows
            .iter()
            .map(|row| CountyRecord {
                fips: row[fips].to_string(),
                state: row[state].to_string(),
                county: row[county].to_string(),
                arc_county: row[arc_county].to_string(),
                econ_status_2024: row[econ_status].to_string(),
                unemp_rate: row[unemp_rate].as_number(),
                income_2021: row[income].as_number(),
                poverty: row[poverty].as_number(),
                unemp_pct_us: row[unemp_pct_us].clone(),
                pcmi_pct_us: row[pcmi_pct_us].clone(),
                pcm_inv_us: row[pcm_inv_us].clone(),
                poverty_pct_us: row[poverty_pct_us].clone(),
                comp_index_2024: row[comp_index].clone(),
                index_rank: row[index_rank].clone(),
                quartile: row[quartile].clone(),
            })
            .collect();

        Ok(records)
    }

    /// Look up one of the sortable numeric fields by its column label.
    pub fn numeric_field(&self, name: &str) -> Result<Option<f64>, EconError> {
        match name {
            "Poverty" => Ok(self.poverty),
            "Income2021" => Ok(self.income_2021),
            "UnempRate" => Ok(self.unemp_rate),
            other => Err(EconError::FieldNotFound(other.to_string())),
        }
    }
}
