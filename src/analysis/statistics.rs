use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::models::CountyRecord;

/// Descriptive statistics for one numeric column, skip-missing.
///
/// `std_dev` is the sample standard deviation (n - 1 denominator). All
/// statistics are `None` when no non-missing values exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Non-missing observations.
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SeriesSummary {
    /// Summarize a series of optional values, ignoring the missing ones.
    pub fn compute<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let present: Vec<f64> = values.into_iter().flatten().collect();
        if present.is_empty() {
            return Self {
                count: 0,
                mean: None,
                std_dev: None,
                min: None,
                max: None,
            };
        }

        let std_dev = if present.len() > 1 {
            Some((&present).std_dev())
        } else {
            None
        };

        Self {
            count: present.len(),
            mean: Some((&present).mean()),
            std_dev,
            min: Some((&present).min()),
            max: Some((&present).max()),
        }
    }
}

/// Median of the non-missing values: midpoint of the two central order
/// statistics for even counts.
pub fn median<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut present: Vec<f64> = values.into_iter().flatten().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.total_cmp(b));

    let mid = present.len() / 2;
    if present.len() % 2 == 1 {
        Some(present[mid])
    } else {
        Some((present[mid - 1] + present[mid]) / 2.0)
    }
}

/// Frequency of records per state, descending by count, ties in
/// first-appearance order.
pub fn state_counts(records: &[CountyRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.state.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.state.as_str(), counts.len());
                counts.push((record.state.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn record(state: &str, poverty: Option<f64>) -> CountyRecord {
        use crate::models::Cell;
        CountyRecord {
            fips: "0".to_string(),
            state: state.to_string(),
            county: "X".to_string(),
            arc_county: "No".to_string(),
            econ_status_2024: "Transitional".to_string(),
            unemp_rate: None,
            income_2021: None,
            poverty,
            unemp_pct_us: Cell::Missing,
            pcmi_pct_us: Cell::Missing,
            pcm_inv_us: Cell::Missing,
            poverty_pct_us: Cell::Missing,
            comp_index_2024: Cell::Missing,
            index_rank: Cell::Missing,
            quartile: Cell::Missing,
        }
    }

    #[test]
    fn test_summary_basic() {
        let s = SeriesSummary::compute([Some(10.0), Some(12.0), Some(14.0)]);
        assert_eq!(s.count, 3);
        assert_approx_eq!(s.mean.unwrap(), 12.0);
        assert_approx_eq!(s.std_dev.unwrap(), 2.0);
        assert_approx_eq!(s.min.unwrap(), 10.0);
        assert_approx_eq!(s.max.unwrap(), 14.0);
    }

    #[test]
    fn test_summary_skips_missing() {
        let s = SeriesSummary::compute([Some(5.0), None, Some(15.0), None]);
        assert_eq!(s.count, 2);
        assert_approx_eq!(s.mean.unwrap(), 10.0);
    }

    #[test]
    fn test_summary_all_missing() {
        let s = SeriesSummary::compute([None, None]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_none());
        assert!(s.std_dev.is_none());
        assert!(s.min.is_none());
        assert!(s.max.is_none());
    }

    #[test]
    fn test_summary_single_value_has_no_std() {
        let s = SeriesSummary::compute([Some(7.0)]);
        assert_eq!(s.count, 1);
        assert_approx_eq!(s.mean.unwrap(), 7.0);
        assert!(s.std_dev.is_none());
    }

    #[test]
    fn test_median_odd() {
        assert_approx_eq!(
            median([Some(3.0), Some(1.0), Some(2.0)]).unwrap(),
            2.0
        );
    }

    #[test]
    fn test_median_even_is_midpoint() {
        assert_approx_eq!(
            median([Some(50000.0), Some(60000.0)]).unwrap(),
            55000.0
        );
    }

    #[test]
    fn test_median_skips_missing() {
        assert_approx_eq!(median([None, Some(9.0), None]).unwrap(), 9.0);
        assert!(median([None, None]).is_none());
    }

    #[test]
    fn test_state_counts_descending() {
        let records = vec![
            record("Iowa", None),
            record("Texas", None),
            record("Iowa", None),
            record("Iowa", None),
            record("Texas", None),
        ];
        let counts = state_counts(&records);
        assert_eq!(counts[0], ("Iowa".to_string(), 3));
        assert_eq!(counts[1], ("Texas".to_string(), 2));
    }

    #[test]
    fn test_state_counts_ties_keep_first_appearance_order() {
        let records = vec![
            record("Ohio", None),
            record("Maine", None),
            record("Ohio", None),
            record("Maine", None),
        ];
        let counts = state_counts(&records);
        assert_eq!(counts[0].0, "Ohio");
        assert_eq!(counts[1].0, "Maine");
    }
}
