use std::cmp::Ordering;

use crate::error::EconError;
use crate::models::{CountyRecord, StateAggregate};

/// Direction for ranked slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Compare optional sort keys: missing values always sort last, whatever
/// the direction, so top/bottom slices prefer real observations.
fn compare_keys(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match order {
            SortOrder::Ascending => x.total_cmp(&y),
            SortOrder::Descending => y.total_cmp(&x),
        },
    }
}

/// Rank state aggregates by a named field and take the first `n`.
///
/// `exclude` removes one state (exact match) before ranking. The sort is
/// stable: ties keep their incoming order.
pub fn rank_aggregates<'a>(
    aggregates: &'a [StateAggregate],
    field: &str,
    order: SortOrder,
    n: usize,
    exclude: Option<&str>,
) -> Result<Vec<&'a StateAggregate>, EconError> {
    let mut ranked: Vec<(&StateAggregate, Option<f64>)> = aggregates
        .iter()
        .filter(|agg| exclude != Some(agg.state.as_str()))
        .map(|agg| agg.sort_key(field).map(|key| (agg, key)))
        .collect::<Result<_, _>>()?;

    ranked.sort_by(|a, b| compare_keys(a.1, b.1, order));
    Ok(ranked.into_iter().take(n).map(|(agg, _)| agg).collect())
}

/// Rank raw county records by a named numeric field and take the first `n`.
pub fn rank_records<'a>(
    records: &'a [CountyRecord],
    field: &str,
    order: SortOrder,
    n: usize,
) -> Result<Vec<&'a CountyRecord>, EconError> {
    let mut ranked: Vec<(&CountyRecord, Option<f64>)> = records
        .iter()
        .map(|rec| rec.numeric_field(field).map(|key| (rec, key)))
        .collect::<Result<_, _>>()?;

    ranked.sort_by(|a, b| compare_keys(a.1, b.1, order));
    Ok(ranked.into_iter().take(n).map(|(rec, _)| rec).collect())
}
