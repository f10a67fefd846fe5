use std::collections::HashMap;

use tracing::debug;

use super::statistics::median;
use crate::models::{CountyRecord, StateAggregate};

fn mean_of(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Group records by exact state name and compute the per-state summary.
///
/// Groups come out in first-appearance order. Every record counts toward
/// `counties`; the mean and median statistics skip missing values, and a
/// group with no usable values for a field gets `None` there.
pub fn aggregate_by_state(records: &[CountyRecord]) -> Vec<StateAggregate> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&CountyRecord>> = HashMap::new();

    for record in records {
        let entry = groups.entry(record.state.as_str()).or_default();
        if entry.is_empty() {
            order.push(record.state.as_str());
        }
        entry.push(record);
    }

    let aggregates: Vec<StateAggregate> = order
        .into_iter()
        .map(|state| {
            let members = &groups[state];
            let incomes: Vec<Option<f64>> = members.iter().map(|r| r.income_2021).collect();
            let poverties: Vec<Option<f64>> = members.iter().map(|r| r.poverty).collect();
            let unemps: Vec<Option<f64>> = members.iter().map(|r| r.unemp_rate).collect();

            StateAggregate {
                state: state.to_string(),
                counties: members.len(),
                mean_income: mean_of(&incomes),
                median_income: median(incomes),
                mean_poverty: mean_of(&poverties),
                mean_unemp: mean_of(&unemps),
            }
        })
        .collect();

    debug!(states = aggregates.len(), "aggregated records by state");
    aggregates
}
