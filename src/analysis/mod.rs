mod statistics;
mod aggregate;
mod rank;

pub use statistics::{median, state_counts, SeriesSummary};
pub use aggregate::aggregate_by_state;
pub use rank::{rank_aggregates, rank_records, SortOrder};
