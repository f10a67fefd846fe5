mod tables;
mod charts;

pub use tables::{
    format_aggregate_table, print_aggregate_table,
    format_record_table, print_record_table,
    format_poverty_summary, print_poverty_summary,
    format_state_counts, print_state_counts,
    print_ranked_records,
};
pub use charts::render_state_bar_chart;
