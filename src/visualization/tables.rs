use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::analysis::{rank_records, SeriesSummary, SortOrder};
use crate::error::EconError;
use crate::models::{CountyRecord, StateAggregate};

fn fmt2(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "NaN".to_string(),
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Format a state-level aggregate ranking table as a string.
pub fn format_aggregate_table(title: &str, aggregates: &[&StateAggregate]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = new_table(vec![
        "State",
        "# Counties",
        "PCI (Mean)",
        "PCI (Median)",
        "Poverty Rate",
    ]);

    for agg in aggregates {
        table.add_row(vec![
            Cell::new(&agg.state),
            Cell::new(format!("{}", agg.counties)),
            Cell::new(fmt2(agg.mean_income)),
            Cell::new(fmt2(agg.median_income)),
            Cell::new(fmt2(agg.mean_poverty)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print a state-level aggregate ranking table.
pub fn print_aggregate_table(title: &str, aggregates: &[&StateAggregate]) {
    print!("{}", format_aggregate_table(title, aggregates));
}

/// Format a county-level ranking table as a string.
pub fn format_record_table(title: &str, records: &[&CountyRecord]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = new_table(vec![
        "State",
        "County",
        "Per capita income",
        "Poverty rate",
        "Avg Unemployment",
    ]);

    for rec in records {
        table.add_row(vec![
            Cell::new(&rec.state),
            Cell::new(&rec.county),
            Cell::new(fmt2(rec.income_2021)),
            Cell::new(fmt2(rec.poverty)),
            Cell::new(fmt2(rec.unemp_rate)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print a county-level ranking table.
pub fn print_record_table(title: &str, records: &[&CountyRecord]) {
    print!("{}", format_record_table(title, records));
}

/// Print both the descending top-n and ascending bottom-n county tables
/// for one numeric field.
pub fn print_ranked_records(
    records: &[CountyRecord],
    field: &str,
    n: usize,
) -> Result<(), EconError> {
    let top = rank_records(records, field, SortOrder::Descending, n)?;
    print_record_table(&format!("Top {n} by {field} (desc)"), &top);

    let bottom = rank_records(records, field, SortOrder::Ascending, n)?;
    print_record_table(&format!("Bottom {n} by {field} (asc)"), &bottom);

    Ok(())
}

/// Format the poverty-rate descriptive statistics block as a string.
pub fn format_poverty_summary(summary: &SeriesSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        "Poverty Rate Summary Statistics".bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!("  Mean Poverty Rate:      {}\n", fmt2(summary.mean)));
    output.push_str(&format!(
        "  Standard Deviation:     {}\n",
        fmt2(summary.std_dev)
    ));
    output.push_str(&format!("  Minimum Poverty Rate:   {}\n", fmt2(summary.min)));
    output.push_str(&format!("  Maximum Poverty Rate:   {}\n", fmt2(summary.max)));
    output
}

/// Print the poverty-rate descriptive statistics block.
pub fn print_poverty_summary(summary: &SeriesSummary) {
    print!("{}", format_poverty_summary(summary));
}

/// Format the records-per-state frequency table as a string.
pub fn format_state_counts(counts: &[(String, usize)]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Counties per State".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(40)));

    let mut table = new_table(vec!["State", "Counties"]);
    for (state, count) in counts {
        table.add_row(vec![Cell::new(state), Cell::new(format!("{count}"))]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the records-per-state frequency table.
pub fn print_state_counts(counts: &[(String, usize)]) {
    print!("{}", format_state_counts(counts));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell as DataCell;

    fn aggregate(state: &str) -> StateAggregate {
        StateAggregate {
            state: state.to_string(),
            counties: 99,
            mean_income: Some(52314.157),
            median_income: Some(51000.0),
            mean_poverty: Some(11.236),
            mean_unemp: Some(3.1),
        }
    }

    fn record(state: &str, county: &str) -> CountyRecord {
        CountyRecord {
            fips: "19001".to_string(),
            state: state.to_string(),
            county: county.to_string(),
            arc_county: "No".to_string(),
            econ_status_2024: "Transitional".to_string(),
            unemp_rate: Some(3.25),
            income_2021: Some(52000.0),
            poverty: None,
            unemp_pct_us: DataCell::Missing,
            pcmi_pct_us: DataCell::Missing,
            pcm_inv_us: DataCell::Missing,
            poverty_pct_us: DataCell::Missing,
            comp_index_2024: DataCell::Missing,
            index_rank: DataCell::Missing,
            quartile: DataCell::Missing,
        }
    }

    #[test]
    fn test_aggregate_table_headers_and_formatting() {
        let agg = aggregate("Iowa");
        let output = format_aggregate_table("Top 10 States by Number of Counties", &[&agg]);
        assert!(output.contains("Top 10 States by Number of Counties"));
        assert!(output.contains("# Counties"));
        assert!(output.contains("PCI (Mean)"));
        assert!(output.contains("PCI (Median)"));
        assert!(output.contains("Poverty Rate"));
        // Two decimal places exactly.
        assert!(output.contains("52314.16"));
        assert!(output.contains("11.24"));
    }

    #[test]
    fn test_record_table_headers_and_missing_values() {
        let rec = record("Iowa", "Adair");
        let output = format_record_table("Top 10 by Poverty (desc)", &[&rec]);
        assert!(output.contains("Per capita income"));
        assert!(output.contains("Poverty rate"));
        assert!(output.contains("Avg Unemployment"));
        assert!(output.contains("Adair"));
        assert!(output.contains("52000.00"));
        assert!(output.contains("3.25"));
        // Missing poverty renders as NaN, not a crash or blank.
        assert!(output.contains("NaN"));
    }

    #[test]
    fn test_poverty_summary_block() {
        let summary = SeriesSummary::compute([Some(10.0), Some(14.0)]);
        let output = format_poverty_summary(&summary);
        assert!(output.contains("Mean Poverty Rate"));
        assert!(output.contains("12.00"));
        assert!(output.contains("10.00"));
        assert!(output.contains("14.00"));
    }

    #[test]
    fn test_state_counts_table() {
        let counts = vec![("Texas".to_string(), 254), ("Iowa".to_string(), 99)];
        let output = format_state_counts(&counts);
        assert!(output.contains("Counties per State"));
        assert!(output.contains("Texas"));
        assert!(output.contains("254"));
    }

    #[test]
    fn test_empty_tables_still_render_headers() {
        let output = format_aggregate_table("Empty", &[]);
        assert!(output.contains("State"));
        let output = format_record_table("Empty", &[]);
        assert!(output.contains("County"));
    }
}
