use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use county_econ_analyzer::{
    analysis::{aggregate_by_state, rank_aggregates, state_counts, SeriesSummary, SortOrder},
    load_records,
    visualization::{
        print_aggregate_table, print_poverty_summary, print_ranked_records, print_state_counts,
        render_state_bar_chart,
    },
    LoadOptions,
};

const DC: &str = "District of Columbia";

#[derive(Parser)]
#[command(
    name = "econ-analyzer",
    about = "County Economic Status Analyzer - state rankings, county tables, and bar charts",
    version,
    author
)]
struct Cli {
    /// Path to the county economic status CSV
    #[arg(short, long, default_value = "county_economic_status_2024.csv")]
    input: PathBuf,

    /// Directory for the chart image files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    println!(
        "\n{}",
        format!("County Economic Status Analysis: {}", cli.input.display())
            .bold()
            .cyan()
    );

    let records = load_records(&cli.input, &LoadOptions::default())?;
    println!("  Loaded {} county records", records.len());

    print_poverty_summary(&SeriesSummary::compute(records.iter().map(|r| r.poverty)));
    print_state_counts(&state_counts(&records));

    let aggregates = aggregate_by_state(&records);

    let top = rank_aggregates(&aggregates, "counties", SortOrder::Descending, 10, None)?;
    print_aggregate_table("Top 10 States by Number of Counties", &top);

    let bottom = rank_aggregates(&aggregates, "counties", SortOrder::Ascending, 10, Some(DC))?;
    print_aggregate_table(
        "Bottom 10 States by Number of Counties (excluding D.C.)",
        &bottom,
    );

    let poorest = rank_aggregates(&aggregates, "mean_poverty", SortOrder::Descending, 10, Some(DC))?;
    print_aggregate_table(
        "Top 10 States by Average Poverty Rate (excluding D.C.)",
        &poorest,
    );

    print_ranked_records(&records, "Poverty", 10)?;
    print_ranked_records(&records, "Income2021", 5)?;
    print_ranked_records(&records, "UnempRate", 3)?;

    if !cli.no_charts {
        render_state_bar_chart(
            &records,
            "Poverty",
            cli.out_dir.join("by_state_poverty.png"),
            "States by Poverty Rate",
            "Poverty Rate (%)",
        )?;
        render_state_bar_chart(
            &records,
            "UnempRate",
            cli.out_dir.join("by_state_unemployment.png"),
            "States by Avg Unemployment",
            "Unemployment Rate (%)",
        )?;
        render_state_bar_chart(
            &records,
            "Income2021",
            cli.out_dir.join("by_state_income.png"),
            "States by Per-Capita Income (2021)",
            "Income (USD)",
        )?;
    }

    Ok(())
}
