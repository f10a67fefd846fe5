use std::collections::HashMap;
use std::path::Path;

use colored::Colorize;
use plotters::prelude::*;
use tracing::debug;

use crate::error::EconError;
use crate::models::CountyRecord;

// 12 x 6 inches at 200 DPI.
const CHART_WIDTH: u32 = 2400;
const CHART_HEIGHT: u32 = 1200;

fn chart_err(e: impl std::fmt::Display) -> EconError {
    EconError::Chart(e.to_string())
}

/// Per-state means of one numeric field, missing values dropped, sorted
/// ascending by mean. Ties keep first-appearance order.
pub(crate) fn state_means(
    records: &[CountyRecord],
    field: &str,
) -> Result<Vec<(String, f64)>, EconError> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();

    for record in records {
        let Some(value) = record.numeric_field(field)? else {
            continue;
        };
        let entry = sums.entry(record.state.as_str()).or_insert_with(|| {
            order.push(record.state.as_str());
            (0.0, 0)
        });
        entry.0 += value;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = order
        .into_iter()
        .map(|state| {
            let (sum, count) = sums[state];
            (state.to_string(), sum / count as f64)
        })
        .collect();

    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(means)
}

/// Render a vertical bar chart of per-state means for `field` and write
/// it to `path`, overwriting any existing file.
///
/// One bar per state, ascending by mean; state labels run vertically
/// along the x axis so fifty of them stay legible.
pub fn render_state_bar_chart(
    records: &[CountyRecord],
    field: &str,
    path: impl AsRef<Path>,
    title: &str,
    y_label: &str,
) -> Result<(), EconError> {
    let path = path.as_ref();
    let series = state_means(records, field)?;
    if series.is_empty() {
        // A field with no usable values is a data anomaly, not a fatal
        // condition; skip this chart and let the rest of the run finish.
        eprintln!(
            "{}: no non-missing {field} values, skipping {}",
            "Warning".yellow(),
            path.display()
        );
        return Ok(());
    }

    let y_max = series
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::MIN, f64::max)
        .max(0.0)
        * 1.05;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 44))
        .margin(24)
        .x_label_area_size(240)
        .y_label_area_size(110)
        .build_cartesian_2d((0..series.len()).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    let labels: Vec<String> = series.iter().map(|(state, _)| state.clone()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(series.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(
            ("sans-serif", 22)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc(y_label)
        .axis_desc_style(("sans-serif", 30))
        .label_style(("sans-serif", 22))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(series.iter().enumerate().map(|(i, (_, mean))| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), *mean),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    debug!(field, path = %path.display(), states = series.len(), "rendered bar chart");
    println!(
        "{} Bar plot saved to {}",
        "Saved:".green().bold(),
        path.display()
    );

    Ok(())
}
