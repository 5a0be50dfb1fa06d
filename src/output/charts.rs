//! Static chart artifacts for the final dataset
//!
//! Two PNG images per run: a bar chart of the top 10 affiliations by record
//! count and a pie chart of accreditation-tier proportions. Both tolerate
//! sparse data - fewer than 10 distinct affiliations, a single tier, or an
//! entirely empty dataset still produce valid images.

use crate::crawler::JournalRecord;
use crate::HarvestError;
use plotters::prelude::*;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

const BAR_CHART_SIZE: (u32, u32) = (1200, 600);
const PIE_CHART_SIZE: (u32, u32) = (800, 800);

const PIE_COLORS: [RGBColor; 8] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(158, 157, 36),
];

/// Renders a horizontal bar chart of the top 10 affiliations by count
pub fn render_affiliation_chart(
    path: &Path,
    records: &[JournalRecord],
) -> Result<(), HarvestError> {
    let mut ranked = ranked_counts(records, |r| r.affiliation.as_str());
    ranked.truncate(10);

    let root = BitMapBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let max_count = ranked.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as i32;
    let rows = ranked.len().max(1) as i32;
    let labels: Vec<String> = ranked
        .iter()
        .map(|(name, _)| truncate_label(name, 40))
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Top 10 Affiliations by Number of Journals",
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(320)
        .build_cartesian_2d(0i32..max_count + 1, 0i32..rows)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Number of Journals")
        .y_labels(rows as usize)
        .y_label_formatter(&|idx: &i32| {
            labels
                .get(*idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(ranked.iter().enumerate().map(|(row, (_, count))| {
            let row = row as i32;
            Rectangle::new(
                [(0, row), (*count as i32, row + 1)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

/// Renders a pie chart of accreditation-tier proportions
pub fn render_accreditation_chart(
    path: &Path,
    records: &[JournalRecord],
) -> Result<(), HarvestError> {
    let ranked = ranked_counts(records, |r| r.accreditation.as_str());

    let root = BitMapBackend::new(path, PIE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;
    let root = root
        .titled("Distribution of Journal Accreditations", ("sans-serif", 30))
        .map_err(chart_error)?;

    if ranked.is_empty() {
        root.draw(&Text::new(
            "(no data)",
            (
                PIE_CHART_SIZE.0 as i32 / 2 - 60,
                PIE_CHART_SIZE.1 as i32 / 2,
            ),
            ("sans-serif", 24).into_font(),
        ))
        .map_err(chart_error)?;
        root.present().map_err(chart_error)?;
        return Ok(());
    }

    let total: usize = ranked.iter().map(|(_, c)| *c).sum();
    let sizes: Vec<f64> = ranked.iter().map(|(_, c)| *c as f64).collect();
    let labels: Vec<String> = ranked
        .iter()
        .map(|(name, count)| {
            format!(
                "{} ({:.1}%)",
                truncate_label(name, 30),
                *count as f64 * 100.0 / total as f64
            )
        })
        .collect();
    let colors: Vec<RGBColor> = (0..ranked.len())
        .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
        .collect();

    let center = (PIE_CHART_SIZE.0 as i32 / 2, PIE_CHART_SIZE.1 as i32 / 2);
    let radius = 280.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 18).into_font());

    root.draw(&pie).map_err(chart_error)?;
    root.present().map_err(chart_error)?;
    Ok(())
}

/// Counts occurrences of a field, most frequent first, ties by label
fn ranked_counts<'a>(
    records: &'a [JournalRecord],
    field: impl Fn(&'a JournalRecord) -> &'a str,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(field(record)).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let mut truncated: String = label.chars().take(max_chars - 1).collect();
        truncated.push('…');
        truncated
    }
}

fn chart_error<E: Display>(error: E) -> HarvestError {
    HarvestError::Chart(error.to_string())
}
