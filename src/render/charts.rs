//! Plain-text charts.

use serde::Serialize;

use crate::pipelines::sentiment_analysis_pipeline::{ResultRow, SentimentCounts};

const BAR: char = '#';

/// Horizontal bar chart with the zero axis in the middle.
///
/// Each side is `half_width` characters wide and represents a magnitude of 1.0;
/// negative values grow to the left of the axis.
pub fn bar_chart(rows: &[ResultRow], half_width: usize) -> Vec<String> {
    let label_width = rows.iter().map(|r| r.metric.len()).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let len = bar_len(row.value.abs(), half_width);
            let (left, right) = if row.value < 0.0 {
                (bar(len), String::new())
            } else {
                (String::new(), bar(len))
            };
            format!(
                "{:<label_width$} {:>half_width$}|{:<half_width$} {:.4}",
                row.metric, left, right, row.value
            )
        })
        .collect()
}

/// One wedge of the token distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: &'static str,
    pub count: usize,
    pub percent: f64,
}

impl PieSlice {
    /// Percentage with one decimal, e.g. `33.3%`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// Slices for Positive, Negative and Neutral in that order.
///
/// Returns no slices when there are no tokens at all.
pub fn pie_slices(counts: &SentimentCounts) -> Vec<PieSlice> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    [
        ("Positive", counts.positive),
        ("Negative", counts.negative),
        ("Neutral", counts.neutral),
    ]
    .into_iter()
    .map(|(label, count)| PieSlice {
        label,
        count,
        percent: count as f64 / total as f64 * 100.0,
    })
    .collect()
}

/// Proportion chart: one line per slice with its share drawn as a bar of `width` at 100%.
pub fn pie_chart(counts: &SentimentCounts, width: usize) -> Vec<String> {
    pie_slices(counts)
        .iter()
        .map(|slice| {
            let len = bar_len(slice.percent / 100.0, width);
            format!(
                "{:<8} {:>4} {:>6} {}",
                slice.label,
                slice.count,
                slice.percent_label(),
                bar(len)
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

fn bar_len(fraction: f64, width: usize) -> usize {
    (fraction.min(1.0) * width as f64).round() as usize
}

fn bar(len: usize) -> String {
    std::iter::repeat(BAR).take(len).collect()
}
