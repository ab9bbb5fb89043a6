//! Terminal charts for statistics.

use super::distribution::DistributionBucket;

/// Characters for sparkline rendering, lowest to highest.
const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const FULL_BLOCK: char = '█';
const LIGHT_SHADE: char = '░';

/// Render a horizontal bar chart of distribution buckets.
///
/// Each line is `label |bar value`, bars scaled to the largest bucket.
#[must_use]
pub fn render_bar_chart(buckets: &[DistributionBucket], label_width: usize, bar_width: usize) -> String {
    if buckets.is_empty() {
        return String::new();
    }

    let max_value = buckets.iter().map(|b| b.value).max().unwrap_or(0).max(1);

    buckets
        .iter()
        .map(|bucket| {
            let label: String = bucket.name.chars().take(label_width).collect();
            let bar_length = bucket.value * bar_width / max_value;
            format!(
                "{label:<label_width$} |{}{} {}",
                FULL_BLOCK.to_string().repeat(bar_length),
                " ".repeat(bar_width - bar_length),
                bucket.value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a sparkline for a series that may contain negative values.
///
/// Values are scaled between the series minimum and maximum; a flat series
/// renders at the lowest level.
#[must_use]
pub fn render_sparkline(values: &[i64]) -> String {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return String::new();
    };
    let span = (max - min).max(1);
    let top = SPARK_CHARS.len() as i64 - 1;

    values
        .iter()
        .map(|&v| {
            let level = (v - min) * top / span;
            SPARK_CHARS[usize::try_from(level).unwrap_or(0)]
        })
        .collect()
}

/// Render a progress bar for an integer percent.
#[must_use]
pub fn render_progress_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = percent * width / 100;

    format!(
        "[{}{}] {percent}%",
        FULL_BLOCK.to_string().repeat(filled),
        LIGHT_SHADE.to_string().repeat(width - filled)
    )
}
