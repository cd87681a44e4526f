//! Terminal rendering of the quality table

use anstyle::{AnsiColor, Color, Style};
use chrono::{DateTime, Local};
use std::path::Path;

fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

fn styled(text: &str, style: Style) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Green at 9.0 and above, yellow at 7.0, red below.
fn score_style(score: f64) -> Style {
    if score >= 9.0 {
        fg(AnsiColor::Green)
    } else if score >= 7.0 {
        fg(AnsiColor::Yellow)
    } else {
        fg(AnsiColor::Red)
    }
}

fn improvement_style(improvement: f64) -> Style {
    if improvement > 0.0 {
        fg(AnsiColor::Green)
    } else {
        fg(AnsiColor::Red)
    }
}

/// Renders the current score and the per-window improvement rows as a
/// bordered table. Windows without a value are omitted.
pub fn render_report(
    score: f64,
    improvements: &[(&'static str, Option<f64>)],
    timestamp: DateTime<Local>,
) -> String {
    let mut rows: Vec<(String, String, Style)> = vec![(
        "Current Score".to_string(),
        format!("{score:.2}/10"),
        score_style(score),
    )];
    for (name, improvement) in improvements {
        if let Some(value) = *improvement {
            rows.push((
                format!("Improvement ({name})"),
                format!("{value:+.2}"),
                improvement_style(value),
            ));
        }
    }

    // Column widths are computed from the unstyled text; the color
    // codes are wrapped around already-padded cells.
    let metric_width = rows
        .iter()
        .map(|(m, _, _)| m.len())
        .max()
        .unwrap_or(0)
        .max("Metric".len());
    let value_width = rows
        .iter()
        .map(|(_, v, _)| v.len())
        .max()
        .unwrap_or(0)
        .max("Value".len());

    let title_style = fg(AnsiColor::Blue).bold();
    let header_style = fg(AnsiColor::Magenta).bold();
    let metric_style = fg(AnsiColor::Cyan);

    let mut out = String::new();
    out.push_str(&styled(
        &format!("Lint Quality at {}", timestamp.format("%Y-%m-%d %H:%M:%S")),
        title_style,
    ));
    out.push('\n');
    out.push_str(&format!(
        "┌─{}─┬─{}─┐\n",
        "─".repeat(metric_width),
        "─".repeat(value_width)
    ));
    out.push_str(&format!(
        "│ {} │ {} │\n",
        styled(&format!("{:<metric_width$}", "Metric"), header_style),
        styled(&format!("{:>value_width$}", "Value"), header_style),
    ));
    out.push_str(&format!(
        "├─{}─┼─{}─┤\n",
        "─".repeat(metric_width),
        "─".repeat(value_width)
    ));
    for (metric, value, style) in &rows {
        out.push_str(&format!(
            "│ {} │ {} │\n",
            styled(&format!("{metric:<metric_width$}"), metric_style),
            styled(&format!("{value:>value_width$}"), *style),
        ));
    }
    out.push_str(&format!(
        "└─{}─┴─{}─┘\n",
        "─".repeat(metric_width),
        "─".repeat(value_width)
    ));
    out
}

pub fn startup_banner(log_path: &Path) -> String {
    format!(
        "Starting lint monitor. Logging to {}\nPress {} to stop...",
        styled(&log_path.display().to_string(), fg(AnsiColor::Cyan).bold()),
        styled("Ctrl+C", fg(AnsiColor::Red).bold()),
    )
}

pub fn stopped_message() -> String {
    styled("Monitoring stopped.", fg(AnsiColor::Red).bold())
}
