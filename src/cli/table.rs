//! Table rendering for list commands and dashboard sections

use console::style;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Render a bordered table from headers and rows
pub fn render(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_uppercase()));
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::sharp()).to_string()
}

/// Summary line printed under a list table
pub fn summary(count: usize, total: Option<u64>, label: &str) -> String {
    match total {
        Some(total) if total as usize != count => format!(
            "{} of {} {}(s) shown.",
            style(count).cyan(),
            style(total).cyan(),
            label
        ),
        _ => format!("{} {}(s) found.", style(count).cyan(), label),
    }
}

/// A proportional bar for terminal charts, scaled against `max`
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_headers_and_cells() {
        let out = render(
            &["Name", "Volume"],
            vec![vec!["Packaging".to_string(), "2,847".to_string()]],
        );
        assert!(out.contains("NAME"));
        assert!(out.contains("VOLUME"));
        assert!(out.contains("Packaging"));
    }

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(50.0, 100.0, 10), "█████");
        assert_eq!(bar(100.0, 100.0, 10).chars().count(), 10);
        assert_eq!(bar(0.0, 100.0, 10), "");
        // Non-zero values always show at least one block
        assert_eq!(bar(1.0, 1000.0, 10), "█");
    }

    #[test]
    fn test_summary_with_backend_total() {
        let line = summary(3, Some(10), "risk");
        assert!(line.contains("3"));
        assert!(line.contains("10"));
    }
}
