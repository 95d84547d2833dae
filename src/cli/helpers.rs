//! Shared helper functions for CLI commands

/// Format a record id for display, truncating if too long.
///
/// Backend ids are 24-char hex strings; anything over 16 characters is
/// truncated to 13 chars with a "..." suffix for table columns.
pub fn format_short_id(id: &str) -> String {
    if id.len() > 16 {
        format!("{}...", &id[..13])
    } else {
        id.to_string()
    }
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Format a count with thousands separators (2847 -> "2,847")
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a sentiment score with explicit sign ("+0.71", "-0.68")
pub fn format_sentiment(score: f64) -> String {
    if score > 0.0 {
        format!("+{:.2}", score)
    } else {
        format!("{:.2}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_id() {
        assert_eq!(format_short_id("abc123"), "abc123");
        assert_eq!(
            format_short_id("64f1c2d3e4a5b6c7d8e9f0a1"),
            "64f1c2d3e4a5b..."
        );
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("with\nnewline"), "\"with\nnewline\"");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(892), "892");
        assert_eq!(format_count(2847), "2,847");
        assert_eq!(format_count(847200), "847,200");
    }

    #[test]
    fn test_format_sentiment_sign() {
        assert_eq!(format_sentiment(0.71), "+0.71");
        assert_eq!(format_sentiment(-0.68), "-0.68");
        assert_eq!(format_sentiment(0.0), "0.00");
    }
}
