//! Report formatting utilities for terminal output

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One block character per value, scaled to the largest
///
/// Returns something like `▁▂▃▅▇▅▃▂▁`.
pub fn sparkline(values: &[u64]) -> String {
    const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return TICKS[0].to_string().repeat(values.len());
    }

    values
        .iter()
        .map(|&v| {
            let index = ((v as f64 / max as f64) * (TICKS.len() - 1) as f64).round() as usize;
            TICKS[index.min(TICKS.len() - 1)]
        })
        .collect()
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_sparkline() {
        assert_eq!(sparkline(&[0, 7, 14]), "▁▅█");
        assert_eq!(sparkline(&[0, 0]), "▁▁");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("abc", 7), "  abc");
    }
}
