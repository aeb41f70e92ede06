//! Formatting helpers for terminal reports

use crate::services::budget::RiskLevel;

/// Percentage with one decimal and an explicit plus sign, e.g. `+12.3%`
pub fn format_percent(pct: f64) -> String {
    let sign = if pct > 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, pct)
}

/// Percentage without a sign, e.g. `64.4%`
pub fn format_share(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// A change that may be undefined (zero baseline)
pub fn format_change(change: Option<f64>) -> String {
    change.map(format_percent).unwrap_or_else(|| "n/a".to_string())
}

/// Marker appended to utilization figures
pub fn risk_marker(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Ok => "",
        RiskLevel::Warn => " !",
        RiskLevel::Danger => " !!",
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

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345), "+12.3%");
        assert_eq!(format_percent(-20.83), "-20.8%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_share(64.4), "64.4%");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(26.666)), "+26.7%");
        assert_eq!(format_change(None), "n/a");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(150.0, 100.0, 2), "██");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_risk_marker() {
        assert_eq!(risk_marker(RiskLevel::Ok), "");
        assert_eq!(risk_marker(RiskLevel::Danger), " !!");
    }
}
