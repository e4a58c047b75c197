//! Report formatting utilities for terminal output

use crate::config::Settings;
use crate::models::Money;
use crate::services::PerformanceStatus;
use chrono::NaiveDate;
use std::fmt::Write;

/// Presentation preferences applied when rendering reports
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub currency_symbol: String,
    pub date_format: String,
    pub status_tolerance: f64,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for ReportStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
            status_tolerance: settings.status_tolerance,
        }
    }
}

impl ReportStyle {
    pub fn money(&self, amount: Money) -> String {
        amount.format_grouped(&self.currency_symbol)
    }

    /// Format a major-unit float as money, rounded to the cent
    pub fn amount(&self, value: f64) -> String {
        if value.is_finite() {
            self.money(Money::from_major(value))
        } else {
            "n/a".to_string()
        }
    }

    /// Format a date, falling back to ISO 8601 if the pattern is unusable
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if !pct.is_finite() {
        "n/a".to_string()
    } else if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a performance index, flagging placeholder values
pub fn format_index(index: f64, status: PerformanceStatus) -> String {
    match status {
        PerformanceStatus::NoData => format!("{:.2} (no data)", index),
        other => format!("{:.2} ({})", index, other),
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value.is_nan() || value.is_nan() || max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

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
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
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
        assert_eq!(format_percentage(-4.3), "-4.3%");
        assert_eq!(format_percentage(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_index() {
        assert_eq!(format_index(0.875, PerformanceStatus::Unfavorable), "0.88 (unfavorable)");
        assert_eq!(format_index(1.0, PerformanceStatus::NoData), "1.00 (no data)");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(10.0, 0.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Betón ready-mix", 7), "Betó...");
    }

    #[test]
    fn test_style_formatting() {
        let style = ReportStyle::default();
        assert_eq!(style.amount(-5_000_000.0), "-$5,000,000.00");
        assert_eq!(style.amount(f64::INFINITY), "n/a");
        assert_eq!(style.date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()), "2025-03-01");
    }

    #[test]
    fn test_bad_date_format_falls_back_to_iso() {
        let style = ReportStyle {
            date_format: "%Q".into(),
            ..ReportStyle::default()
        };
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(style.date(date), "2025-01-01");
    }
}
