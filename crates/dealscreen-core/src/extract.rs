//! Extraction utilities.
//!
//! Pure functions that pull numeric and categorical facts out of raw
//! analysis text with fixed patterns, compiled once. Every extractor is
//! total: missing or malformed data yields `None`, never an error, so
//! the criterion evaluators carry no failure paths.

use lazy_static::lazy_static;
use regex::Regex;

/// Placeholder used when no company name is found in the text.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

lazy_static! {
    /// Investment amount written as `$<n>m`, in millions.
    static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"(?i)\$(\d+(?:\.\d+)?)\s*m"
    ).unwrap();

    /// Week counts: a number immediately qualifying "week" (any suffix).
    static ref WEEKS_PATTERN: Regex = Regex::new(
        r"(?i)(\d+)\s*week"
    ).unwrap();

    /// IRR figures: "irr" followed by a percentage on the same line.
    static ref IRR_PATTERN: Regex = Regex::new(
        r"(?i)irr.*?(\d+(?:\.\d+)?)\s*%"
    ).unwrap();

    /// Any percentage figure.
    static ref PERCENT_PATTERN: Regex = Regex::new(
        r"(\d+(?:\.\d+)?)\s*%"
    ).unwrap();

    /// "Company name:" header, capturing the rest of the line.
    static ref COMPANY_PATTERN: Regex = Regex::new(
        r"(?i)company name[:\s]+([^\n\r.]+)"
    ).unwrap();
}

/// First investment amount mentioned, in millions of currency units.
pub fn investment_amount(text: &str) -> Option<f64> {
    AMOUNT_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// First timeline length mentioned, in weeks.
pub fn timeline_weeks(text: &str) -> Option<u32> {
    WEEKS_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// First IRR percentage mentioned.
pub fn irr_percentage(text: &str) -> Option<f64> {
    IRR_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// First dividend-style yield percentage.
///
/// Scans every `<n>%` occurrence and returns the first value strictly
/// greater than 1. Values of 1% or below are skipped as footnote-marker
/// noise; the threshold is part of the screening contract and must not
/// be tuned without changing downstream outcomes.
pub fn yield_percentage(text: &str) -> Option<f64> {
    PERCENT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .find(|value| *value > 1.0)
}

/// Company name following a "Company name:" header, up to the end of
/// the line or the first period.
pub fn company_name(text: &str) -> Option<String> {
    COMPANY_PATTERN
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Format an extracted amount (in millions) for explanation strings.
pub fn format_currency(amount: f64) -> String {
    if amount >= 1.0 {
        format!("${amount}m")
    } else {
        format!("${}k", amount * 1000.0)
    }
}

/// Format an extracted percentage for explanation strings.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage}%")
}
