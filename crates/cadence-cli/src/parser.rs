use anyhow::{anyhow, Result};
use cadence_core::date::LocalDate;
use chrono::NaiveTime;
use chrono_english::{parse_date_string, Dialect};

/// Parses a date typed by the user.
///
/// Anything shaped like a number-dash date goes through the strict ISO parser,
/// so `2025-02-30` is an error rather than a guess. Other input is read as
/// natural language relative to `today`.
pub fn parse_date_input(input: &str, today: LocalDate) -> Result<LocalDate> {
    let trimmed = input.trim();

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) && trimmed.contains('-') {
        return LocalDate::parse(trimmed).map_err(|e| anyhow!(e));
    }

    match trimmed.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today.add_days(1)),
        "yesterday" => return Ok(today.add_days(-1)),
        _ => {}
    }

    // Noon keeps relative day arithmetic clear of midnight edges.
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
    let anchor = today.as_naive().and_time(noon).and_utc();

    parse_date_string(trimmed, anchor, Dialect::Uk)
        .map(|parsed| LocalDate::from(parsed.date_naive()))
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", trimmed, e))
}

/// Parses an optional date, defaulting to `today`.
pub fn parse_optional_date(input: Option<&str>, today: LocalDate) -> Result<LocalDate> {
    input.map_or(Ok(today), |s| parse_date_input(s, today))
}
