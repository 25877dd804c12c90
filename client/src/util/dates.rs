//! Stay-date helpers for booking forms and booking lists.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::macros::format_description;

/// Parse the `YYYY-MM-DD` prefix of a date or date-time string.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Number of nights between check-in and check-out, if the range is valid.
pub fn nights_between(check_in: Date, check_out: Date) -> Option<u32> {
    let days = (check_out - check_in).whole_days();
    if days <= 0 {
        return None;
    }
    u32::try_from(days).ok()
}

/// Estimated stay cost for display next to the booking form.
pub fn estimate_total(price_per_night: f64, nights: u32) -> f64 {
    price_per_night * f64::from(nights)
}

/// Short `YYYY-MM-DD` label for a backend date, or the raw value if it does
/// not parse.
pub fn display_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |d| d.to_string())
}

/// Format a money amount with two decimals.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}
