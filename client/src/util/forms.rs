//! Field-level form validation shared by page validators.
//!
//! Every helper returns the message shown next to the form on failure, so a
//! page validator can chain them with `?` and render the error directly.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Trim `raw` and reject blank input with `message`.
///
/// # Errors
///
/// Returns `message` when the trimmed input is empty.
pub fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}

/// Minimal email shape check: something before and after a single `@`, and
/// a dot in the domain.
///
/// # Errors
///
/// Returns a message when the input does not look like an email address.
pub fn email(raw: &str) -> Result<String, &'static str> {
    const MESSAGE: &str = "Enter a valid email address.";
    let value = required(raw, MESSAGE)?;
    let Some((local, domain)) = value.split_once('@') else {
        return Err(MESSAGE);
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(MESSAGE);
    }
    Ok(value)
}

/// Parse a strictly positive, finite price.
///
/// # Errors
///
/// Returns a message when the input is not a number greater than zero.
pub fn price(raw: &str) -> Result<f64, &'static str> {
    const MESSAGE: &str = "Price must be a number greater than 0.";
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(MESSAGE),
    }
}

/// Parse a review rating in `1..=5`.
///
/// # Errors
///
/// Returns a message when the input is not a whole number from 1 to 5.
pub fn rating(raw: &str) -> Result<u8, &'static str> {
    match raw.trim().parse::<u8>() {
        Ok(value @ 1..=5) => Ok(value),
        _ => Err("Rating must be between 1 and 5."),
    }
}

/// Parse a positive whole count (room capacity, guest count).
///
/// # Errors
///
/// Returns `message` when the input is not a whole number of at least 1.
pub fn positive_count(raw: &str, message: &'static str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(message),
    }
}

/// Split a comma-separated list, dropping blanks.
pub fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}
