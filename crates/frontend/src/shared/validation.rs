//! Field validation primitives shared by every form.
//!
//! Errors are collected into a [`ValidationErrors`] map keyed by field key
//! (plain names like `"name"` or entry-scoped keys like `"cabinet_3_height"`)
//! and rendered inline under the matching field.

use std::collections::BTreeMap;

/// Field key → human-readable message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Drop every entry whose key starts with `prefix`
    pub fn remove_prefixed(&mut self, prefix: &str) {
        self.0.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

// ============================================================================
// Parsers (shared by validation and DTO conversion)
// ============================================================================

pub fn parse_required(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Decimal strictly greater than zero (dimensions, prices)
pub fn parse_positive_number(value: &str, label: &str) -> Result<f64, String> {
    let trimmed = parse_required(value, label)?;
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(format!("{} must be a number greater than 0", label)),
    }
}

/// Whole number strictly greater than zero (quantities)
pub fn parse_positive_integer(value: &str, label: &str) -> Result<u32, String> {
    let trimmed = parse_required(value, label)?;
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a whole number greater than 0", label)),
    }
}

/// Whole number, zero allowed (spare quantities)
pub fn parse_non_negative_integer(value: &str, label: &str) -> Result<u32, String> {
    let trimmed = parse_required(value, label)?;
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number (0 or more)", label))
}

pub fn parse_email(value: &str, label: &str) -> Result<String, String> {
    let trimmed = parse_required(value, label)?;
    let valid = trimmed
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        })
        .unwrap_or(false);
    if valid && !trimmed.contains(char::is_whitespace) {
        Ok(trimmed)
    } else {
        Err(format!("{} must be a valid email address", label))
    }
}

pub fn parse_min_length(value: &str, label: &str, min: usize) -> Result<String, String> {
    if value.chars().count() < min {
        Err(format!("{} must contain at least {} characters", label, min))
    } else {
        Ok(value.to_string())
    }
}

// ============================================================================
// Checkers (record the first failure under `key`)
// ============================================================================

/// Run `parse` and record its error under `key`; returns the parsed value
pub fn check<T>(
    errors: &mut ValidationErrors,
    key: impl Into<String>,
    parsed: Result<T, String>,
) -> Option<T> {
    match parsed {
        Ok(v) => Some(v),
        Err(message) => {
            errors.insert(key, message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(parse_required("   ", "Name").is_err());
        assert_eq!(parse_required(" Lobby ", "Name").unwrap(), "Lobby");
    }

    #[test]
    fn positive_number_accepts_decimal_comma() {
        assert_eq!(parse_positive_number("2,5", "Height").unwrap(), 2.5);
        assert!(parse_positive_number("0", "Height").is_err());
        assert!(parse_positive_number("-1", "Height").is_err());
        assert!(parse_positive_number("abc", "Height").is_err());
        assert!(parse_positive_number("NaN", "Height").is_err());
    }

    #[test]
    fn integers_distinguish_zero() {
        assert!(parse_positive_integer("0", "Qty").is_err());
        assert!(parse_positive_integer("1.5", "Qty").is_err());
        assert_eq!(parse_positive_integer("3", "Qty").unwrap(), 3);
        assert_eq!(parse_non_negative_integer("0", "Spare").unwrap(), 0);
        assert!(parse_non_negative_integer("", "Spare").is_err());
    }

    #[test]
    fn email_needs_local_part_and_dotted_domain() {
        assert!(parse_email("ops@led.example", "Email").is_ok());
        assert!(parse_email("ops@localhost", "Email").is_err());
        assert!(parse_email("@led.example", "Email").is_err());
        assert!(parse_email("ops @led.example", "Email").is_err());
    }

    #[test]
    fn remove_prefixed_only_touches_matching_keys() {
        let mut errors = ValidationErrors::new();
        errors.insert("cabinet_1_height", "x");
        errors.insert("cabinet_12_height", "y");
        errors.insert("name", "z");
        errors.remove_prefixed("cabinet_1_");
        assert!(!errors.contains("cabinet_1_height"));
        assert!(errors.contains("cabinet_12_height"));
        assert!(errors.contains("name"));
    }

    #[test]
    fn check_records_message_under_key() {
        let mut errors = ValidationErrors::new();
        let value = check(&mut errors, "qty", parse_positive_integer("x", "Quantity"));
        assert!(value.is_none());
        assert_eq!(
            errors.get("qty"),
            Some("Quantity must be a whole number greater than 0")
        );
    }
}
