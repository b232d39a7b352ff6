//! # Input Parsing
//!
//! Helpers for collectors that turn raw text into the validated values the
//! model expects. The model never parses anything itself; a collector calls
//! these, and on error asks for the field again.
//!
//! ## Example
//!
//! ```rust
//! use floor_core::input::{parse_area, parse_non_negative};
//!
//! assert_eq!(parse_area("room_area", "20 x 25").unwrap().area(), 500.0);
//! assert!(parse_non_negative("pickup_fee", "-5").is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::units::{Feet, SquareFeet};

/// How an area was entered: as a total, or as length × width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AreaEntry {
    Total { area: SquareFeet },
    Dimensions { length: Feet, width: Feet },
}

impl AreaEntry {
    /// Area in square feet.
    pub fn area(&self) -> f64 {
        match self {
            AreaEntry::Total { area } => area.value(),
            AreaEntry::Dimensions { length, width } => {
                SquareFeet::from_dimensions(*length, *width).value()
            }
        }
    }
}

const DIMENSION_SEPARATORS: [char; 4] = ['x', 'X', '*', '×'];

/// Parse a finite, non-negative real number.
pub fn parse_non_negative(field: &str, text: &str) -> EstimateResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::missing_field(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| EstimateError::invalid_input(field, trimmed, "Please enter a number"))?;
    if !value.is_finite() {
        return Err(EstimateError::invalid_input(field, trimmed, "Number must be finite"));
    }
    if value < 0.0 {
        return Err(EstimateError::invalid_input(field, trimmed, "Cannot be negative"));
    }
    // "-0" parses to -0.0
    Ok(value + 0.0)
}

/// Parse a whole number of days.
pub fn parse_days(field: &str, text: &str) -> EstimateResult<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::missing_field(field));
    }
    trimmed
        .parse()
        .map_err(|_| EstimateError::invalid_input(field, trimmed, "Please enter a whole number"))
}

/// Parse an area as either `"500"` or `"20x25"`.
pub fn parse_area(field: &str, text: &str) -> EstimateResult<AreaEntry> {
    let trimmed = text.trim();
    match trimmed.split_once(&DIMENSION_SEPARATORS[..]) {
        Some((length, width)) => {
            let length = parse_non_negative(field, length)?;
            let width = parse_non_negative(field, width)?;
            if !(length * width).is_finite() {
                return Err(EstimateError::invalid_input(field, trimmed, "Area is too large"));
            }
            Ok(AreaEntry::Dimensions {
                length: Feet(length),
                width: Feet(width),
            })
        }
        None => Ok(AreaEntry::Total {
            area: SquareFeet(parse_non_negative(field, trimmed)?),
        }),
    }
}

/// Trimmed, non-empty name.
pub fn parse_name(field: &str, text: &str) -> EstimateResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::missing_field(field));
    }
    Ok(trimmed.to_string())
}

/// `yes`/`y` or `no`/`n`, any case. Anything else is `None`.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("rate", " 25.50 ").unwrap(), 25.5);
        assert_eq!(parse_non_negative("rate", "0").unwrap(), 0.0);
        assert_eq!(
            parse_non_negative("rate", "abc").unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert!(parse_non_negative("rate", "-1").is_err());
        assert!(parse_non_negative("rate", "inf").is_err());
        assert!(parse_non_negative("rate", "NaN").is_err());
        assert_eq!(
            parse_non_negative("rate", "  "),
            Err(EstimateError::missing_field("rate"))
        );
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("days", "5").unwrap(), 5);
        assert!(parse_days("days", "2.5").is_err());
        assert!(parse_days("days", "-1").is_err());
    }

    #[test]
    fn test_parse_area_total() {
        let entry = parse_area("area", "450.5").unwrap();
        assert_eq!(entry, AreaEntry::Total { area: SquareFeet(450.5) });
        assert_eq!(entry.area(), 450.5);
    }

    #[test]
    fn test_parse_area_dimensions() {
        for text in ["20x25", "20 x 25", "20*25", "20 × 25", "20X25"] {
            let entry = parse_area("area", text).unwrap();
            assert_eq!(entry.area(), 500.0, "input {text:?}");
        }
        assert!(parse_area("area", "20x").is_err());
        assert!(parse_area("area", "ax5").is_err());
    }

    #[test]
    fn test_parse_area_rejects_overflowing_dimensions() {
        let err = parse_area("room_area", "1e200x1e200").unwrap_err();
        assert_eq!(
            err,
            EstimateError::invalid_input("room_area", "1e200x1e200", "Area is too large")
        );
        assert!(parse_area("room_area", "1e150 x 1e150").unwrap().area().is_finite());
    }

    #[test]
    fn test_negative_zero_normalized() {
        let value = parse_non_negative("rate", "-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
        assert_eq!(serde_json::to_string(&value).unwrap(), "0.0");
    }

    #[test]
    fn test_area_entry_serialization() {
        let entry = parse_area("area", "12x15").unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"method":"dimensions","length":12.0,"width":15.0}"#);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("room_name", "  Den ").unwrap(), "Den");
        assert!(parse_name("room_name", "   ").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" yes "), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }
}
