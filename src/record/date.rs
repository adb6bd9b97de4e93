//! Proposal date handling
//!
//! Records carry their authoring date in a fixed `YYYYMMDD` textual form
//! (e.g. `20250812`). That form is part of the on-disk contract: it prefixes
//! proposal directory names and suffixes payload artifact names, so it has to
//! survive a parse/serialize round-trip byte for byte.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::ConfigError;

/// Exactly eight ASCII digits, nothing else.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

/// An authoring date in the record's `YYYYMMDD` form.
///
/// Wraps a calendar date, so `20250230` is rejected just like `2025-08-12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalDate(NaiveDate);

impl ProposalDate {
    /// Parse the fixed eight-digit form.
    ///
    /// Anything that is not eight digits, or that does not name a real
    /// calendar date, is a [`ConfigError::MalformedDate`].
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        if !DATE_SHAPE.is_match(value) {
            return Err(ConfigError::MalformedDate {
                value: value.to_string(),
            });
        }
        let date = NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| {
            ConfigError::MalformedDate {
                value: value.to_string(),
            }
        })?;
        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The wire form, e.g. `"20250812"`.
    pub fn to_wire(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for ProposalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

impl Serialize for ProposalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

// =====================================================
// TESTS
// =====================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = ProposalDate::parse("20250812").unwrap();
        assert_eq!(date.to_wire(), "20250812");
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2025, 8, 12).unwrap());
    }

    #[test]
    fn test_rejects_dashed_date() {
        let err = ProposalDate::parse("2025-08-12").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedDate { .. }));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(ProposalDate::parse("2025081").is_err());
        assert!(ProposalDate::parse("202508120").is_err());
        assert!(ProposalDate::parse("").is_err());
    }

    #[test]
    fn test_rejects_impossible_calendar_date() {
        // Eight digits, but not a date.
        assert!(ProposalDate::parse("20250230").is_err());
        assert!(ProposalDate::parse("20251301").is_err());
    }

    #[test]
    fn test_serializes_to_wire_form() {
        let date = ProposalDate::parse("20250812").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"20250812\"");
    }
}
