//! Date codec for `yyyy-MM-dd` calendar dates.

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;
use crate::error::{DomainError, DomainResult};

/// Parse a `yyyy-MM-dd` string into a calendar date.
pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::format(format!("'{}' is not a yyyy-MM-dd date ({})", value, e)))
}

/// Format a calendar date as `yyyy-MM-dd`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-03-09").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn test_format_pads_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(matches!(parse_date("09/03/2024"), Err(DomainError::Format(_))));
        assert!(matches!(parse_date("2024-13-01"), Err(DomainError::Format(_))));
        assert!(matches!(parse_date(""), Err(DomainError::Format(_))));
    }
}
