//! Contract month tokens.
//!
//! Futures and physical positions carry a delivery/expiry month; equity-style
//! positions carry a sentinel date instead, which must render as an empty
//! label everywhere.

use crate::error::{CoreError, CoreResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The sentinel date the backend uses for positions with no delivery period.
pub const NOT_APPLICABLE_SENTINEL: &str = "2006-06-01";

/// CME futures month codes, January through December.
const MONTH_CODES: [char; 12] = ['F', 'G', 'H', 'J', 'K', 'M', 'N', 'Q', 'U', 'V', 'X', 'Z'];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A delivery/expiry period token for a position row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractMonth {
    /// A concrete delivery month.
    Month(NaiveDate),
    /// No delivery period applies (e.g. an equity position).
    NotApplicable,
}

impl ContractMonth {
    /// Parses a contract month token.
    ///
    /// Accepts ISO `YYYY-MM-DD` dates. The empty string and the backend's
    /// equity sentinel date both parse to [`ContractMonth::NotApplicable`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidContractMonth`] if the input is neither
    /// empty, the sentinel, nor a valid ISO date.
    pub fn parse(value: &str) -> CoreResult<Self> {
        let value = value.trim();
        if value.is_empty() || value == NOT_APPLICABLE_SENTINEL {
            return Ok(Self::NotApplicable);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self::Month)
            .map_err(|_| CoreError::invalid_contract_month(value))
    }

    /// Returns the display label, e.g. `"Jun '25"`.
    ///
    /// [`ContractMonth::NotApplicable`] renders as the empty string, so
    /// grouping by contract month puts all equity-style rows in one
    /// unlabeled bucket.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::NotApplicable => String::new(),
            Self::Month(date) => {
                let month = MONTH_NAMES[date.month0() as usize];
                format!("{} '{:02}", month, date.year() % 100)
            }
        }
    }

    /// Returns the futures code label, e.g. `"M25"` for June 2025.
    ///
    /// [`ContractMonth::NotApplicable`] renders as the empty string.
    #[must_use]
    pub fn futures_code(&self) -> String {
        match self {
            Self::NotApplicable => String::new(),
            Self::Month(date) => {
                let code = MONTH_CODES[date.month0() as usize];
                format!("{}{:02}", code, date.year() % 100)
            }
        }
    }

    /// Returns true if no delivery period applies.
    #[must_use]
    pub const fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl Default for ContractMonth {
    fn default() -> Self {
        Self::NotApplicable
    }
}

impl fmt::Display for ContractMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let cm = ContractMonth::parse("2025-06-01").unwrap();
        assert_eq!(cm, ContractMonth::Month(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
    }

    #[test]
    fn test_parse_sentinel_is_not_applicable() {
        assert_eq!(
            ContractMonth::parse("2006-06-01").unwrap(),
            ContractMonth::NotApplicable
        );
        assert_eq!(ContractMonth::parse("").unwrap(), ContractMonth::NotApplicable);
    }

    #[test]
    fn test_parse_invalid() {
        let err = ContractMonth::parse("June 2025").unwrap_err();
        assert_eq!(err, CoreError::invalid_contract_month("June 2025"));
    }

    #[test]
    fn test_label() {
        let cm = ContractMonth::parse("2025-06-01").unwrap();
        assert_eq!(cm.label(), "Jun '25");
        assert_eq!(ContractMonth::NotApplicable.label(), "");
    }

    #[test]
    fn test_label_single_digit_year() {
        let cm = ContractMonth::parse("2009-12-01").unwrap();
        assert_eq!(cm.label(), "Dec '09");
    }

    #[test]
    fn test_futures_code() {
        let cm = ContractMonth::parse("2025-06-01").unwrap();
        assert_eq!(cm.futures_code(), "M25");
        let cm = ContractMonth::parse("2024-01-01").unwrap();
        assert_eq!(cm.futures_code(), "F24");
        assert_eq!(ContractMonth::NotApplicable.futures_code(), "");
    }
}
