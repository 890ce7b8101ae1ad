//! Display formatting for finance numbers.
//!
//! The grid renders exposures and VaR as whole numbers with thousands
//! separators, negatives in accounting parentheses: `-1234567.8` becomes
//! `(1,234,568)`.

/// Formats a value as a finance-style whole number.
///
/// Rounds to the nearest integer, inserts thousands separators, and wraps
/// negative values in parentheses instead of a minus sign.
///
/// # Example
///
/// ```rust
/// use vargrid_core::format_finance_number;
///
/// assert_eq!(format_finance_number(1234567.8), "1,234,568");
/// assert_eq!(format_finance_number(-950.2), "(950)");
/// ```
#[must_use]
pub fn format_finance_number(value: f64) -> String {
    let rounded = value.round();
    let formatted = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("({})", formatted)
    } else {
        formatted
    }
}

/// Inserts comma separators into a non-negative integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(format_finance_number(0.0), "0");
        assert_eq!(format_finance_number(999.0), "999");
        assert_eq!(format_finance_number(1000.0), "1,000");
        assert_eq!(format_finance_number(1234567.8), "1,234,568");
    }

    #[test]
    fn test_negative_uses_parentheses() {
        assert_eq!(format_finance_number(-950.2), "(950)");
        assert_eq!(format_finance_number(-1234567.8), "(1,234,568)");
    }

    #[test]
    fn test_rounds_to_whole() {
        assert_eq!(format_finance_number(0.4), "0");
        assert_eq!(format_finance_number(0.5), "1");
        assert_eq!(format_finance_number(-0.6), "(1)");
    }

    #[test]
    fn test_rounds_negative_fraction_to_zero() {
        // -0.4 rounds to -0.0, which must not render as "(0)".
        assert_eq!(format_finance_number(-0.4), "0");
    }
}
