use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regex for integer field parsing
static LEADING_INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?)(\d+)").unwrap());

/// Input parsing error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotANumber(String),
    NotFinite,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty => write!(f, "Value cannot be empty"),
            InputError::NotANumber(raw) => write!(f, "'{}' is not a valid number", raw),
            InputError::NotFinite => write!(f, "Value must be a finite number"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a decimal control value such as "5.2".
///
/// Rejects anything that does not parse to a finite number, so callers never
/// have to deal with NaN or infinities.
pub fn parse_decimal(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotFinite);
    }
    Ok(value)
}

/// Parse the leading integer of `input`, ignoring anything after the digits.
///
/// Mirrors how browsers read integers out of number fields: "12kcal" is 12,
/// "3.7" is 3, "-4" is -4 and "abc" is an error. Digit runs too long for an
/// `i64` saturate.
pub fn parse_leading_int(input: &str) -> Result<i64, InputError> {
    let captures = LEADING_INT_REGEX
        .captures(input)
        .ok_or_else(|| InputError::NotANumber(input.trim().to_string()))?;
    let negative = &captures[1] == "-";
    let magnitude = captures[2].parse::<i64>().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Format whole seconds as a zero-padded "MM:SS" clock.
pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Readout used beside the decimal sliders.
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decimal_rejects_garbage_and_non_finite() {
        assert_eq!(parse_decimal(" 5.2 "), Ok(5.2));
        assert_eq!(parse_decimal(""), Err(InputError::Empty));
        assert_eq!(
            parse_decimal("fast"),
            Err(InputError::NotANumber("fast".to_string()))
        );
        assert_eq!(parse_decimal("NaN"), Err(InputError::NotFinite));
        assert_eq!(parse_decimal("inf"), Err(InputError::NotFinite));
    }

    #[test]
    fn leading_int_follows_browser_rules() {
        assert_eq!(parse_leading_int("235"), Ok(235));
        assert_eq!(parse_leading_int("  12kcal"), Ok(12));
        assert_eq!(parse_leading_int("3.7"), Ok(3));
        assert_eq!(parse_leading_int("-4"), Ok(-4));
        assert_eq!(parse_leading_int("+9"), Ok(9));
        assert!(parse_leading_int("abc").is_err());
        assert!(parse_leading_int("").is_err());
        assert_eq!(parse_leading_int("99999999999999999999999"), Ok(i64::MAX));
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(2565), "42:45");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn one_decimal_readout() {
        assert_eq!(format_one_decimal(5.0), "5.0");
        assert_eq!(format_one_decimal(6.3), "6.3");
    }
}
