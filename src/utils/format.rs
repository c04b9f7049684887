use chrono::DateTime;

/// Parses a user-entered amount. Returns `None` for anything that is not a
/// finite, strictly positive number, in which case no request may be issued.
pub fn parse_amount(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Formats an exchange rate to the six decimal places the tables display.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.6}")
}

/// Formats a converted amount to four decimal places.
pub fn format_converted(amount: f64) -> String {
    format!("{amount:.4}")
}

/// Renders epoch seconds as a human-readable UTC timestamp.
pub fn format_epoch(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("epoch {timestamp}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_positive_decimals() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 1 "), Some(1.0));
    }

    #[test]
    fn test_parse_amount_rejects_invalid_input() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_format_rate_six_decimals() {
        assert_eq!(format_rate(1.08), "1.080000");
        assert_eq!(format_rate(52.3), "52.300000");
    }

    #[test]
    fn test_format_epoch() {
        assert_eq!(format_epoch(1700000000), "2023-11-14 22:13:20 UTC");
    }
}
