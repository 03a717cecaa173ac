use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a tariff typed into the settings form.
///
/// Reads the longest leading number the way a browser `parseFloat` would
/// (`"12.5"`, `"12abc"` and `" 7"` all parse), and maps everything else to
/// zero: empty or non-numeric input, NaN-like text, and negative numbers.
pub fn parse_tariff(raw: &str) -> Decimal {
    let prefix = numeric_prefix(raw.trim_start());
    if prefix.is_empty() || prefix.starts_with('-') {
        return Decimal::ZERO;
    }

    let unsigned = prefix.trim_start_matches('+');
    let literal = if unsigned.starts_with('.') {
        format!("0{unsigned}")
    } else {
        unsigned.to_string()
    };

    let parsed = if literal.contains(['e', 'E']) {
        Decimal::from_scientific(&literal).ok()
    } else {
        Decimal::from_str(&literal).ok()
    };

    match parsed {
        Some(value) if value.is_sign_positive() => value.normalize(),
        _ => Decimal::ZERO,
    }
}

/// `[+-]? digits [. digits] [(e|E) [+-]? digits]`, requiring at least one
/// mantissa digit. The exponent is only taken when it has digits.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    // "5." is a valid float but not a valid Decimal literal
    s[..end].trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_tariff("12.5"), Decimal::new(125, 1));
        assert_eq!(parse_tariff("100"), Decimal::new(100, 0));
        assert_eq!(parse_tariff("0.75"), Decimal::new(75, 2));
        assert_eq!(parse_tariff(".5"), Decimal::new(5, 1));
        assert_eq!(parse_tariff("5."), Decimal::new(5, 0));
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_tariff("abc"), Decimal::ZERO);
        assert_eq!(parse_tariff(""), Decimal::ZERO);
        assert_eq!(parse_tariff("   "), Decimal::ZERO);
        assert_eq!(parse_tariff("."), Decimal::ZERO);
        assert_eq!(parse_tariff("-"), Decimal::ZERO);
        assert_eq!(parse_tariff("NaN"), Decimal::ZERO);
    }

    #[test]
    fn test_leading_number_wins() {
        assert_eq!(parse_tariff("12abc"), Decimal::new(12, 0));
        assert_eq!(parse_tariff("  7 baht"), Decimal::new(7, 0));
        assert_eq!(parse_tariff("3.5.1"), Decimal::new(35, 1));
        assert_eq!(parse_tariff("1e3"), Decimal::new(1000, 0));
        assert_eq!(parse_tariff("2e"), Decimal::new(2, 0));
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(parse_tariff("-5"), Decimal::ZERO);
        assert_eq!(parse_tariff("-0.1"), Decimal::ZERO);
        assert_eq!(parse_tariff("+4"), Decimal::new(4, 0));
    }
}
