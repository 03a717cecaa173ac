//! Chart and currency formatting. All money goes through one configured ISO
//! currency instead of mixing locales per screen.

use rust_decimal::Decimal;
use rusty_money::{iso, FormattableCurrency, Money};

use crate::error::{ComputeError, Result};

/// Formats amounts in a single currency.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormatter {
    currency: &'static iso::Currency,
}

impl CurrencyFormatter {
    /// Looks up an ISO 4217 code such as `THB` or `USD`.
    pub fn new(code: &str) -> Result<Self> {
        iso::find(&code.to_uppercase())
            .map(|currency| Self { currency })
            .ok_or_else(|| ComputeError::Currency(code.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.currency.code()
    }

    /// Full amount with symbol and minor units, e.g. `฿1,750.00`.
    pub fn format(&self, amount: Decimal) -> String {
        Money::from_decimal(amount, self.currency).to_string()
    }

    /// Axis tick: the formatted amount with its minor units cut off.
    pub fn tick(&self, amount: Decimal) -> String {
        strip_minor_units(&self.format(amount), self.currency.exponent())
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self { currency: iso::THB }
    }
}

/// Drops the last `exponent` digits and the separator in front of them.
fn strip_minor_units(formatted: &str, exponent: u32) -> String {
    if exponent == 0 {
        return formatted.to_string();
    }

    let Some(last_digit) = formatted.rfind(|c: char| c.is_ascii_digit()) else {
        return formatted.to_string();
    };
    let digits_end = last_digit + 1;
    let fraction_start = digits_end.saturating_sub(exponent as usize);
    let fraction = &formatted[fraction_start..digits_end];
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return formatted.to_string();
    }

    let head = &formatted[..fraction_start];
    match head.char_indices().next_back() {
        Some((separator_at, separator)) if !separator.is_ascii_digit() => {
            format!("{}{}", &head[..separator_at], &formatted[digits_end..])
        }
        _ => formatted.to_string(),
    }
}

/// Occupancy axis tick, `85%`.
pub fn percent_tick(value: f64) -> String {
    format!("{value}%")
}

/// Translation key for a month abbreviation tick, `month.Jan`.
pub fn month_key(month: &str) -> String {
    format!("month.{month}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_currency() {
        assert!(matches!(
            CurrencyFormatter::new("XYZ1"),
            Err(ComputeError::Currency(_))
        ));
        assert_eq!(CurrencyFormatter::new("usd").unwrap().code(), "USD");
    }

    #[test]
    fn test_format_groups_thousands() {
        let thb = CurrencyFormatter::default();
        let formatted = thb.format(Decimal::new(44500, 0));
        assert!(formatted.contains("44,500"), "{formatted}");
    }

    #[test]
    fn test_tick_drops_minor_units() {
        let usd = CurrencyFormatter::new("USD").unwrap();
        let full = usd.format(Decimal::new(4250050, 2));
        let tick = usd.tick(Decimal::new(4250050, 2));
        assert!(full.contains("42,500.50"), "{full}");
        assert!(tick.contains("42,500"), "{tick}");
        assert!(!tick.contains('.'), "{tick}");
    }

    #[test]
    fn test_strip_minor_units() {
        assert_eq!(strip_minor_units("$1,000.00", 2), "$1,000");
        assert_eq!(strip_minor_units("1.000,00 €", 2), "1.000 €");
        assert_eq!(strip_minor_units("¥1,000", 0), "¥1,000");
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(percent_tick(85.0), "85%");
        assert_eq!(month_key("Jan"), "month.Jan");
    }
}
