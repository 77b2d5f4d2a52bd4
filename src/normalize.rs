//! Text and number normalization for raw extracted strings.
//!
//! Best effort: the output of the amount helpers is still a string and is
//! not guaranteed to parse as a number (e.g. markup containing two dots).

use regex::Regex;
use std::sync::LazyLock;

static NON_AMOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.]").unwrap());
static PRICE_MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,₹$€£]").unwrap());

/// Keep only digits and decimal points.
pub fn digits_and_dot(raw: &str) -> String {
    NON_AMOUNT.replace_all(raw, "").into_owned()
}

/// Strip thousands-separator commas and common currency symbols.
pub fn strip_price_markup(raw: &str) -> String {
    PRICE_MARKUP.replace_all(raw, "").trim().to_string()
}

/// Discount percentage between a pre-discount and a current price, rounded
/// to two decimals. Returns 0.0 when either string fails to parse or the
/// margin is not positive.
pub fn discount_percent(original: &str, price: &str) -> f64 {
    let (Ok(original), Ok(price)) = (original.parse::<f64>(), price.parse::<f64>()) else {
        return 0.0;
    };
    if original <= price {
        return 0.0;
    }
    let discount = (original - price) / original * 100.0;
    (discount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_dot_strips_symbols_and_separators() {
        assert_eq!(digits_and_dot("₹2,999.00"), "2999.00");
        assert_eq!(digits_and_dot("  $1,234  "), "1234");
        assert_eq!(digits_and_dot("no digits"), "");
    }

    #[test]
    fn digits_and_dot_keeps_every_dot() {
        // Two price fragments in one node stay unparseable. Callers treat
        // that as a parse failure, not an error.
        assert_eq!(digits_and_dot("1.299.00"), "1.299.00");
    }

    #[test]
    fn strip_price_markup_removes_commas_and_currency() {
        assert_eq!(strip_price_markup("₹74,990.00"), "74990.00");
        assert_eq!(strip_price_markup("1,299"), "1299");
        assert_eq!(strip_price_markup(" $ 19.99 "), "19.99");
    }

    #[test]
    fn discount_for_valid_margin() {
        assert_eq!(discount_percent("1000", "750"), 25.0);
        assert_eq!(discount_percent("900", "650"), 27.78);
    }

    #[test]
    fn discount_zero_when_margin_not_positive() {
        assert_eq!(discount_percent("750", "750"), 0.0);
        assert_eq!(discount_percent("700", "750"), 0.0);
    }

    #[test]
    fn discount_zero_on_parse_failure() {
        assert_eq!(discount_percent("", "750"), 0.0);
        assert_eq!(discount_percent("1000", ""), 0.0);
        assert_eq!(discount_percent("1.299.00", "750"), 0.0);
        assert_eq!(discount_percent("abc", "def"), 0.0);
    }
}
