//! Free-form money parsing.

use std::sync::LazyLock;

use regex::Regex;

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid amount regex"));

/// Parse the first numeric token of `amount` as a whole, non-negative value.
///
/// Thousands separators are ignored and fractions are truncated, never
/// rounded. A `-` directly before the token is a sign only when it does not
/// itself follow a letter or digit, so `Tier-2` is a label, not `-2`.
/// Negative amounts, text without digits, and values that overflow `u64`
/// yield `None`.
///
/// ```
/// use bounty_core::parse_money;
///
/// assert_eq!(parse_money(Some("$1,250.00")), Some(1250));
/// assert_eq!(parse_money(Some("99.99 USD")), Some(99));
/// assert_eq!(parse_money(Some("TBD")), None);
/// assert_eq!(parse_money(None), None);
/// ```
#[must_use]
pub fn parse_money(amount: Option<&str>) -> Option<u64> {
    let amount = amount.filter(|text| !text.is_empty())?;
    let cleaned = amount.replace(',', "");
    let found = AMOUNT.find(&cleaned)?;
    if is_negative(&cleaned[..found.start()]) {
        return None;
    }

    let token = found.as_str();
    let whole = token.split('.').next().unwrap_or(token);
    whole.parse::<u64>().ok()
}

fn is_negative(prefix: &str) -> bool {
    let mut before = prefix.chars().rev();
    before.next() == Some('-') && !before.next().is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::parse_money;

    #[rstest]
    #[case("$1,250.00", Some(1250))]
    #[case("1250", Some(1250))]
    #[case("  500 ", Some(500))]
    #[case("$0", Some(0))]
    #[case("0.99", Some(0))]
    #[case("USD 2,000.75 (paid)", Some(2000))]
    #[case("100 then 200", Some(100))]
    #[case("-50", None)]
    #[case("$-50", None)]
    #[case("USD -50", None)]
    #[case("Tier-2: $500", Some(2))]
    #[case("Q3-2024 grant", Some(3))]
    #[case("", None)]
    #[case("n/a", None)]
    #[case("99999999999999999999999", None)]
    fn parses_amounts(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_money(Some(input)), expected);
    }

    #[test]
    fn absent_amount_has_no_value() {
        assert_eq!(parse_money(None), None);
    }
}
