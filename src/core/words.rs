use rust_decimal::Decimal;

use super::totals::round_money;

/// Formats an invoice value as words for the "amount in words" field.
///
/// Supplied by the host application; the totals engine only calls it.
/// Any `Fn(Decimal) -> String` works:
///
/// ```
/// use packlist::core::AmountInWords;
/// use rust_decimal_macros::dec;
///
/// let words = |amount: rust_decimal::Decimal| format!("INR {amount} only");
/// assert_eq!(words.words(dec!(1770.00)), "INR 1770.00 only");
/// ```
pub trait AmountInWords {
    fn words(&self, amount: Decimal) -> String;
}

impl<F> AmountInWords for F
where
    F: Fn(Decimal) -> String,
{
    fn words(&self, amount: Decimal) -> String {
        self(amount)
    }
}

/// Stand-in formatter that spells out only the currency units:
/// `"1770 euro and 00 cents"`, or `"zero euro, zero cents"` for nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderWords {
    /// Name of the major unit (e.g. "euro", "rupees").
    pub major: String,
    /// Name of the minor unit (e.g. "cents", "paise").
    pub minor: String,
}

impl PlaceholderWords {
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
        }
    }
}

impl Default for PlaceholderWords {
    fn default() -> Self {
        Self::new("euro", "cents")
    }
}

impl AmountInWords for PlaceholderWords {
    fn words(&self, amount: Decimal) -> String {
        if amount.is_zero() {
            return format!("zero {}, zero {}", self.major, self.minor);
        }
        let fixed = round_money(amount).to_string();
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{whole} {} and {cents} {}", self.major, self.minor)
    }
}
