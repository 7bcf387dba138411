//! ISO 4217 codes accepted as invoice currency.
//!
//! Export invoices are raised in INR or in the buyer's settlement currency.
//! The list covers the currencies in which Indian exports are commonly
//! invoiced. Symbol lookup and display are left to the host.

/// Check whether `code` is an accepted ISO 4217 currency code.
/// Expects the canonical upper-case form (see [`normalize_currency`]).
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Trim and upper-case a currency entered by hand (" usd" -> "USD").
pub fn normalize_currency(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", // UAE Dirham
    "AUD", // Australian Dollar
    "BDT", // Bangladeshi Taka
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "DKK", // Danish Krone
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HKD", // Hong Kong Dollar
    "INR", // Indian Rupee
    "JPY", // Japanese Yen
    "KES", // Kenyan Shilling
    "KRW", // South Korean Won
    "KWD", // Kuwaiti Dinar
    "LKR", // Sri Lankan Rupee
    "MYR", // Malaysian Ringgit
    "NOK", // Norwegian Krone
    "NPR", // Nepalese Rupee
    "NZD", // New Zealand Dollar
    "OMR", // Omani Rial
    "QAR", // Qatari Riyal
    "RUB", // Russian Ruble
    "SAR", // Saudi Riyal
    "SEK", // Swedish Krona
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TRY", // Turkish Lira
    "USD", // US Dollar
    "ZAR", // South African Rand
];
