//! Field-level serde helpers that accept whatever a browser form sends.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::core::IgstRate;
use crate::core::input::{parse_amount, parse_package_opt};

fn as_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Money, quantity or rate: `"150.00"`, `150`, `""` (-> 0).
pub fn money<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = as_text(Value::deserialize(deserializer)?);
    Ok(parse_amount(&text))
}

/// Package bound: `"11"`, `11`, `""` (-> unset).
pub fn package_bound<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = as_text(Value::deserialize(deserializer)?);
    Ok(parse_package_opt(&text))
}

/// Box count: `"20"`, `20`, `""` (-> 0).
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(package_bound(deserializer)?.unwrap_or(0))
}

/// IGST select value: `"18"`, `18` (unknown -> 0%).
pub fn igst<'de, D>(deserializer: D) -> Result<IgstRate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = as_text(Value::deserialize(deserializer)?);
    Ok(IgstRate::parse(&text))
}

/// Free text; `null` becomes empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_text(Value::deserialize(deserializer)?))
}

/// IGST rate written the way the select submits it: `"18"`.
pub fn igst_as_text<S>(rate: &IgstRate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&rate.points().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn money_from_string_number_or_blank() {
        assert_eq!(money(json!("150.00")).unwrap(), dec!(150.00));
        assert_eq!(money(json!(150)).unwrap(), dec!(150));
        assert_eq!(money(json!(12.5)).unwrap(), dec!(12.5));
        assert_eq!(money(json!("")).unwrap(), dec!(0));
        assert_eq!(money(json!(null)).unwrap(), dec!(0));
        assert_eq!(money(json!("abc")).unwrap(), dec!(0));
    }

    #[test]
    fn bounds() {
        assert_eq!(package_bound(json!("11")).unwrap(), Some(11));
        assert_eq!(package_bound(json!(11)).unwrap(), Some(11));
        assert_eq!(package_bound(json!("")).unwrap(), None);
        assert_eq!(count(json!("")).unwrap(), 0);
        assert_eq!(count(json!("20")).unwrap(), 20);
    }

    #[test]
    fn igst_values() {
        assert_eq!(igst(json!("18")).unwrap(), IgstRate::Eighteen);
        assert_eq!(igst(json!(28)).unwrap(), IgstRate::TwentyEight);
        assert_eq!(igst(json!("7")).unwrap(), IgstRate::Zero);
    }

    #[test]
    fn text_from_null() {
        assert_eq!(text(json!(null)).unwrap(), "");
        assert_eq!(text(json!("PCS")).unwrap(), "PCS");
    }
}
