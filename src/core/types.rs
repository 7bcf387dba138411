use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// One invoice line item (a row of the item table).
///
/// The package range is the inclusive span of package numbers this row
/// covers. A bound is `None` while it holds no valid input; after
/// [`resequence`](super::resequence) both bounds are always set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row identifier (e.g. "row-3"), stable across resequencing.
    pub id: String,
    /// First package number covered by this row (>= 1).
    pub package_from: Option<u32>,
    /// Last package number covered by this row (>= `package_from`).
    pub package_to: Option<u32>,
    /// Description of goods. Free text.
    pub description: String,
    /// Unit of measure. Free text.
    pub unit: String,
    /// Quantity (>= 0).
    pub quantity: Decimal,
    /// Rate per unit (>= 0).
    pub rate: Decimal,
    /// IGST rate applied to the row amount.
    pub tax_rate: IgstRate,
    /// Derived: `quantity * rate`, rounded to 2 places.
    pub amount: Decimal,
    /// Derived: equal to `amount`.
    pub taxable_value: Decimal,
    /// Derived: `amount * tax_rate / 100`, rounded to 2 places.
    pub tax_amount: Decimal,
}

impl LineItem {
    /// Width of the stored range (`to - from + 1`), if both bounds are
    /// present and ordered.
    pub fn width(&self) -> Option<u32> {
        self.packages().map(|(from, to)| to - from + 1)
    }

    /// The stored range as `(from, to)`, if it is complete, ordered, and
    /// ends at or below [`MAX_PACKAGE_NUMBER`].
    pub fn packages(&self) -> Option<(u32, u32)> {
        match (self.package_from, self.package_to) {
            (Some(from), Some(to)) if from >= 1 && to >= from && to <= MAX_PACKAGE_NUMBER => {
                Some((from, to))
            }
            _ => None,
        }
    }
}

/// IGST rates offered by the item table (percentage points).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum IgstRate {
    /// 0%, zero-rated export (e.g. under LUT).
    #[default]
    Zero,
    /// 12%.
    Twelve,
    /// 18%.
    Eighteen,
    /// 28%.
    TwentyEight,
}

impl IgstRate {
    /// All selectable rates in display order.
    pub const ALL: [IgstRate; 4] = [Self::Zero, Self::Twelve, Self::Eighteen, Self::TwentyEight];

    /// Rate in whole percentage points.
    pub fn points(&self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::Twelve => 12,
            Self::Eighteen => 18,
            Self::TwentyEight => 28,
        }
    }

    /// Rate as a decimal percentage (e.g. `18`).
    pub fn percent(&self) -> Decimal {
        Decimal::from(self.points())
    }

    /// Look up a rate by its percentage points.
    pub fn from_points(points: u32) -> Option<Self> {
        match points {
            0 => Some(Self::Zero),
            12 => Some(Self::Twelve),
            18 => Some(Self::Eighteen),
            28 => Some(Self::TwentyEight),
            _ => None,
        }
    }

    /// Parse a select value such as `"18"` or `"18.00"`.
    /// Anything that is not one of the offered rates falls back to 0%.
    pub fn parse(value: &str) -> Self {
        let value = value.trim().trim_end_matches('%');
        value
            .parse::<Decimal>()
            .ok()
            .filter(|d| d.fract().is_zero())
            .and_then(|d| d.to_u32())
            .and_then(Self::from_points)
            .unwrap_or_default()
    }
}

impl TryFrom<u32> for IgstRate {
    type Error = String;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Self::from_points(points).ok_or_else(|| format!("unsupported IGST rate {points}%"))
    }
}

impl From<IgstRate> for u32 {
    fn from(rate: IgstRate) -> u32 {
        rate.points()
    }
}

impl fmt::Display for IgstRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.points())
    }
}

/// Invoice-level totals. Fully derived from the rows, except for the
/// amount in words once the user has overridden it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of row amounts.
    pub total_export_value: Decimal,
    /// Sum of row IGST amounts.
    pub total_tax_value: Decimal,
    /// `total_export_value + total_tax_value`.
    pub total_invoice_value: Decimal,
    /// `package_to` of the last row.
    pub number_of_boxes: u32,
    /// Invoice value in words (sticky once overridden by the user).
    pub amount_in_words: String,
}

/// Which endpoint of a package range an edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeField {
    From,
    To,
}

/// Invoice header: every form field that is neither an item nor a total.
///
/// Serialized with the form's camelCase field names. Missing or null
/// fields deserialize to empty text, numbers to their decimal text, and a
/// missing or blank currency to "INR".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportHeader {
    #[serde(deserialize_with = "text_field::text")]
    pub invoice_number: String,
    /// Invoice date as entered (ISO `YYYY-MM-DD` from a date picker).
    #[serde(deserialize_with = "text_field::text")]
    pub invoice_date: String,
    #[serde(deserialize_with = "text_field::text")]
    pub buyer_order_number: String,
    #[serde(deserialize_with = "text_field::text")]
    pub buyer_order_date: String,
    #[serde(deserialize_with = "text_field::text")]
    pub exporter_reference: String,
    /// Importer-Exporter Code.
    #[serde(deserialize_with = "text_field::text")]
    pub iec_number: String,
    /// GSTIN or other tax registration.
    #[serde(deserialize_with = "text_field::text")]
    pub tax_registration_number: String,
    /// Letter of Undertaking ARN (zero-rated exports).
    #[serde(deserialize_with = "text_field::text")]
    pub lut_arn_number: String,
    #[serde(deserialize_with = "text_field::text")]
    pub delivery_payment_terms: String,
    #[serde(deserialize_with = "text_field::text")]
    pub port_of_loading: String,
    #[serde(deserialize_with = "text_field::text")]
    pub port_of_discharge: String,
    #[serde(deserialize_with = "text_field::text")]
    pub pre_carriage_by: String,
    #[serde(deserialize_with = "text_field::text")]
    pub place_of_receipt: String,
    #[serde(deserialize_with = "text_field::text")]
    pub port_of_destination: String,
    #[serde(deserialize_with = "text_field::text")]
    pub destination: String,
    /// ISO 4217 code, "INR" unless chosen otherwise.
    #[serde(deserialize_with = "text_field::currency")]
    pub currency: String,
    #[serde(deserialize_with = "text_field::text")]
    pub vessel_flight: String,
    #[serde(deserialize_with = "text_field::text")]
    pub country_of_origin: String,
    /// Authorised dealer code.
    #[serde(deserialize_with = "text_field::text")]
    pub ad_code: String,
    #[serde(deserialize_with = "text_field::text")]
    pub other_reference: String,
    #[serde(deserialize_with = "text_field::text")]
    pub hs_code: String,
    #[serde(deserialize_with = "text_field::text")]
    pub final_destination: String,
    #[serde(deserialize_with = "text_field::text")]
    pub contact_person_name: String,
    #[serde(deserialize_with = "text_field::text")]
    pub contact_email: String,
    #[serde(deserialize_with = "text_field::text")]
    pub consignee_address: String,
    #[serde(deserialize_with = "text_field::text")]
    pub delivery_address: String,
}

impl Default for ExportHeader {
    fn default() -> Self {
        Self {
            invoice_number: String::new(),
            invoice_date: String::new(),
            buyer_order_number: String::new(),
            buyer_order_date: String::new(),
            exporter_reference: String::new(),
            iec_number: String::new(),
            tax_registration_number: String::new(),
            lut_arn_number: String::new(),
            delivery_payment_terms: String::new(),
            port_of_loading: String::new(),
            port_of_discharge: String::new(),
            pre_carriage_by: String::new(),
            place_of_receipt: String::new(),
            port_of_destination: String::new(),
            destination: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            vessel_flight: String::new(),
            country_of_origin: String::new(),
            ad_code: String::new(),
            other_reference: String::new(),
            hs_code: String::new(),
            final_destination: String::new(),
            contact_person_name: String::new(),
            contact_email: String::new(),
            consignee_address: String::new(),
            delivery_address: String::new(),
        }
    }
}

/// Currency used when a form does not pick one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Highest package number a range may reach. Larger input is treated as
/// invalid, which leaves room for the rows that follow.
pub const MAX_PACKAGE_NUMBER: u32 = 999_999;

/// Header fields as a browser sends them: strings, numbers, booleans or null.
mod text_field {
    use serde::{Deserialize, Deserializer};

    use super::DEFAULT_CURRENCY;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Whole(i64),
        Number(f64),
        Flag(bool),
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Option::<Raw>::deserialize(d)? {
            Some(Raw::Text(s)) => s,
            Some(Raw::Whole(n)) => n.to_string(),
            Some(Raw::Number(n)) => n.to_string(),
            Some(Raw::Flag(b)) => b.to_string(),
            None => String::new(),
        })
    }

    /// Blank means "not chosen".
    pub fn currency<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        let code = text(d)?;
        if code.trim().is_empty() {
            Ok(DEFAULT_CURRENCY.to_string())
        } else {
            Ok(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(from: Option<u32>, to: Option<u32>) -> LineItem {
        LineItem {
            id: "row-1".into(),
            package_from: from,
            package_to: to,
            description: String::new(),
            unit: String::new(),
            quantity: Decimal::ZERO,
            rate: Decimal::ZERO,
            tax_rate: IgstRate::Zero,
            amount: Decimal::ZERO,
            taxable_value: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
        }
    }

    #[test]
    fn width_of_valid_range() {
        assert_eq!(row(Some(11), Some(20)).width(), Some(10));
        assert_eq!(row(Some(1), Some(1)).width(), Some(1));
    }

    #[test]
    fn width_of_invalid_range() {
        assert_eq!(row(None, Some(20)).width(), None);
        assert_eq!(row(Some(5), None).width(), None);
        assert_eq!(row(Some(20), Some(11)).width(), None);
        assert_eq!(row(Some(0), Some(3)).width(), None);
        assert_eq!(row(Some(1), Some(u32::MAX)).width(), None);
        assert_eq!(row(Some(1), Some(MAX_PACKAGE_NUMBER)).width(), Some(MAX_PACKAGE_NUMBER));
    }

    #[test]
    fn igst_rate_parse() {
        assert_eq!(IgstRate::parse("18"), IgstRate::Eighteen);
        assert_eq!(IgstRate::parse(" 28 "), IgstRate::TwentyEight);
        assert_eq!(IgstRate::parse("12.00"), IgstRate::Twelve);
        assert_eq!(IgstRate::parse("12%"), IgstRate::Twelve);
        assert_eq!(IgstRate::parse("5"), IgstRate::Zero);
        assert_eq!(IgstRate::parse("18.5"), IgstRate::Zero);
        assert_eq!(IgstRate::parse("abc"), IgstRate::Zero);
        assert_eq!(IgstRate::parse(""), IgstRate::Zero);
    }

    #[test]
    fn igst_rate_percent() {
        assert_eq!(IgstRate::Eighteen.percent(), dec!(18));
        assert_eq!(IgstRate::TwentyEight.to_string(), "28%");
        assert_eq!(IgstRate::try_from(7u32), Err("unsupported IGST rate 7%".to_string()));
    }

    #[test]
    fn header_defaults_to_inr() {
        assert_eq!(ExportHeader::default().currency, "INR");
    }

    #[test]
    fn blank_currency_decodes_as_inr() {
        for json in [r#"{"currency": ""}"#, r#"{"currency": "  "}"#, r#"{"currency": null}"#, "{}"] {
            let header: ExportHeader = serde_json::from_str(json).unwrap();
            assert_eq!(header.currency, "INR", "{json}");
        }
        let header: ExportHeader = serde_json::from_str(r#"{"currency": "usd"}"#).unwrap();
        assert_eq!(header.currency, "usd");
    }

    #[test]
    fn header_fields_accept_null_and_numbers() {
        let header: ExportHeader = serde_json::from_str(
            r#"{"invoiceNumber": 1042, "hsCode": 84818030, "adCode": null, "iecNumber": "0305012345"}"#,
        )
        .unwrap();
        assert_eq!(header.invoice_number, "1042");
        assert_eq!(header.hs_code, "84818030");
        assert_eq!(header.ad_code, "");
        assert_eq!(header.iec_number, "0305012345");
    }
}
