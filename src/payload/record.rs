use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::core::{
    ExportHeader, IgstRate, InvoiceTotals, LineItem, PacklistError, RowIdSequence, round_money,
};

/// The record a form submits: header fields, totals, and items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    #[serde(flatten)]
    pub header: ExportHeader,
    #[serde(default, deserialize_with = "lenient::text")]
    pub amount_in_words: String,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub total_export_value: Decimal,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub total_gst_value: Decimal,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub total_invoice_value: Decimal,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_boxes: u32,
    #[serde(default)]
    pub items: Vec<PayloadItem>,
}

/// One entry of `items[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadItem {
    #[serde(default, deserialize_with = "lenient::package_bound")]
    pub from: Option<u32>,
    #[serde(default, deserialize_with = "lenient::package_bound")]
    pub to: Option<u32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: String,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub quantity: Decimal,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub rate: Decimal,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub amount: Decimal,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub taxable_value: Decimal,
    #[serde(
        default,
        serialize_with = "lenient::igst_as_text",
        deserialize_with = "lenient::igst"
    )]
    pub igst_percent: IgstRate,
    #[serde(default = "zero_money", deserialize_with = "lenient::money")]
    pub igst_amount: Decimal,
}

fn zero_money() -> Decimal {
    round_money(Decimal::ZERO)
}

impl From<&LineItem> for PayloadItem {
    fn from(row: &LineItem) -> Self {
        Self {
            from: row.package_from,
            to: row.package_to,
            description: row.description.clone(),
            unit: row.unit.clone(),
            quantity: row.quantity,
            rate: row.rate,
            amount: round_money(row.amount),
            taxable_value: round_money(row.taxable_value),
            igst_percent: row.tax_rate,
            igst_amount: round_money(row.tax_amount),
        }
    }
}

impl PayloadItem {
    /// Turn the item back into a row. Derived values are carried over as
    /// submitted; run the totals engine to rederive them.
    pub fn into_line_item(self, id: impl Into<String>) -> LineItem {
        LineItem {
            id: id.into(),
            package_from: self.from,
            package_to: self.to,
            description: self.description,
            unit: self.unit,
            quantity: self.quantity,
            rate: self.rate,
            tax_rate: self.igst_percent,
            amount: self.amount,
            taxable_value: self.taxable_value,
            tax_amount: self.igst_amount,
        }
    }
}

impl InvoicePayload {
    /// Rows in submission order, with ids drawn from `ids`.
    pub fn rows(&self, ids: &mut RowIdSequence) -> Vec<LineItem> {
        self.items
            .iter()
            .cloned()
            .map(|item| item.into_line_item(ids.next_id()))
            .collect()
    }

    /// Rows with fresh `row-N` ids.
    pub fn into_rows(self) -> Vec<LineItem> {
        let mut ids = RowIdSequence::new();
        self.items
            .into_iter()
            .map(|item| item.into_line_item(ids.next_id()))
            .collect()
    }

    /// Totals as submitted.
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals {
            total_export_value: self.total_export_value,
            total_tax_value: self.total_gst_value,
            total_invoice_value: self.total_invoice_value,
            number_of_boxes: self.number_of_boxes,
            amount_in_words: self.amount_in_words.clone(),
        }
    }
}

/// Assemble the submission record from the form state.
pub fn build_payload(
    header: &ExportHeader,
    rows: &[LineItem],
    totals: &InvoiceTotals,
) -> InvoicePayload {
    InvoicePayload {
        header: header.clone(),
        amount_in_words: totals.amount_in_words.clone(),
        total_export_value: round_money(totals.total_export_value),
        total_gst_value: round_money(totals.total_tax_value),
        total_invoice_value: round_money(totals.total_invoice_value),
        number_of_boxes: totals.number_of_boxes,
        items: rows.iter().map(PayloadItem::from).collect(),
    }
}

/// Compact JSON, as sent in a POST body.
pub fn to_json(payload: &InvoicePayload) -> Result<String, PacklistError> {
    serde_json::to_string(payload).map_err(|e| PacklistError::Payload(e.to_string()))
}

/// Indented JSON, for logs and fixtures.
pub fn to_json_pretty(payload: &InvoicePayload) -> Result<String, PacklistError> {
    serde_json::to_string_pretty(payload).map_err(|e| PacklistError::Payload(e.to_string()))
}

/// Parse a submitted record.
pub fn from_json(json: &str) -> Result<InvoicePayload, PacklistError> {
    serde_json::from_str(json).map_err(|e| PacklistError::Payload(e.to_string()))
}
