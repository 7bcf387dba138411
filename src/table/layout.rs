use serde::Serialize;
use tracing::trace;

use crate::core::LineItem;

const BLANK_AMOUNT: &str = "0.00";

/// One printed row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow<'a> {
    /// 1-based position.
    pub row_index: usize,
    pub is_middle_row: bool,
    #[serde(flatten)]
    pub item: &'a LineItem,
}

/// Rows plus the tax summary printed on the middle row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLayout<'a> {
    pub rows: Vec<TableRow<'a>>,
    pub middle_row: usize,
    pub total_items: usize,
    pub taxable_value: String,
    pub igst_percent: String,
    pub igst_amount: String,
}

/// 1-based index of the middle row: the upper middle for even counts,
/// 1 for an empty table.
pub fn middle_row(total_items: usize) -> usize {
    if total_items == 0 {
        return 1;
    }
    total_items / 2 + total_items % 2
}

/// Number the rows and mark the middle one. Missing or blank summary values
/// print as `0.00`.
pub fn prepare_table_rows<'a>(
    items: &'a [LineItem],
    taxable_value: Option<&str>,
    igst_percent: Option<&str>,
    igst_amount: Option<&str>,
) -> TableLayout<'a> {
    let total_items = items.len();
    let middle = middle_row(total_items);
    trace!(total_items, middle, "table layout");

    let rows = items
        .iter()
        .enumerate()
        .map(|(i, item)| TableRow {
            row_index: i + 1,
            is_middle_row: i + 1 == middle,
            item,
        })
        .collect();

    TableLayout {
        rows,
        middle_row: middle,
        total_items,
        taxable_value: or_blank(taxable_value),
        igst_percent: or_blank(igst_percent),
        igst_amount: or_blank(igst_amount),
    }
}

fn or_blank(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => BLANK_AMOUNT.to_string(),
    }
}
