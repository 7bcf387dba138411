//! Print-table layout tests.
//!
//! Run with: `cargo test --features form,table --test table_tests`

#![cfg(all(feature = "form", feature = "table"))]

use packlist::core::*;
use packlist::form::FormSession;
use packlist::table::{middle_row, prepare_table_rows};

#[test]
fn middle_row_of_a_packing_list() {
    let mut form = FormSession::new(SequencerConfig::packing_list());
    for _ in 0..4 {
        form.add_row();
    }
    let totals = form.totals().clone();
    let taxable = totals.total_export_value.to_string();
    let layout = prepare_table_rows(form.rows(), Some(&taxable), Some("18"), None);

    assert_eq!(layout.total_items, 5);
    assert_eq!(layout.middle_row, 3);
    assert_eq!(layout.taxable_value, "0.00");
    assert_eq!(layout.igst_percent, "18");
    assert_eq!(layout.igst_amount, "0.00");

    let middle: Vec<_> = layout.rows.iter().filter(|r| r.is_middle_row).collect();
    assert_eq!(middle.len(), 1);
    assert_eq!(middle[0].item.packages(), Some((9, 15)));
    assert_eq!(layout.rows.last().map(|r| r.row_index), Some(5));
}

#[test]
fn even_counts_use_upper_middle() {
    for (n, expected) in [(2, 1), (4, 2), (6, 3), (7, 4)] {
        assert_eq!(middle_row(n), expected, "{n} rows");
    }
}

#[test]
fn layout_serializes_flat_rows() {
    let form = FormSession::default();
    let layout = prepare_table_rows(form.rows(), None, None, None);
    let value = serde_json::to_value(&layout).unwrap();
    assert_eq!(value["middle_row"], 1);
    assert_eq!(value["rows"][0]["row_index"], 1);
    assert_eq!(value["rows"][0]["is_middle_row"], true);
    assert_eq!(value["rows"][0]["id"], "row-1");
}
