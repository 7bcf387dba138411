//! Integration tests for the sequencer and totals engine.
//!
//! Run with: `cargo test --test core_tests`

use packlist::core::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn row(from: u32, to: u32) -> LineItem {
    LineItemBuilder::blank().packages(from, to).build()
}

fn ranges(rows: &[LineItem]) -> Vec<(u32, u32)> {
    rows.iter().filter_map(LineItem::packages).collect()
}

fn words() -> PlaceholderWords {
    PlaceholderWords::default()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn single_row_invoice() {
    let mut rows = vec![
        LineItemBuilder::new("Industrial Valves - DN50, PN16, Flanged End", dec!(10), "PCS", dec!(150.00))
            .tax(IgstRate::Eighteen)
            .packages(1, 1)
            .build(),
    ];
    let top = resequence(&mut rows, None, &SequencerConfig::default());
    let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &words());

    assert_eq!(top, 1);
    assert_eq!(rows[0].packages(), Some((1, 1)));
    assert_eq!(rows[0].amount, dec!(1500.00));
    assert_eq!(rows[0].taxable_value, dec!(1500.00));
    assert_eq!(rows[0].tax_amount, dec!(270.00));
    assert_eq!(totals.total_export_value, dec!(1500.00));
    assert_eq!(totals.total_tax_value, dec!(270.00));
    assert_eq!(totals.total_invoice_value, dec!(1770.00));
    assert_eq!(totals.number_of_boxes, 1);
    assert_eq!(totals.amount_in_words, "1770 euro and 00 cents");
}

#[test]
fn append_after_single_box_row() {
    let rows = vec![row(1, 1)];
    assert_eq!(next_range(&rows, &SequencerConfig::export_invoice()), (2, 11));
    assert_eq!(next_range(&rows, &SequencerConfig::packing_list()), (2, 8));
}

#[test]
fn delete_middle_row_closes_gap() {
    let mut rows = vec![row(1, 10), row(11, 20), row(21, 30)];
    rows.remove(1);
    let top = resequence(&mut rows, None, &SequencerConfig::default());
    let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &words());

    assert_eq!(ranges(&rows), vec![(1, 10), (11, 20)]);
    assert_eq!(top, 20);
    assert_eq!(totals.number_of_boxes, 20);
}

#[test]
fn shrinking_a_row_shifts_later_rows() {
    let mut rows = vec![row(1, 10), row(11, 20), row(21, 30)];
    normalize_edit(&mut rows[1], RangeField::To, 15);
    let top = resequence(&mut rows, Some(1), &SequencerConfig::default());

    assert_eq!(ranges(&rows), vec![(1, 10), (11, 15), (16, 25)]);
    assert_eq!(top, 25);
}

#[test]
fn both_presets_agree_on_the_common_cases() {
    for config in [SequencerConfig::export_invoice(), SequencerConfig::packing_list()] {
        let mut rows = vec![row(1, 10), row(11, 20), row(21, 30)];
        normalize_edit(&mut rows[1], RangeField::To, 15);
        resequence(&mut rows, Some(1), &config);
        assert_eq!(ranges(&rows), vec![(1, 10), (11, 15), (16, 25)], "{config:?}");
    }
}

#[test]
fn edited_from_below_cursor_is_pulled_back() {
    let mut rows = vec![row(1, 10), row(11, 20)];
    normalize_edit(&mut rows[1], RangeField::From, 3);
    resequence(&mut rows, Some(1), &SequencerConfig::default());
    assert_eq!(ranges(&rows), vec![(1, 10), (11, 20)]);
}

#[test]
fn edited_to_below_cursor_is_bumped() {
    let mut rows = vec![row(1, 10), row(11, 20), row(21, 22)];
    normalize_edit(&mut rows[1], RangeField::To, 4);
    // from snaps down to 4 as well, the sequencer then pulls the row to 11..11
    assert_eq!(rows[1].packages(), Some((4, 4)));
    resequence(&mut rows, Some(1), &SequencerConfig::default());
    assert_eq!(ranges(&rows), vec![(1, 10), (11, 11), (12, 13)]);
}

#[test]
fn missing_ranges_use_fallback_width() {
    let mut rows = vec![row(1, 2), LineItemBuilder::blank().build(), row(9, 3)];
    resequence(&mut rows, None, &SequencerConfig::export_invoice());
    assert_eq!(ranges(&rows), vec![(1, 2), (3, 12), (13, 22)]);

    let mut rows = vec![row(1, 2), LineItemBuilder::blank().build()];
    resequence(&mut rows, None, &SequencerConfig::packing_list());
    assert_eq!(ranges(&rows), vec![(1, 2), (3, 9)]);
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[test]
fn mixed_rates_aggregate() {
    let mut rows = vec![
        LineItemBuilder::new("Valves", dec!(3), "PCS", dec!(333.33))
            .tax(IgstRate::TwentyEight)
            .packages(1, 3)
            .build(),
        LineItemBuilder::new("Gaskets", dec!(4), "SET", dec!(25.50))
            .tax(IgstRate::Twelve)
            .packages(4, 4)
            .build(),
        LineItemBuilder::new("Manuals", dec!(1), "PCS", dec!(0.01))
            .packages(5, 5)
            .build(),
    ];
    let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &words());

    assert_eq!(rows[0].amount, dec!(999.99));
    assert_eq!(rows[0].tax_amount, dec!(280.00)); // 279.9972
    assert_eq!(rows[1].tax_amount, dec!(12.24));
    assert_eq!(rows[2].tax_amount, dec!(0.00));
    assert_eq!(totals.total_export_value, dec!(1102.00));
    assert_eq!(totals.total_tax_value, dec!(292.24));
    assert_eq!(totals.total_invoice_value, dec!(1394.24));
    assert_eq!(totals.number_of_boxes, 5);
    assert!(validate_arithmetic(&rows, &totals).is_empty());
}

#[test]
fn words_override_survives_edits() {
    let mut rows = vec![row(1, 1)];
    rows[0].quantity = dec!(2);
    rows[0].rate = dec!(10);
    let first = recompute(&mut rows, &InvoiceTotals::default(), false, &words());
    assert_eq!(first.amount_in_words, "20 euro and 00 cents");

    let overridden = InvoiceTotals {
        amount_in_words: "Twenty only".into(),
        ..first
    };
    rows[0].quantity = dec!(5);
    let second = recompute(&mut rows, &overridden, true, &words());
    assert_eq!(second.total_invoice_value, dec!(50.00));
    assert_eq!(second.amount_in_words, "Twenty only");
}

#[test]
fn custom_words_formatter() {
    let mut rows = vec![row(1, 1)];
    rows[0].quantity = dec!(1);
    rows[0].rate = dec!(99.5);
    let rupees = PlaceholderWords::new("rupees", "paise");
    let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &rupees);
    assert_eq!(totals.amount_in_words, "99 rupees and 50 paise");

    let closure = |amount: rust_decimal::Decimal| format!("INR {amount} only");
    let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &closure);
    assert_eq!(totals.amount_in_words, "INR 99.50 only");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn computed_submission_is_valid() {
    let header = ExportHeaderBuilder::new("ZC/2024-25/001", "2024-06-15")
        .currency("USD")
        .contact_email("export@example.in")
        .build()
        .unwrap();
    let mut rows = vec![
        LineItemBuilder::new("Valves", dec!(10), "PCS", dec!(150)).packages(1, 4).build(),
        LineItemBuilder::new("Gaskets", dec!(2), "SET", dec!(12.75)).packages(9, 12).build(),
    ];
    resequence(&mut rows, None, &SequencerConfig::default());
    let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &words());

    let errors = validate_submission(&header, &rows, &totals);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn hand_edited_rows_are_reported() {
    let header = ExportHeaderBuilder::new("ZC-1", "2024-06-15").build().unwrap();
    let mut rows = vec![row(1, 10), row(12, 20)];
    let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &words());

    let errors = validate_submission(&header, &rows, &totals);
    let rules: Vec<_> = errors.iter().filter_map(|e| e.rule.as_deref()).collect();
    assert_eq!(rules, vec!["PKG-03"]);
    assert!(errors[0].to_string().starts_with("[PKG-03]"));
}
