use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::trace;

use super::types::{InvoiceTotals, LineItem};
use super::words::AmountInWords;

/// Round to 2 decimal places using half-up (commercial rounding) and fix the
/// scale at 2, so `1500` is stored as `1500.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Derive `amount`, `taxable_value` and `tax_amount` of one row.
///
/// Arithmetic overflow yields 0 rather than a panic.
pub fn recompute_row(row: &mut LineItem) {
    let amount = round_money(row.quantity.checked_mul(row.rate).unwrap_or(Decimal::ZERO));
    let tax = amount
        .checked_mul(row.tax_rate.percent())
        .map(|t| t / dec!(100))
        .unwrap_or(Decimal::ZERO);

    row.amount = amount;
    row.taxable_value = amount;
    row.tax_amount = round_money(tax);
}

/// Recompute every row's derived values and the invoice totals.
///
/// The amount in words is taken from `words` unless `words_overridden` is
/// set, in which case `prior.amount_in_words` is carried over unchanged.
/// Running this again on its own output yields the same totals.
///
/// ```
/// use packlist::core::*;
/// use rust_decimal_macros::dec;
///
/// let mut rows = vec![
///     LineItemBuilder::new("Valves", dec!(10), "PCS", dec!(150)).tax(IgstRate::Eighteen).packages(1, 1).build(),
/// ];
/// let prior = InvoiceTotals { amount_in_words: "as agreed".into(), ..Default::default() };
/// let totals = recompute(&mut rows, &prior, true, &PlaceholderWords::default());
/// assert_eq!(totals.total_invoice_value, dec!(1770.00));
/// assert_eq!(totals.amount_in_words, "as agreed");
/// ```
pub fn recompute(
    rows: &mut [LineItem],
    prior: &InvoiceTotals,
    words_overridden: bool,
    words: &dyn AmountInWords,
) -> InvoiceTotals {
    let mut export = Decimal::ZERO;
    let mut tax = Decimal::ZERO;
    for row in rows.iter_mut() {
        recompute_row(row);
        export = export.checked_add(row.amount).unwrap_or(export);
        tax = tax.checked_add(row.tax_amount).unwrap_or(tax);
    }

    let total_export_value = round_money(export);
    let total_tax_value = round_money(tax);
    let total_invoice_value = round_money(
        total_export_value
            .checked_add(total_tax_value)
            .unwrap_or(total_export_value),
    );

    let number_of_boxes = rows.last().and_then(|row| row.package_to).unwrap_or(1);

    let amount_in_words = if words_overridden {
        prior.amount_in_words.clone()
    } else {
        words.words(total_invoice_value)
    };

    trace!(
        rows = rows.len(),
        %total_invoice_value,
        number_of_boxes,
        "invoice totals recomputed"
    );

    InvoiceTotals {
        total_export_value,
        total_tax_value,
        total_invoice_value,
        number_of_boxes,
        amount_in_words,
    }
}
