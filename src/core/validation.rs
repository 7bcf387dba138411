use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::currencies::{is_known_currency_code, normalize_currency};
use super::error::ValidationError;
use super::totals::recompute_row;
use super::types::*;

/// Validate a form before submission.
/// Returns all validation errors found (not just the first).
pub fn validate_submission(
    header: &ExportHeader,
    rows: &[LineItem],
    totals: &InvoiceTotals,
) -> Vec<ValidationError> {
    let mut errors = validate_header(header);
    errors.extend(validate_rows(rows));
    errors.extend(validate_arithmetic(rows, totals));
    errors
}

/// Header checks: invoice number, currency, dates, contact email.
pub fn validate_header(header: &ExportHeader) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if header.invoice_number.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "invoice_number",
            "invoice number must not be empty",
            "HDR-01",
        ));
    }

    let currency = normalize_currency(&header.currency);
    if currency.len() != 3 {
        errors.push(ValidationError::with_rule(
            "currency",
            "currency code must be 3 characters (ISO 4217)",
            "HDR-02",
        ));
    } else if !is_known_currency_code(&currency) {
        errors.push(ValidationError::with_rule(
            "currency",
            format!("currency code '{}' is not accepted", header.currency),
            "HDR-02",
        ));
    }

    check_date(&header.invoice_date, "invoice_date", &mut errors);
    check_date(&header.buyer_order_date, "buyer_order_date", &mut errors);

    let email = header.contact_email.trim();
    if !email.is_empty() && !email.contains('@') {
        errors.push(ValidationError::with_rule(
            "contact_email",
            format!("'{email}' is not an email address"),
            "HDR-04",
        ));
    }

    errors
}

/// Package range checks: at least one row, every range complete and ordered,
/// first range starting at 1, no gaps or overlaps.
pub fn validate_rows(rows: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if rows.is_empty() {
        errors.push(ValidationError::with_rule(
            "items",
            "invoice must have at least one row",
            "PKG-01",
        ));
        return errors;
    }

    let mut previous_to: Option<u32> = None;
    for (i, row) in rows.iter().enumerate() {
        let Some((from, to)) = row.packages() else {
            errors.push(ValidationError::with_rule(
                format!("items.{i}.package_to"),
                format!(
                    "package range {:?}-{:?} is incomplete or inverted",
                    row.package_from, row.package_to
                ),
                "PKG-02",
            ));
            previous_to = row.package_to;
            continue;
        };

        match previous_to {
            None if i == 0 && from != 1 => errors.push(ValidationError::with_rule(
                "items.0.package_from",
                format!("first package range must start at 1, starts at {from}"),
                "PKG-04",
            )),
            Some(prev) => match prev.checked_add(1) {
                Some(expected) if expected == from => {}
                Some(expected) => errors.push(ValidationError::with_rule(
                    format!("items.{i}.package_from"),
                    format!("package range must start at {expected}, starts at {from}"),
                    "PKG-03",
                )),
                None => errors.push(ValidationError::with_rule(
                    format!("items.{i}.package_from"),
                    format!("no package number left after {prev}, starts at {from}"),
                    "PKG-03",
                )),
            },
            _ => {}
        }
        previous_to = Some(to);
    }

    errors
}

/// Arithmetic checks: stored row values and totals match a recomputation.
pub fn validate_arithmetic(rows: &[LineItem], totals: &InvoiceTotals) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        if row.quantity.is_sign_negative() || row.rate.is_sign_negative() {
            errors.push(ValidationError::with_rule(
                format!("items.{i}.quantity"),
                "quantity and rate must not be negative",
                "AMT-06",
            ));
        }

        let mut expected = row.clone();
        recompute_row(&mut expected);
        if row.amount != expected.amount
            || row.taxable_value != expected.taxable_value
            || row.tax_amount != expected.tax_amount
        {
            errors.push(ValidationError::with_rule(
                format!("items.{i}.amount"),
                format!(
                    "stored amount {} / tax {} do not match {} x {} at {}",
                    row.amount, row.tax_amount, row.quantity, row.rate, row.tax_rate
                ),
                "AMT-01",
            ));
        }
    }

    let export = checked_sum(rows.iter().map(|r| r.amount));
    if export != Some(totals.total_export_value) {
        errors.push(ValidationError::with_rule(
            "total_export_value",
            format!(
                "total export value {} does not match sum of row amounts {}",
                totals.total_export_value,
                display_sum(export)
            ),
            "AMT-02",
        ));
    }

    let tax = checked_sum(rows.iter().map(|r| r.tax_amount));
    if tax != Some(totals.total_tax_value) {
        errors.push(ValidationError::with_rule(
            "total_gst_value",
            format!(
                "total GST value {} does not match sum of row IGST amounts {}",
                totals.total_tax_value,
                display_sum(tax)
            ),
            "AMT-03",
        ));
    }

    let expected_invoice = totals
        .total_export_value
        .checked_add(totals.total_tax_value);
    if expected_invoice != Some(totals.total_invoice_value) {
        errors.push(ValidationError::with_rule(
            "total_invoice_value",
            format!(
                "total invoice value {} does not match export {} + GST {}",
                totals.total_invoice_value, totals.total_export_value, totals.total_tax_value
            ),
            "AMT-04",
        ));
    }

    if let Some(last_to) = rows.last().and_then(|r| r.package_to) {
        if totals.number_of_boxes != last_to {
            errors.push(ValidationError::with_rule(
                "number_of_boxes",
                format!(
                    "number of boxes {} does not match last package {}",
                    totals.number_of_boxes, last_to
                ),
                "AMT-05",
            ));
        }
    }

    errors
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

fn display_sum(sum: Option<Decimal>) -> String {
    sum.map_or_else(|| "(overflow)".to_string(), |d| d.to_string())
}

/// Parse a date as typed into the form: ISO (`2024-06-15`) or Indian
/// day-first (`15-06-2024`, `15/06/2024`).
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn check_date(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !value.trim().is_empty() && parse_form_date(value).is_none() {
        errors.push(ValidationError::with_rule(
            field,
            format!("'{value}' is not a valid date"),
            "HDR-03",
        ));
    }
}
