use packlist::core::*;
use packlist::form::FormSession;
use packlist::payload;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let header = ExportHeaderBuilder::new("ZC/2024-25/014", "2024-06-15")
        .iec_number("0512345678")
        .lut_arn_number("AD270324012345X")
        .currency("USD")
        .port_of_loading("Nhava Sheva")
        .port_of_discharge("Hamburg")
        .final_destination("Germany")
        .country_of_origin("India")
        .contact_email("export@example.in")
        .build()
        .expect("header should be valid");

    let mut form = FormSession::new(SequencerConfig::export_invoice());
    form.set_description(0, "Industrial Valves - DN50, PN16, Flanged End").unwrap();
    form.set_unit(0, "PCS").unwrap();
    form.set_quantity(0, "10").unwrap();
    form.set_rate(0, "150.00").unwrap();
    form.set_tax_rate(0, IgstRate::Eighteen).unwrap();

    let i = form.add_row();
    form.set_description(i, "Spiral Wound Gaskets").unwrap();
    form.set_unit(i, "SET").unwrap();
    form.set_quantity(i, "40").unwrap();
    form.set_rate(i, "25.50").unwrap();
    form.set_tax_rate(i, IgstRate::Twelve).unwrap();

    // The user narrows the second row to packages 2-6.
    form.edit_package_bound(i, RangeField::To, "6").unwrap();

    let mut scratch = FormSession::default();
    if let Err(e) = scratch.remove_last_row() {
        println!("Rejected: {e}");
    }

    println!("Invoice: {}", header.invoice_number);
    println!("---");
    for row in form.rows() {
        let (from, to) = row.packages().unwrap_or_default();
        println!(
            "  [{from:>3}-{to:>3}] {} x {} {} @ {} = {} (+{} IGST {})",
            row.quantity, row.unit, row.description, row.rate, row.amount, row.tax_rate, row.tax_amount
        );
    }
    let totals = form.totals();
    println!("---");
    println!("Export:  {} {}", totals.total_export_value, header.currency);
    println!("IGST:    {} {}", totals.total_tax_value, header.currency);
    println!("Invoice: {} {}", totals.total_invoice_value, header.currency);
    println!("Boxes:   {}", totals.number_of_boxes);
    println!("Words:   {}", totals.amount_in_words);

    match form.submit(&header) {
        Ok(record) => match payload::to_json_pretty(&record) {
            Ok(json) => println!("\nPOST body:\n{json}"),
            Err(e) => println!("Encoding failed: {e}"),
        },
        Err(e) => println!("Submission rejected: {e}"),
    }
}
