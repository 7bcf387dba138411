use packlist::core::*;
use packlist::form::FormSession;
use packlist::table::prepare_table_rows;

fn main() {
    tracing_subscriber::fmt::init();

    let mut form = FormSession::new(SequencerConfig::packing_list());
    let items = [
        ("Ball Valves 1\"", "12"),
        ("Gate Valves 2\"", "30"),
        ("Check Valves 3\"", "8"),
        ("Gaskets", "200"),
        ("Stud Bolts", "400"),
    ];
    for (i, (description, quantity)) in items.iter().enumerate() {
        if i > 0 {
            form.add_row();
        }
        form.set_description(i, *description).unwrap();
        form.set_unit(i, "PCS").unwrap();
        form.set_quantity(i, quantity).unwrap();
    }

    // Gaskets ship in a single carton.
    form.edit_package_bound(3, RangeField::To, "22").unwrap();

    let layout = prepare_table_rows(form.rows(), None, Some("0"), None);
    println!("Packing list ({} boxes)", form.number_of_boxes());
    for row in &layout.rows {
        let (from, to) = row.item.packages().unwrap_or_default();
        let marker = if row.is_middle_row { "  <- IGST 0%" } else { "" };
        println!(
            "{:>2}. {from:>3}-{to:<3} {:<20} {:>5} {}{marker}",
            row.row_index, row.item.description, row.item.quantity, row.item.unit
        );
    }
}
