//! Form session: the controller that owns the row list.
//!
//! A [`FormSession`] turns UI events (row added, removed, field edited) into
//! calls to the core. Each event runs the sequencer first when a package
//! boundary may have moved, then the totals engine, before returning.
//!
//! # Example
//!
//! ```
//! use packlist::core::*;
//! use packlist::form::FormSession;
//! use rust_decimal_macros::dec;
//!
//! let mut form = FormSession::new(SequencerConfig::export_invoice());
//! form.set_quantity(0, "10").unwrap();
//! form.set_rate(0, "150.00").unwrap();
//! form.set_tax_rate(0, IgstRate::Eighteen).unwrap();
//!
//! form.add_row();
//! assert_eq!(form.rows()[1].packages(), Some((2, 11)));
//! assert_eq!(form.totals().total_invoice_value, dec!(1770.00));
//! assert_eq!(form.totals().number_of_boxes, 11);
//! ```

mod session;

pub use session::FormSession;
