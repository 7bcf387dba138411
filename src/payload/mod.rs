//! Submission record: the JSON body a form posts to its backend.
//!
//! Field names follow the form (`invoiceNumber`, `totalGstValue`,
//! `items[].igstAmount`, ...). Money is written as decimal strings with two
//! places, package numbers as JSON numbers. Decoding is as forgiving as the
//! form itself: numeric strings, numbers and blanks are all accepted, and
//! anything unusable falls back to the same defaults the form applies.
//!
//! # Example
//!
//! ```
//! use packlist::core::*;
//! use packlist::payload::*;
//! use rust_decimal_macros::dec;
//!
//! let mut rows = vec![
//!     LineItemBuilder::new("Valves", dec!(10), "PCS", dec!(150.00))
//!         .tax(IgstRate::Eighteen)
//!         .packages(1, 1)
//!         .build(),
//! ];
//! let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &PlaceholderWords::default());
//! let header = ExportHeaderBuilder::new("ZC-001", "2024-06-15").build().unwrap();
//!
//! let json = to_json(&build_payload(&header, &rows, &totals)).unwrap();
//! assert!(json.contains(r#""totalInvoiceValue":"1770.00""#));
//!
//! let back = from_json(&json).unwrap();
//! assert_eq!(back.number_of_boxes, 1);
//! assert_eq!(back.items[0].igst_percent, IgstRate::Eighteen);
//! ```

mod lenient;
mod record;

pub use record::{
    InvoicePayload, PayloadItem, build_payload, from_json, to_json, to_json_pretty,
};
