//! Print-table preparation.
//!
//! The printed invoice lists rows with 1-based numbers and writes the IGST
//! summary once, against the row in the middle of the table. This module
//! computes that layout from the stored rows; rendering is left to the host.
//!
//! ```
//! use packlist::core::*;
//! use packlist::table::*;
//! use rust_decimal_macros::dec;
//!
//! let rows: Vec<LineItem> = (0..5)
//!     .map(|_| LineItemBuilder::new("Item", dec!(1), "PCS", dec!(10)).build())
//!     .collect();
//! let layout = prepare_table_rows(&rows, Some("50.00"), Some("18"), None);
//!
//! assert_eq!(layout.middle_row, 3);
//! assert!(layout.rows[2].is_middle_row);
//! assert_eq!(layout.igst_amount, "0.00");
//! ```

mod layout;

pub use layout::{TableLayout, TableRow, middle_row, prepare_table_rows};
