//! # packlist
//!
//! Export invoice and packing list engine: keeps the package ranges of
//! line items contiguous, derives per-row and invoice-level IGST totals, and
//! produces the JSON record a form submits to its backend.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Stored amounts are rounded half-up to two places at the point of storage.
//!
//! ## Quick Start
//!
//! ```rust
//! use packlist::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut rows = vec![
//!     LineItemBuilder::new("Industrial Valves - DN50", dec!(10), "PCS", dec!(150.00))
//!         .tax(IgstRate::Eighteen)
//!         .packages(1, 1)
//!         .build(),
//! ];
//!
//! let config = SequencerConfig::default();
//! resequence(&mut rows, None, &config);
//! let totals = recompute(&mut rows, &InvoiceTotals::default(), false, &PlaceholderWords::default());
//!
//! assert_eq!(rows[0].amount, dec!(1500.00));
//! assert_eq!(totals.total_tax_value, dec!(270.00));
//! assert_eq!(totals.total_invoice_value, dec!(1770.00));
//! assert_eq!(totals.number_of_boxes, 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Row and totals types, package sequencer, totals engine, validation |
//! | `form` | `FormSession` controller owning rows, row ids and the words override |
//! | `payload` | JSON submission record encode/decode |
//! | `table` | Print-table preparation (row indices, middle row) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "form")]
pub mod form;

#[cfg(feature = "payload")]
pub mod payload;

#[cfg(feature = "table")]
pub mod table;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
