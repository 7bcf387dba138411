//! Core row types, package sequencing, and totals.
//!
//! This module provides the data model of an export invoice / packing list
//! and the two pure transformations over it: the [`resequence`] pass that
//! keeps package ranges contiguous and the [`recompute`] pass that derives
//! row amounts and invoice totals.

mod builder;
pub mod currencies;
mod error;
pub mod input;
mod row_ids;
mod sequencer;
mod totals;
mod types;
mod validation;
mod words;

pub use builder::*;
pub use currencies::is_known_currency_code;
pub use error::*;
pub use row_ids::*;
pub use sequencer::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
pub use words::*;
