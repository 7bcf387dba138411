use std::fmt;

use tracing::{debug, warn};

use crate::core::input::{parse_amount, parse_package_bound};
use crate::core::*;

/// Editing state of one invoice form.
///
/// Holds the ordered rows, the current totals, the row id counter and the
/// sticky "amount in words" override. All mutation goes through `&mut self`,
/// so events are applied one at a time and always run to completion.
pub struct FormSession {
    rows: Vec<LineItem>,
    totals: InvoiceTotals,
    words_overridden: bool,
    row_ids: RowIdSequence,
    config: SequencerConfig,
    words: Box<dyn AmountInWords>,
}

impl fmt::Debug for FormSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSession")
            .field("rows", &self.rows)
            .field("totals", &self.totals)
            .field("words_overridden", &self.words_overridden)
            .field("row_ids", &self.row_ids)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FormSession {
    /// Start a form with one row covering package 1, using the placeholder
    /// amount-in-words formatter.
    pub fn new(config: SequencerConfig) -> Self {
        Self::with_words(config, PlaceholderWords::default())
    }

    /// Start a form with one row covering package 1 and a custom
    /// amount-in-words formatter.
    pub fn with_words(config: SequencerConfig, words: impl AmountInWords + 'static) -> Self {
        let mut row_ids = RowIdSequence::new();
        let first = LineItemBuilder::blank()
            .id(row_ids.next_id())
            .packages(1, 1)
            .build();
        let mut session = Self {
            rows: vec![first],
            totals: InvoiceTotals::default(),
            words_overridden: false,
            row_ids,
            config,
            words: Box::new(words),
        };
        session.refresh(None);
        session
    }

    /// Replace all rows, e.g. when reopening a saved invoice. Ranges are
    /// resynced, totals recomputed, and the words override is cleared.
    /// Rows without an id get a fresh one.
    pub fn load(&mut self, rows: Vec<LineItem>) -> Result<(), PacklistError> {
        if rows.is_empty() {
            return Err(PacklistError::Builder("a form needs at least one row".into()));
        }
        self.row_ids.skip_past(rows.iter().map(|row| row.id.as_str()));
        self.rows = rows;
        for row in &mut self.rows {
            if row.id.is_empty() {
                row.id = self.row_ids.next_id();
            }
        }
        self.words_overridden = false;
        debug!(rows = self.rows.len(), "form loaded");
        self.refresh(None);
        Ok(())
    }

    /// Append a blank row continuing the package sequence with the default
    /// width. Returns the new row's index.
    pub fn add_row(&mut self) -> usize {
        let (from, to) = next_range(&self.rows, &self.config);
        let row = LineItemBuilder::blank()
            .id(self.row_ids.next_id())
            .packages(from, to)
            .build();
        debug!(id = %row.id, from, to, "row added");
        self.rows.push(row);
        self.refresh(None);
        self.rows.len() - 1
    }

    /// Remove the last row. Fails when it is the only row.
    pub fn remove_last_row(&mut self) -> Result<LineItem, PacklistError> {
        let last = self.rows.len().saturating_sub(1);
        self.delete_row(last)
    }

    /// Delete the row at `index` and close the gap it leaves.
    /// Fails when it is the only row.
    pub fn delete_row(&mut self, index: usize) -> Result<LineItem, PacklistError> {
        self.check_index(index)?;
        if self.rows.len() == 1 {
            warn!("refused to delete the last remaining row");
            return Err(PacklistError::LastRow);
        }
        let removed = self.rows.remove(index);
        debug!(id = %removed.id, index, "row deleted");
        self.refresh(None);
        Ok(removed)
    }

    /// Apply text typed into a row's from/to field. Invalid input becomes 1;
    /// if the range inverts, the other endpoint follows the edited one.
    /// Later rows shift to stay contiguous.
    pub fn edit_package_bound(
        &mut self,
        index: usize,
        field: RangeField,
        raw: &str,
    ) -> Result<(), PacklistError> {
        let value = parse_package_bound(raw);
        let row = self.row_mut(index)?;
        normalize_edit(row, field, value);
        debug!(index, ?field, value, "package bound edited");
        self.refresh(Some(index));
        Ok(())
    }

    /// Apply text typed into a row's quantity field.
    pub fn set_quantity(&mut self, index: usize, raw: &str) -> Result<(), PacklistError> {
        self.row_mut(index)?.quantity = parse_amount(raw);
        self.recalculate();
        Ok(())
    }

    /// Apply text typed into a row's rate field.
    pub fn set_rate(&mut self, index: usize, raw: &str) -> Result<(), PacklistError> {
        self.row_mut(index)?.rate = parse_amount(raw);
        self.recalculate();
        Ok(())
    }

    pub fn set_tax_rate(&mut self, index: usize, rate: IgstRate) -> Result<(), PacklistError> {
        self.row_mut(index)?.tax_rate = rate;
        self.recalculate();
        Ok(())
    }

    pub fn set_description(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), PacklistError> {
        self.row_mut(index)?.description = text.into();
        Ok(())
    }

    pub fn set_unit(&mut self, index: usize, text: impl Into<String>) -> Result<(), PacklistError> {
        self.row_mut(index)?.unit = text.into();
        Ok(())
    }

    /// The user typed into the amount-in-words field. From now on totals
    /// recomputation leaves that text alone.
    pub fn override_amount_in_words(&mut self, text: impl Into<String>) {
        self.totals.amount_in_words = text.into();
        if !self.words_overridden {
            debug!("amount in words overridden by user");
        }
        self.words_overridden = true;
    }

    /// Drop the override and derive the words from the invoice value again.
    pub fn reset_words_override(&mut self) {
        self.words_overridden = false;
        self.recalculate();
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&LineItem> {
        self.rows.get(index)
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    pub fn words_overridden(&self) -> bool {
        self.words_overridden
    }

    pub fn number_of_boxes(&self) -> u32 {
        self.totals.number_of_boxes
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Id the next appended row will get.
    pub fn next_row_id(&self) -> String {
        self.row_ids.peek()
    }

    /// Run the pre-submission checks against `header`.
    pub fn validate(&self, header: &ExportHeader) -> Vec<ValidationError> {
        validate_submission(header, &self.rows, &self.totals)
    }

    /// Build the submission record for `header`.
    #[cfg(feature = "payload")]
    pub fn to_payload(&self, header: &ExportHeader) -> crate::payload::InvoicePayload {
        crate::payload::build_payload(header, &self.rows, &self.totals)
    }

    /// Validate, then build the submission record. All problems are
    /// reported together in one [`PacklistError::Validation`].
    #[cfg(feature = "payload")]
    pub fn submit(
        &self,
        header: &ExportHeader,
    ) -> Result<crate::payload::InvoicePayload, PacklistError> {
        let errors = self.validate(header);
        if !errors.is_empty() {
            warn!(errors = errors.len(), "submission rejected");
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(PacklistError::Validation(messages.join("; ")));
        }
        Ok(self.to_payload(header))
    }

    fn check_index(&self, index: usize) -> Result<(), PacklistError> {
        if index >= self.rows.len() {
            return Err(PacklistError::RowIndex {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut LineItem, PacklistError> {
        self.check_index(index)?;
        Ok(&mut self.rows[index])
    }

    /// Sequencer, then totals.
    fn refresh(&mut self, edited: Option<usize>) {
        resequence(&mut self.rows, edited, &self.config);
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.totals = recompute(
            &mut self.rows,
            &self.totals,
            self.words_overridden,
            self.words.as_ref(),
        );
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}
