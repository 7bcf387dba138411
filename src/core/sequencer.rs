use serde::{Deserialize, Serialize};
use tracing::trace;

use super::types::{LineItem, MAX_PACKAGE_NUMBER, RangeField};

/// Default row width of the export invoice form (packages 1-10, 11-20, ...).
pub const EXPORT_INVOICE_WIDTH: u32 = 10;

/// Default row width of the packing list form (packages 1-7, 8-14, ...).
pub const PACKING_LIST_WIDTH: u32 = 7;

/// What happens to rows above the one being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditPolicy {
    /// Rows before the edited one keep their stored end; an edit never
    /// retroactively moves earlier rows.
    FreezePreceding,
    /// Rows before the edited one are resynced like any other row,
    /// preserving their width.
    ResyncAll,
}

/// Sequencer settings.
///
/// ```
/// use packlist::core::*;
///
/// let config = SequencerConfig::packing_list().with_default_width(5);
/// assert_eq!(config.default_width, 5);
/// assert_eq!(config.edit_policy, EditPolicy::ResyncAll);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Width given to rows whose stored range is missing or invalid, and to
    /// newly appended rows. Zero is treated as 1.
    pub default_width: u32,
    /// Treatment of rows preceding an edited row.
    pub edit_policy: EditPolicy,
}

impl SequencerConfig {
    /// Export invoice form: width 10, earlier rows frozen on edit.
    pub fn export_invoice() -> Self {
        Self {
            default_width: EXPORT_INVOICE_WIDTH,
            edit_policy: EditPolicy::FreezePreceding,
        }
    }

    /// Packing list form: width 7, every row resynced.
    pub fn packing_list() -> Self {
        Self {
            default_width: PACKING_LIST_WIDTH,
            edit_policy: EditPolicy::ResyncAll,
        }
    }

    /// Override the fallback width.
    pub fn with_default_width(mut self, width: u32) -> Self {
        self.default_width = width;
        self
    }

    /// Override the edit policy.
    pub fn with_edit_policy(mut self, policy: EditPolicy) -> Self {
        self.edit_policy = policy;
        self
    }

    fn fallback_width(&self) -> u32 {
        self.default_width.clamp(1, MAX_PACKAGE_NUMBER)
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::export_invoice()
    }
}

/// Make package ranges contiguous: the first row starts at 1 and every row
/// starts right after the previous row's end.
///
/// `edited` names the row the user just changed (`None` after a delete,
/// an append, or a bulk load). The edited row keeps its stored end (raised to
/// its new start if needed); every other row keeps its width, falling back to
/// [`SequencerConfig::default_width`] when its stored range is missing or
/// invalid. Only `package_from` / `package_to` are touched.
///
/// Returns the last package number (0 for an empty list).
pub fn resequence(rows: &mut [LineItem], edited: Option<usize>, config: &SequencerConfig) -> u32 {
    let edited = edited.filter(|&i| i < rows.len());
    let fallback = config.fallback_width();
    let mut cursor: u32 = 1;
    let mut last_package = 0;

    for (index, row) in rows.iter_mut().enumerate() {
        let end = match edited {
            Some(e) if index == e => match row.package_to {
                Some(to) if to <= MAX_PACKAGE_NUMBER => to.max(cursor),
                _ => span_end(cursor, fallback),
            },
            Some(e) if index < e && config.edit_policy == EditPolicy::FreezePreceding => {
                match row.package_to {
                    Some(to) if to >= cursor && to <= MAX_PACKAGE_NUMBER => to,
                    _ => span_end(cursor, row.width().unwrap_or(fallback)),
                }
            }
            // Width comes from the stored range, read before `from` moves.
            _ => span_end(cursor, row.width().unwrap_or(fallback)),
        };

        row.package_from = Some(cursor);
        row.package_to = Some(end);
        cursor = end.saturating_add(1);
        last_package = end;
    }

    trace!(
        rows = rows.len(),
        edited = ?edited,
        last_package,
        "package ranges resequenced"
    );
    last_package
}

fn span_end(start: u32, width: u32) -> u32 {
    start.saturating_add(width - 1)
}

/// Apply a single from/to edit and keep `from <= to` by snapping the
/// *other* endpoint to the edited value.
///
/// `value` is expected to be already recovered (see
/// [`input::parse_package_bound`](super::input::parse_package_bound)).
pub fn normalize_edit(row: &mut LineItem, field: RangeField, value: u32) {
    let value = value.clamp(1, MAX_PACKAGE_NUMBER);
    match field {
        RangeField::From => {
            row.package_from = Some(value);
            if row.package_to.is_some_and(|to| to < value) {
                row.package_to = Some(value);
            }
        }
        RangeField::To => {
            row.package_to = Some(value);
            if row.package_from.is_some_and(|from| from > value) {
                row.package_from = Some(value);
            }
        }
    }
}

/// Default range for a row appended after `rows`: continues right after
/// the last row's end and spans the default width.
pub fn next_range(rows: &[LineItem], config: &SequencerConfig) -> (u32, u32) {
    let start = rows
        .last()
        .and_then(|row| row.package_to)
        .unwrap_or(0)
        .saturating_add(1);
    (start, span_end(start, config.fallback_width()))
}
