/// Row identifier generator for one form session.
///
/// Generates ids in the format `{prefix}{n}`, e.g. "row-1", "row-2", etc.
/// Ids are never reused, so a deleted row's id does not come back when a
/// new row is appended.
#[derive(Debug, Clone)]
pub struct RowIdSequence {
    prefix: String,
    next_number: u64,
}

impl RowIdSequence {
    /// Create a sequence starting at 1 with the "row-" prefix.
    pub fn new() -> Self {
        Self::starting_at("row-", 1)
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next_number,
        }
    }

    /// Generate the next row id.
    pub fn next_id(&mut self) -> String {
        let id = self.peek();
        self.next_number += 1;
        id
    }

    /// Preview the next id without consuming it.
    pub fn peek(&self) -> String {
        format!("{}{}", self.prefix, self.next_number)
    }

    /// Get the next number that will be issued (without prefix).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Make sure ids already in use (e.g. from a loaded form) are never
    /// issued again. Ids with another prefix are ignored.
    pub fn skip_past<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            if let Some(n) = id
                .strip_prefix(self.prefix.as_str())
                .and_then(|n| n.parse::<u64>().ok())
            {
                self.next_number = self.next_number.max(n.saturating_add(1));
            }
        }
    }
}

impl Default for RowIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids() {
        let mut seq = RowIdSequence::new();
        assert_eq!(seq.next_id(), "row-1");
        assert_eq!(seq.next_id(), "row-2");
        assert_eq!(seq.next_id(), "row-3");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = RowIdSequence::new();
        assert_eq!(seq.peek(), "row-1");
        assert_eq!(seq.peek(), "row-1");
        assert_eq!(seq.next_id(), "row-1");
        assert_eq!(seq.peek(), "row-2");
        assert_eq!(seq.next_raw(), 2);
    }

    #[test]
    fn starting_at() {
        let mut seq = RowIdSequence::starting_at("item-", 42);
        assert_eq!(seq.next_id(), "item-42");
        assert_eq!(seq.next_id(), "item-43");
    }

    #[test]
    fn skip_past_loaded_ids() {
        let mut seq = RowIdSequence::new();
        seq.skip_past(["row-4", "row-2", "other-99", "row-x"]);
        assert_eq!(seq.next_id(), "row-5");
    }
}
