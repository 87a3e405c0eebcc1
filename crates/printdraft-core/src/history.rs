//! Snapshot-based undo/redo history.

use crate::document::DesignDocument;

/// Default maximum number of history entries to keep.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Linear history of document snapshots with a cursor.
///
/// Entry 0 is the document the session started from. The entry under the
/// cursor always equals the live document outside of an open transaction.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<DesignDocument>,
    cursor: usize,
    capacity: usize,
    /// Open transaction depth. Recording is deferred while non-zero.
    depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DesignDocument::new(), DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Start a history seeded with `initial`. A capacity of zero is treated as one.
    pub fn new(initial: DesignDocument, capacity: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            capacity: capacity.max(1),
            depth: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &DesignDocument {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn in_transaction(&self) -> bool {
        self.depth > 0
    }

    /// Number of open transaction levels.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Record `doc` as the newest entry.
    ///
    /// Does nothing if `doc` equals the entry under the cursor or a
    /// transaction is open. Returns true if an entry was added.
    pub fn record(&mut self, doc: &DesignDocument) -> bool {
        if self.in_transaction() || self.current() == doc {
            return false;
        }

        // A new edit discards the redo branch.
        self.entries.truncate(self.cursor + 1);
        self.entries.push(doc.clone());
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
            self.cursor = self.cursor.saturating_sub(1);
        }
        log::debug!("History recorded entry {} of {}", self.cursor, self.entries.len());
        true
    }

    /// Step back. Returns the snapshot to restore, or `None` at the start.
    pub fn undo(&mut self) -> Option<&DesignDocument> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        log::debug!("Undo to entry {}", self.cursor);
        Some(&self.entries[self.cursor])
    }

    /// Step forward. Returns the snapshot to restore, or `None` at the end.
    pub fn redo(&mut self) -> Option<&DesignDocument> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        log::debug!("Redo to entry {}", self.cursor);
        Some(&self.entries[self.cursor])
    }

    /// Drop every entry and start over from `doc`.
    pub fn reset(&mut self, doc: DesignDocument) {
        self.entries = vec![doc];
        self.cursor = 0;
        self.depth = 0;
    }

    pub fn begin_transaction(&mut self) {
        self.depth += 1;
    }

    /// Close one transaction level. When the outermost level closes, `doc`
    /// is recorded. Returns true if an entry was added.
    pub fn commit_transaction(&mut self, doc: &DesignDocument) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;
        if self.depth > 0 {
            return false;
        }
        self.record(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::element::{DesignElement, ElementKind, ShapeVariant};

    fn with_element(doc: &DesignDocument, id: &str) -> DesignDocument {
        let element = DesignElement::new(id, ElementKind::shape(ShapeVariant::Star));
        Command::AddElement { element }.apply(doc).unwrap()
    }

    #[test]
    fn test_seeded_with_initial() {
        let history = History::default();
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_skips_unchanged() {
        let mut history = History::default();
        assert!(!history.record(&DesignDocument::new()));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_undo_redo() {
        let d0 = DesignDocument::new();
        let d1 = with_element(&d0, "a");
        let mut history = History::new(d0.clone(), 10);
        history.record(&d1);

        assert_eq!(history.undo(), Some(&d0));
        assert!(history.undo().is_none());
        assert_eq!(history.redo(), Some(&d1));
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_record_after_undo_truncates() {
        let d0 = DesignDocument::new();
        let d1 = with_element(&d0, "a");
        let d2 = with_element(&d1, "b");
        let d3 = with_element(&d1, "c");
        let mut history = History::new(d0, 10);
        history.record(&d1);
        history.record(&d2);
        history.undo();
        history.record(&d3);

        assert_eq!(history.len(), 3);
        assert!(!history.can_redo());
        assert_eq!(history.current(), &d3);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut doc = DesignDocument::new();
        let mut history = History::new(doc.clone(), 3);
        for i in 0..5 {
            doc = with_element(&doc, &format!("e{i}"));
            history.record(&doc);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), &doc);
        assert!(history.undo().is_some());
        assert!(history.undo().is_some());
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut history = History::new(DesignDocument::new(), 0);
        assert_eq!(history.capacity(), 1);
        let doc = with_element(&DesignDocument::new(), "a");
        history.record(&doc);
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), &doc);
    }

    #[test]
    fn test_nested_transactions_record_once() {
        let d0 = DesignDocument::new();
        let d1 = with_element(&d0, "a");
        let d2 = with_element(&d1, "b");
        let mut history = History::new(d0, 10);

        history.begin_transaction();
        history.begin_transaction();
        assert!(!history.record(&d1));
        assert!(!history.commit_transaction(&d1));
        assert!(history.in_transaction());
        assert!(history.commit_transaction(&d2));
        assert_eq!(history.len(), 2);
        assert!(!history.commit_transaction(&d2));
    }

    #[test]
    fn test_reset() {
        let d1 = with_element(&DesignDocument::new(), "a");
        let mut history = History::default();
        history.record(&d1);
        history.begin_transaction();
        history.reset(d1.clone());
        assert_eq!(history.len(), 1);
        assert!(!history.in_transaction());
        assert_eq!(history.current(), &d1);
    }
}
