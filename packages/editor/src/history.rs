//! # Undo/Redo History
//!
//! Bounded, linear sequence of [`PageDocument`] snapshots with a single
//! cursor. The snapshot at the cursor is always the builder's active
//! document.
//!
//! ## Design
//!
//! - `push` truncates everything after the cursor (no branching history),
//!   appends, and keeps the cursor on the just-pushed entry
//! - When the cap is exceeded the oldest entry is evicted
//! - `undo`/`redo` only move the cursor; snapshots are never modified
//! - Redo is possible only after undos with no intervening push

use pagecraft_model::PageDocument;

/// Maximum number of retained snapshots.
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo stack of document snapshots.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<PageDocument>,
    cursor: usize,
    max_entries: usize,
}

impl History {
    /// Create a history seeded with the document at builder start.
    pub fn new(initial: PageDocument) -> Self {
        Self::with_max_entries(initial, MAX_HISTORY)
    }

    pub fn with_max_entries(initial: PageDocument, max_entries: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Record a new snapshot, discarding any redo branch.
    pub fn push(&mut self, document: PageDocument) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(document);

        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }

        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back one snapshot. Returns false at the floor.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor forward one snapshot. Returns false at the ceiling.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// The active document.
    pub fn current(&self) -> &PageDocument {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{NavbarPatch, PageDocument};

    fn doc_with_navbar_color(color: &str) -> PageDocument {
        let mut doc = PageDocument::new();
        doc.navbar.merge(NavbarPatch {
            background_color: Some(color.to_string()),
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_initial_state() {
        let history = History::new(PageDocument::new());
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut history = History::new(PageDocument::new());
        let next = doc_with_navbar_color("#000000");
        history.push(next.clone());

        assert!(history.undo());
        assert_eq!(history.current(), &PageDocument::new());
        assert!(history.redo());
        assert_eq!(history.current(), &next);
    }

    #[test]
    fn test_undo_at_floor_is_noop() {
        let mut history = History::new(PageDocument::new());
        assert!(!history.undo());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_push_after_undo_discards_redo_branch() {
        let mut history = History::new(PageDocument::new());
        history.push(doc_with_navbar_color("#111111"));
        history.undo();

        let replacement = doc_with_navbar_color("#222222");
        history.push(replacement.clone());

        // The forward branch is gone.
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.current(), &replacement);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_cap_evicts_oldest_and_keeps_cursor_on_latest() {
        let mut history = History::with_max_entries(PageDocument::new(), 3);

        for i in 0..10 {
            history.push(doc_with_navbar_color(&format!("#{:06x}", i)));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), &doc_with_navbar_color("#000009"));
    }

    #[test]
    fn test_default_cap_is_fifty() {
        let mut history = History::new(PageDocument::new());
        for i in 0..60 {
            history.push(doc_with_navbar_color(&format!("#{:06x}", i)));
        }
        assert_eq!(history.len(), MAX_HISTORY);
    }
}
