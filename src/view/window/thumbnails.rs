//! Thumbnail list presentation
//!
//! The window shows one row per tracked client thumbnail. Descriptors are
//! owned by the controller; the list holds shared references for display
//! and never constructs or destroys them. A revision counter stands in for
//! redraw requests: every content mutation that needs a repaint bumps it
//! exactly once, so batched operations cost one repaint and empty
//! operations cost none.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::widgets::ListState;

use crate::view::controls::FocusState;

/// Identifier of a tracked client thumbnail. In the parent system this is
/// the native window handle of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThumbnailId(pub u64);

impl std::fmt::Display for ThumbnailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Capability set a list row needs from a thumbnail descriptor.
pub trait ThumbnailDescription {
    /// Display title of the client window
    fn title(&self) -> String;
    /// Stable identifier of the client window
    fn id(&self) -> ThumbnailId;
    /// Whether the user switched this thumbnail off
    fn is_disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);
}

/// Shared reference to a controller-owned descriptor
pub type ThumbnailRef = Rc<RefCell<dyn ThumbnailDescription>>;

/// List presentation state for the tracked thumbnails
#[derive(Default)]
pub struct ThumbnailListState {
    entries: Vec<ThumbnailRef>,
    /// Cursor for the list widget
    pub cursor: ListState,
    /// Focus state of the list pane
    pub focus: FocusState,
    revision: u64,
}

impl ThumbnailListState {
    /// Append entries to the end of the list. An empty batch is a no-op
    /// and does not request a repaint.
    pub fn add(&mut self, entries: &[ThumbnailRef]) {
        if entries.is_empty() {
            return;
        }
        self.entries.extend(entries.iter().cloned());
        if self.cursor.selected().is_none() {
            self.cursor.select(Some(0));
        }
        self.revision += 1;
    }

    /// Request a repaint for in-place descriptor edits. Membership is not
    /// touched; rows re-read their descriptors on the next draw, so there
    /// is nothing to diff here.
    pub fn update(&mut self, entries: &[ThumbnailRef]) {
        if entries.is_empty() {
            return;
        }
        self.revision += 1;
    }

    /// Remove entries by identity. Unknown entries are skipped. An empty
    /// batch is a no-op and does not request a repaint.
    pub fn remove(&mut self, entries: &[ThumbnailRef]) {
        if entries.is_empty() {
            return;
        }
        self.entries
            .retain(|kept| !entries.iter().any(|gone| Rc::ptr_eq(kept, gone)));
        match self.cursor.selected() {
            Some(_) if self.entries.is_empty() => self.cursor.select(None),
            Some(index) if index >= self.entries.len() => {
                self.cursor.select(Some(self.entries.len() - 1));
            }
            _ => {}
        }
        self.revision += 1;
    }

    pub fn entries(&self) -> &[ThumbnailRef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of repaints requested so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.cursor.selected() {
            Some(index) => (index + 1).min(self.entries.len() - 1),
            None => 0,
        };
        self.cursor.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let previous = self.cursor.selected().map_or(0, |i| i.saturating_sub(1));
        self.cursor.select(Some(previous));
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.entries.len() {
            self.cursor.select(Some(index));
        }
    }

    /// Flip the disabled flag of the row under the cursor, writing through
    /// to the shared descriptor, and report its identifier. A cursor that
    /// resolves to no row yields `None` and mutates nothing.
    pub fn toggle_selected(&mut self) -> Option<ThumbnailId> {
        let entry = self.entries.get(self.cursor.selected()?)?;
        let mut descriptor = entry.borrow_mut();
        let disabled = !descriptor.is_disabled();
        descriptor.set_disabled(disabled);
        let id = descriptor.id();
        drop(descriptor);
        self.revision += 1;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeThumbnail {
        title: String,
        id: ThumbnailId,
        disabled: bool,
    }

    impl FakeThumbnail {
        fn entry(title: &str, id: u64) -> ThumbnailRef {
            Rc::new(RefCell::new(FakeThumbnail {
                title: title.to_string(),
                id: ThumbnailId(id),
                disabled: false,
            }))
        }
    }

    impl ThumbnailDescription for FakeThumbnail {
        fn title(&self) -> String {
            self.title.clone()
        }
        fn id(&self) -> ThumbnailId {
            self.id
        }
        fn is_disabled(&self) -> bool {
            self.disabled
        }
        fn set_disabled(&mut self, disabled: bool) {
            self.disabled = disabled;
        }
    }

    #[test]
    fn empty_batches_do_not_request_repaints() {
        let mut list = ThumbnailListState::default();
        list.add(&[]);
        list.update(&[]);
        list.remove(&[]);
        assert_eq!(list.revision(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn batched_add_requests_one_repaint() {
        let mut list = ThumbnailListState::default();
        let entries = vec![
            FakeThumbnail::entry("Alpha", 1),
            FakeThumbnail::entry("Beta", 2),
            FakeThumbnail::entry("Gamma", 3),
        ];
        list.add(&entries);
        assert_eq!(list.len(), 3);
        assert_eq!(list.revision(), 1);
        assert_eq!(list.cursor.selected(), Some(0));
    }

    #[test]
    fn add_then_remove_same_entries_empties_the_list() {
        let mut list = ThumbnailListState::default();
        let entries = vec![
            FakeThumbnail::entry("Alpha", 1),
            FakeThumbnail::entry("Beta", 2),
        ];
        list.add(&entries);
        list.remove(&entries);
        assert!(list.is_empty());
        assert_eq!(list.cursor.selected(), None);
    }

    #[test]
    fn remove_by_identity_not_by_title() {
        let mut list = ThumbnailListState::default();
        let kept = FakeThumbnail::entry("Alpha", 1);
        let twin = FakeThumbnail::entry("Alpha", 1);
        list.add(std::slice::from_ref(&kept));
        list.remove(std::slice::from_ref(&twin));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_unknown_entry_is_skipped() {
        let mut list = ThumbnailListState::default();
        let known = FakeThumbnail::entry("Alpha", 1);
        let unknown = FakeThumbnail::entry("Beta", 2);
        list.add(std::slice::from_ref(&known));
        list.remove(std::slice::from_ref(&unknown));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn update_with_entries_requests_one_repaint() {
        let mut list = ThumbnailListState::default();
        let entries = vec![FakeThumbnail::entry("Alpha", 1)];
        list.add(&entries);
        let before = list.revision();
        list.update(&entries);
        assert_eq!(list.revision(), before + 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn toggle_selected_writes_through_and_reports_id() {
        let mut list = ThumbnailListState::default();
        let entry = FakeThumbnail::entry("Alpha", 0xbeef);
        list.add(std::slice::from_ref(&entry));
        let id = list.toggle_selected();
        assert_eq!(id, Some(ThumbnailId(0xbeef)));
        assert!(entry.borrow().is_disabled());
        let id = list.toggle_selected();
        assert_eq!(id, Some(ThumbnailId(0xbeef)));
        assert!(!entry.borrow().is_disabled());
    }

    #[test]
    fn toggle_with_no_selection_is_ignored() {
        let mut list = ThumbnailListState::default();
        assert_eq!(list.toggle_selected(), None);
        assert_eq!(list.revision(), 0);
    }

    #[test]
    fn cursor_clamps_after_tail_removal() {
        let mut list = ThumbnailListState::default();
        let entries = vec![
            FakeThumbnail::entry("Alpha", 1),
            FakeThumbnail::entry("Beta", 2),
        ];
        list.add(&entries);
        list.select_next();
        assert_eq!(list.cursor.selected(), Some(1));
        list.remove(std::slice::from_ref(&entries[1]));
        assert_eq!(list.cursor.selected(), Some(0));
    }
}
