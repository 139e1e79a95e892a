//! Linear undo/redo timeline over the composite editor state.
//!
//! The engine coordinates edits to the independently-edited property groups
//! through a single timeline: an ordered `past`, one `present`, and an
//! ordered `future`. Each push targets exactly one group (a [`GroupChange`]);
//! the other groups keep their resolved values, so undoing interleaved edits
//! to different groups restores each group correctly.
//!
//! `present` is resolved eagerly on every transition, which makes it the
//! authoritative current value for every group at all times. `past` and
//! `future` never alias `present`; pushing clones the snapshot.

use crate::constants::MAX_UNDO_HISTORY;
use crate::types::{EditorState, GroupChange, Patch};

/// Listener invoked synchronously after each committed transition.
type Listener = Box<dyn FnMut(&EditorState)>;

/// Manages the linear undo/redo history for one editing session.
pub struct HistoryEngine {
    /// Snapshots preceding `present`, oldest first.
    past: Vec<EditorState>,
    /// The authoritative current state, always fully resolved.
    present: EditorState,
    /// Snapshots undone from `present`, nearest first.
    future: Vec<EditorState>,
    listeners: Vec<Listener>,
}

impl HistoryEngine {
    /// Creates an engine whose present is `initial`, with empty past and
    /// future. The timeline lives for the duration of one editing session.
    pub fn new(initial: EditorState) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Returns the resolved current state.
    pub fn present(&self) -> &EditorState {
        &self.present
    }

    /// Returns true if there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns true if there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Commits a single-group edit as a new history entry.
    ///
    /// The patch is merged over the present value of its group; every other
    /// group is carried over unchanged. The previous present moves to the end
    /// of `past` and `future` is cleared: a fresh edit invalidates anything
    /// previously undone.
    pub fn push(&mut self, change: GroupChange) {
        let mut next = self.present.clone();
        match &change {
            GroupChange::Icon(patch) => next.icon = patch.apply_to(&self.present.icon),
            GroupChange::Background(patch) => {
                next.background = patch.apply_to(&self.present.background);
            }
        }

        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();

        // Limit history size
        if self.past.len() > MAX_UNDO_HISTORY {
            self.past.remove(0);
        }

        self.notify();
    }

    /// Steps the timeline back by one entry.
    ///
    /// Returns false (and changes nothing) when `past` is empty; that is a
    /// silent no-op, not an error.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let old_present = std::mem::replace(&mut self.present, previous);
        self.future.insert(0, old_present);
        self.notify();
        true
    }

    /// Steps the timeline forward by one entry; symmetric to [`undo`].
    ///
    /// Returns false (and changes nothing) when `future` is empty.
    ///
    /// [`undo`]: HistoryEngine::undo
    pub fn redo(&mut self) -> bool {
        if self.future.is_empty() {
            return false;
        }
        let next = self.future.remove(0);
        let old_present = std::mem::replace(&mut self.present, next);
        self.past.push(old_present);
        self.notify();
        true
    }

    /// Registers a listener invoked synchronously after each committed
    /// push/undo/redo.
    pub fn subscribe(&mut self, listener: impl FnMut(&EditorState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.present);
        }
    }
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new(EditorState::default())
    }
}

impl std::fmt::Debug for HistoryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryEngine")
            .field("past", &self.past.len())
            .field("present", &self.present)
            .field("future", &self.future.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BackgroundPatch, IconPatch};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn icon_size(engine: &HistoryEngine) -> f32 {
        engine.present().icon.size
    }

    fn border_radius(engine: &HistoryEngine) -> f32 {
        engine.present().background.border_radius
    }

    #[test]
    fn push_updates_only_the_touched_group() {
        let mut engine = HistoryEngine::default();
        engine.push(GroupChange::Icon(IconPatch::size(64.0)));

        assert_eq!(icon_size(&engine), 64.0);
        assert_eq!(border_radius(&engine), 8.0, "other group keeps defaults");
    }

    #[test]
    fn push_clears_future() {
        let mut engine = HistoryEngine::default();
        engine.push(GroupChange::Icon(IconPatch::size(64.0)));
        engine.undo();
        assert!(engine.can_redo());

        engine.push(GroupChange::Icon(IconPatch::size(96.0)));
        assert!(!engine.can_redo(), "a fresh edit invalidates redo");
    }

    #[test]
    fn undo_redo_on_empty_sides_are_no_ops() {
        let mut engine = HistoryEngine::default();
        let before = engine.present().clone();

        assert!(!engine.can_undo());
        assert!(!engine.undo());
        assert_eq!(engine.present(), &before);

        assert!(!engine.can_redo());
        assert!(!engine.redo());
        assert_eq!(engine.present(), &before);
    }

    #[test]
    fn undo_then_redo_round_trips_interleaved_pushes() {
        let mut engine = HistoryEngine::default();
        let pushes = [
            GroupChange::Icon(IconPatch::size(64.0)),
            GroupChange::Background(BackgroundPatch::border_radius(20.0)),
            GroupChange::Icon(IconPatch::size(96.0)),
            GroupChange::Background(BackgroundPatch::gradient_angle(90.0)),
        ];
        for change in pushes.clone() {
            engine.push(change);
        }
        let final_state = engine.present().clone();

        for _ in 0..pushes.len() {
            assert!(engine.undo());
        }
        assert_eq!(engine.present(), &EditorState::default());

        for _ in 0..pushes.len() {
            assert!(engine.redo());
        }
        assert_eq!(engine.present(), &final_state);
    }

    #[test]
    fn interleaved_group_edits_resolve_per_group_on_undo() {
        let mut engine = HistoryEngine::default();
        engine.push(GroupChange::Background(BackgroundPatch::border_radius(20.0)));
        engine.push(GroupChange::Icon(IconPatch::size(64.0)));
        engine.push(GroupChange::Icon(IconPatch::size(96.0)));

        assert_eq!((icon_size(&engine), border_radius(&engine)), (96.0, 20.0));

        engine.undo();
        assert_eq!((icon_size(&engine), border_radius(&engine)), (64.0, 20.0));

        engine.undo();
        assert_eq!(
            (icon_size(&engine), border_radius(&engine)),
            (128.0, 20.0),
            "undoing an icon edit must not disturb the background group"
        );

        engine.undo();
        assert_eq!((icon_size(&engine), border_radius(&engine)), (128.0, 8.0));
        assert!(!engine.can_undo());

        engine.redo();
        engine.redo();
        engine.redo();
        assert_eq!((icon_size(&engine), border_radius(&engine)), (96.0, 20.0));
        assert!(!engine.can_redo());
    }

    #[test]
    fn history_is_capped() {
        let mut engine = HistoryEngine::default();
        for i in 0..(MAX_UNDO_HISTORY + 10) {
            engine.push(GroupChange::Icon(IconPatch::rotation(i as f32)));
        }

        let mut undone = 0;
        while engine.undo() {
            undone += 1;
        }
        assert_eq!(undone, MAX_UNDO_HISTORY);
    }

    #[test]
    fn listeners_see_each_committed_transition() {
        let seen: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));
        let mut engine = HistoryEngine::default();
        let sink = Rc::clone(&seen);
        engine.subscribe(move |state: &EditorState| sink.borrow_mut().push(state.icon.size));

        engine.push(GroupChange::Icon(IconPatch::size(64.0)));
        engine.undo();
        engine.redo();
        assert_eq!(*seen.borrow(), vec![64.0, 128.0, 64.0]);
    }
}
