//! The editing session: glue between the per-group property stores and the
//! history engine.
//!
//! An [`EditorSession`] is constructed once per editing session and owned by
//! the application; consumers receive it by reference, there is no ambient
//! singleton. User-driven edits flow store-first (`set`, then a history
//! push); history replay flows the other way (`replace` into each store whose
//! resolved value changed) and never pushes, so undo/redo can never re-enter
//! the timeline.

use crate::history::HistoryEngine;
use crate::store::PropertyStore;
use crate::types::{BackgroundPatch, BackgroundProperties, GroupChange, IconPatch, IconProperties};

/// Coordinates the property stores and the undo/redo timeline for one
/// editing session.
#[derive(Debug)]
pub struct EditorSession {
    history: HistoryEngine,
    icon: PropertyStore<IconProperties>,
    background: PropertyStore<BackgroundProperties>,
    /// Name of the currently selected glyph. Selection is not an undoable
    /// edit and is not part of the history timeline.
    selected_icon: Option<String>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            history: HistoryEngine::default(),
            icon: PropertyStore::default(),
            background: PropertyStore::default(),
            selected_icon: Some("Star".to_string()),
        }
    }
}

impl EditorSession {
    /// Creates a session starting from the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current icon group snapshot.
    pub fn icon(&self) -> &IconProperties {
        self.icon.get()
    }

    /// Current background group snapshot.
    pub fn background(&self) -> &BackgroundProperties {
        self.background.get()
    }

    /// Name of the currently selected glyph, if any.
    pub fn selected_icon(&self) -> Option<&str> {
        self.selected_icon.as_deref()
    }

    /// Selects a glyph by name without touching the history.
    pub fn select_icon(&mut self, name: impl Into<String>) {
        self.selected_icon = Some(name.into());
    }

    /// Applies a user-driven edit to the icon group: merge into the store,
    /// then commit the same patch as a history entry.
    pub fn update_icon(&mut self, patch: IconPatch) {
        self.icon.set(&patch);
        self.history.push(GroupChange::Icon(patch));
    }

    /// Applies a user-driven edit to the background group.
    pub fn update_background(&mut self, patch: BackgroundPatch) {
        self.background.set(&patch);
        self.history.push(GroupChange::Background(patch));
    }

    /// Steps the history back and redistributes the new present into the
    /// stores. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.sync_stores_from_present();
        true
    }

    /// Steps the history forward and redistributes the new present into the
    /// stores. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.sync_stores_from_present();
        true
    }

    /// Returns true if there is anything to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if there is anything to redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Access to the underlying history engine, e.g. to subscribe to
    /// committed transitions.
    pub fn history_mut(&mut self) -> &mut HistoryEngine {
        &mut self.history
    }

    /// Replays the resolved present into each store whose value differs.
    /// Uses `replace`, never `set`: replay must be distinguishable from user
    /// edits so it cannot trigger another push.
    fn sync_stores_from_present(&mut self) {
        let present = self.history.present().clone();
        if self.icon.get() != &present.icon {
            self.icon.replace(present.icon);
        }
        if self.background.get() != &present.background {
            self.background.replace(present.background);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GradientType, ShadowSize};

    #[test]
    fn edits_flow_into_both_store_and_history() {
        let mut session = EditorSession::new();
        session.update_icon(IconPatch::size(64.0));

        assert_eq!(session.icon().size, 64.0);
        assert!(session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn undo_resyncs_only_the_changed_group() {
        let mut session = EditorSession::new();
        session.update_background(BackgroundPatch::border_radius(20.0));
        session.update_icon(IconPatch::size(64.0));

        assert!(session.undo());
        assert_eq!(session.icon().size, 128.0);
        assert_eq!(session.background().border_radius, 20.0);

        assert!(session.undo());
        assert_eq!(session.background().border_radius, 8.0);
    }

    #[test]
    fn replay_does_not_push_new_history() {
        let mut session = EditorSession::new();
        session.update_icon(IconPatch::size(64.0));

        assert!(session.undo());
        // If the store resync re-entered push(), the future would have been
        // cleared and redo would be impossible.
        assert!(session.can_redo());
        assert!(session.redo());
        assert_eq!(session.icon().size, 64.0);
    }

    #[test]
    fn undo_redo_round_trip_restores_the_composite_state() {
        let mut session = EditorSession::new();
        session.update_icon(IconPatch::size(64.0));
        session.update_background(BackgroundPatch::shadow_size(ShadowSize::Lg));
        session.update_icon(IconPatch::fill_color("#ff0000"));
        session.update_background(BackgroundPatch::gradient_type(GradientType::Radial));

        let icon_after = session.icon().clone();
        let background_after = session.background().clone();

        for _ in 0..4 {
            assert!(session.undo());
        }
        assert_eq!(session.icon(), &IconProperties::default());
        assert_eq!(session.background(), &BackgroundProperties::default());

        for _ in 0..4 {
            assert!(session.redo());
        }
        assert_eq!(session.icon(), &icon_after);
        assert_eq!(session.background(), &background_after);
    }

    #[test]
    fn exhausted_undo_redo_report_false() {
        let mut session = EditorSession::new();
        assert!(!session.undo());
        assert!(!session.redo());
    }

    #[test]
    fn selecting_a_glyph_is_not_undoable() {
        let mut session = EditorSession::new();
        session.select_icon("Heart");
        assert_eq!(session.selected_icon(), Some("Heart"));
        assert!(!session.can_undo());
    }
}
