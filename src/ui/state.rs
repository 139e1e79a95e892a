//! Application state structures.
//!
//! Only lightweight UI preferences are persisted between runs; the editing
//! session (property stores, history timeline) and all picker drag state are
//! rebuilt fresh each launch — history persistence across sessions is
//! deliberately unsupported.

use crate::color::Rgb;
use crate::picker::PointerDragSession;
use crate::session::EditorSession;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

/// Which property group tab is active in the left panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorTab {
    /// Icon glyph properties.
    Icon,
    /// Background card properties.
    Background,
}

/// Entry mode of a color picker's numeric section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Single hex text field.
    #[default]
    Hex,
    /// Per-channel R/G/B fields.
    Rgb,
}

/// Per-widget state for one color picker instance.
#[derive(Debug, Clone)]
pub struct ColorPickerState {
    /// Drag/hue interaction state for the spectrum surface.
    pub session: PointerDragSession,
    /// Active entry mode (hex or RGB).
    pub mode: ColorMode,
    /// Text buffer for the hex field.
    pub hex_input: String,
    /// Text buffers for the R/G/B fields.
    pub rgb_inputs: [String; 3],
    /// The last authoritative value this widget synced from or emitted.
    /// When the bound value differs, it changed externally (typed hex,
    /// undo/redo) and the session cursor must be re-derived from it.
    pub synced_value: String,
}

impl Default for ColorPickerState {
    fn default() -> Self {
        Self {
            session: PointerDragSession::default(),
            mode: ColorMode::Hex,
            hex_input: String::new(),
            rgb_inputs: [String::new(), String::new(), String::new()],
            synced_value: String::new(),
        }
    }
}

impl ColorPickerState {
    /// Refreshes the text buffers from a resolved color.
    pub fn refresh_inputs(&mut self, color: Rgb) {
        self.hex_input = color.to_hex().to_uppercase();
        self.rgb_inputs = [
            color.r.to_string(),
            color.g.to_string(),
            color.b.to_string(),
        ];
    }
}

/// State of the "Ask AI" suggestion modal.
#[derive(Debug, Default)]
pub struct SuggestState {
    /// Whether the modal is open.
    pub open: bool,
    /// Prompt text buffer.
    pub prompt: String,
    /// Last received suggestion triple.
    pub results: Vec<String>,
    /// Inline advisory message (the only user-visible failure surface).
    pub advisory: Option<String>,
    /// Channel receiving the resolved triple from the worker thread, while a
    /// request is in flight.
    pub pending: Option<Receiver<crate::suggest::Suggestions>>,
}

/// The main application: the editing session plus persisted UI preferences.
///
/// Implements `eframe::App`; all panels and interaction logic live in
/// `ui::mod`.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct StudioApp {
    /// Whether dark mode visuals are enabled.
    pub dark_mode: bool,
    /// Active left-panel tab.
    pub active_tab: EditorTab,
    /// Scale factor applied when rasterizing the PNG export.
    pub png_scale: f32,
    /// The editing session: property stores + history timeline.
    #[serde(skip)]
    pub session: EditorSession,
    /// Picker state for the icon fill color.
    #[serde(skip)]
    pub fill_picker: ColorPickerState,
    /// Picker state for the solid background color.
    #[serde(skip)]
    pub background_picker: ColorPickerState,
    /// Picker state for the gradient start color.
    #[serde(skip)]
    pub gradient_start_picker: ColorPickerState,
    /// Picker state for the gradient end color.
    #[serde(skip)]
    pub gradient_end_picker: ColorPickerState,
    /// "Ask AI" modal state.
    #[serde(skip)]
    pub suggest: SuggestState,
}

impl Default for StudioApp {
    fn default() -> Self {
        Self {
            dark_mode: true,
            active_tab: EditorTab::Icon,
            png_scale: 2.0,
            session: EditorSession::default(),
            fill_picker: ColorPickerState::default(),
            background_picker: ColorPickerState::default(),
            gradient_start_picker: ColorPickerState::default(),
            gradient_end_picker: ColorPickerState::default(),
            suggest: SuggestState::default(),
        }
    }
}

impl StudioApp {
    /// Serializes the persisted UI preferences to JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restores an application from persisted JSON. Skipped fields (the
    /// session, picker and modal state) come back as defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserializer error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_keeps_preferences_but_not_history() {
        let mut app = StudioApp::default();
        app.dark_mode = false;
        app.active_tab = EditorTab::Background;
        app.session
            .update_icon(crate::types::IconPatch::size(64.0));

        let json = app.to_json().unwrap();
        let restored = StudioApp::from_json(&json).unwrap();

        assert!(!restored.dark_mode);
        assert_eq!(restored.active_tab, EditorTab::Background);
        // The history timeline is per-session and must not survive a restart.
        assert!(!restored.session.can_undo());
        assert_eq!(restored.session.icon().size, 128.0);
    }
}
