//! # Icon Studio
//!
//! A desktop icon and logo editor built on an undo/redo history engine.
//! Two property groups are edited independently and tracked together:
//! - **Icon**: glyph selection, size, rotation, stroke width, color, opacity
//! - **Background**: corner radius, drop shadow, solid or gradient fill
//!
//! ## Features
//! - Linear undo/redo over composite snapshots (Ctrl+Z / Ctrl+Shift+Z)
//! - Spectrum/hue color picker with hex and per-channel RGB entry
//! - Live preview of the icon card
//! - AI-assisted icon suggestions with a local fallback chain
//! - SVG and scaled PNG export

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod constants;
pub mod history;
pub mod picker;
pub mod session;
pub mod store;
pub mod suggest;
pub mod types;
pub mod ui;

// Re-export the core editing types at the crate root.
pub use color::{ColorError, Hsv, Rgb};
pub use history::HistoryEngine;
pub use picker::PointerDragSession;
pub use session::EditorSession;
pub use store::PropertyStore;
pub use types::{
    BackgroundPatch, BackgroundProperties, EditorState, GradientType, GroupChange, IconPatch,
    IconProperties, Patch, ShadowSize,
};
use ui::StudioApp;

/// Runs the icon editor with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop. UI preferences are restored from persistent storage when
/// available; the editing session always starts fresh.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use icon_studio::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Icon Studio",
        options,
        Box::new(|cc| {
            let app = cc
                .storage
                .and_then(|storage| storage.get_string("app_state"))
                .and_then(|json| StudioApp::from_json(&json).ok())
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_default() {
        let session = EditorSession::default();
        assert_eq!(session.icon().size, 128.0);
        assert_eq!(session.background().border_radius, 8.0);
        assert_eq!(session.selected_icon(), Some("Star"));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_edit_then_undo_round_trip() {
        let mut session = EditorSession::default();
        session.update_icon(IconPatch::fill_color("#3b82f6"));
        assert_eq!(session.icon().fill_color, "#3b82f6");
        assert!(session.undo());
        assert_eq!(session.icon().fill_color, "#000000");
    }
}
