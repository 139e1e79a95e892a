//! Shared application-wide constants.
//! Centralizes tweakable values used across the editor panels, preview and export.

// Undo/redo
/// Maximum number of undo history entries to retain.
pub const MAX_UNDO_HISTORY: usize = 100;

// Icon property ranges
/// Smallest selectable icon size in pixels.
pub const ICON_SIZE_MIN: f32 = 32.0;
/// Largest selectable icon size in pixels.
pub const ICON_SIZE_MAX: f32 = 256.0;
/// Step for the icon size slider.
pub const ICON_SIZE_STEP: f64 = 8.0;
/// Smallest selectable stroke width.
pub const STROKE_WIDTH_MIN: f32 = 0.5;
/// Largest selectable stroke width.
pub const STROKE_WIDTH_MAX: f32 = 4.0;
/// Step for the stroke width slider.
pub const STROKE_WIDTH_STEP: f64 = 0.25;

// Background property ranges
/// Largest selectable corner radius (large enough to render a circle).
pub const BORDER_RADIUS_MAX: f32 = 300.0;
/// Named corner radius presets shown next to the radius slider.
pub const BORDER_RADIUS_PRESETS: [(&str, f32); 6] = [
    ("Square", 0.0),
    ("Small", 8.0),
    ("Medium", 16.0),
    ("Large", 32.0),
    ("XLarge", 64.0),
    ("Circle", 300.0),
];

// Preview / export
/// Side length of the preview card in logical points; also the SVG viewbox size.
pub const CARD_SIZE: f32 = 320.0;
/// Height of the color spectrum surface in the picker widget.
pub const SPECTRUM_HEIGHT: f32 = 140.0;
/// Height of the hue track in the picker widget.
pub const HUE_TRACK_HEIGHT: f32 = 16.0;
/// Lower bound for the PNG export scale factor.
pub const PNG_SCALE_MIN: f32 = 0.25;
/// Upper bound for the PNG export scale factor.
pub const PNG_SCALE_MAX: f32 = 8.0;
