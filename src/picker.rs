//! Pointer-drag interaction state for the color spectrum picker.
//!
//! A [`PointerDragSession`] maps 2D pointer coordinates inside the spectrum
//! surface to saturation/value, plus a 1D hue track. It is ephemeral UI
//! state: never part of the undo history, created with the picker widget and
//! dropped with it.
//!
//! The session is a two-state machine, Idle -> Dragging -> Idle. Every
//! transition that changes the resolved color reports the new color exactly
//! once through its return value; rejected and no-op transitions return
//! nothing, so the caller can forward emissions verbatim to its change
//! handler.

use crate::color::{Hsv, Rgb};

/// A position on the spectrum surface, as percentage offsets within the
/// surface's bounding box. `x` maps to saturation, `y` to inverted value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpectrumPoint {
    /// Horizontal offset in `[0, 100]`.
    pub x: f32,
    /// Vertical offset in `[0, 100]`.
    pub y: f32,
}

impl SpectrumPoint {
    fn clamped(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }
}

/// Transient interaction state of one spectrum picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerDragSession {
    hue: f32,
    point: SpectrumPoint,
    dragging: bool,
}

impl Default for PointerDragSession {
    fn default() -> Self {
        Self {
            hue: 0.0,
            point: SpectrumPoint::default(),
            dragging: false,
        }
    }
}

impl PointerDragSession {
    /// Creates an idle session whose cursor matches `color`.
    pub fn from_color(color: Rgb) -> Self {
        let mut session = Self::default();
        session.sync_to_color(color);
        session
    }

    /// Current hue in `[0, 360]`.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Current spectrum cursor position.
    pub fn point(&self) -> SpectrumPoint {
        self.point
    }

    /// True while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The color resolved from the current hue and cursor position.
    pub fn current_color(&self) -> Rgb {
        Hsv::new(self.hue, self.point.x, 100.0 - self.point.y).to_rgb()
    }

    /// Starts a drag at the given surface coordinates (Idle -> Dragging).
    /// Coordinates are clamped into `[0, 100]`, not wrapped. Emits the
    /// recomputed color.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Rgb {
        self.dragging = true;
        self.point = SpectrumPoint::clamped(x, y);
        self.current_color()
    }

    /// Moves the cursor while dragging, emitting the recomputed color.
    /// Returns `None` without touching any state when no drag is active:
    /// stray move events outside a drag must never mutate the session.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<Rgb> {
        if !self.dragging {
            return None;
        }
        self.point = SpectrumPoint::clamped(x, y);
        Some(self.current_color())
    }

    /// Ends the drag (Dragging -> Idle). No color is emitted.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Updates the hue, valid in any state. The hue is clamped into
    /// `[0, 360]` and the color is re-emitted from the current cursor
    /// position.
    pub fn set_hue(&mut self, hue: f32) -> Rgb {
        self.hue = hue.clamp(0.0, 360.0);
        self.current_color()
    }

    /// Re-derives (hue, cursor) from an externally supplied color so the
    /// visible cursor matches it. Must be called whenever the authoritative
    /// value changed by a means other than this session (typed hex,
    /// undo/redo), never for the session's own emissions.
    pub fn sync_to_color(&mut self, color: Rgb) {
        let hsv = color.to_hsv();
        self.hue = hsv.h;
        self.point = SpectrumPoint {
            x: hsv.s,
            y: 100.0 - hsv.v,
        };
    }
}
