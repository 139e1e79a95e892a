//! Core data types for the editor: the two editable property groups, their
//! partial-update patches, and the composite editor state tracked by the
//! undo/redo history.
//!
//! Property snapshots are never mutated in place; applying a patch always
//! produces a new snapshot merged over the previous one.

use serde::{Deserialize, Serialize};

/// A partial update that can be merged over a full snapshot of `T`.
///
/// Each patch field is an explicit `Option`: `Some(value)` sets the field,
/// `None` leaves it at the base snapshot's value. This distinguishes
/// "unchanged" from "set to a default-looking value".
pub trait Patch<T> {
    /// Returns a new snapshot with this patch merged over `base`.
    fn apply_to(&self, base: &T) -> T;
}

/// Drop shadow presets for the background card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowSize {
    /// No shadow.
    None,
    /// Small shadow.
    Sm,
    /// Medium shadow.
    Md,
    /// Large shadow.
    Lg,
    /// Extra large shadow.
    Xl,
    /// Largest shadow.
    #[serde(rename = "2xl")]
    Xxl,
}

/// Rendering parameters for a non-`None` shadow preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    /// Vertical offset in pixels.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub blur: f32,
    /// Shadow opacity in `[0, 1]`.
    pub alpha: f32,
}

impl ShadowSize {
    /// All presets in display order.
    pub const ALL: [ShadowSize; 6] = [
        ShadowSize::None,
        ShadowSize::Sm,
        ShadowSize::Md,
        ShadowSize::Lg,
        ShadowSize::Xl,
        ShadowSize::Xxl,
    ];

    /// Label shown in the shadow selector.
    pub fn label(self) -> &'static str {
        match self {
            ShadowSize::None => "None",
            ShadowSize::Sm => "Small",
            ShadowSize::Md => "Medium",
            ShadowSize::Lg => "Large",
            ShadowSize::Xl => "XLarge",
            ShadowSize::Xxl => "2XLarge",
        }
    }

    /// Rendering parameters for this preset, or `None` when no shadow is drawn.
    pub fn params(self) -> Option<ShadowParams> {
        match self {
            ShadowSize::None => None,
            ShadowSize::Sm => Some(ShadowParams {
                offset_y: 1.0,
                blur: 2.0,
                alpha: 0.05,
            }),
            ShadowSize::Md => Some(ShadowParams {
                offset_y: 4.0,
                blur: 6.0,
                alpha: 0.10,
            }),
            ShadowSize::Lg => Some(ShadowParams {
                offset_y: 10.0,
                blur: 15.0,
                alpha: 0.10,
            }),
            ShadowSize::Xl => Some(ShadowParams {
                offset_y: 20.0,
                blur: 25.0,
                alpha: 0.10,
            }),
            ShadowSize::Xxl => Some(ShadowParams {
                offset_y: 25.0,
                blur: 50.0,
                alpha: 0.25,
            }),
        }
    }
}

/// Fill style of the background card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    /// Solid background color.
    None,
    /// Linear gradient along `gradient_angle`.
    Linear,
    /// Radial gradient from the card center.
    Radial,
}

impl GradientType {
    /// All variants in display order.
    pub const ALL: [GradientType; 3] =
        [GradientType::None, GradientType::Linear, GradientType::Radial];

    /// Label shown in the gradient selector.
    pub fn label(self) -> &'static str {
        match self {
            GradientType::None => "None",
            GradientType::Linear => "Linear",
            GradientType::Radial => "Radial",
        }
    }
}

/// Editable properties of the icon glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconProperties {
    /// Glyph size in pixels.
    pub size: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Stroke width of the glyph outline.
    pub stroke_width: f32,
    /// Stroke color as a `#rrggbb` hex string.
    pub fill_color: String,
    /// Glyph opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Default for IconProperties {
    fn default() -> Self {
        Self {
            size: 128.0,
            rotation: 0.0,
            stroke_width: 2.0,
            fill_color: "#000000".to_string(),
            opacity: 1.0,
        }
    }
}

/// Partial update over [`IconProperties`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconPatch {
    /// New glyph size, if changed.
    pub size: Option<f32>,
    /// New rotation, if changed.
    pub rotation: Option<f32>,
    /// New stroke width, if changed.
    pub stroke_width: Option<f32>,
    /// New stroke color, if changed.
    pub fill_color: Option<String>,
    /// New opacity, if changed.
    pub opacity: Option<f32>,
}

impl IconPatch {
    /// Patch changing only the glyph size.
    pub fn size(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// Patch changing only the rotation.
    pub fn rotation(rotation: f32) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    /// Patch changing only the stroke width.
    pub fn stroke_width(stroke_width: f32) -> Self {
        Self {
            stroke_width: Some(stroke_width),
            ..Self::default()
        }
    }

    /// Patch changing only the stroke color.
    pub fn fill_color(fill_color: impl Into<String>) -> Self {
        Self {
            fill_color: Some(fill_color.into()),
            ..Self::default()
        }
    }

    /// Patch changing only the opacity.
    pub fn opacity(opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..Self::default()
        }
    }
}

impl Patch<IconProperties> for IconPatch {
    fn apply_to(&self, base: &IconProperties) -> IconProperties {
        IconProperties {
            size: self.size.unwrap_or(base.size),
            rotation: self.rotation.unwrap_or(base.rotation),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            fill_color: self
                .fill_color
                .clone()
                .unwrap_or_else(|| base.fill_color.clone()),
            opacity: self.opacity.unwrap_or(base.opacity),
        }
    }
}

/// Editable properties of the background card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundProperties {
    /// Corner radius in pixels.
    pub border_radius: f32,
    /// Drop shadow preset.
    pub shadow_size: ShadowSize,
    /// Fill style (solid, linear or radial gradient).
    pub gradient_type: GradientType,
    /// Linear gradient angle in degrees (CSS convention: 0 points up).
    pub gradient_angle: f32,
    /// Gradient start color as a `#rrggbb` hex string.
    pub gradient_start_color: String,
    /// Gradient end color as a `#rrggbb` hex string.
    pub gradient_end_color: String,
    /// Solid background color as a `#rrggbb` hex string.
    pub background_color: String,
}

impl Default for BackgroundProperties {
    fn default() -> Self {
        Self {
            border_radius: 8.0,
            shadow_size: ShadowSize::None,
            gradient_type: GradientType::None,
            gradient_angle: 45.0,
            gradient_start_color: "#ffffff".to_string(),
            gradient_end_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

/// Partial update over [`BackgroundProperties`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackgroundPatch {
    /// New corner radius, if changed.
    pub border_radius: Option<f32>,
    /// New shadow preset, if changed.
    pub shadow_size: Option<ShadowSize>,
    /// New fill style, if changed.
    pub gradient_type: Option<GradientType>,
    /// New gradient angle, if changed.
    pub gradient_angle: Option<f32>,
    /// New gradient start color, if changed.
    pub gradient_start_color: Option<String>,
    /// New gradient end color, if changed.
    pub gradient_end_color: Option<String>,
    /// New solid background color, if changed.
    pub background_color: Option<String>,
}

impl BackgroundPatch {
    /// Patch changing only the corner radius.
    pub fn border_radius(border_radius: f32) -> Self {
        Self {
            border_radius: Some(border_radius),
            ..Self::default()
        }
    }

    /// Patch changing only the shadow preset.
    pub fn shadow_size(shadow_size: ShadowSize) -> Self {
        Self {
            shadow_size: Some(shadow_size),
            ..Self::default()
        }
    }

    /// Patch changing only the fill style.
    pub fn gradient_type(gradient_type: GradientType) -> Self {
        Self {
            gradient_type: Some(gradient_type),
            ..Self::default()
        }
    }

    /// Patch changing only the gradient angle.
    pub fn gradient_angle(gradient_angle: f32) -> Self {
        Self {
            gradient_angle: Some(gradient_angle),
            ..Self::default()
        }
    }

    /// Patch changing only the gradient start color.
    pub fn gradient_start_color(color: impl Into<String>) -> Self {
        Self {
            gradient_start_color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Patch changing only the gradient end color.
    pub fn gradient_end_color(color: impl Into<String>) -> Self {
        Self {
            gradient_end_color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Patch changing only the solid background color.
    pub fn background_color(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            ..Self::default()
        }
    }
}

impl Patch<BackgroundProperties> for BackgroundPatch {
    fn apply_to(&self, base: &BackgroundProperties) -> BackgroundProperties {
        BackgroundProperties {
            border_radius: self.border_radius.unwrap_or(base.border_radius),
            shadow_size: self.shadow_size.unwrap_or(base.shadow_size),
            gradient_type: self.gradient_type.unwrap_or(base.gradient_type),
            gradient_angle: self.gradient_angle.unwrap_or(base.gradient_angle),
            gradient_start_color: self
                .gradient_start_color
                .clone()
                .unwrap_or_else(|| base.gradient_start_color.clone()),
            gradient_end_color: self
                .gradient_end_color
                .clone()
                .unwrap_or_else(|| base.gradient_end_color.clone()),
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| base.background_color.clone()),
        }
    }
}

/// The fully-resolved composite editor state: one snapshot per property
/// group. This is the unit stored at every point of the history timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// Icon glyph properties.
    pub icon: IconProperties,
    /// Background card properties.
    pub background: BackgroundProperties,
}

/// A user edit targeting exactly one property group.
///
/// This is the absence marker of the history model: the group carried by the
/// variant is the only one an edit touches, every other group is implicitly
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupChange {
    /// Partial update to the icon group.
    Icon(IconPatch),
    /// Partial update to the background group.
    Background(BackgroundPatch),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let icon = IconProperties::default();
        assert_eq!(icon.size, 128.0);
        assert_eq!(icon.rotation, 0.0);
        assert_eq!(icon.stroke_width, 2.0);
        assert_eq!(icon.fill_color, "#000000");
        assert_eq!(icon.opacity, 1.0);

        let bg = BackgroundProperties::default();
        assert_eq!(bg.border_radius, 8.0);
        assert_eq!(bg.shadow_size, ShadowSize::None);
        assert_eq!(bg.gradient_type, GradientType::None);
        assert_eq!(bg.gradient_angle, 45.0);
        assert_eq!(bg.gradient_start_color, "#ffffff");
        assert_eq!(bg.gradient_end_color, "#000000");
        assert_eq!(bg.background_color, "#ffffff");
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let base = IconProperties::default();
        let merged = IconPatch::size(64.0).apply_to(&base);
        assert_eq!(merged.size, 64.0);
        assert_eq!(merged.rotation, base.rotation);
        assert_eq!(merged.fill_color, base.fill_color);
        // The base snapshot is untouched.
        assert_eq!(base.size, 128.0);
    }

    #[test]
    fn zero_is_a_real_patch_value() {
        // Present(0.0) must not be confused with Absent.
        let base = BackgroundProperties::default();
        let merged = BackgroundPatch::border_radius(0.0).apply_to(&base);
        assert_eq!(merged.border_radius, 0.0);
    }

    #[test]
    fn shadow_size_serde_names_match_presets() {
        let json = serde_json::to_string(&ShadowSize::Xxl).unwrap();
        assert_eq!(json, "\"2xl\"");
        let back: ShadowSize = serde_json::from_str("\"md\"").unwrap();
        assert_eq!(back, ShadowSize::Md);
    }
}
