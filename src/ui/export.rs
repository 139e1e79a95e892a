//! Export utilities: serialize the current icon card to SVG and rasterize
//! it to PNG.
//!
//! The SVG document is the source of truth for both formats; PNG export
//! parses it back with usvg and renders it with resvg at the configured
//! scale factor.

use std::fmt::Write as _;

use crate::color::Rgb;
use crate::constants::{CARD_SIZE, PNG_SCALE_MAX, PNG_SCALE_MIN};
use crate::types::GradientType;
use crate::ui::glyphs;
use crate::ui::state::StudioApp;

impl StudioApp {
    /// Exports the card to SVG via a save dialog.
    pub fn export_svg(&self) {
        let (svg, _w, _h) = self.build_svg();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_file_name("icon.svg")
            .save_file()
        {
            if let Err(e) = std::fs::write(&path, svg.as_bytes()) {
                log::error!("failed to save SVG to {}: {e}", path.display());
            }
        }
    }

    /// Rasterizes the card and exports it to PNG via a save dialog.
    pub fn export_png(&self) {
        let (svg, width, height) = self.build_svg();
        let scale = self.png_scale.clamp(PNG_SCALE_MIN, PNG_SCALE_MAX);

        let pixmap = match rasterize(&svg, width, height, scale) {
            Ok(p) => p,
            Err(e) => {
                log::error!("PNG export failed: {e}");
                return;
            }
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("icon.png")
            .save_file()
        {
            if let Err(e) = pixmap.save_png(&path) {
                log::error!("failed to save PNG to {}: {e}", path.display());
            }
        }
    }

    /// Builds the SVG document for the current editor state.
    /// Returns (svg, width, height).
    pub fn build_svg(&self) -> (String, u32, u32) {
        let side = CARD_SIZE as u32;
        let icon = self.session.icon();
        let background = self.session.background();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {side} {side}\">",
        );

        // Defs: gradient fill and drop shadow filter, when enabled.
        let has_defs = background.gradient_type != GradientType::None
            || background.shadow_size.params().is_some();
        if has_defs {
            let _ = writeln!(out, "<defs>");
            match background.gradient_type {
                GradientType::None => {}
                GradientType::Linear => {
                    // CSS angle convention: 0 points up, increasing clockwise.
                    let radians = background.gradient_angle.to_radians();
                    let (dx, dy) = (radians.sin() / 2.0, -radians.cos() / 2.0);
                    let _ = writeln!(
                        out,
                        "  <linearGradient id=\"bg\" x1=\"{:.4}\" y1=\"{:.4}\" x2=\"{:.4}\" y2=\"{:.4}\">",
                        0.5 - dx,
                        0.5 - dy,
                        0.5 + dx,
                        0.5 + dy
                    );
                    let _ = writeln!(
                        out,
                        "    <stop offset=\"0\" stop-color=\"{}\"/>",
                        safe_hex(&background.gradient_start_color, "#ffffff")
                    );
                    let _ = writeln!(
                        out,
                        "    <stop offset=\"1\" stop-color=\"{}\"/>",
                        safe_hex(&background.gradient_end_color, "#000000")
                    );
                    let _ = writeln!(out, "  </linearGradient>");
                }
                GradientType::Radial => {
                    // Radius reaches the corners of the square card.
                    let _ = writeln!(
                        out,
                        "  <radialGradient id=\"bg\" cx=\"0.5\" cy=\"0.5\" r=\"0.7071\">",
                    );
                    let _ = writeln!(
                        out,
                        "    <stop offset=\"0\" stop-color=\"{}\"/>",
                        safe_hex(&background.gradient_start_color, "#ffffff")
                    );
                    let _ = writeln!(
                        out,
                        "    <stop offset=\"1\" stop-color=\"{}\"/>",
                        safe_hex(&background.gradient_end_color, "#000000")
                    );
                    let _ = writeln!(out, "  </radialGradient>");
                }
            }
            if let Some(shadow) = background.shadow_size.params() {
                let _ = writeln!(
                    out,
                    "  <filter id=\"shadow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">",
                );
                let _ = writeln!(
                    out,
                    "    <feDropShadow dx=\"0\" dy=\"{}\" stdDeviation=\"{}\" flood-opacity=\"{}\"/>",
                    shadow.offset_y,
                    shadow.blur / 2.0,
                    shadow.alpha
                );
                let _ = writeln!(out, "  </filter>");
            }
            let _ = writeln!(out, "</defs>");
        }

        // Background card.
        let radius = background.border_radius.clamp(0.0, CARD_SIZE / 2.0);
        let fill = if background.gradient_type == GradientType::None {
            safe_hex(&background.background_color, "#ffffff")
        } else {
            "url(#bg)".to_string()
        };
        let filter = if background.shadow_size.params().is_some() {
            " filter=\"url(#shadow)\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<rect x=\"0\" y=\"0\" width=\"{side}\" height=\"{side}\" rx=\"{radius}\" fill=\"{fill}\"{filter}/>",
        );

        // Glyph: primitives are normalized to [0, 1], so the group scales
        // them to the icon size around the card center. Stroke widths are
        // specified against a 24-unit glyph grid.
        if let Some(name) = self.session.selected_icon() {
            let center = CARD_SIZE / 2.0;
            let size = icon.size;
            let _ = writeln!(
                out,
                "<g transform=\"translate({center},{center}) rotate({}) translate({},{}) scale({size})\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\" opacity=\"{}\">",
                icon.rotation,
                -size / 2.0,
                -size / 2.0,
                safe_hex(&icon.fill_color, "#000000"),
                icon.stroke_width / 24.0,
                icon.opacity.clamp(0.0, 1.0)
            );
            let _ = writeln!(out, "{}", glyphs::to_svg_elements(&glyphs::glyph(name)));
            let _ = writeln!(out, "</g>");
        }

        let _ = writeln!(out, "</svg>");
        (out, side, side)
    }
}

/// Normalizes a hex color for embedding in SVG, substituting `fallback` for
/// anything unparseable.
fn safe_hex(value: &str, fallback: &str) -> String {
    match Rgb::parse_hex(value) {
        Ok(rgb) => rgb.to_hex(),
        Err(_) => fallback.to_string(),
    }
}

/// Parses the SVG and renders it into a pixmap at `scale`.
fn rasterize(
    svg: &str,
    width: u32,
    height: u32,
    scale: f32,
) -> Result<tiny_skia::Pixmap, String> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
        .map_err(|e| format!("invalid SVG: {e}"))?;

    let out_w = ((width as f32) * scale).round().max(1.0) as u32;
    let out_h = ((height as f32) * scale).round().max(1.0) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(out_w, out_h)
        .ok_or_else(|| format!("cannot allocate {out_w}x{out_h} pixmap"))?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}
