//! Live preview of the icon card in the central panel.
//!
//! Draws the same composition the SVG export serializes: shadow layers under
//! a rounded card (solid, linear or radial fill) with the selected glyph
//! stroked on top. Gradients are tessellated as meshes; rounded corners are
//! restored with corner cover fans in the panel color.

use crate::color::Rgb;
use crate::constants::CARD_SIZE;
use crate::session::EditorSession;
use crate::types::GradientType;
use crate::ui::glyphs;

/// Segments per corner arc when masking gradient corners.
const CORNER_ARC_STEPS: usize = 8;
/// Concentric rings used to approximate the radial gradient.
const RADIAL_RINGS: usize = 48;

/// Draws the preview card centered in the remaining panel space.
pub fn draw_preview(ui: &mut egui::Ui, session: &EditorSession) {
    let avail = ui.available_rect_before_wrap();
    let card = egui::Rect::from_center_size(avail.center(), egui::vec2(CARD_SIZE, CARD_SIZE));
    let painter = ui.painter_at(avail);

    let background = session.background();
    let radius = background.border_radius.clamp(0.0, CARD_SIZE / 2.0);

    draw_shadow(&painter, card, background.shadow_size, radius);

    match background.gradient_type {
        GradientType::None => {
            painter.rect_filled(
                card,
                egui::CornerRadius::same(radius as u8),
                hex_color(&background.background_color, egui::Color32::WHITE, 255),
            );
        }
        GradientType::Linear => {
            let start = hex_color(&background.gradient_start_color, egui::Color32::WHITE, 255);
            let end = hex_color(&background.gradient_end_color, egui::Color32::BLACK, 255);
            painter.add(linear_gradient_mesh(
                card,
                start,
                end,
                background.gradient_angle,
            ));
            mask_corners(ui, &painter, card, radius);
        }
        GradientType::Radial => {
            let start = hex_color(&background.gradient_start_color, egui::Color32::WHITE, 255);
            let end = hex_color(&background.gradient_end_color, egui::Color32::BLACK, 255);
            draw_radial_gradient(&painter, card, start, end);
            mask_corners(ui, &painter, card, radius);
        }
    }

    let icon = session.icon();
    if let Some(name) = session.selected_icon() {
        let glyph_rect =
            egui::Rect::from_center_size(card.center(), egui::Vec2::splat(icon.size));
        let alpha = (icon.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        let color = hex_color(&icon.fill_color, egui::Color32::BLACK, alpha);
        // Stroke widths are specified against a 24-unit glyph grid.
        let stroke = egui::Stroke::new(icon.stroke_width * icon.size / 24.0, color);
        glyphs::paint_glyph_rotated(&painter, glyph_rect, &glyphs::glyph(name), stroke, icon.rotation);
    }
}

/// Parses a hex color, substituting `fallback` for anything unparseable.
fn hex_color(value: &str, fallback: egui::Color32, alpha: u8) -> egui::Color32 {
    match Rgb::parse_hex(value) {
        Ok(rgb) => egui::Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha),
        Err(_) => fallback,
    }
}

/// Layered translucent rounded rects approximating the shadow preset's blur.
fn draw_shadow(
    painter: &egui::Painter,
    card: egui::Rect,
    shadow: crate::types::ShadowSize,
    radius: f32,
) {
    let Some(params) = shadow.params() else {
        return;
    };
    let layers = 4;
    for i in 1..=layers {
        let spread = params.blur * i as f32 / layers as f32;
        let alpha = (params.alpha * 255.0 / layers as f32).round() as u8;
        let rect = card
            .translate(egui::vec2(0.0, params.offset_y))
            .expand(spread);
        painter.rect_filled(
            rect,
            egui::CornerRadius::same((radius + spread) as u8),
            egui::Color32::from_black_alpha(alpha),
        );
    }
}

/// A quad whose corner colors sample the gradient along the CSS angle
/// convention (0 degrees points up, increasing clockwise).
fn linear_gradient_mesh(
    rect: egui::Rect,
    start: egui::Color32,
    end: egui::Color32,
    angle_degrees: f32,
) -> egui::Mesh {
    let radians = angle_degrees.to_radians();
    let dir = egui::vec2(radians.sin(), -radians.cos());

    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    // Project each corner onto the gradient axis and normalize to [0, 1].
    let center = rect.center();
    let dots: Vec<f32> = corners
        .iter()
        .map(|c| (*c - center).dot(dir))
        .collect();
    let min = dots.iter().copied().fold(f32::INFINITY, f32::min);
    let max = dots.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(f32::EPSILON);

    let mut mesh = egui::Mesh::default();
    for (corner, dot) in corners.iter().zip(&dots) {
        let t = (dot - min) / span;
        mesh.colored_vertex(*corner, lerp_color(start, end, t));
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

/// Concentric rings from the center, start color inside, end color at the
/// farthest corner.
fn draw_radial_gradient(
    painter: &egui::Painter,
    rect: egui::Rect,
    start: egui::Color32,
    end: egui::Color32,
) {
    let clipped = painter.with_clip_rect(rect);
    let max_radius = rect.width() * std::f32::consts::FRAC_1_SQRT_2;
    for i in 0..RADIAL_RINGS {
        let t = 1.0 - i as f32 / RADIAL_RINGS as f32;
        clipped.circle_filled(rect.center(), max_radius * t, lerp_color(start, end, t));
    }
}

fn lerp_color(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round() as u8 };
    egui::Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Covers the square corners a gradient mesh leaves behind, restoring the
/// rounded silhouette with fans in the panel background color.
fn mask_corners(ui: &egui::Ui, painter: &egui::Painter, rect: egui::Rect, radius: f32) {
    if radius <= 0.0 {
        return;
    }
    let cover = ui.visuals().panel_fill;
    // (corner, arc center) pairs; the fan is star-shaped from the corner.
    let corners = [
        (rect.left_top(), rect.left_top() + egui::vec2(radius, radius)),
        (
            rect.right_top(),
            rect.right_top() + egui::vec2(-radius, radius),
        ),
        (
            rect.right_bottom(),
            rect.right_bottom() + egui::vec2(-radius, -radius),
        ),
        (
            rect.left_bottom(),
            rect.left_bottom() + egui::vec2(radius, -radius),
        ),
    ];
    for (corner, center) in corners {
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(corner, cover);
        // Sweep the quarter arc facing this corner.
        let to_corner = corner - center;
        let base_angle = to_corner.y.atan2(to_corner.x);
        for step in 0..=CORNER_ARC_STEPS {
            let angle = base_angle - std::f32::consts::FRAC_PI_4
                + std::f32::consts::FRAC_PI_2 * step as f32 / CORNER_ARC_STEPS as f32;
            let point = center + radius * egui::vec2(angle.cos(), angle.sin());
            mesh.colored_vertex(point, cover);
        }
        for step in 0..CORNER_ARC_STEPS {
            mesh.add_triangle(0, step as u32 + 1, step as u32 + 2);
        }
        painter.add(mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lerp_endpoints_and_midpoint() {
        let a = egui::Color32::from_rgb(0, 0, 0);
        let b = egui::Color32::from_rgb(255, 255, 255);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), egui::Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn gradient_mesh_spans_the_full_color_range() {
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 100.0));
        let start = egui::Color32::from_rgb(255, 0, 0);
        let end = egui::Color32::from_rgb(0, 0, 255);
        // Angle 180: gradient points straight down, top edge = start.
        let mesh = linear_gradient_mesh(rect, start, end, 180.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.vertices[0].color, start);
        assert_eq!(mesh.vertices[2].color, end);
    }

    #[test]
    fn invalid_hex_uses_the_fallback() {
        assert_eq!(
            hex_color("not-a-color", egui::Color32::WHITE, 255),
            egui::Color32::WHITE
        );
        assert_eq!(
            hex_color("#ff0000", egui::Color32::WHITE, 255),
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255)
        );
    }
}
