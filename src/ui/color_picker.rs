//! Interactive color picker widget: a 2D saturation/value spectrum, a hue
//! track, and hex / per-channel RGB entry.
//!
//! The widget is a thin egui shell around [`PointerDragSession`]; every
//! color it reports came out of the session (spectrum drags, hue changes) or
//! out of validated text entry. Invalid text input is rejected and the
//! previous color retained.

use crate::color::Rgb;
use crate::constants::{HUE_TRACK_HEIGHT, SPECTRUM_HEIGHT};
use crate::ui::state::{ColorMode, ColorPickerState};

/// What the picker reported this frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PickerResponse {
    /// Newly picked color as a `#rrggbb` hex string, if any.
    pub color: Option<String>,
    /// New opacity, if the opacity slider moved.
    pub opacity: Option<f32>,
}

/// Shows the picker bound to the authoritative hex `value`. Pass the current
/// opacity to show an opacity slider.
pub fn show(
    ui: &mut egui::Ui,
    state: &mut ColorPickerState,
    value: &str,
    opacity: Option<f32>,
) -> PickerResponse {
    let mut response = PickerResponse::default();

    // Re-derive the cursor whenever the bound value changed by a means other
    // than this widget (typed hex committed last frame, undo/redo).
    if state.synced_value != value {
        if let Ok(rgb) = Rgb::parse_hex(value) {
            state.session.sync_to_color(rgb);
            state.refresh_inputs(rgb);
        }
        state.synced_value = value.to_string();
    }

    let mut emitted: Option<Rgb> = None;

    draw_spectrum(ui, state, &mut emitted);
    ui.add_space(6.0);
    draw_hue_track(ui, state, &mut emitted);
    ui.add_space(6.0);

    if let Some(rgb) = emitted {
        let hex = rgb.to_hex();
        state.refresh_inputs(rgb);
        // Self-emitted: remember the value so the next frame does not snap
        // the cursor back through a lossy hex -> HSV decomposition.
        state.synced_value = hex.clone();
        response.color = Some(hex);
    }

    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.mode, ColorMode::Hex, "HEX");
        ui.selectable_value(&mut state.mode, ColorMode::Rgb, "RGB");
    });

    match state.mode {
        ColorMode::Hex => {
            let edit = ui.add(
                egui::TextEdit::singleline(&mut state.hex_input)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("#000000"),
            );
            if edit.changed() {
                // Only well-formed hex is committed; anything else keeps the
                // previous color with no history push.
                if let Ok(rgb) = Rgb::parse_hex(&state.hex_input) {
                    response.color = Some(rgb.to_hex());
                }
            }
        }
        ColorMode::Rgb => {
            let mut changed = false;
            ui.columns(3, |cols| {
                for (i, label) in ["R", "G", "B"].iter().enumerate() {
                    cols[i].label(*label);
                    let edit = cols[i].add(
                        egui::TextEdit::singleline(&mut state.rgb_inputs[i])
                            .font(egui::TextStyle::Monospace),
                    );
                    changed |= edit.changed();
                }
            });
            if changed {
                if let Some(rgb) = parse_rgb_inputs(&state.rgb_inputs) {
                    response.color = Some(rgb.to_hex());
                }
            }
        }
    }

    if let Some(current) = opacity {
        ui.add_space(6.0);
        let mut value = current;
        let slider = ui.add(
            egui::Slider::new(&mut value, 0.0..=1.0)
                .step_by(0.01)
                .text("Opacity"),
        );
        if slider.changed() {
            response.opacity = Some(value);
        }
    }

    response
}

/// Parses the three channel buffers; components outside [0, 255] (and
/// non-numeric text) are rejected rather than clamped.
fn parse_rgb_inputs(inputs: &[String; 3]) -> Option<Rgb> {
    let r = inputs[0].trim().parse::<i32>().ok()?;
    let g = inputs[1].trim().parse::<i32>().ok()?;
    let b = inputs[2].trim().parse::<i32>().ok()?;
    Rgb::from_components(r, g, b).ok()
}

fn draw_spectrum(ui: &mut egui::Ui, state: &mut ColorPickerState, emitted: &mut Option<Rgb>) {
    let width = ui.available_width();
    let (rect, resp) = ui.allocate_exact_size(
        egui::vec2(width, SPECTRUM_HEIGHT),
        egui::Sense::click_and_drag(),
    );
    let painter = ui.painter_at(rect);

    // Base: the current hue at full saturation/value, overlaid with a
    // white fade (left to right) and a black fade (top to bottom).
    let hue_rgb = crate::color::Hsv::new(state.session.hue(), 100.0, 100.0).to_rgb();
    painter.rect_filled(
        rect,
        egui::CornerRadius::same(4),
        egui::Color32::from_rgb(hue_rgb.r, hue_rgb.g, hue_rgb.b),
    );
    painter.add(fade_mesh(
        rect,
        [
            egui::Color32::WHITE,
            egui::Color32::TRANSPARENT,
            egui::Color32::TRANSPARENT,
            egui::Color32::WHITE,
        ],
    ));
    painter.add(fade_mesh(
        rect,
        [
            egui::Color32::TRANSPARENT,
            egui::Color32::TRANSPARENT,
            egui::Color32::BLACK,
            egui::Color32::BLACK,
        ],
    ));

    // Pointer handling: coordinates become percentage offsets within the
    // surface; the session clamps them.
    let to_percent = |pos: egui::Pos2| -> (f32, f32) {
        (
            (pos.x - rect.min.x) / rect.width() * 100.0,
            (pos.y - rect.min.y) / rect.height() * 100.0,
        )
    };
    if resp.drag_started() {
        if let Some(pos) = resp.interact_pointer_pos() {
            let (x, y) = to_percent(pos);
            *emitted = Some(state.session.pointer_down(x, y));
        }
    } else if resp.dragged() {
        if let Some(pos) = resp.interact_pointer_pos() {
            let (x, y) = to_percent(pos);
            if let Some(color) = state.session.pointer_move(x, y) {
                *emitted = Some(color);
            }
        }
    }
    if resp.drag_stopped() {
        state.session.pointer_up();
    }

    // Cursor ring at the current spectrum point.
    let point = state.session.point();
    let center = egui::pos2(
        rect.min.x + point.x / 100.0 * rect.width(),
        rect.min.y + point.y / 100.0 * rect.height(),
    );
    painter.circle_stroke(center, 7.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
    painter.circle_stroke(center, 5.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
}

fn draw_hue_track(ui: &mut egui::Ui, state: &mut ColorPickerState, emitted: &mut Option<Rgb>) {
    let width = ui.available_width();
    let (rect, resp) = ui.allocate_exact_size(
        egui::vec2(width, HUE_TRACK_HEIGHT),
        egui::Sense::click_and_drag(),
    );
    let painter = ui.painter_at(rect);

    // Six-segment rainbow, hue 0 to 360 left to right.
    let stops = [
        egui::Color32::from_rgb(255, 0, 0),
        egui::Color32::from_rgb(255, 255, 0),
        egui::Color32::from_rgb(0, 255, 0),
        egui::Color32::from_rgb(0, 255, 255),
        egui::Color32::from_rgb(0, 0, 255),
        egui::Color32::from_rgb(255, 0, 255),
        egui::Color32::from_rgb(255, 0, 0),
    ];
    let mut mesh = egui::Mesh::default();
    for (i, window) in stops.windows(2).enumerate() {
        let x0 = rect.min.x + rect.width() * i as f32 / 6.0;
        let x1 = rect.min.x + rect.width() * (i + 1) as f32 / 6.0;
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(egui::pos2(x0, rect.min.y), window[0]);
        mesh.colored_vertex(egui::pos2(x1, rect.min.y), window[1]);
        mesh.colored_vertex(egui::pos2(x1, rect.max.y), window[1]);
        mesh.colored_vertex(egui::pos2(x0, rect.max.y), window[0]);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    painter.add(egui::Shape::mesh(mesh));

    if resp.drag_started() || resp.dragged() {
        if let Some(pos) = resp.interact_pointer_pos() {
            let hue = ((pos.x - rect.min.x) / rect.width()).clamp(0.0, 1.0) * 360.0;
            *emitted = Some(state.session.set_hue(hue));
        }
    }

    // Selector at the current hue.
    let x = rect.min.x + state.session.hue() / 360.0 * rect.width();
    let selector = egui::Rect::from_center_size(
        egui::pos2(x, rect.center().y),
        egui::vec2(4.0, rect.height() + 4.0),
    );
    painter.rect_stroke(
        selector,
        egui::CornerRadius::same(2),
        egui::Stroke::new(1.5, egui::Color32::WHITE),
        egui::StrokeKind::Outside,
    );
}

/// A rect-filling mesh with one color per corner, in the order
/// top-left, top-right, bottom-right, bottom-left.
fn fade_mesh(rect: egui::Rect, corners: [egui::Color32; 4]) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), corners[0]);
    mesh.colored_vertex(rect.right_top(), corners[1]);
    mesh.colored_vertex(rect.right_bottom(), corners[2]);
    mesh.colored_vertex(rect.left_bottom(), corners[3]);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}
