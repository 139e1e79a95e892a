//! User interface components and rendering logic for the icon editor.
//!
//! This module contains all the UI-related code: the main application struct,
//! the property panels, the icon grid, the live preview and the export
//! surface.
//!
//! # Module Organization
//!
//! - `color_picker` - Spectrum/hue color picker widget with hex and RGB entry
//! - `export` - SVG serialization and PNG rasterization
//! - `glyphs` - Built-in vector glyph shapes
//! - `preview` - Live preview of the icon card
//! - `state` - Application state structures and the main StudioApp

pub mod color_picker;
mod export;
pub mod glyphs;
mod preview;
pub mod state;
#[cfg(test)]
mod tests;

pub use state::StudioApp;

use crate::constants::{
    BORDER_RADIUS_MAX, BORDER_RADIUS_PRESETS, ICON_SIZE_MAX, ICON_SIZE_MIN, ICON_SIZE_STEP,
    PNG_SCALE_MAX, PNG_SCALE_MIN, STROKE_WIDTH_MAX, STROKE_WIDTH_MIN, STROKE_WIDTH_STEP,
};
use crate::suggest::{suggest_icons_detailed, NullBackend, ICON_VOCABULARY};
use crate::types::{BackgroundPatch, GradientType, IconPatch, ShadowSize};
use crate::ui::state::EditorTab;

/// Storage key under which UI preferences are persisted.
const STORAGE_KEY: &str = "app_state";

impl eframe::App for StudioApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string(STORAGE_KEY, json),
            Err(e) => log::error!("failed to persist UI preferences: {e}"),
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.poll_suggestions(ctx);
        self.handle_undo_redo_keys(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::right("icon_grid")
            .default_width(200.0)
            .show(ctx, |ui| {
                self.draw_icon_grid(ui);
            });

        egui::SidePanel::left("properties")
            .default_width(280.0)
            .show(ctx, |ui| {
                self.draw_property_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            preview::draw_preview(ui, &self.session);
        });

        self.show_suggest_modal(ctx);
    }
}

impl StudioApp {
    /// Handles undo/redo keyboard shortcuts.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for checking input
    fn handle_undo_redo_keys(&mut self, ctx: &egui::Context) {
        // Check if any text edit widget wants keyboard focus - if so, don't handle undo/redo
        let is_editing_text = ctx.wants_keyboard_input();

        if !is_editing_text {
            // Ctrl+Z for undo
            if ctx
                .input(|i| i.key_pressed(egui::Key::Z) && i.modifiers.command && !i.modifiers.shift)
            {
                self.session.undo();
            }
            // Ctrl+Shift+Z or Ctrl+Y for redo
            else if ctx.input(|i| {
                (i.key_pressed(egui::Key::Z) && i.modifiers.command && i.modifiers.shift)
                    || (i.key_pressed(egui::Key::Y) && i.modifiers.command)
            }) {
                self.session.redo();
            }
        }
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Icon Studio");
            ui.separator();

            if ui
                .add_enabled(self.session.can_undo(), egui::Button::new("Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                self.session.undo();
            }
            if ui
                .add_enabled(self.session.can_redo(), egui::Button::new("Redo"))
                .on_hover_text("Ctrl+Shift+Z / Ctrl+Y")
                .clicked()
            {
                self.session.redo();
            }

            ui.separator();

            if ui.button("Export SVG").clicked() {
                self.export_svg();
            }
            if ui.button("Export PNG").clicked() {
                self.export_png();
            }
            ui.add(
                egui::DragValue::new(&mut self.png_scale)
                    .range(PNG_SCALE_MIN..=PNG_SCALE_MAX)
                    .speed(0.25)
                    .prefix("PNG ×"),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut self.dark_mode, "Dark");
            });
        });
    }

    fn draw_icon_grid(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Icons");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Ask AI").clicked() {
                    self.suggest.open = true;
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let selected = self.session.selected_icon().map(str::to_string);
            let mut picked: Option<&str> = None;
            for row in ICON_VOCABULARY.chunks(3) {
                ui.horizontal(|ui| {
                    for name in row {
                        let is_selected = selected.as_deref() == Some(*name);
                        if glyph_button(ui, name, is_selected).clicked() {
                            picked = Some(name);
                        }
                    }
                });
            }
            if let Some(name) = picked {
                self.session.select_icon(name);
            }
        });
    }

    fn draw_property_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_tab, EditorTab::Icon, "Icon");
            ui.selectable_value(&mut self.active_tab, EditorTab::Background, "Background");
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| match self.active_tab {
            EditorTab::Icon => self.draw_icon_tab(ui),
            EditorTab::Background => self.draw_background_tab(ui),
        });
    }

    fn draw_icon_tab(&mut self, ui: &mut egui::Ui) {
        let icon = self.session.icon().clone();

        let mut size = icon.size;
        if ui
            .add(
                egui::Slider::new(&mut size, ICON_SIZE_MIN..=ICON_SIZE_MAX)
                    .step_by(ICON_SIZE_STEP)
                    .text("Size"),
            )
            .changed()
        {
            self.session.update_icon(IconPatch::size(size));
        }

        let mut rotation = icon.rotation;
        if ui
            .add(
                egui::Slider::new(&mut rotation, 0.0..=360.0)
                    .step_by(1.0)
                    .suffix("°")
                    .text("Rotation"),
            )
            .changed()
        {
            self.session.update_icon(IconPatch::rotation(rotation));
        }

        let mut stroke_width = icon.stroke_width;
        if ui
            .add(
                egui::Slider::new(&mut stroke_width, STROKE_WIDTH_MIN..=STROKE_WIDTH_MAX)
                    .step_by(STROKE_WIDTH_STEP)
                    .text("Stroke width"),
            )
            .changed()
        {
            self.session
                .update_icon(IconPatch::stroke_width(stroke_width));
        }

        ui.add_space(8.0);
        ui.label("Color");
        let picked = color_picker::show(
            ui,
            &mut self.fill_picker,
            &icon.fill_color,
            Some(icon.opacity),
        );
        if let Some(hex) = picked.color {
            self.session.update_icon(IconPatch::fill_color(hex));
        }
        if let Some(opacity) = picked.opacity {
            self.session.update_icon(IconPatch::opacity(opacity));
        }
    }

    fn draw_background_tab(&mut self, ui: &mut egui::Ui) {
        let background = self.session.background().clone();

        let mut radius = background.border_radius;
        if ui
            .add(
                egui::Slider::new(&mut radius, 0.0..=BORDER_RADIUS_MAX)
                    .step_by(1.0)
                    .text("Corner radius"),
            )
            .changed()
        {
            self.session
                .update_background(BackgroundPatch::border_radius(radius));
        }
        ui.horizontal_wrapped(|ui| {
            for (label, value) in BORDER_RADIUS_PRESETS {
                if ui.small_button(label).clicked() {
                    self.session
                        .update_background(BackgroundPatch::border_radius(value));
                }
            }
        });

        ui.add_space(8.0);
        let mut shadow = background.shadow_size;
        egui::ComboBox::from_id_salt("shadow_size")
            .selected_text(shadow.label())
            .show_ui(ui, |ui| {
                for option in ShadowSize::ALL {
                    ui.selectable_value(&mut shadow, option, option.label());
                }
            });
        if shadow != background.shadow_size {
            self.session
                .update_background(BackgroundPatch::shadow_size(shadow));
        }

        ui.add_space(8.0);
        let mut gradient = background.gradient_type;
        ui.horizontal(|ui| {
            for option in GradientType::ALL {
                ui.selectable_value(&mut gradient, option, option.label());
            }
        });
        if gradient != background.gradient_type {
            self.session
                .update_background(BackgroundPatch::gradient_type(gradient));
        }

        ui.add_space(8.0);
        match background.gradient_type {
            GradientType::None => {
                ui.label("Background color");
                let picked = color_picker::show(
                    ui,
                    &mut self.background_picker,
                    &background.background_color,
                    None,
                );
                if let Some(hex) = picked.color {
                    self.session
                        .update_background(BackgroundPatch::background_color(hex));
                }
            }
            GradientType::Linear | GradientType::Radial => {
                if background.gradient_type == GradientType::Linear {
                    let mut angle = background.gradient_angle;
                    if ui
                        .add(
                            egui::Slider::new(&mut angle, 0.0..=360.0)
                                .step_by(1.0)
                                .suffix("°")
                                .text("Angle"),
                        )
                        .changed()
                    {
                        self.session
                            .update_background(BackgroundPatch::gradient_angle(angle));
                    }
                }

                ui.label("Start color");
                let picked = color_picker::show(
                    ui,
                    &mut self.gradient_start_picker,
                    &background.gradient_start_color,
                    None,
                );
                if let Some(hex) = picked.color {
                    self.session
                        .update_background(BackgroundPatch::gradient_start_color(hex));
                }

                ui.add_space(8.0);
                ui.label("End color");
                let picked = color_picker::show(
                    ui,
                    &mut self.gradient_end_picker,
                    &background.gradient_end_color,
                    None,
                );
                if let Some(hex) = picked.color {
                    self.session
                        .update_background(BackgroundPatch::gradient_end_color(hex));
                }
            }
        }
    }

    /// Drains the suggestion channel, if a request is in flight.
    fn poll_suggestions(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.suggest.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.suggest.results = result.icons.to_vec();
                self.suggest.advisory = result
                    .from_fallback
                    .then(|| "Showing local suggestions (no AI backend configured).".to_string());
                self.suggest.pending = None;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                ctx.request_repaint();
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.suggest.pending = None;
                self.suggest.advisory = Some("Suggestion request failed.".to_string());
            }
        }
    }

    /// Spawns a worker resolving suggestions for the current prompt.
    fn request_suggestions(&mut self) {
        let (tx, rx) = std::sync::mpsc::channel();
        let prompt = self.suggest.prompt.clone();
        std::thread::spawn(move || {
            let result = suggest_icons_detailed(&prompt, &NullBackend);
            let _ = tx.send(result);
        });
        self.suggest.pending = Some(rx);
        self.suggest.results.clear();
        self.suggest.advisory = None;
    }

    fn show_suggest_modal(&mut self, ctx: &egui::Context) {
        if !self.suggest.open {
            return;
        }
        let mut open = self.suggest.open;
        let mut close = false;
        egui::Window::new("Ask AI")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Describe the icon you need:");
                ui.text_edit_singleline(&mut self.suggest.prompt);

                let busy = self.suggest.pending.is_some();
                let can_ask = !busy && !self.suggest.prompt.trim().is_empty();
                let label = if busy { "Thinking..." } else { "Suggest" };
                if ui.add_enabled(can_ask, egui::Button::new(label)).clicked() {
                    self.request_suggestions();
                }

                if let Some(advisory) = &self.suggest.advisory {
                    ui.colored_label(ui.visuals().warn_fg_color, advisory);
                }

                if !self.suggest.results.is_empty() {
                    ui.separator();
                    let mut picked = None;
                    ui.horizontal(|ui| {
                        for name in &self.suggest.results {
                            if glyph_button(ui, name, false).clicked() {
                                picked = Some(name.clone());
                            }
                        }
                    });
                    if let Some(name) = picked {
                        self.session.select_icon(name);
                        close = true;
                    }
                }
            });
        self.suggest.open = open && !close;
    }
}

/// A clickable square button showing a glyph, highlighted when selected.
fn glyph_button(ui: &mut egui::Ui, name: &str, selected: bool) -> egui::Response {
    let (rect, resp) = ui.allocate_exact_size(egui::Vec2::splat(48.0), egui::Sense::click());
    let visuals = ui.style().interact_selectable(&resp, selected);
    ui.painter().rect(
        rect,
        egui::CornerRadius::same(6),
        visuals.bg_fill,
        visuals.bg_stroke,
        egui::StrokeKind::Inside,
    );
    glyphs::paint_glyph(
        ui.painter(),
        rect.shrink(12.0),
        &glyphs::glyph(name),
        egui::Stroke::new(1.8, visuals.fg_stroke.color),
    );
    resp.on_hover_text(name)
}
