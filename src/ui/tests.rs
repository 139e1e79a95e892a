use super::*;
use crate::types::IconPatch;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(events: Vec<egui::Event>, mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    // Key events carry their own modifiers, but `Context::input` reads the
    // frame-level modifier state; mirror it so shortcuts see held keys.
    for event in &events {
        if let egui::Event::Key { modifiers, .. } = event {
            raw.modifiers = *modifiers;
        }
    }
    raw.events = events;

    let ctx = egui::Context::default();
    ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        f(ctx);
    })
}

fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[test]
fn ctrl_z_undoes_the_last_edit() {
    let mut app = StudioApp::default();
    app.session.update_icon(IconPatch::size(64.0));
    assert_eq!(app.session.icon().size, 64.0);

    run_ui_with(
        vec![key_press(egui::Key::Z, egui::Modifiers::COMMAND)],
        |ctx| app.handle_undo_redo_keys(ctx),
    );

    assert_eq!(app.session.icon().size, 128.0);
    assert!(app.session.can_redo());
}

#[test]
fn ctrl_shift_z_and_ctrl_y_both_redo() {
    let mut app = StudioApp::default();
    app.session.update_icon(IconPatch::size(64.0));
    app.session.update_icon(IconPatch::rotation(90.0));
    app.session.undo();
    app.session.undo();

    run_ui_with(
        vec![key_press(
            egui::Key::Z,
            egui::Modifiers {
                shift: true,
                ..egui::Modifiers::COMMAND
            },
        )],
        |ctx| app.handle_undo_redo_keys(ctx),
    );
    assert_eq!(app.session.icon().size, 64.0);

    run_ui_with(
        vec![key_press(egui::Key::Y, egui::Modifiers::COMMAND)],
        |ctx| app.handle_undo_redo_keys(ctx),
    );
    assert_eq!(app.session.icon().rotation, 90.0);
}

#[test]
fn plain_z_is_not_an_undo() {
    let mut app = StudioApp::default();
    app.session.update_icon(IconPatch::size(64.0));

    run_ui_with(
        vec![key_press(egui::Key::Z, egui::Modifiers::NONE)],
        |ctx| app.handle_undo_redo_keys(ctx),
    );

    assert_eq!(app.session.icon().size, 64.0);
}

#[test]
fn all_panels_render_a_headless_frame() {
    let mut app = StudioApp::default();
    app.session
        .update_background(crate::types::BackgroundPatch::gradient_type(
            crate::types::GradientType::Linear,
        ));
    app.session
        .update_background(crate::types::BackgroundPatch::shadow_size(
            crate::types::ShadowSize::Lg,
        ));

    run_ui_with(vec![], |ctx| {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            app.draw_toolbar(ui);
        });
        egui::SidePanel::right("icon_grid").show(ctx, |ui| {
            app.draw_icon_grid(ui);
        });
        egui::SidePanel::left("properties").show(ctx, |ui| {
            app.draw_property_panel(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            preview::draw_preview(ui, &app.session);
        });
    });
}

#[test]
fn suggest_modal_renders_results() {
    let mut app = StudioApp::default();
    app.suggest.open = true;
    app.suggest.results = vec!["Search".into(), "Star".into(), "Heart".into()];
    app.suggest.advisory = Some("Showing local suggestions.".into());

    run_ui_with(vec![], |ctx| {
        app.show_suggest_modal(ctx);
    });

    // Nothing was picked, so the modal stays open.
    assert!(app.suggest.open);
}

#[test]
fn picker_widget_syncs_to_external_value_changes() {
    let mut app = StudioApp::default();

    run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            color_picker::show(ui, &mut app.fill_picker, "#ff0000", None);
        });
    });
    assert_eq!(app.fill_picker.synced_value, "#ff0000");
    assert_eq!(app.fill_picker.hex_input, "#FF0000");
    assert_eq!(app.fill_picker.session.hue(), 0.0);

    // The bound value changes (e.g. via undo): the widget re-derives its
    // cursor on the next frame.
    run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            color_picker::show(ui, &mut app.fill_picker, "#0000ff", None);
        });
    });
    assert_eq!(app.fill_picker.synced_value, "#0000ff");
    assert_eq!(app.fill_picker.session.hue(), 240.0);
}
