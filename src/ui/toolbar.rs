//! Toolbar: Zeichen-Modi, Farben, Instrumente und Benutzer.

use super::color_edit;
use crate::app::{AppIntent, AppState, DrawMode};
use crate::core::InstrumentKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Mode:");
            ui.separator();

            // Erneutes Wählen des aktiven Modus führt zurück zu Pan
            for mode in DrawMode::DRAWING {
                if ui.selectable_label(active == mode, mode.label()).clicked() {
                    events.push(AppIntent::DrawModeSelected { mode });
                }
            }

            ui.separator();

            ui.label("Line:");
            let mut line_color = state.editor.line_color;
            if color_edit(ui, &mut line_color) {
                events.push(AppIntent::LineColorChanged { color: line_color });
            }

            ui.label("Points:");
            let mut point_color = state.annotations.point_color();
            if color_edit(ui, &mut point_color) {
                events.push(AppIntent::PointColorChanged { color: point_color });
            }

            if ui
                .add_enabled(state.annotation_count() > 0, egui::Button::new("Clear"))
                .on_hover_text("Remove all annotations")
                .clicked()
            {
                events.push(AppIntent::ClearAnnotationsRequested);
            }

            ui.separator();

            for kind in InstrumentKind::ALL {
                let visible = state.editor.instruments.is_visible(kind);
                if ui.selectable_label(visible, kind.label()).clicked() {
                    events.push(AppIntent::InstrumentToggled {
                        kind,
                        visible: !visible,
                    });
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = state
                    .account
                    .current_nick()
                    .map_or_else(|| "Log in".to_string(), |nick| format!("👤 {}", nick));
                if ui.button(label).clicked() {
                    events.push(AppIntent::UserMenuRequested);
                }
            });
        });
    });

    events
}
