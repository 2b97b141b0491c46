//! Status-Bar am unteren Bildschirmrand.

use crate::app::use_cases::drawing::tool_status;
use crate::app::use_cases::instruments::compass_span;
use crate::app::AppState;
use crate::core::format_lat_lon;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.view.cursor_world {
                Some(pos) => {
                    ui.label(format!("X: {:.0} Y: {:.0}", pos.x, pos.y));
                    ui.separator();
                    let geo = state.view.calibration.pixel_to_geo(pos);
                    ui.label(format_lat_lon(geo));
                }
                None => {
                    ui.label("X: - Y: -");
                }
            }

            ui.separator();

            ui.label(format!("Zoom: {:.0}%", state.view.camera.zoom * 100.0));

            ui.separator();

            ui.label(format!("Mode: {}", state.editor.mode.label()));
            if let Some(hint) = tool_status(state) {
                ui.label(egui::RichText::new(hint).weak());
            }

            if let Some((pixels, nautical_miles)) = compass_span(state) {
                ui.separator();
                ui.label(format!(
                    "Compass: {:.0} px ≈ {:.2} NM",
                    pixels, nautical_miles
                ));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match state.account.current_nick() {
                    Some(nick) => ui.label(format!("User: {}", nick)),
                    None => ui.label("Not logged in"),
                };
                if state.quiz.has_results() {
                    ui.separator();
                    ui.label(format!(
                        "Hits: {} | Faults: {}",
                        state.quiz.hits, state.quiz.faults
                    ));
                }
            });
        });
    });
}
