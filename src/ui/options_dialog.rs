//! Options-Dialog für Farben, Größen, Zoom und Kalibrierung.

use std::ops::RangeInclusive;

use crate::app::{AppIntent, AppState};
use crate::shared::GeoReference;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(520.0)
                .show(ui, |ui| {
                    // ── Zeichnen ────────────────────────────────────
                    ui.collapsing("Drawing", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Line color:");
                            changed |= super::color_edit(ui, &mut opts.line_color);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Point color:");
                            changed |= super::color_edit(ui, &mut opts.point_color);
                        });
                        changed |= value_row(
                            ui,
                            "Line width (px):",
                            &mut opts.line_width_world,
                            1.0..=50.0,
                            0.1,
                        );
                        changed |= value_row(
                            ui,
                            "Point radius (px):",
                            &mut opts.point_radius_world,
                            1.0..=80.0,
                            0.2,
                        );
                        changed |= value_row(
                            ui,
                            "Text size (px):",
                            &mut opts.text_size_world,
                            6.0..=200.0,
                            0.5,
                        );
                        changed |= value_row(
                            ui,
                            "Eraser tolerance (screen px):",
                            &mut opts.eraser_tolerance_px,
                            0.0..=40.0,
                            0.1,
                        );
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Camera", |ui| {
                        changed |= value_row(
                            ui,
                            "Initial zoom:",
                            &mut opts.camera_zoom_default,
                            0.01..=10.0,
                            0.01,
                        );
                        changed |= value_row(
                            ui,
                            "Minimum zoom:",
                            &mut opts.camera_zoom_min,
                            0.01..=10.0,
                            0.01,
                        );
                        changed |= value_row(
                            ui,
                            "Maximum zoom:",
                            &mut opts.camera_zoom_max,
                            0.01..=20.0,
                            0.01,
                        );
                        changed |= value_row(
                            ui,
                            "Zoom step (menu):",
                            &mut opts.camera_zoom_step,
                            1.01..=3.0,
                            0.01,
                        );
                        changed |= value_row(
                            ui,
                            "Zoom step (wheel):",
                            &mut opts.camera_scroll_zoom_step,
                            1.01..=2.0,
                            0.01,
                        );
                    });

                    // ── Instrumente ─────────────────────────────────
                    ui.collapsing("Instruments", |ui| {
                        changed |= value_row(
                            ui,
                            "Wheel points per notch:",
                            &mut opts.wheel_points_per_notch,
                            1.0..=240.0,
                            0.5,
                        );
                        changed |= value_row(
                            ui,
                            "Rotation per notch (°):",
                            &mut opts.rotation_deg_per_notch,
                            0.1..=45.0,
                            0.05,
                        );
                        changed |= value_row(
                            ui,
                            "Compass step per notch (°):",
                            &mut opts.compass_opening_step_deg,
                            0.1..=20.0,
                            0.05,
                        );
                    });

                    // ── Kalibrierung ────────────────────────────────
                    ui.collapsing("Calibration", |ui| {
                        ui.label("Two reference pixels with known coordinates.");
                        changed |= reference_grid(ui, "calibration_a", &mut opts.geo_reference_a);
                        ui.separator();
                        changed |= reference_grid(ui, "calibration_b", &mut opts.geo_reference_b);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

fn value_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

fn reference_grid(ui: &mut egui::Ui, id: &str, reference: &mut GeoReference) -> bool {
    let mut changed = false;
    egui::Grid::new(id).num_columns(2).show(ui, |ui| {
        ui.label("Pixel x / y:");
        ui.horizontal(|ui| {
            changed |= ui
                .add(egui::DragValue::new(&mut reference.pixel[0]).speed(1.0))
                .changed();
            changed |= ui
                .add(egui::DragValue::new(&mut reference.pixel[1]).speed(1.0))
                .changed();
        });
        ui.end_row();

        ui.label("Latitude (°N):");
        changed |= ui
            .add(
                egui::DragValue::new(&mut reference.lat)
                    .range(-90.0..=90.0)
                    .speed(0.001)
                    .max_decimals(5),
            )
            .changed();
        ui.end_row();

        ui.label("Longitude (°E):");
        changed |= ui
            .add(
                egui::DragValue::new(&mut reference.lon)
                    .range(-180.0..=180.0)
                    .speed(0.001)
                    .max_decimals(5),
            )
            .changed();
        ui.end_row();
    });
    changed
}
