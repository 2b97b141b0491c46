//! Handler für Kamera, Viewport und Seekarte.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Ansicht auf Start-Zoom und Kartenmitte zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize(state, size);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_world);
}

/// Merkt die Cursor-Position.
pub fn set_cursor(state: &mut AppState, world_pos: Option<glam::Vec2>) {
    use_cases::camera::set_cursor(state, world_pos);
}

/// Fordert den Seekarten-Dialog an.
pub fn request_open_chart(state: &mut AppState) {
    use_cases::chart::request_open_dialog(state);
}

/// Lädt eine Seekarte und propagiert Fehler an den Aufrufer.
pub fn load_chart(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::chart::load_chart(state, path)
}
