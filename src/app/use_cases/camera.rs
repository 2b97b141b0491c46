//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use glam::Vec2;

/// Setzt Zoom auf den Startwert und zentriert auf die Karte.
pub fn reset_view(state: &mut AppState) {
    let center = state
        .view
        .chart
        .as_ref()
        .map_or(Vec2::ZERO, |chart| chart.center());
    state.view.camera.zoom = state.options.clamp_zoom(state.options.camera_zoom_default);
    state.view.camera.look_at(center);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let (min, max) = state.options.zoom_limits();
    state
        .view
        .camera
        .zoom_by_clamped(state.options.camera_zoom_step, min, max);
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let (min, max) = state.options.zoom_limits();
    state
        .view
        .camera
        .zoom_by_clamped(1.0 / state.options.camera_zoom_step, min, max);
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<Vec2>) {
    let (min, max) = state.options.zoom_limits();
    match focus_world {
        Some(focus) => {
            state.view.camera.zoom_towards(factor, focus, min, max);
        }
        None => {
            state.view.camera.zoom_by_clamped(factor, min, max);
        }
    }
}

/// Aktualisiert die Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Merkt die Cursor-Position für Statuszeile und Tooltips.
pub fn set_cursor(state: &mut AppState, world_pos: Option<Vec2>) {
    state.view.cursor_world = world_pos;
}
