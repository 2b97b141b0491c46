//! Handler für Zeichen-Modi, Gesten und Annotationen.

use crate::app::state::DrawMode;
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt den Zeichen-Modus.
pub fn set_mode(state: &mut AppState, mode: DrawMode) {
    use_cases::drawing::set_draw_mode(state, mode);
}

/// Rechte Taste gedrückt.
pub fn press(state: &mut AppState, world_pos: Vec2) {
    use_cases::drawing::tool_press(state, world_pos);
}

/// Rechte Taste gezogen.
pub fn drag(state: &mut AppState, world_pos: Vec2) {
    use_cases::drawing::tool_drag(state, world_pos);
}

/// Rechte Taste losgelassen.
pub fn release(state: &mut AppState, world_pos: Vec2) {
    use_cases::drawing::tool_release(state, world_pos);
}

/// Mausbewegung.
pub fn hover(state: &mut AppState, world_pos: Vec2) {
    use_cases::drawing::tool_hover(state, world_pos);
}

/// Übernimmt die Text-Eingabe.
pub fn confirm_text(state: &mut AppState, text: &str) {
    use_cases::drawing::confirm_text_entry(state, text);
}

/// Verwirft die Text-Eingabe.
pub fn cancel_text(state: &mut AppState) {
    use_cases::drawing::cancel_text_entry(state);
}

/// Setzt die Linienfarbe.
pub fn set_line_color(state: &mut AppState, color: [f32; 4]) {
    use_cases::drawing::set_line_color(state, color);
}

/// Setzt die Punktfarbe.
pub fn set_point_color(state: &mut AppState, color: [f32; 4]) {
    use_cases::drawing::set_point_color(state, color);
}

/// Entfernt alle Annotationen.
pub fn clear(state: &mut AppState) {
    use_cases::drawing::clear_annotations(state);
}
