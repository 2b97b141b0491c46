//! Handler für die Overlay-Instrumente.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::InstrumentKind;

/// Blendet ein Instrument ein oder aus.
pub fn toggle(state: &mut AppState, kind: InstrumentKind, visible: bool) {
    use_cases::instruments::toggle_instrument(state, kind, visible);
}

/// Setzt das gezogene Instrument.
pub fn set_drag(state: &mut AppState, kind: Option<InstrumentKind>) {
    use_cases::instruments::set_drag(state, kind);
}

/// Verschiebt ein Instrument.
pub fn move_by(state: &mut AppState, kind: InstrumentKind, delta_screen: glam::Vec2) {
    use_cases::instruments::move_instrument(state, kind, delta_screen);
}

/// Dreht ein Instrument.
pub fn rotate(state: &mut AppState, kind: InstrumentKind, degrees: f32) {
    use_cases::instruments::rotate_instrument(state, kind, degrees);
}

/// Ändert die Zirkel-Öffnung.
pub fn adjust_opening(state: &mut AppState, steps: i32) {
    if !use_cases::instruments::adjust_compass_opening(state, steps) {
        log::debug!("Zirkel-Öffnung unverändert ({} Rasten)", steps);
    }
}
