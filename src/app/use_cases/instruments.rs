//! Use-Cases für Lineal, Winkelmesser und Zirkel.

use crate::app::AppState;
use crate::core::{Instrument, InstrumentKind};
use crate::shared::options::{
    ChartOptions, COMPASS_OPENING_MAX_DEG, COMPASS_OPENING_MIN_DEG, COMPASS_SPAWN_PX,
    PROTRACTOR_SPAWN_PX, RULER_SPAWN_PX,
};
use glam::Vec2;

/// Zielgröße (Screen-Punkte) eines Instruments laut Optionen.
pub fn target_size(options: &ChartOptions, kind: InstrumentKind) -> Vec2 {
    let size = match kind {
        InstrumentKind::Protractor => options.protractor_size,
        InstrumentKind::Ruler => options.ruler_size,
        InstrumentKind::Compass => options.compass_size,
    };
    Vec2::from(size)
}

/// Viewport-Punkt für das erste Einblenden (linke obere Ecke, beim Zirkel das Gelenk).
pub fn spawn_point(kind: InstrumentKind) -> Vec2 {
    let point = match kind {
        InstrumentKind::Protractor => PROTRACTOR_SPAWN_PX,
        InstrumentKind::Ruler => RULER_SPAWN_PX,
        InstrumentKind::Compass => COMPASS_SPAWN_PX,
    };
    Vec2::from(point)
}

/// Viewport-lokaler Drehpunkt eines Instruments.
pub fn pivot_screen(state: &AppState, instrument: &Instrument) -> Vec2 {
    state
        .view
        .camera
        .world_to_screen(instrument.anchor_world, state.view.viewport_vec())
}

/// Blendet ein Instrument ein oder aus.
///
/// Beim ersten Einblenden liegt die linke obere Ecke auf dem Spawn-Punkt im
/// Viewport; der Zirkel wird mit seinem Gelenk dort verankert.
pub fn toggle_instrument(state: &mut AppState, kind: InstrumentKind, visible: bool) {
    let target = target_size(&state.options, kind);
    let camera = state.view.camera.clone();
    let viewport = state.view.viewport_vec();
    let created = state.editor.instruments.toggle(kind, visible, || {
        let mut instrument = Instrument::new(kind, Vec2::ZERO, target);
        let pivot = match kind {
            InstrumentKind::Compass => spawn_point(kind),
            _ => spawn_point(kind) - instrument.local_bounds().min * instrument.scale,
        };
        instrument.anchor_world = camera.screen_to_world(pivot, viewport);
        instrument
    });
    if created {
        log::info!("{} erzeugt", kind.label());
    }
    if !visible && state.editor.dragging_instrument == Some(kind) {
        state.editor.dragging_instrument = None;
    }
}

/// Merkt das per Linksziehen bewegte Instrument.
pub fn set_drag(state: &mut AppState, kind: Option<InstrumentKind>) {
    state.editor.dragging_instrument = kind;
}

/// Verschiebt ein Instrument um ein Screen-Delta.
pub fn move_instrument(state: &mut AppState, kind: InstrumentKind, delta_screen: Vec2) {
    let zoom = state.view.camera.zoom;
    if let Some(instrument) = state.editor.instruments.get_mut(kind) {
        instrument.move_by_screen_delta(delta_screen, zoom);
    }
}

/// Dreht ein Instrument.
pub fn rotate_instrument(state: &mut AppState, kind: InstrumentKind, degrees: f32) {
    if let Some(instrument) = state.editor.instruments.get_mut(kind) {
        instrument.rotate_by(degrees);
    }
}

/// Ändert die Zirkel-Öffnung; `true`, wenn sie sich geändert hat.
pub fn adjust_compass_opening(state: &mut AppState, steps: i32) -> bool {
    let step_deg = state.options.compass_opening_step_deg;
    state
        .editor
        .instruments
        .get_mut(InstrumentKind::Compass)
        .filter(|compass| compass.visible)
        .is_some_and(|compass| {
            compass.adjust_opening_steps(
                steps,
                step_deg,
                COMPASS_OPENING_MIN_DEG,
                COMPASS_OPENING_MAX_DEG,
            )
        })
}

/// Oberstes sichtbares Instrument unter einem Viewport-Punkt.
pub fn instrument_at(state: &AppState, screen: Vec2) -> Option<InstrumentKind> {
    state
        .editor
        .instruments
        .topmost_at(screen, |instrument| pivot_screen(state, instrument))
}

/// Zirkelspanne: Abstand der Spitzen in Karten-Pixeln und Seemeilen.
pub fn compass_span(state: &AppState) -> Option<(f32, f64)> {
    let compass = state
        .editor
        .instruments
        .get(InstrumentKind::Compass)
        .filter(|c| c.visible)?;
    let (fixed, moving) = compass.compass_tips_world(state.view.camera.zoom)?;
    let nm = state
        .view
        .calibration
        .nautical_miles_between_pixels(fixed, moving);
    Some((fixed.distance(moving), nm))
}
