//! Use-Cases für Zeichen-Modi und Annotationen.

use crate::app::state::{DrawMode, PendingTextEntry};
use crate::app::tools::{ToolAction, ToolContext, ToolPreview};
use crate::app::AppState;
use crate::core::{format_dms, AnnotationId, AnnotationKind, GeoAxis};
use glam::Vec2;
use std::sync::Arc;

// ── Modi ─────────────────────────────────────────────────────────

/// Aktiviert einen Modus; ein Wechsel bricht laufende Gesten ab.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    if state.editor.mode != mode || state.editor.has_pending_input() {
        state.editor.tool_manager.reset_all();
        state.editor.pending_text = None;
    }
    if state.editor.mode != mode {
        log::info!("Zeichen-Modus: {:?} → {:?}", state.editor.mode, mode);
        state.editor.mode = mode;
    }
}

fn tool_context(state: &AppState) -> ToolContext {
    ToolContext::new(&state.options, state.editor.line_color)
}

// ── Werkzeug-Ereignisse ──────────────────────────────────────────

/// Rechte Taste gedrückt.
pub fn tool_press(state: &mut AppState, world_pos: Vec2) {
    let ctx = tool_context(state);
    let mode = state.editor.mode;
    let Some(tool) = state.editor.tool_manager.tool_mut(mode) else {
        return;
    };
    let action = tool.on_press(world_pos, &ctx);
    apply_tool_action(state, action);
}

/// Rechte Taste gezogen.
pub fn tool_drag(state: &mut AppState, world_pos: Vec2) {
    let ctx = tool_context(state);
    let mode = state.editor.mode;
    let Some(tool) = state.editor.tool_manager.tool_mut(mode) else {
        return;
    };
    let action = tool.on_drag(world_pos, &ctx);
    apply_tool_action(state, action);
}

/// Rechte Taste losgelassen.
pub fn tool_release(state: &mut AppState, world_pos: Vec2) {
    let ctx = tool_context(state);
    let mode = state.editor.mode;
    let Some(tool) = state.editor.tool_manager.tool_mut(mode) else {
        return;
    };
    let action = tool.on_release(world_pos, &ctx);
    apply_tool_action(state, action);
}

/// Mausbewegung ohne Taste.
pub fn tool_hover(state: &mut AppState, world_pos: Vec2) {
    let mode = state.editor.mode;
    if let Some(tool) = state.editor.tool_manager.tool_mut(mode) {
        tool.on_hover(world_pos);
    }
}

/// Führt die Rückgabe eines Werkzeugs zentral aus.
pub fn apply_tool_action(state: &mut AppState, action: ToolAction) {
    match action {
        ToolAction::Continue => {}
        ToolAction::Commit(kind) => {
            add_annotation(state, kind);
        }
        ToolAction::RequestText { pos } => {
            state.editor.pending_text = Some(PendingTextEntry {
                pos,
                text: String::new(),
            });
        }
        ToolAction::Erase { pos } => {
            erase_at(state, pos);
        }
    }
}

/// Preview-Geometrie des aktiven Werkzeugs.
pub fn tool_preview(state: &AppState) -> ToolPreview {
    state
        .editor
        .tool_manager
        .tool(state.editor.mode)
        .map(|tool| tool.preview(&tool_context(state)))
        .unwrap_or_default()
}

/// Statustext des aktiven Werkzeugs.
pub fn tool_status(state: &AppState) -> Option<&str> {
    state
        .editor
        .tool_manager
        .tool(state.editor.mode)
        .map(|tool| tool.status_text())
}

// ── Store-Mutationen ─────────────────────────────────────────────

/// Fügt eine Annotation mit Undo-Snapshot hinzu.
pub fn add_annotation(state: &mut AppState, kind: AnnotationKind) -> AnnotationId {
    state.record_undo_snapshot();
    let label = kind.label();
    let id = Arc::make_mut(&mut state.annotations).add(kind);
    log::debug!("{} {} hinzugefügt", label, id);
    id
}

/// Löscht die oberste Annotation unter `pos`.
///
/// Die Toleranz sind `eraser_tolerance_px` Screen-Pixel in Welt-Einheiten.
pub fn erase_at(state: &mut AppState, pos: Vec2) -> bool {
    let tolerance = state
        .view
        .camera
        .pick_radius_world(state.options.eraser_tolerance_px);
    let Some(id) = state.annotations.topmost_hit(pos, tolerance) else {
        return false;
    };
    state.record_undo_snapshot();
    if let Some(removed) = Arc::make_mut(&mut state.annotations).remove(id) {
        log::debug!("{} {} gelöscht", removed.kind.label(), id);
    }
    true
}

/// Übernimmt die offene Text-Eingabe; leerer Text fügt nichts hinzu.
pub fn confirm_text_entry(state: &mut AppState, text: &str) {
    let Some(entry) = state.editor.pending_text.take() else {
        return;
    };
    let text = text.trim();
    if text.is_empty() {
        log::debug!("Leerer Text verworfen");
        return;
    }
    let kind = AnnotationKind::Text {
        pos: entry.pos,
        text: text.to_string(),
        color: state.editor.line_color,
        size: state.options.text_size_world,
    };
    add_annotation(state, kind);
}

/// Verwirft die offene Text-Eingabe.
pub fn cancel_text_entry(state: &mut AppState) {
    state.editor.pending_text = None;
}

/// Setzt die Farbe für neue Linien, Bögen und Texte.
pub fn set_line_color(state: &mut AppState, color: [f32; 4]) {
    state.editor.line_color = color;
}

/// Färbt alle Punkte um (rückgängig machbar).
pub fn set_point_color(state: &mut AppState, color: [f32; 4]) {
    if state.annotations.point_color() == color {
        return;
    }
    state.record_undo_snapshot();
    Arc::make_mut(&mut state.annotations).set_point_color(color);
}

/// Beendet alle Modi und entfernt alle Annotationen.
pub fn clear_annotations(state: &mut AppState) {
    set_draw_mode(state, DrawMode::Pan);
    if state.annotations.is_empty() {
        return;
    }
    state.record_undo_snapshot();
    Arc::make_mut(&mut state.annotations).clear();
    log::info!("Alle Annotationen entfernt");
}

// ── Tooltip ──────────────────────────────────────────────────────

/// Tooltip für den Punkt unter `world_pos` (nur im Punkt-Modus sinnvoll).
pub fn point_tooltip(state: &AppState, world_pos: Vec2) -> Option<String> {
    let point = state.annotations.point_at(world_pos, 0.0)?;
    let AnnotationKind::Point { pos, .. } = point.kind else {
        return None;
    };
    let number = state.annotations.point_number(point.id)?;
    let geo = state.view.calibration.pixel_to_geo(pos);
    Some(format!(
        "Point {}\nX: {:.1}\nY: {:.1}\n{}\n{}",
        number,
        pos.x,
        pos.y,
        format_dms(geo.lat, GeoAxis::Latitude),
        format_dms(geo.lon, GeoAxis::Longitude)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f32, y: f32) -> AnnotationKind {
        AnnotationKind::Point {
            pos: Vec2::new(x, y),
            radius: 15.0,
        }
    }

    #[test]
    fn switching_mode_cancels_line_gesture() {
        let mut state = AppState::new();
        set_draw_mode(&mut state, DrawMode::Line);
        tool_press(&mut state, Vec2::ZERO);
        assert!(state.editor.has_pending_input());

        set_draw_mode(&mut state, DrawMode::Arc);
        assert!(!state.editor.has_pending_input());
        tool_release(&mut state, Vec2::new(100.0, 0.0));
        assert!(state.annotations.is_empty());
    }

    #[test]
    fn erase_removes_only_topmost() {
        let mut state = AppState::new();
        add_annotation(&mut state, point(10.0, 10.0));
        let top = add_annotation(&mut state, point(12.0, 10.0));

        assert!(erase_at(&mut state, Vec2::new(11.0, 10.0)));
        assert_eq!(state.annotations.len(), 1);
        assert!(state.annotations.get(top).is_none());
    }

    #[test]
    fn erase_miss_records_no_history() {
        let mut state = AppState::new();
        add_annotation(&mut state, point(10.0, 10.0));
        state.history = crate::app::history::EditHistory::new_with_capacity(10);

        assert!(!erase_at(&mut state, Vec2::new(5000.0, 5000.0)));
        assert!(!state.can_undo());
    }

    #[test]
    fn empty_text_is_ignored() {
        let mut state = AppState::new();
        state.editor.pending_text = Some(PendingTextEntry {
            pos: Vec2::ZERO,
            text: String::new(),
        });
        confirm_text_entry(&mut state, "   ");
        assert!(state.annotations.is_empty());
        assert!(state.editor.pending_text.is_none());
    }

    #[test]
    fn text_uses_line_color_and_is_trimmed() {
        let mut state = AppState::new();
        set_line_color(&mut state, [0.0, 1.0, 0.0, 1.0]);
        state.editor.pending_text = Some(PendingTextEntry {
            pos: Vec2::new(5.0, 5.0),
            text: String::new(),
        });
        confirm_text_entry(&mut state, "  Tarifa ");

        let stored = state.annotations.iter().next().expect("Text vorhanden");
        match &stored.kind {
            AnnotationKind::Text { text, color, .. } => {
                assert_eq!(text, "Tarifa");
                assert_eq!(*color, [0.0, 1.0, 0.0, 1.0]);
            }
            other => panic!("Text erwartet, erhalten: {:?}", other),
        }
    }

    #[test]
    fn point_color_change_is_undoable() {
        let mut state = AppState::new();
        let before = state.annotations.point_color();
        set_point_color(&mut state, [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(state.annotations.point_color(), [1.0, 1.0, 0.0, 1.0]);

        crate::app::handlers::history::undo(&mut state);
        assert_eq!(state.annotations.point_color(), before);
    }

    #[test]
    fn tooltip_numbers_points_in_order() {
        let mut state = AppState::new();
        add_annotation(&mut state, point(100.0, 100.0));
        add_annotation(&mut state, point(400.0, 250.0));

        let text = point_tooltip(&state, Vec2::new(402.0, 250.0)).expect("Tooltip");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Point 2"));
        assert_eq!(lines.next(), Some("X: 400.0"));
        assert_eq!(lines.next(), Some("Y: 250.0"));
        assert!(lines.next().is_some_and(|l| l.ends_with('N')));
        assert!(lines.next().is_some_and(|l| l.ends_with('W')));

        assert!(point_tooltip(&state, Vec2::new(250.0, 250.0)).is_none());
    }
}
