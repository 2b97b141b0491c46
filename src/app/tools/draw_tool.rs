//! DrawTool-Trait: Schnittstelle für alle Zeichen-Werkzeuge.

use crate::app::state::DrawMode;
use glam::Vec2;

use super::{ToolAction, ToolContext, ToolPreview};

/// Schnittstelle für alle Zeichen-Werkzeuge (Punkt, Linie, Bogen, Text, Radierer).
///
/// Werkzeuge reagieren auf die rechte Maustaste und halten höchstens eine
/// angefangene Geste.
pub trait DrawTool {
    /// Modus, zu dem das Werkzeug gehört
    fn mode(&self) -> DrawMode;

    /// Statustext für die Statuszeile (z.B. "Right-click the arc center")
    fn status_text(&self) -> &str;

    /// Rechte Taste gedrückt.
    fn on_press(&mut self, pos: Vec2, ctx: &ToolContext) -> ToolAction;

    /// Rechte Taste gezogen.
    fn on_drag(&mut self, _pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        ToolAction::Continue
    }

    /// Rechte Taste losgelassen.
    fn on_release(&mut self, _pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        ToolAction::Continue
    }

    /// Mausbewegung ohne gedrückte rechte Taste.
    fn on_hover(&mut self, _pos: Vec2) {}

    /// Preview-Geometrie der laufenden Geste.
    fn preview(&self, _ctx: &ToolContext) -> ToolPreview {
        ToolPreview::default()
    }

    /// Werkzeug-Zustand zurücksetzen (Escape / Modus-Wechsel).
    fn reset(&mut self);

    /// Hat das Werkzeug eine angefangene Geste?
    fn has_pending_input(&self) -> bool {
        false
    }
}
