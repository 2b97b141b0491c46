//! Radierer: Rechts drücken oder ziehen löscht die oberste Annotation.

use super::{DrawTool, ToolAction, ToolContext};
use crate::app::state::DrawMode;
use glam::Vec2;

/// Löscht pro Ereignis höchstens eine Annotation.
#[derive(Debug, Default)]
pub struct EraserTool;

impl EraserTool {
    /// Erstellt das Werkzeug.
    pub fn new() -> Self {
        Self
    }
}

impl DrawTool for EraserTool {
    fn mode(&self) -> DrawMode {
        DrawMode::Eraser
    }

    fn status_text(&self) -> &str {
        "Right-click or right-drag over a mark to erase it"
    }

    fn on_press(&mut self, pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        ToolAction::Erase { pos }
    }

    fn on_drag(&mut self, pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        ToolAction::Erase { pos }
    }

    fn reset(&mut self) {}
}
