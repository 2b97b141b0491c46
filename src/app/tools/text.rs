//! Text-Werkzeug: Rechtsklick öffnet die Text-Eingabe.

use super::{DrawTool, ToolAction, ToolContext};
use crate::app::state::DrawMode;
use glam::Vec2;

/// Fordert eine Text-Eingabe an der Klickposition an.
#[derive(Debug, Default)]
pub struct TextTool;

impl TextTool {
    /// Erstellt das Werkzeug.
    pub fn new() -> Self {
        Self
    }
}

impl DrawTool for TextTool {
    fn mode(&self) -> DrawMode {
        DrawMode::Text
    }

    fn status_text(&self) -> &str {
        "Right-click where the text should start"
    }

    fn on_press(&mut self, pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        ToolAction::RequestText { pos }
    }

    fn reset(&mut self) {}
}
