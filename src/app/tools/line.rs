//! Linien-Werkzeug: rechts drücken, ziehen, loslassen.

use super::{DrawTool, PreviewShape, ToolAction, ToolContext, ToolPreview};
use crate::app::state::DrawMode;
use crate::core::AnnotationKind;
use crate::shared::options::MIN_LINE_LENGTH_WORLD;
use glam::Vec2;

/// Zieht gerade Linien; zu kurze Linien werden verworfen.
#[derive(Debug, Default)]
pub struct LineTool {
    /// Angefangene Linie (Start, aktuelles Ende)
    drag: Option<(Vec2, Vec2)>,
}

impl LineTool {
    /// Erstellt das Werkzeug ohne laufende Geste.
    pub fn new() -> Self {
        Self { drag: None }
    }
}

impl DrawTool for LineTool {
    fn mode(&self) -> DrawMode {
        DrawMode::Line
    }

    fn status_text(&self) -> &str {
        if self.drag.is_some() {
            "Release the right button to finish the line"
        } else {
            "Right-drag to draw a line"
        }
    }

    fn on_press(&mut self, pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        self.drag = Some((pos, pos));
        ToolAction::Continue
    }

    fn on_drag(&mut self, pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        if let Some((_, end)) = self.drag.as_mut() {
            *end = pos;
        }
        ToolAction::Continue
    }

    fn on_release(&mut self, pos: Vec2, ctx: &ToolContext) -> ToolAction {
        let Some((start, _)) = self.drag.take() else {
            return ToolAction::Continue;
        };
        if start.distance(pos) < MIN_LINE_LENGTH_WORLD {
            log::debug!("Linie verworfen (zu kurz)");
            return ToolAction::Continue;
        }
        ToolAction::Commit(AnnotationKind::Line {
            start,
            end: pos,
            color: ctx.line_color,
            width: ctx.line_width,
        })
    }

    fn preview(&self, ctx: &ToolContext) -> ToolPreview {
        let shapes = self
            .drag
            .map(|(start, end)| PreviewShape::Line {
                start,
                end,
                color: ctx.line_color,
                width: ctx.line_width,
            })
            .into_iter()
            .collect();
        ToolPreview { shapes }
    }

    fn reset(&mut self) {
        self.drag = None;
    }

    fn has_pending_input(&self) -> bool {
        self.drag.is_some()
    }
}
