//! Punkt-Werkzeug: Rechtsklick setzt einen Punkt.

use super::{DrawTool, ToolAction, ToolContext};
use crate::app::state::DrawMode;
use crate::core::AnnotationKind;
use glam::Vec2;

/// Setzt gefüllte Punkte.
#[derive(Debug, Default)]
pub struct PointTool;

impl PointTool {
    /// Erstellt das Werkzeug.
    pub fn new() -> Self {
        Self
    }
}

impl DrawTool for PointTool {
    fn mode(&self) -> DrawMode {
        DrawMode::Point
    }

    fn status_text(&self) -> &str {
        "Right-click to place a point"
    }

    fn on_press(&mut self, pos: Vec2, ctx: &ToolContext) -> ToolAction {
        ToolAction::Commit(AnnotationKind::Point {
            pos,
            radius: ctx.point_radius,
        })
    }

    fn reset(&mut self) {}
}
