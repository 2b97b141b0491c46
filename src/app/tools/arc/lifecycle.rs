//! DrawTool-Implementierung des ArcTool.

use super::super::{DrawTool, PreviewShape, ToolAction, ToolContext, ToolPreview};
use super::state::{ArcTool, Phase};
use crate::app::state::DrawMode;
use crate::core::{AnnotationKind, ArcShape};
use crate::shared::options::{MIN_ARC_RADIUS_WORLD, MIN_ARC_SWEEP_DEG};
use glam::Vec2;

impl DrawTool for ArcTool {
    fn mode(&self) -> DrawMode {
        DrawMode::Arc
    }

    fn status_text(&self) -> &str {
        match self.phase {
            Phase::Center => "Right-click the arc center",
            Phase::Radius { .. } => "Right-click to set radius and start angle",
            Phase::Sweep { .. } => "Move to sweep the arc, right-click to finish",
        }
    }

    fn on_press(&mut self, pos: Vec2, ctx: &ToolContext) -> ToolAction {
        self.cursor = Some(pos);
        match self.phase {
            Phase::Center => {
                self.phase = Phase::Radius { center: pos };
                ToolAction::Continue
            }
            Phase::Radius { center } => {
                let radius = center.distance(pos);
                if radius < MIN_ARC_RADIUS_WORLD {
                    log::debug!("Bogen-Radius zu klein ({:.2}), Klick ignoriert", radius);
                    return ToolAction::Continue;
                }
                let offset = pos - center;
                let start_angle = offset.y.atan2(offset.x);
                self.phase = Phase::Sweep {
                    shape: ArcShape {
                        center,
                        radius,
                        start_angle,
                        sweep: 0.0,
                    },
                    last_angle: start_angle,
                };
                ToolAction::Continue
            }
            Phase::Sweep { .. } => {
                self.track_sweep(pos);
                let Phase::Sweep { shape, .. } = self.phase else {
                    return ToolAction::Continue;
                };
                self.reset();
                if shape.sweep.abs() < MIN_ARC_SWEEP_DEG.to_radians() {
                    log::debug!("Bogen verworfen (Winkel zu klein)");
                    return ToolAction::Continue;
                }
                ToolAction::Commit(AnnotationKind::Arc {
                    shape,
                    color: ctx.line_color,
                    width: ctx.line_width,
                })
            }
        }
    }

    fn on_drag(&mut self, pos: Vec2, _ctx: &ToolContext) -> ToolAction {
        self.on_hover(pos);
        ToolAction::Continue
    }

    fn on_hover(&mut self, pos: Vec2) {
        self.cursor = Some(pos);
        self.track_sweep(pos);
    }

    fn preview(&self, ctx: &ToolContext) -> ToolPreview {
        let mut shapes = Vec::new();
        match self.phase {
            Phase::Center => {}
            Phase::Radius { center } => {
                shapes.push(PreviewShape::Marker { pos: center });
                if let Some(cursor) = self.cursor {
                    shapes.push(PreviewShape::Guide {
                        from: center,
                        to: cursor,
                    });
                }
            }
            Phase::Sweep { shape, .. } => {
                shapes.push(PreviewShape::Marker { pos: shape.center });
                shapes.push(PreviewShape::Guide {
                    from: shape.center,
                    to: shape.start_point(),
                });
                shapes.push(PreviewShape::Arc {
                    shape,
                    color: ctx.line_color,
                    width: ctx.line_width,
                });
            }
        }
        ToolPreview { shapes }
    }

    fn reset(&mut self) {
        self.phase = Phase::Center;
        self.cursor = None;
    }

    fn has_pending_input(&self) -> bool {
        !matches!(self.phase, Phase::Center)
    }
}
