//! Hover: Cursor-Position für Statuszeile, Punkt-Tooltip und Mauszeiger.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::use_cases::drawing::point_tooltip;
use crate::app::use_cases::instruments::instrument_at;
use crate::app::{AppIntent, DrawMode};

impl InputState {
    pub(crate) fn handle_hover(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let hover = ctx.response.hover_pos();
        let world_pos = hover.map(|pos| ctx.to_world(pos));

        let changed = match (world_pos, ctx.state.view.cursor_world) {
            (Some(new), Some(old)) => new.distance_squared(old) > f32::EPSILON,
            (None, None) => false,
            _ => true,
        };
        if changed {
            events.push(AppIntent::PointerMoved { world_pos });
        }

        let Some(hover) = hover else {
            return;
        };

        let over_instrument = instrument_at(ctx.state, ctx.to_local(hover)).is_some();
        let icon = match self.primary_drag_mode {
            PrimaryDragMode::Instrument(_) => egui::CursorIcon::Grabbing,
            _ if over_instrument => egui::CursorIcon::Grab,
            _ => match ctx.state.editor.mode {
                DrawMode::Pan => egui::CursorIcon::Default,
                DrawMode::Eraser => egui::CursorIcon::PointingHand,
                _ => egui::CursorIcon::Crosshair,
            },
        };
        ctx.ui.ctx().set_cursor_icon(icon);

        if ctx.state.editor.mode == DrawMode::Point && !over_instrument {
            if let Some(text) = world_pos.and_then(|pos| point_tooltip(ctx.state, pos)) {
                ctx.response.clone().on_hover_text_at_pointer(text);
            }
        }
    }
}
