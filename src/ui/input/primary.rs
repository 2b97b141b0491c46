//! Linksziehen: Instrument verschieben oder Kamera-Pan; Mittelziehen pannt immer.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::use_cases::instruments::instrument_at;
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Erkennt Drag-Beginn/-Ende und erzeugt Pan- bzw. Instrument-Events.
    pub(crate) fn handle_primary_drag(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if ctx.response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin() liefert die Klickposition vor der Drag-Schwelle
            let press = ctx.ui.input(|i| i.pointer.press_origin());
            let instrument =
                press.and_then(|pos| instrument_at(ctx.state, ctx.to_local(pos)));

            self.primary_drag_mode = match instrument {
                Some(kind) => {
                    events.push(AppIntent::InstrumentDragStarted { kind });
                    PrimaryDragMode::Instrument(kind)
                }
                None if !ctx.state.editor.mode.blocks_primary_pan() => PrimaryDragMode::CameraPan,
                None => PrimaryDragMode::None,
            };
        }

        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        let delta = Vec2::new(pointer_delta.x, pointer_delta.y);

        if ctx.response.dragged_by(egui::PointerButton::Primary) && delta != Vec2::ZERO {
            match self.primary_drag_mode {
                PrimaryDragMode::Instrument(kind) => {
                    events.push(AppIntent::InstrumentDragged {
                        kind,
                        delta_screen: delta,
                    });
                }
                PrimaryDragMode::CameraPan => {
                    events.push(AppIntent::CameraPan {
                        delta: -delta * ctx.state.view.camera.world_per_pixel(),
                    });
                }
                PrimaryDragMode::None => {}
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle) && delta != Vec2::ZERO {
            events.push(AppIntent::CameraPan {
                delta: -delta * ctx.state.view.camera.world_per_pixel(),
            });
        }

        if ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            if matches!(self.primary_drag_mode, PrimaryDragMode::Instrument(_)) {
                events.push(AppIntent::InstrumentDragEnded);
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}
