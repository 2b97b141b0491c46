//! Rechte Taste: Zeichen-Gesten des aktiven Werkzeugs.
//!
//! Ausgewertet wird der rohe Tastenzustand statt egui-Drags, damit schon ein
//! Rechtsklick ohne Bewegung als Drücken + Loslassen ankommt.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    pub(crate) fn handle_secondary(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let (pressed, released, down, moving, latest) = ctx.ui.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Secondary),
                i.pointer.button_released(egui::PointerButton::Secondary),
                i.pointer.button_down(egui::PointerButton::Secondary),
                i.pointer.is_moving(),
                i.pointer.latest_pos(),
            )
        });
        let Some(pos) = latest else {
            return;
        };

        if pressed && ctx.response.contains_pointer() {
            self.secondary_active = true;
            events.push(AppIntent::SecondaryPressed {
                world_pos: ctx.to_world(pos),
            });
            return;
        }

        if !self.secondary_active {
            return;
        }

        if released || !down {
            self.secondary_active = false;
            events.push(AppIntent::SecondaryReleased {
                world_pos: ctx.to_world(pos),
            });
        } else if moving {
            events.push(AppIntent::SecondaryDragged {
                world_pos: ctx.to_world(pos),
            });
        }
    }
}
