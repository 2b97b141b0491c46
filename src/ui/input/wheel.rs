//! Mausrad: Zoom auf Mausposition; über Instrumenten Drehen bzw. Zirkel öffnen.

use super::{InputState, ViewportContext};
use crate::app::use_cases::instruments::{instrument_at, pivot_screen};
use crate::app::AppIntent;
use crate::core::InstrumentKind;

/// Rasten pro Seite bei seitenweisem Scrollen.
const PAGE_NOTCHES: f32 = 3.0;

/// Summe der Mausrad-Rasten dieses Frames samt Modifiern.
///
/// Liest die rohen `MouseWheel`-Events, weil egui Ctrl+Rad sonst in einen
/// Zoom-Faktor umwandelt.
pub(crate) fn wheel_notches(ui: &egui::Ui, points_per_notch: f32) -> Option<(f32, egui::Modifiers)> {
    ui.input(|i| {
        let mut total = 0.0;
        let mut last_modifiers = None;
        for event in &i.events {
            if let egui::Event::MouseWheel {
                unit,
                delta,
                modifiers,
                ..
            } = event
            {
                // Shift lenkt das Rad auf manchen Plattformen horizontal um
                let amount = if modifiers.shift {
                    delta.x + delta.y
                } else {
                    delta.y
                };
                total += match unit {
                    egui::MouseWheelUnit::Point => amount / points_per_notch.max(1.0),
                    egui::MouseWheelUnit::Line => amount,
                    egui::MouseWheelUnit::Page => amount * PAGE_NOTCHES,
                };
                last_modifiers = Some(*modifiers);
            }
        }
        last_modifiers.map(|modifiers| (total, modifiers))
    })
}

impl InputState {
    pub(crate) fn handle_wheel(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.contains_pointer() {
            return;
        }
        let Some(hover) = ctx.response.hover_pos() else {
            return;
        };
        let Some((notches, modifiers)) =
            wheel_notches(ctx.ui, ctx.state.options.wheel_points_per_notch)
        else {
            return;
        };
        if notches == 0.0 {
            return;
        }

        let local = ctx.to_local(hover);
        let focus_world = Some(ctx.to_world(hover));

        let Some(kind) = instrument_at(ctx.state, local) else {
            events.push(AppIntent::CameraZoom {
                notches,
                focus_world,
            });
            return;
        };

        let over_hinge = kind == InstrumentKind::Compass
            && ctx
                .state
                .editor
                .instruments
                .get(kind)
                .is_some_and(|compass| compass.hinge_hit(local, pivot_screen(ctx.state, compass)));

        let adjusts_opening =
            kind == InstrumentKind::Compass && !modifiers.shift && (modifiers.command || over_hinge);
        let notches = if adjusts_opening {
            // Nur ganze Rasten öffnen den Zirkel
            self.opening_residual += notches;
            let whole = self.opening_residual.trunc();
            self.opening_residual -= whole;
            whole
        } else {
            self.opening_residual = 0.0;
            notches
        };
        if notches == 0.0 {
            return;
        }

        events.push(AppIntent::InstrumentWheel {
            kind,
            notches,
            shift: modifiers.shift,
            ctrl: modifiers.command,
            over_hinge,
            focus_world,
        });
    }
}
