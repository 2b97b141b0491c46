//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, DrawMode};

/// Zifferntasten 1–5 wählen die Zeichen-Modi in Toolbar-Reihenfolge.
const MODE_KEYS: [egui::Key; 5] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Hat ein Widget den Tastatur-Fokus (z.B. Text-Eingabe), wird nichts erzeugt.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.memory(|m| m.focused().is_some()) {
        return events;
    }

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed, key_o_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
            i.key_pressed(egui::Key::O),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenChartRequested);
    }

    let (escape, zoom_in, zoom_out) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if escape {
        events.push(AppIntent::EscapePressed);
    }

    // Ctrl +/- bleibt egui-Zoom der Oberfläche
    if !modifiers.command {
        if zoom_in {
            events.push(AppIntent::ZoomInRequested);
        }
        if zoom_out {
            events.push(AppIntent::ZoomOutRequested);
        }

        for (key, mode) in MODE_KEYS.into_iter().zip(DrawMode::DRAWING) {
            if ui.input(|i| i.key_pressed(key)) {
                events.push(AppIntent::DrawModeSelected { mode });
            }
        }
    }

    events
}
