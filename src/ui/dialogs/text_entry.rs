use crate::app::{AppIntent, AppState};

/// Zeigt das Eingabefeld einer neuen Text-Annotation an ihrem Ankerpunkt.
///
/// Enter übernimmt, Escape oder "Cancel" verwirft.
pub fn show_text_entry(
    ctx: &egui::Context,
    state: &mut AppState,
    viewport: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let camera = state.view.camera.clone();
    let size = glam::Vec2::new(viewport.width(), viewport.height());
    let Some(entry) = state.editor.pending_text.as_mut() else {
        return events;
    };
    let anchor = camera.world_to_screen(entry.pos, size);

    egui::Window::new("Text")
        .id(egui::Id::new("text_entry_window"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .fixed_pos(viewport.min + egui::vec2(anchor.x, anchor.y))
        .show(ctx, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut entry.text)
                    .hint_text("Text")
                    .desired_width(200.0),
            );
            if !response.has_focus() && !response.lost_focus() {
                response.request_focus();
            }

            let (enter, escape) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::Escape),
                )
            });

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || (response.lost_focus() && enter) {
                    events.push(AppIntent::TextEntryConfirmed {
                        text: entry.text.clone(),
                    });
                } else if ui.button("Cancel").clicked() || escape {
                    events.push(AppIntent::TextEntryCancelled);
                }
            });
        });

    events
}
