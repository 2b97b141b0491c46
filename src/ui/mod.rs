//! UI-Komponenten: Menü, Toolbar, Statuszeile, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten lesen den `AppState` und geben `AppIntent`s zurück;
/// mutiert werden nur Dialog-Eingabefelder.
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use dialogs::{
    handle_file_dialogs, show_help_dialog, show_history_dialog, show_login_dialog,
    show_message_dialog, show_problem_window, show_profile_dialog, show_question_bank,
    show_register_dialog, show_text_entry,
};
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Farb-Button für `[f32; 4]` (sRGB mit Alpha); `true` bei Änderung.
pub(crate) fn color_edit(ui: &mut egui::Ui, color: &mut [f32; 4]) -> bool {
    let mut c = crate::render::color32(*color);
    if ui.color_edit_button_srgba(&mut c).changed() {
        *color = [c.r(), c.g(), c.b(), c.a()].map(|channel| channel as f32 / 255.0);
        return true;
    }
    false
}
