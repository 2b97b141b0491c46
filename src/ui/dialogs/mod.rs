//! Datei-Dialoge und Fenster (Konto, Verlauf, Quiz, Hilfe, Meldungen).

mod file_dialogs;
mod help;
mod history;
mod login;
mod message;
mod problem;
mod profile;
mod question_bank;
mod register;
mod text_entry;

pub use file_dialogs::handle_file_dialogs;
pub use help::show_help_dialog;
pub use history::show_history_dialog;
pub use login::show_login_dialog;
pub use message::show_message_dialog;
pub use problem::show_problem_window;
pub use profile::show_profile_dialog;
pub use question_bank::show_question_bank;
pub use register::show_register_dialog;
pub use text_entry::show_text_entry;

use std::hash::{Hash, Hasher};

const AVATAR_PREVIEW_SIZE: egui::Vec2 = egui::Vec2::new(64.0, 64.0);

/// Vorschau eines PNG-Avatars; die URI hängt vom Inhalt ab, damit egui
/// nach einem Wechsel neu dekodiert.
fn avatar_preview(ui: &mut egui::Ui, png: Option<&[u8]>) {
    let Some(png) = png else {
        ui.add_sized(AVATAR_PREVIEW_SIZE, egui::Label::new("No avatar"));
        return;
    };
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    png.hash(&mut hasher);
    let uri = format!("bytes://avatar_{:x}.png", hasher.finish());
    ui.add(egui::Image::from_bytes(uri, png.to_vec()).fit_to_exact_size(AVATAR_PREVIEW_SIZE));
}

/// Listet Validierungsfehler in Rot.
fn issue_list(ui: &mut egui::Ui, issues: &[String]) {
    for issue in issues {
        ui.colored_label(egui::Color32::LIGHT_RED, issue);
    }
}

/// Passwortfeld mit Sichtbarkeits-Umschalter.
fn password_field(ui: &mut egui::Ui, password: &mut String, show: &mut bool) -> egui::Response {
    ui.horizontal(|ui| {
        let response = ui.add(egui::TextEdit::singleline(password).password(!*show));
        ui.checkbox(show, "Show");
        response
    })
    .inner
}
