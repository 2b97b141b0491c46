//! Handler für Anmeldung, Registrierung und Profil.

use crate::app::state::{ProfileForm, RegistrationForm};
use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Login-Dialog.
pub fn open_login(state: &mut AppState) {
    use_cases::account::open_login_dialog(state);
}

/// Schließt den Login-Dialog.
pub fn close_login(state: &mut AppState) {
    use_cases::account::close_login_dialog(state);
}

/// Meldet an.
pub fn login(state: &mut AppState, nick: &str, password: &str) -> anyhow::Result<()> {
    use_cases::account::login(state, nick, password)
}

/// Öffnet die Registrierung.
pub fn open_register(state: &mut AppState) {
    use_cases::account::open_register_dialog(state);
}

/// Schließt die Registrierung.
pub fn close_register(state: &mut AppState) {
    use_cases::account::close_register_dialog(state);
}

/// Registriert einen Benutzer.
pub fn register(state: &mut AppState, form: RegistrationForm) -> anyhow::Result<()> {
    use_cases::account::register(state, form)
}

/// Öffnet das Profil.
pub fn open_profile(state: &mut AppState) {
    use_cases::account::open_profile_dialog(state);
}

/// Schließt das Profil.
pub fn close_profile(state: &mut AppState) {
    use_cases::account::close_profile_dialog(state);
}

/// Speichert das Profil.
pub fn update_profile(state: &mut AppState, form: ProfileForm) -> anyhow::Result<()> {
    use_cases::account::update_profile(state, form)
}

/// Meldet ab und sichert die Quiz-Sitzung.
pub fn logout(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::account::logout(state)
}
