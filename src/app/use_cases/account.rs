//! Use-Cases für Anmeldung, Registrierung und Profil.

use crate::app::state::{
    LoginDialogState, MessageLevel, ProfileDialogState, ProfileForm, RegisterDialogState,
    RegistrationForm,
};
use crate::app::AppState;
use crate::nav::validation::{validate_profile, validate_registration};
use crate::nav::{Navigation, User};
use anyhow::{Context, Result};
use std::path::Path;

/// Hinweis bei leerem Login-Formular.
pub const LOGIN_EMPTY_MESSAGE: &str = "Enter user name and password.";

/// Öffnet die Navigations-Datenbank.
pub fn open_database(state: &mut AppState, path: &Path) -> Result<()> {
    let navigation = Navigation::open(path)
        .with_context(|| format!("Datenbank konnte nicht geöffnet werden: {}", path.display()))?;
    log::info!(
        "Datenbank geöffnet: {} ({} Benutzer, {} Fragen)",
        path.display(),
        navigation.user_count(),
        navigation.problems().len()
    );
    state.account.navigation = Some(navigation);
    state.account.database_path = Some(path.to_path_buf());
    Ok(())
}

fn navigation_mut(state: &mut AppState) -> Result<&mut Navigation> {
    state
        .account
        .navigation
        .as_mut()
        .context("Keine Datenbank geöffnet")
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

// ── Login ────────────────────────────────────────────────────────

/// Öffnet den Login-Dialog mit leerem Formular.
pub fn open_login_dialog(state: &mut AppState) {
    state.ui.login = LoginDialogState {
        visible: true,
        ..LoginDialogState::default()
    };
}

/// Schließt den Login-Dialog.
pub fn close_login_dialog(state: &mut AppState) {
    state.ui.login.visible = false;
}

/// Meldet einen Benutzer an; Fehler landen im Dialog.
pub fn login(state: &mut AppState, nick: &str, password: &str) -> Result<()> {
    let nick = nick.trim();
    if nick.is_empty() || password.is_empty() {
        state.ui.login.error = Some(LOGIN_EMPTY_MESSAGE.to_string());
        return Ok(());
    }
    if state.account.is_logged_in() {
        if let Err(e) = logout(state) {
            log::error!("Abmelden vor neuer Anmeldung: {:#}", e);
            state.ui.push_message(MessageLevel::Error, format!("{e:#}"));
        }
    }
    let navigation = state
        .account
        .navigation
        .as_ref()
        .context("Keine Datenbank geöffnet")?;
    match state.account.agent.login(navigation, nick, password) {
        Ok(()) => {
            state.quiz.reset_counters();
            state.ui.login = LoginDialogState::default();
        }
        Err(message) => {
            state.ui.login.error = Some(message);
        }
    }
    Ok(())
}

/// Sichert die Quiz-Sitzung und meldet ab.
///
/// Die Abmeldung erfolgt auch, wenn die Sitzung nicht gespeichert werden
/// konnte; der Fehler wird danach zurückgegeben.
pub fn logout(state: &mut AppState) -> Result<()> {
    let flushed = super::quiz::flush_session(state);
    state.account.agent.logout();
    state.quiz = Default::default();
    state.ui.profile.visible = false;
    state.ui.history.visible = false;
    state.ui.question_bank.visible = false;
    flushed
}

// ── Registrierung ────────────────────────────────────────────────

/// Öffnet den Registrierungsdialog (schließt den Login).
pub fn open_register_dialog(state: &mut AppState) {
    state.ui.login.visible = false;
    state.ui.register = RegisterDialogState {
        visible: true,
        ..RegisterDialogState::default()
    };
}

/// Schließt den Registrierungsdialog.
pub fn close_register_dialog(state: &mut AppState) {
    state.ui.register.visible = false;
}

/// Legt einen Benutzer an und meldet ihn an.
///
/// Regelverstöße und ein vergebener Nickname werden im Dialog gelistet.
pub fn register(state: &mut AppState, form: RegistrationForm) -> Result<()> {
    let nick = form.nick.trim().to_string();
    let mut issues = Vec::new();
    if navigation_mut(state)?.find_user(&nick).is_some() {
        issues.push(format!("User {} already exists.", nick));
    }
    issues.extend(
        validate_registration(&nick, &form.password, &form.email, form.birth_date, today())
            .into_iter()
            .map(|issue| issue.message()),
    );
    if !issues.is_empty() {
        log::info!("Registrierung abgelehnt: {} Verstöße", issues.len());
        state.ui.register.issues = issues;
        return Ok(());
    }

    let user = User::new(
        nick.clone(),
        form.email.trim(),
        form.password.clone(),
        form.avatar,
        form.birth_date,
    );
    navigation_mut(state)?
        .add_user(user)
        .with_context(|| format!("Benutzer {} konnte nicht gespeichert werden", nick))?;
    log::info!("Benutzer registriert: {}", nick);

    state.ui.register = RegisterDialogState::default();
    login(state, &nick, &form.password)?;
    state
        .ui
        .push_message(MessageLevel::Info, format!("User {} created.", nick));
    Ok(())
}

// ── Profil ───────────────────────────────────────────────────────

/// Öffnet das Profil des angemeldeten Benutzers.
pub fn open_profile_dialog(state: &mut AppState) {
    let Some(user) = state.account.current_user() else {
        log::warn!("Profil angefordert ohne angemeldeten Benutzer");
        return;
    };
    state.ui.profile = ProfileDialogState {
        visible: true,
        password: user.password.clone(),
        show_password: false,
        email: user.email.clone(),
        birth_date: user.birth_date,
        avatar: user.avatar.clone(),
        issues: Vec::new(),
    };
}

/// Schließt den Profildialog.
pub fn close_profile_dialog(state: &mut AppState) {
    state.ui.profile.visible = false;
}

/// Speichert Profiländerungen des angemeldeten Benutzers.
pub fn update_profile(state: &mut AppState, form: ProfileForm) -> Result<()> {
    let mut user = state
        .account
        .current_user()
        .cloned()
        .context("Kein Benutzer angemeldet")?;
    let issues: Vec<String> =
        validate_profile(&form.password, form.email.trim(), form.birth_date, today())
            .into_iter()
            .map(|issue| issue.message())
            .collect();
    if !issues.is_empty() {
        state.ui.profile.issues = issues;
        return Ok(());
    }

    user.password = form.password;
    user.email = form.email.trim().to_string();
    user.birth_date = form.birth_date;
    user.avatar = form.avatar;
    let updated = navigation_mut(state)?
        .update_user(&user)
        .with_context(|| format!("Profil von {} konnte nicht gespeichert werden", user.nick_name))?;
    if updated {
        log::info!("Profil aktualisiert: {}", user.nick_name);
        state.ui.profile.visible = false;
        state.ui.push_message(MessageLevel::Info, "Profile updated.");
    }
    Ok(())
}
