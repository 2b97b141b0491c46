use crate::nav::{Navigation, User, UserAgent};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Eingaben des Registrierungsformulars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Nickname
    pub nick: String,
    /// Passwort
    pub password: String,
    /// E-Mail
    pub email: String,
    /// Geburtsdatum
    pub birth_date: NaiveDate,
    /// Avatar als PNG
    pub avatar: Option<Vec<u8>>,
}

/// Eingaben des Profilformulars (Nickname ist fest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    /// Passwort
    pub password: String,
    /// E-Mail
    pub email: String,
    /// Geburtsdatum
    pub birth_date: NaiveDate,
    /// Avatar als PNG
    pub avatar: Option<Vec<u8>>,
}

/// Datenbank und angemeldeter Benutzer.
#[derive(Default)]
pub struct AccountState {
    /// Geöffnete Navigations-Datenbank (None = nicht verfügbar)
    pub navigation: Option<Navigation>,
    /// Anmeldezustand
    pub agent: UserAgent,
    /// Pfad der geöffneten Datenbank
    pub database_path: Option<PathBuf>,
}

impl AccountState {
    /// Erstellt einen Zustand ohne Datenbank.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn ein Benutzer angemeldet ist.
    pub fn is_logged_in(&self) -> bool {
        self.agent.is_logged_in()
    }

    /// Angemeldeter Benutzer aus dem Cache.
    pub fn current_user(&self) -> Option<&User> {
        self.navigation
            .as_ref()
            .and_then(|nav| self.agent.current_user(nav))
    }

    /// Nickname des angemeldeten Benutzers.
    pub fn current_nick(&self) -> Option<&str> {
        self.agent.current_nick()
    }
}
