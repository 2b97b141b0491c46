//! Fehlertypen der Navigations-Datenbank.

use thiserror::Error;

/// Fehler beim Zugriff auf die Navigations-Datenbank.
///
/// Die Darstellung folgt dem Muster `"<Ort>: <Ursache>"`.
#[derive(Error, Debug)]
pub enum NavDaoError {
    /// SQLite-Fehler mit Angabe der Operation
    #[error("{operation}: {source}")]
    Sql {
        /// Betroffene Operation (z.B. "insert user")
        operation: &'static str,
        /// Ursache
        #[source]
        source: rusqlite::Error,
    },

    /// Benutzer existiert bereits
    #[error("add user: user {0} already exists")]
    DuplicateUser(String),

    /// Benutzer unbekannt
    #[error("{operation}: unknown user {nick}")]
    UnknownUser {
        /// Betroffene Operation
        operation: &'static str,
        /// Nickname
        nick: String,
    },

    /// Avatar konnte nicht als PNG kodiert/dekodiert werden
    #[error("avatar: {0}")]
    Avatar(#[from] image::ImageError),
}

/// Result-Alias für Datenbank-Operationen.
pub type NavResult<T> = Result<T, NavDaoError>;

/// Hängt den Operationsnamen an einen SQLite-Fehler.
pub(crate) trait SqlContext<T> {
    fn sql_context(self, operation: &'static str) -> NavResult<T>;
}

impl<T> SqlContext<T> for Result<T, rusqlite::Error> {
    fn sql_context(self, operation: &'static str) -> NavResult<T> {
        self.map_err(|source| NavDaoError::Sql { operation, source })
    }
}
