//! Angemeldeter Benutzer der laufenden Sitzung.

use super::model::User;
use super::navigation::Navigation;

/// Meldung bei fehlgeschlagener Anmeldung.
pub const LOGIN_FAILED_MESSAGE: &str = "Wrong user name or password.";

/// Hält den Nickname des angemeldeten Benutzers; die Daten selbst
/// bleiben im `Navigation`-Cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgent {
    current: Option<String>,
}

impl UserAgent {
    /// Niemand angemeldet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet einen Benutzer an. Der Nickname wird getrimmt.
    pub fn login(&mut self, nav: &Navigation, nick: &str, password: &str) -> Result<(), String> {
        let nick = nick.trim();
        match nav.authenticate(nick, password) {
            Some(user) => {
                log::info!("Benutzer angemeldet: {}", user.nick_name);
                self.current = Some(user.nick_name.clone());
                Ok(())
            }
            None => {
                log::info!("Anmeldung fehlgeschlagen für '{}'", nick);
                Err(LOGIN_FAILED_MESSAGE.to_string())
            }
        }
    }

    /// Meldet ab.
    pub fn logout(&mut self) {
        if let Some(nick) = self.current.take() {
            log::info!("Benutzer abgemeldet: {}", nick);
        }
    }

    /// `true`, wenn jemand angemeldet ist.
    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Nickname des angemeldeten Benutzers.
    pub fn current_nick(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Angemeldeter Benutzer aus dem Cache.
    pub fn current_user<'a>(&self, nav: &'a Navigation) -> Option<&'a User> {
        nav.find_user(self.current.as_deref()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nav_with_user() -> Navigation {
        let mut nav = Navigation::open_in_memory().expect("DB");
        nav.add_user(User::new(
            "grumete",
            "g@mar.es",
            "Ancla2024!",
            None,
            NaiveDate::from_ymd_opt(2000, 2, 2).expect("Datum"),
        ))
        .expect("anlegen");
        nav
    }

    #[test]
    fn login_trims_nick_and_logout_clears() {
        let nav = nav_with_user();
        let mut agent = UserAgent::new();
        agent.login(&nav, "  grumete ", "Ancla2024!").expect("Login");
        assert!(agent.is_logged_in());
        assert_eq!(
            agent.current_user(&nav).map(|u| u.email.as_str()),
            Some("g@mar.es")
        );

        agent.logout();
        assert!(!agent.is_logged_in());
        assert!(agent.current_user(&nav).is_none());
    }

    #[test]
    fn wrong_password_keeps_logged_out() {
        let nav = nav_with_user();
        let mut agent = UserAgent::new();
        let err = agent.login(&nav, "grumete", "nope").expect_err("Fehler");
        assert_eq!(err, LOGIN_FAILED_MESSAGE);
        assert!(!agent.is_logged_in());
    }
}
