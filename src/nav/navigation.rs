//! In-Memory-Cache über der Datenbank.

use std::collections::BTreeMap;
use std::path::Path;

use super::dao::NavigationDao;
use super::error::{NavDaoError, NavResult};
use super::model::{Problem, Session, User};

/// Benutzer- und Fragen-Cache; jede Änderung geht zuerst an die Datenbank.
pub struct Navigation {
    dao: NavigationDao,
    users: BTreeMap<String, User>,
    problems: Vec<Problem>,
}

impl Navigation {
    /// Öffnet die Datenbank und lädt alle Daten.
    pub fn open(path: &Path) -> NavResult<Self> {
        Self::from_dao(NavigationDao::open(path)?)
    }

    /// Flüchtige Navigation (Tests, Fallback ohne Datei).
    pub fn open_in_memory() -> NavResult<Self> {
        Self::from_dao(NavigationDao::open_in_memory()?)
    }

    fn from_dao(dao: NavigationDao) -> NavResult<Self> {
        let mut nav = Self {
            dao,
            users: BTreeMap::new(),
            problems: Vec::new(),
        };
        nav.reload()?;
        Ok(nav)
    }

    /// Lädt Benutzer und Fragen neu aus der Datenbank.
    pub fn reload(&mut self) -> NavResult<()> {
        self.users = self.dao.load_users()?;
        self.problems = self.dao.load_problems()?;
        log::info!(
            "Navigation geladen: {} Benutzer, {} Fragen",
            self.users.len(),
            self.problems.len()
        );
        Ok(())
    }

    /// Benutzer per Nickname.
    pub fn find_user(&self, nick: &str) -> Option<&User> {
        self.users.get(nick)
    }

    /// Benutzer, falls Nickname und Passwort passen.
    pub fn authenticate(&self, nick: &str, password: &str) -> Option<&User> {
        self.find_user(nick).filter(|u| u.password == password)
    }

    /// Legt einen neuen Benutzer an.
    pub fn add_user(&mut self, user: User) -> NavResult<()> {
        if self.users.contains_key(&user.nick_name) {
            return Err(NavDaoError::DuplicateUser(user.nick_name));
        }
        self.dao.save_user(&user)?;
        log::info!("Benutzer angelegt: {}", user.nick_name);
        self.users.insert(user.nick_name.clone(), user);
        Ok(())
    }

    /// Aktualisiert einen bestehenden Benutzer; unbekannte Nicknames werden ignoriert.
    ///
    /// Sitzungen werden nicht über diesen Weg geändert.
    pub fn update_user(&mut self, user: &User) -> NavResult<bool> {
        let Some(cached) = self.users.get_mut(&user.nick_name) else {
            return Ok(false);
        };
        self.dao.update_user(user)?;
        cached.password = user.password.clone();
        cached.email = user.email.clone();
        cached.birth_date = user.birth_date;
        cached.avatar = user.avatar.clone();
        Ok(true)
    }

    /// Entfernt einen Benutzer samt Sitzungen.
    pub fn remove_user(&mut self, nick: &str) -> NavResult<()> {
        self.dao.delete_user(nick)?;
        self.users.remove(nick);
        Ok(())
    }

    /// Speichert eine Sitzung für einen bekannten Benutzer.
    pub fn add_session(&mut self, nick: &str, session: Session) -> NavResult<bool> {
        let Some(user) = self.users.get_mut(nick) else {
            return Ok(false);
        };
        self.dao.add_session(nick, &session)?;
        user.add_session(session);
        Ok(true)
    }

    /// Alle Fragen.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Ersetzt die Fragen in Datenbank und Cache.
    pub fn replace_problems(&mut self, problems: &[Problem]) -> NavResult<usize> {
        let stored = self.dao.replace_all_problems(problems)?;
        self.problems = self.dao.load_problems()?;
        Ok(stored)
    }

    /// Anzahl gecachter Benutzer.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(nick: &str, password: &str) -> User {
        User::new(
            nick,
            "a@b.es",
            password,
            None,
            NaiveDate::from_ymd_opt(1990, 1, 1).expect("Datum"),
        )
    }

    #[test]
    fn authenticate_checks_password() {
        let mut nav = Navigation::open_in_memory().expect("DB");
        nav.add_user(user("timonel", "Clave123!")).expect("anlegen");
        assert!(nav.authenticate("timonel", "Clave123!").is_some());
        assert!(nav.authenticate("timonel", "falsch").is_none());
        assert!(nav.authenticate("nadie", "Clave123!").is_none());
    }

    #[test]
    fn duplicate_is_rejected_before_db() {
        let mut nav = Navigation::open_in_memory().expect("DB");
        nav.add_user(user("timonel", "x")).expect("anlegen");
        assert!(matches!(
            nav.add_user(user("timonel", "y")),
            Err(NavDaoError::DuplicateUser(_))
        ));
        assert_eq!(nav.user_count(), 1);
    }

    #[test]
    fn update_ignores_unknown_users() {
        let mut nav = Navigation::open_in_memory().expect("DB");
        assert!(!nav.update_user(&user("nadie", "x")).expect("kein Fehler"));
    }

    #[test]
    fn sessions_reach_cache_and_db() {
        let mut nav = Navigation::open_in_memory().expect("DB");
        nav.add_user(user("timonel", "x")).expect("anlegen");
        let stamp = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .expect("Zeit");
        assert!(nav
            .add_session("timonel", Session::new(stamp, 4, 1))
            .expect("speichern"));
        assert!(!nav
            .add_session("nadie", Session::new(stamp, 1, 1))
            .expect("kein Fehler"));

        nav.reload().expect("neu laden");
        let sessions = &nav.find_user("timonel").expect("Benutzer").sessions;
        assert_eq!(sessions, &vec![Session::new(stamp, 4, 1)]);
    }
}
