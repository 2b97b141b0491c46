//! SQLite-Zugriff auf Benutzer, Sitzungen und Fragen.

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;
use std::path::Path;

use super::error::{NavDaoError, NavResult, SqlContext};
use super::model::{Answer, Problem, Session, User};
use super::timestamp::{
    bool_from_db, bool_to_db, date_from_db, date_time_from_db, date_time_to_db, date_to_db,
};

const CREATE_USER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    "nickName"  TEXT,
    "password"  TEXT,
    "email"     TEXT,
    "birthDate" TEXT,
    "avatar"    BLOB,
    PRIMARY KEY("nickName")
) WITHOUT ROWID"#;

const CREATE_SESSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "session" (
    "userNickName" TEXT NOT NULL,
    "timeStamp"    TEXT NOT NULL,
    "hits"         INTEGER,
    "faults"       INTEGER,
    FOREIGN KEY("userNickName") REFERENCES "user"("nickName")
)"#;

const CREATE_PROBLEM_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "problem" (
    "text"    TEXT,
    "answer1" TEXT, "val1" TEXT,
    "answer2" TEXT, "val2" TEXT,
    "answer3" TEXT, "val3" TEXT,
    "answer4" TEXT, "val4" TEXT
)"#;

/// Datenzugriffsobjekt über einer SQLite-Datei.
pub struct NavigationDao {
    conn: Connection,
}

impl NavigationDao {
    /// Öffnet (bzw. erstellt) die Datenbank und legt fehlende Tabellen an.
    pub fn open(path: &Path) -> NavResult<Self> {
        let conn = Connection::open(path).sql_context("open database")?;
        log::info!("Navigations-Datenbank geöffnet: {}", path.display());
        Self::with_connection(conn)
    }

    /// Flüchtige Datenbank im Speicher.
    pub fn open_in_memory() -> NavResult<Self> {
        Self::with_connection(Connection::open_in_memory().sql_context("open database")?)
    }

    fn with_connection(conn: Connection) -> NavResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON")
            .sql_context("enable foreign keys")?;
        conn.execute_batch(CREATE_USER_TABLE)
            .sql_context("create user")?;
        conn.execute_batch(CREATE_SESSION_TABLE)
            .sql_context("create session")?;
        conn.execute_batch(CREATE_PROBLEM_TABLE)
            .sql_context("create problem")?;
        Ok(Self { conn })
    }

    /// Lädt alle Benutzer samt Sitzungen (nach Zeitstempel sortiert).
    pub fn load_users(&self) -> NavResult<BTreeMap<String, User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT nickName, password, email, birthDate, avatar FROM user")
            .sql_context("select users")?;
        let rows = stmt
            .query_map([], user_from_row)
            .sql_context("select users")?;

        let mut users = BTreeMap::new();
        for row in rows {
            let mut user = row.sql_context("read user")?;
            user.sessions = self.load_sessions(&user.nick_name)?;
            users.insert(user.nick_name.clone(), user);
        }
        log::debug!("{} Benutzer geladen", users.len());
        Ok(users)
    }

    /// Einzelner Benutzer (ohne Cache).
    pub fn load_user(&self, nick: &str) -> NavResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT nickName, password, email, birthDate, avatar FROM user WHERE nickName = ?1",
                params![nick],
                user_from_row,
            )
            .optional()
            .sql_context("select user")?;
        match user {
            Some(mut user) => {
                user.sessions = self.load_sessions(nick)?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    fn load_sessions(&self, nick: &str) -> NavResult<Vec<Session>> {
        let mut stmt = self
            .conn
            .prepare("SELECT timeStamp, hits, faults FROM session WHERE userNickName = ?1")
            .sql_context("select sessions")?;
        let rows = stmt
            .query_map(params![nick], |row| {
                let raw: String = row.get(0)?;
                let hits: Option<i64> = row.get(1)?;
                let faults: Option<i64> = row.get(2)?;
                Ok(Session {
                    time_stamp: date_time_from_db(&raw),
                    hits: counter_from_db(hits),
                    faults: counter_from_db(faults),
                })
            })
            .sql_context("select sessions")?;

        let mut sessions = rows
            .collect::<Result<Vec<_>, _>>()
            .sql_context("read session")?;
        sessions.sort_by_key(|s| s.time_stamp);
        Ok(sessions)
    }

    /// Lädt alle Fragen.
    pub fn load_problems(&self) -> NavResult<Vec<Problem>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT text, answer1, val1, answer2, val2, answer3, val3, answer4, val4 \
                 FROM problem",
            )
            .sql_context("select problems")?;
        let rows = stmt
            .query_map([], problem_from_row)
            .sql_context("select problems")?;
        rows.collect::<Result<Vec<_>, _>>()
            .sql_context("read problem")
    }

    /// Fügt einen neuen Benutzer ein.
    pub fn save_user(&self, user: &User) -> NavResult<()> {
        let result = self.conn.execute(
            "INSERT INTO user (nickName, password, email, birthDate, avatar) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.nick_name,
                user.password,
                user.email,
                date_to_db(user.birth_date),
                user.avatar
            ],
        );
        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(NavDaoError::DuplicateUser(user.nick_name.clone()))
            }
            Err(source) => Err(NavDaoError::Sql {
                operation: "insert user",
                source,
            }),
        }
    }

    /// Aktualisiert Passwort, E-Mail, Geburtsdatum und Avatar.
    pub fn update_user(&self, user: &User) -> NavResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE user SET password = ?1, email = ?2, birthDate = ?3, avatar = ?4 \
                 WHERE nickName = ?5",
                params![
                    user.password,
                    user.email,
                    date_to_db(user.birth_date),
                    user.avatar,
                    user.nick_name
                ],
            )
            .sql_context("update user")?;
        if changed == 0 {
            return Err(NavDaoError::UnknownUser {
                operation: "update user",
                nick: user.nick_name.clone(),
            });
        }
        Ok(())
    }

    /// Löscht einen Benutzer; seine Sitzungen werden zuerst entfernt.
    pub fn delete_user(&mut self, nick: &str) -> NavResult<()> {
        let tx = self.conn.transaction().sql_context("delete user")?;
        tx.execute("DELETE FROM session WHERE userNickName = ?1", params![nick])
            .sql_context("delete sessions")?;
        tx.execute("DELETE FROM user WHERE nickName = ?1", params![nick])
            .sql_context("delete user")?;
        tx.commit().sql_context("delete user")
    }

    /// Speichert eine Sitzung.
    pub fn add_session(&self, nick: &str, session: &Session) -> NavResult<()> {
        let stamp = session
            .time_stamp
            .map(date_time_to_db)
            .unwrap_or_default();
        self.conn
            .execute(
                "INSERT INTO session (userNickName, timeStamp, hits, faults) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![nick, stamp, session.hits, session.faults],
            )
            .sql_context("insert session")?;
        Ok(())
    }

    /// Ersetzt alle Fragen; Fragen ohne genau vier Antworten werden übersprungen.
    ///
    /// Gibt die Anzahl gespeicherter Fragen zurück.
    pub fn replace_all_problems(&mut self, problems: &[Problem]) -> NavResult<usize> {
        let tx = self.conn.transaction().sql_context("replace problems")?;
        tx.execute("DELETE FROM problem", [])
            .sql_context("clear problems")?;

        let mut stored = 0;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO problem \
                     (text, answer1, val1, answer2, val2, answer3, val3, answer4, val4) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                )
                .sql_context("insert problem")?;
            for problem in problems {
                let [a1, a2, a3, a4] = match problem.answers.as_slice() {
                    [a1, a2, a3, a4] => [a1, a2, a3, a4],
                    other => {
                        log::warn!(
                            "Frage übersprungen ({} statt 4 Antworten): {}",
                            other.len(),
                            problem.text
                        );
                        continue;
                    }
                };
                stmt.execute(params![
                    problem.text,
                    a1.text,
                    bool_to_db(a1.valid),
                    a2.text,
                    bool_to_db(a2.valid),
                    a3.text,
                    bool_to_db(a3.valid),
                    a4.text,
                    bool_to_db(a4.valid),
                ])
                .sql_context("insert problem")?;
                stored += 1;
            }
        }
        tx.commit().sql_context("replace problems")?;
        Ok(stored)
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    let nick: String = row.get(0)?;
    let password: Option<String> = row.get(1)?;
    let email: Option<String> = row.get(2)?;
    let birth_raw: Option<String> = row.get(3)?;
    let avatar: Option<Vec<u8>> = row.get(4)?;

    let birth_date = birth_raw
        .as_deref()
        .and_then(date_from_db)
        .unwrap_or_default();
    Ok(User::new(
        nick,
        email.unwrap_or_default(),
        password.unwrap_or_default(),
        avatar.filter(|bytes| !bytes.is_empty()),
        birth_date,
    ))
}

fn problem_from_row(row: &Row<'_>) -> rusqlite::Result<Problem> {
    let text: Option<String> = row.get(0)?;
    let mut answers = Vec::with_capacity(Problem::ANSWER_COUNT);
    for i in 0..Problem::ANSWER_COUNT {
        let answer: Option<String> = row.get(1 + i * 2)?;
        let valid: Option<String> = row.get(2 + i * 2)?;
        answers.push(Answer::new(
            answer.unwrap_or_default(),
            valid.as_deref().is_some_and(bool_from_db),
        ));
    }
    Ok(Problem::new(text.unwrap_or_default(), answers))
}

/// Zähler aus der DB: fehlend oder negativ → 0, zu groß → `u32::MAX`.
fn counter_from_db(value: Option<i64>) -> u32 {
    u32::try_from(value.unwrap_or(0).max(0)).unwrap_or(u32::MAX)
}
