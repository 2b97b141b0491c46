//! Datenmodelle: Benutzer, Sitzungen, Fragen.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Eine abgeschlossene Quiz-Sitzung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Zeitpunkt; `None`, wenn der gespeicherte Wert nicht lesbar war
    pub time_stamp: Option<NaiveDateTime>,
    /// Richtige Antworten
    pub hits: u32,
    /// Falsche Antworten
    pub faults: u32,
}

impl Session {
    /// Neue Sitzung mit gültigem Zeitstempel.
    pub fn new(time_stamp: NaiveDateTime, hits: u32, faults: u32) -> Self {
        Self {
            time_stamp: Some(time_stamp),
            hits,
            faults,
        }
    }
}

/// Registrierter Benutzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Eindeutiger Nickname (Primärschlüssel)
    pub nick_name: String,
    /// E-Mail-Adresse
    pub email: String,
    /// Passwort (Klartext, wie in der bestehenden Datenbank)
    pub password: String,
    /// Avatar als PNG
    pub avatar: Option<Vec<u8>>,
    /// Geburtsdatum
    pub birth_date: NaiveDate,
    /// Sitzungen, nach Zeitstempel sortiert
    pub sessions: Vec<Session>,
}

impl User {
    /// Neuer Benutzer ohne Sitzungen.
    pub fn new(
        nick_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        avatar: Option<Vec<u8>>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            nick_name: nick_name.into(),
            email: email.into(),
            password: password.into(),
            avatar,
            birth_date,
            sessions: Vec::new(),
        }
    }

    /// Alter in ganzen Jahren am Stichtag.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.birth_date, today)
    }

    /// Hängt eine Sitzung an und hält die Sortierung.
    pub fn add_session(&mut self, session: Session) {
        self.sessions.push(session);
        self.sessions.sort_by_key(|s| s.time_stamp);
    }
}

/// Alter in ganzen Jahren.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Antwortmöglichkeit einer Frage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Antworttext
    pub text: String,
    /// Richtig?
    pub valid: bool,
}

impl Answer {
    /// Neue Antwort.
    pub fn new(text: impl Into<String>, valid: bool) -> Self {
        Self {
            text: text.into(),
            valid,
        }
    }
}

/// Eine Quizfrage mit (in der Datenbank genau vier) Antworten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Fragetext
    pub text: String,
    /// Antworten
    pub answers: Vec<Answer>,
}

impl Problem {
    /// Anzahl der Antworten, die eine speicherbare Frage haben muss.
    pub const ANSWER_COUNT: usize = 4;

    /// Neue Frage.
    pub fn new(text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }

    /// Index der ersten richtigen Antwort.
    pub fn valid_index(&self) -> Option<usize> {
        self.answers.iter().position(|a| a.valid)
    }
}
