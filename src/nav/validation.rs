//! Regeln für Registrierung und Profil.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use super::model::age_on;

/// Mindestalter bei der Registrierung.
pub const MIN_AGE_YEARS: i32 = 12;
/// Erlaubte Sonderzeichen im Passwort.
pub const PASSWORD_SPECIALS: &str = "!@#$%&*()-+=";

static NICK_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{6,15}$").ok());
static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").ok());

/// Ein einzelner Verstoß gegen die Regeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// 6–15 Zeichen, Buchstaben, Ziffern, `-`, `_`
    Nick,
    /// 8–20 Zeichen mit Groß-, Kleinbuchstabe, Ziffer und Sonderzeichen
    Password,
    /// `name@domain.tld`
    Email,
    /// Jünger als `MIN_AGE_YEARS`
    TooYoung,
}

impl ValidationIssue {
    /// Hinweistext für Dialoge.
    pub fn message(self) -> String {
        match self {
            Self::Nick => {
                "User name: 6-15 characters, letters, digits, '-' or '_', no spaces.".into()
            }
            Self::Password => format!(
                "Password: 8-20 characters with upper and lower case, a digit and one of {}",
                PASSWORD_SPECIALS
            ),
            Self::Email => "E-mail address is not valid.".into(),
            Self::TooYoung => format!("You must be at least {} years old.", MIN_AGE_YEARS),
        }
    }
}

/// Prüft einen Nickname.
pub fn is_valid_nick(nick: &str) -> bool {
    NICK_RE.as_ref().is_some_and(|re| re.is_match(nick))
}

/// Prüft ein Passwort.
pub fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    (8..=20).contains(&len)
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
        && password.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c))
}

/// Prüft eine E-Mail-Adresse.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Prüft Passwort, E-Mail und Alter (Profil-Bearbeitung).
pub fn validate_profile(
    password: &str,
    email: &str,
    birth_date: NaiveDate,
    today: NaiveDate,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if !is_valid_password(password) {
        issues.push(ValidationIssue::Password);
    }
    if !is_valid_email(email) {
        issues.push(ValidationIssue::Email);
    }
    if age_on(birth_date, today) < MIN_AGE_YEARS {
        issues.push(ValidationIssue::TooYoung);
    }
    issues
}

/// Prüft alle Registrierungsfelder.
pub fn validate_registration(
    nick: &str,
    password: &str,
    email: &str,
    birth_date: NaiveDate,
    today: NaiveDate,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if !is_valid_nick(nick) {
        issues.push(ValidationIssue::Nick);
    }
    issues.extend(validate_profile(password, email, birth_date, today));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Datum")
    }

    #[test]
    fn nick_rules() {
        assert!(is_valid_nick("piloto_7"));
        assert!(is_valid_nick("a-b-c-d"));
        assert!(!is_valid_nick("corto"));
        assert!(!is_valid_nick("con espacio"));
        assert!(!is_valid_nick("demasiado_largo_x"));
    }

    #[test]
    fn password_rules() {
        assert!(is_valid_password("Ancla2024!"));
        assert!(!is_valid_password("ancla2024!"));
        assert!(!is_valid_password("Ancla2024"));
        assert!(!is_valid_password("An1!"));
        assert!(!is_valid_password("Ancla 2024!"));
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("capitan@puerto.es"));
        assert!(!is_valid_email("capitan@puerto"));
        assert!(!is_valid_email("sin-arroba.es"));
    }

    #[test]
    fn registration_collects_all_issues() {
        let today = date(2024, 6, 1);
        let issues = validate_registration("x", "x", "x", date(2020, 1, 1), today);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::Nick,
                ValidationIssue::Password,
                ValidationIssue::Email,
                ValidationIssue::TooYoung
            ]
        );
        assert!(validate_registration(
            "piloto_7",
            "Ancla2024!",
            "p@mar.es",
            date(2012, 6, 1),
            today
        )
        .is_empty());
    }
}
