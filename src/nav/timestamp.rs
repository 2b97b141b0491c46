//! Text-Formate der Datenbank für Datum, Zeitstempel und Wahrheitswerte.
//!
//! Geschrieben wird immer ISO 8601. Beim Lesen werden zusätzlich ISO mit
//! Millisekunden und das US-Format `M/d/yy, h:mm AM` akzeptiert, das ältere
//! Datenbanken enthalten können.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

const ISO_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_DATE: &str = "%Y-%m-%d";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

static US_DATE_TIME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4}),? (\d{1,2}):(\d{2})(?::(\d{2}))? ?([AaPp][Mm])$",
    )
    .ok()
});

/// Zeitstempel → Datenbank-Text (ISO ohne Zeitzone).
pub fn date_time_to_db(value: NaiveDateTime) -> String {
    value.format(ISO_DATE_TIME).to_string()
}

/// Datenbank-Text → Zeitstempel; `None`, wenn kein bekanntes Format passt.
pub fn date_time_from_db(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(parsed) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(parsed);
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_local());
    }

    let normalized = normalize_whitespace(trimmed);
    let parsed = parse_us_date_time(&normalized);
    if parsed.is_none() {
        log::warn!("Unlesbarer Zeitstempel in Datenbank: '{}'", raw);
    }
    parsed
}

/// Datum → Datenbank-Text.
pub fn date_to_db(value: NaiveDate) -> String {
    value.format(ISO_DATE).to_string()
}

/// Datenbank-Text → Datum (auch aus einem vollständigen Zeitstempel).
pub fn date_from_db(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, ISO_DATE)
        .ok()
        .or_else(|| date_time_from_db(trimmed).map(|dt| dt.date()))
}

/// Wahrheitswert → Datenbank-Text.
pub fn bool_to_db(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Datenbank-Text → Wahrheitswert (`"1"` oder `"true"`).
pub fn bool_from_db(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed == "1" || trimmed.eq_ignore_ascii_case("true")
}

/// Ersetzt geschützte Leerzeichen (U+202F, U+00A0) und fasst Leerraum zusammen.
fn normalize_whitespace(raw: &str) -> String {
    raw.replace(['\u{202F}', '\u{00A0}'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_us_date_time(text: &str) -> Option<NaiveDateTime> {
    let re = US_DATE_TIME.as_ref()?;
    let caps = re.captures(text)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let month = number(1)?;
    let day = number(2)?;
    let year_raw = caps.get(3)?.as_str();
    let mut year: i32 = year_raw.parse().ok()?;
    if year_raw.len() == 2 {
        year += if year < 70 { 2000 } else { 1900 };
    }

    let hour12 = number(4)?;
    let minute = number(5)?;
    let second = number(6).unwrap_or(0);
    if !(1..=12).contains(&hour12) {
        return None;
    }
    let pm = caps.get(7)?.as_str().eq_ignore_ascii_case("pm");
    let hour = match (hour12, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(NaiveDateTime::new(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("gültiger Zeitpunkt")
    }

    #[test]
    fn iso_roundtrip() {
        let value = dt(2024, 5, 17, 8, 30, 5);
        assert_eq!(date_time_to_db(value), "2024-05-17T08:30:05");
        assert_eq!(date_time_from_db("2024-05-17T08:30:05"), Some(value));
    }

    #[test]
    fn iso_with_milliseconds_and_space() {
        assert_eq!(
            date_time_from_db("2024-05-17T08:30:05.123").map(|v| v.date()),
            NaiveDate::from_ymd_opt(2024, 5, 17)
        );
        assert_eq!(
            date_time_from_db("2024-05-17 08:30:05"),
            Some(dt(2024, 5, 17, 8, 30, 5))
        );
    }

    #[test]
    fn us_format_with_narrow_no_break_space() {
        assert_eq!(
            date_time_from_db("5/17/24, 8:30\u{202F}PM"),
            Some(dt(2024, 5, 17, 20, 30, 0))
        );
        assert_eq!(
            date_time_from_db("12/1/1999,\u{00A0} 12:05 am"),
            Some(dt(1999, 12, 1, 0, 5, 0))
        );
    }

    #[test]
    fn two_digit_years_pivot_at_seventy() {
        assert_eq!(
            date_time_from_db("1/2/69, 1:00 AM").map(|v| v.date()),
            NaiveDate::from_ymd_opt(2069, 1, 2)
        );
        assert_eq!(
            date_time_from_db("1/2/70, 1:00 AM").map(|v| v.date()),
            NaiveDate::from_ymd_opt(1970, 1, 2)
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(date_time_from_db(""), None);
        assert_eq!(date_time_from_db("gestern"), None);
        assert_eq!(date_time_from_db("13/40/24, 8:30 PM"), None);
    }

    #[test]
    fn dates_and_bools() {
        let date = NaiveDate::from_ymd_opt(2001, 9, 30).expect("Datum");
        assert_eq!(date_to_db(date), "2001-09-30");
        assert_eq!(date_from_db("2001-09-30"), Some(date));
        assert_eq!(date_from_db("2001-09-30T10:00:00"), Some(date));

        assert!(bool_from_db("1"));
        assert!(bool_from_db("TRUE"));
        assert!(!bool_from_db("0"));
        assert!(!bool_from_db("yes"));
        assert_eq!(bool_to_db(true), "1");
    }
}
