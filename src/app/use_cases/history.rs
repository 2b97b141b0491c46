//! Use-Cases für den Sitzungsverlauf.

use crate::app::AppState;
use crate::nav::Session;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Summen über die gefilterten Sitzungen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryTotals {
    /// Anzahl Sitzungen
    pub sessions: usize,
    /// Summe Treffer
    pub hits: u32,
    /// Summe Fehler
    pub faults: u32,
}

/// Öffnet den Verlauf (nur angemeldet) und setzt den Zeitraum auf
/// erste bis letzte Sitzung bzw. auf heute.
pub fn open_history(state: &mut AppState) {
    let Some(user) = state.account.current_user() else {
        log::warn!("Verlauf ohne Anmeldung angefordert");
        return;
    };
    let today = chrono::Local::now().date_naive();
    let (from, to) = session_date_range(&user.sessions).unwrap_or((today, today));
    state.ui.history.from = from;
    state.ui.history.to = to;
    state.ui.history.visible = true;
}

/// Schließt den Verlauf.
pub fn close_history(state: &mut AppState) {
    state.ui.history.visible = false;
}

/// Datum der ersten und letzten lesbaren Sitzung.
pub fn session_date_range(sessions: &[Session]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = sessions
        .iter()
        .filter_map(|s| s.time_stamp)
        .map(|ts| ts.date());
    let first = dates.next()?;
    Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
}

/// Sitzungen mit lesbarem Zeitstempel in `[from 00:00:00, to 23:59:59]`.
///
/// Vertauschte Grenzen werden getauscht.
pub fn filter_sessions(sessions: &[Session], from: NaiveDate, to: NaiveDate) -> Vec<&Session> {
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    let start = NaiveDateTime::new(from, NaiveTime::MIN);
    let end = NaiveDateTime::new(
        to,
        NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
    );
    sessions
        .iter()
        .filter(|s| s.time_stamp.is_some_and(|ts| ts >= start && ts <= end))
        .collect()
}

/// Summen über eine Sitzungsliste.
pub fn totals(sessions: &[&Session]) -> HistoryTotals {
    sessions.iter().fold(HistoryTotals::default(), |acc, s| HistoryTotals {
        sessions: acc.sessions.saturating_add(1),
        hits: acc.hits.saturating_add(s.hits),
        faults: acc.faults.saturating_add(s.faults),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .expect("gültiges Datum")
    }

    fn sessions() -> Vec<Session> {
        vec![
            Session::new(at(2024, 3, 1, 9), 3, 1),
            Session::new(at(2024, 3, 5, 23), 2, 2),
            Session {
                time_stamp: None,
                hits: 9,
                faults: 9,
            },
            Session::new(at(2024, 4, 2, 12), 5, 0),
        ]
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("gültiges Datum")
    }

    #[test]
    fn range_ignores_unreadable_sessions() {
        assert_eq!(
            session_date_range(&sessions()),
            Some((day(2024, 3, 1), day(2024, 4, 2)))
        );
        assert_eq!(session_date_range(&[]), None);
    }

    #[test]
    fn filter_is_inclusive_and_swaps_bounds() {
        let all = sessions();
        let march = filter_sessions(&all, day(2024, 3, 5), day(2024, 3, 1));
        assert_eq!(march.len(), 2);

        let t = totals(&march);
        assert_eq!(
            t,
            HistoryTotals {
                sessions: 2,
                hits: 5,
                faults: 3
            }
        );
    }

    #[test]
    fn empty_filter_result() {
        let all = sessions();
        assert!(filter_sessions(&all, day(2023, 1, 1), day(2023, 12, 31)).is_empty());
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let all = vec![
            Session::new(at(2024, 3, 1, 9), u32::MAX, 1),
            Session::new(at(2024, 3, 2, 9), 5, 2),
        ];
        let refs: Vec<&Session> = all.iter().collect();
        let t = totals(&refs);
        assert_eq!(t.hits, u32::MAX);
        assert_eq!(t.faults, 3);
    }
}
