/// Markierung einer Antwort nach dem Prüfen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMark {
    /// Richtige Antwort
    Ok,
    /// Gewählte falsche Antwort
    Error,
}

/// Aktuell angezeigte Frage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemView {
    /// Index im Fragenkatalog
    pub problem_index: usize,
    /// Anzeige-Reihenfolge: `order[display] = Index in Problem::answers`
    pub order: Vec<usize>,
    /// Markierungen je Anzeige-Index (nach dem Prüfen)
    pub marks: Vec<Option<AnswerMark>>,
    /// Im Fenster gewählte Antwort (Anzeige-Index)
    pub selected: Option<usize>,
    /// Wurde bereits geprüft? (Antworten und Prüfen gesperrt, Weiter frei)
    pub checked: bool,
    /// Fragetext eingeklappt
    pub collapsed: bool,
    /// Erste Antwort fokussieren (Prüfen ohne Auswahl)
    pub focus_first_answer: bool,
}

impl ProblemView {
    /// Neue, ungeprüfte Ansicht mit gegebener Reihenfolge.
    pub fn new(problem_index: usize, order: Vec<usize>) -> Self {
        let marks = vec![None; order.len()];
        Self {
            problem_index,
            order,
            marks,
            selected: None,
            checked: false,
            collapsed: false,
            focus_first_answer: false,
        }
    }
}

/// Quiz-Zähler der laufenden Anmeldung und offene Frage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Offene Frage (None = Fenster geschlossen)
    pub current: Option<ProblemView>,
    /// Richtige Antworten seit Anmeldung
    pub hits: u32,
    /// Falsche Antworten seit Anmeldung
    pub faults: u32,
}

impl QuizState {
    /// Leerer Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn seit der Anmeldung geantwortet wurde.
    pub fn has_results(&self) -> bool {
        self.hits + self.faults > 0
    }

    /// Setzt die Zähler zurück.
    pub fn reset_counters(&mut self) {
        self.hits = 0;
        self.faults = 0;
    }
}
