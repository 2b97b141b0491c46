use chrono::NaiveDate;
use std::collections::VecDeque;

/// Schweregrad einer Meldung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Information
    Info,
    /// Warnung
    Warning,
    /// Fehler
    Error,
}

impl MessageLevel {
    /// Fenstertitel.
    pub fn title(self) -> &'static str {
        match self {
            Self::Info => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Eine eingereihte Meldung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMessage {
    /// Schweregrad
    pub level: MessageLevel,
    /// Text
    pub text: String,
}

/// Zustand des Login-Dialogs
#[derive(Debug, Clone, Default)]
pub struct LoginDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Eingegebener Nickname
    pub nick: String,
    /// Eingegebenes Passwort
    pub password: String,
    /// Passwort im Klartext zeigen
    pub show_password: bool,
    /// Letzte Fehlermeldung
    pub error: Option<String>,
}

/// Zustand des Registrierungsdialogs
#[derive(Debug, Clone)]
pub struct RegisterDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Nickname
    pub nick: String,
    /// Passwort
    pub password: String,
    /// Passwort im Klartext zeigen
    pub show_password: bool,
    /// E-Mail
    pub email: String,
    /// Geburtsdatum
    pub birth_date: NaiveDate,
    /// Avatar als PNG
    pub avatar: Option<Vec<u8>>,
    /// Verstöße der letzten Prüfung
    pub issues: Vec<String>,
}

impl Default for RegisterDialogState {
    fn default() -> Self {
        Self {
            visible: false,
            nick: String::new(),
            password: String::new(),
            show_password: false,
            email: String::new(),
            birth_date: default_birth_date(),
            avatar: None,
            issues: Vec::new(),
        }
    }
}

/// Zustand des Profildialogs
#[derive(Debug, Clone)]
pub struct ProfileDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Passwort
    pub password: String,
    /// Passwort im Klartext zeigen
    pub show_password: bool,
    /// E-Mail
    pub email: String,
    /// Geburtsdatum
    pub birth_date: NaiveDate,
    /// Avatar als PNG
    pub avatar: Option<Vec<u8>>,
    /// Verstöße der letzten Prüfung
    pub issues: Vec<String>,
}

impl Default for ProfileDialogState {
    fn default() -> Self {
        Self {
            visible: false,
            password: String::new(),
            show_password: false,
            email: String::new(),
            birth_date: default_birth_date(),
            avatar: None,
            issues: Vec::new(),
        }
    }
}

/// Zustand des Sitzungsverlaufs
#[derive(Debug, Clone)]
pub struct HistoryDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Filter von (inklusive)
    pub from: NaiveDate,
    /// Filter bis (inklusive)
    pub to: NaiveDate,
}

impl Default for HistoryDialogState {
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            visible: false,
            from: today,
            to: today,
        }
    }
}

/// Zustand des Fragenkatalogs
#[derive(Debug, Clone, Default)]
pub struct QuestionBankDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Gewählte Zeile
    pub selected: Option<usize>,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Seekarten-Dialog geöffnet werden soll
    pub show_chart_dialog: bool,
    /// Ob der Fragen-Import-Dialog geöffnet werden soll
    pub show_problems_import_dialog: bool,
    /// Login-Dialog
    pub login: LoginDialogState,
    /// Registrierungsdialog
    pub register: RegisterDialogState,
    /// Profildialog
    pub profile: ProfileDialogState,
    /// Sitzungsverlauf
    pub history: HistoryDialogState,
    /// Fragenkatalog
    pub question_bank: QuestionBankDialogState,
    /// Hilfetext (Some = Hilfe sichtbar)
    pub help_text: Option<String>,
    /// Meldungs-Warteschlange; angezeigt wird immer die vorderste
    pub messages: VecDeque<UiMessage>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht eine Meldung ein.
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push_back(UiMessage {
            level,
            text: text.into(),
        });
    }

    /// Vorderste Meldung.
    pub fn current_message(&self) -> Option<&UiMessage> {
        self.messages.front()
    }
}

fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}
