use crate::app::state::{DrawMode, ProfileForm, RegistrationForm};
use crate::core::InstrumentKind;
use crate::shared::ChartOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Datei & Anwendung ===
    /// Seekarte öffnen (zeigt Dateidialog)
    OpenChartRequested,
    /// Seekarten-Datei wurde im Dialog gewählt
    ChartFileSelected { path: String },
    /// Anwendung beenden
    ExitRequested,

    // === Kamera & Viewport ===
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht zurücksetzen (Start-Zoom, Karte zentriert)
    ResetViewRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um ein Welt-Delta verschieben
    CameraPan { delta: glam::Vec2 },
    /// Mausrad-Zoom um `notches` Rasten (positiv = hinein)
    CameraZoom {
        notches: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Mauszeiger über dem Viewport (Welt-Position) oder außerhalb
    PointerMoved { world_pos: Option<glam::Vec2> },

    // === Zeichnen ===
    /// Zeichen-Modus in Toolbar/Menü gewählt
    DrawModeSelected { mode: DrawMode },
    /// Escape gedrückt
    EscapePressed,
    /// Rechte Maustaste gedrückt
    SecondaryPressed { world_pos: glam::Vec2 },
    /// Rechte Maustaste gezogen
    SecondaryDragged { world_pos: glam::Vec2 },
    /// Rechte Maustaste losgelassen
    SecondaryReleased { world_pos: glam::Vec2 },
    /// Text-Eingabe bestätigt
    TextEntryConfirmed { text: String },
    /// Text-Eingabe abgebrochen
    TextEntryCancelled,
    /// Linienfarbe gewählt
    LineColorChanged { color: [f32; 4] },
    /// Punktfarbe gewählt
    PointColorChanged { color: [f32; 4] },
    /// Alle Annotationen entfernen
    ClearAnnotationsRequested,
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,

    // === Instrumente ===
    /// Instrument über die Toolbar ein- oder ausblenden
    InstrumentToggled { kind: InstrumentKind, visible: bool },
    /// Drag auf einem Instrument begonnen
    InstrumentDragStarted { kind: InstrumentKind },
    /// Instrument um Screen-Delta verschoben
    InstrumentDragged {
        kind: InstrumentKind,
        delta_screen: glam::Vec2,
    },
    /// Drag auf einem Instrument beendet
    InstrumentDragEnded,
    /// Mausrad über einem Instrument
    InstrumentWheel {
        kind: InstrumentKind,
        notches: f32,
        shift: bool,
        ctrl: bool,
        over_hinge: bool,
        focus_world: Option<glam::Vec2>,
    },

    // === Benutzerkonto ===
    /// Benutzer-Eintrag in Menü/Toolbar (Login oder Profil)
    UserMenuRequested,
    /// Login abgeschickt
    LoginSubmitted { nick: String, password: String },
    /// Login-Dialog geschlossen
    LoginCancelled,
    /// Registrierungsdialog öffnen
    RegisterRequested,
    /// Registrierung abgeschickt
    RegisterSubmitted { form: RegistrationForm },
    /// Registrierungsdialog geschlossen
    RegisterCancelled,
    /// Profil speichern
    ProfileSaveRequested { form: ProfileForm },
    /// Profildialog geschlossen
    ProfileClosed,
    /// Abmelden
    LogoutRequested,

    // === Statistik & Fragen ===
    /// Sitzungsverlauf öffnen
    HistoryRequested,
    /// Sitzungsverlauf schließen
    HistoryClosed,
    /// Fragenkatalog öffnen
    QuestionBankRequested,
    /// Fragenkatalog schließen
    QuestionBankClosed,
    /// JSON-Import für den Fragenkatalog anfordern (Dateidialog)
    ImportProblemsRequested,
    /// Fragen-Datei wurde gewählt
    ProblemsFileSelected { path: String },
    /// Frage aus dem Katalog öffnen
    ProblemOpenRequested { index: usize },
    /// Antwort prüfen (Anzeige-Index der gewählten Antwort)
    ProblemCheckRequested { selected: Option<usize> },
    /// Nächste Frage
    ProblemNextRequested,
    /// Fragetext ein-/ausklappen
    ProblemCollapseToggled,
    /// Fragenfenster schließen
    ProblemClosed,

    // === Hilfe, Meldungen, Optionen ===
    /// Hilfe öffnen
    HelpRequested,
    /// Hilfe schließen
    HelpClosed,
    /// Aktuelle Meldung quittiert
    MessageDismissed,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: Box<ChartOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
