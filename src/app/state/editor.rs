use crate::app::tools::ToolManager;
use crate::core::{InstrumentKind, InstrumentSet};
use crate::shared::options::LINE_COLOR;

/// Aktiver Zeichen-Modus; genau einer ist aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Karte verschieben, keine Zeichen-Geste
    #[default]
    Pan,
    /// Punkte setzen
    Point,
    /// Linien ziehen
    Line,
    /// Kreisbögen (Mitte → Radius → Winkel)
    Arc,
    /// Textfelder
    Text,
    /// Annotationen löschen
    Eraser,
}

impl DrawMode {
    /// Alle Zeichen-Modi in Toolbar-Reihenfolge (ohne Pan).
    pub const DRAWING: [DrawMode; 5] = [
        Self::Point,
        Self::Line,
        Self::Arc,
        Self::Text,
        Self::Eraser,
    ];

    /// Anzeigename für Toolbar und Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pan => "Pan",
            Self::Point => "Point",
            Self::Line => "Line",
            Self::Arc => "Arc",
            Self::Text => "Text",
            Self::Eraser => "Eraser",
        }
    }

    /// `true` für Modi, in denen Linksziehen nicht verschiebt.
    pub fn blocks_primary_pan(self) -> bool {
        matches!(self, Self::Point | Self::Line | Self::Arc | Self::Text)
    }
}

/// Offene Text-Eingabe an einer Kartenposition.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTextEntry {
    /// Anker in Welt-Koordinaten
    pub pos: glam::Vec2,
    /// Bisher eingegebener Text
    pub text: String,
}

/// Zustand des Zeichen-Editors
pub struct EditorState {
    /// Aktiver Modus
    pub mode: DrawMode,
    /// Zeichen-Werkzeuge (eins je Modus außer Pan)
    pub tool_manager: ToolManager,
    /// Farbe für neue Linien, Bögen und Texte
    pub line_color: [f32; 4],
    /// Offene Text-Eingabe
    pub pending_text: Option<PendingTextEntry>,
    /// Lineal, Winkelmesser, Zirkel
    pub instruments: InstrumentSet,
    /// Gerade per Linksziehen bewegtes Instrument
    pub dragging_instrument: Option<InstrumentKind>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (Pan aktiv).
    pub fn new() -> Self {
        Self {
            mode: DrawMode::Pan,
            tool_manager: ToolManager::new(),
            line_color: LINE_COLOR,
            pending_text: None,
            instruments: InstrumentSet::new(),
            dragging_instrument: None,
        }
    }

    /// `true`, wenn eine Geste oder Text-Eingabe läuft.
    pub fn has_pending_input(&self) -> bool {
        self.pending_text.is_some() || self.tool_manager.has_pending_input(self.mode)
    }
}
