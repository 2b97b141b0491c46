//! Trait-basiertes Zeichen-Werkzeug-System.
//!
//! Jeder Zeichen-Modus außer Pan hat ein Werkzeug, das den `DrawTool`-Trait
//! implementiert und beim `ToolManager` registriert wird. Werkzeuge liefern
//! reine Daten (`ToolAction`); die Mutation des Stores erfolgt zentral in
//! `use_cases::drawing::apply_tool_action`.

/// Kreisbogen-Werkzeug (Mitte → Radius → Winkel).
pub mod arc;
/// DrawTool-Trait: Schnittstelle für alle Zeichen-Werkzeuge.
mod draw_tool;
mod eraser;
mod line;
mod point;
mod text;

pub use arc::ArcTool;
pub use draw_tool::DrawTool;
pub use eraser::EraserTool;
pub use line::LineTool;
pub use point::PointTool;
pub use text::TextTool;

use crate::app::state::DrawMode;
use crate::core::{AnnotationKind, ArcShape};
use crate::shared::ChartOptions;
use glam::Vec2;

// ── Typen ────────────────────────────────────────────────────────

/// Stil-Parameter, die ein Werkzeug beim Erzeugen braucht.
///
/// Wird pro Ereignis aus dem AppState gebaut, daher wirkt eine Farbänderung
/// auch auf eine laufende Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolContext {
    /// Farbe für Linien, Bögen und Texte
    pub line_color: [f32; 4],
    /// Linienstärke in Welt-Einheiten
    pub line_width: f32,
    /// Punkt-Radius in Welt-Einheiten
    pub point_radius: f32,
}

impl ToolContext {
    /// Baut den Kontext aus Optionen und aktueller Linienfarbe.
    pub fn new(options: &ChartOptions, line_color: [f32; 4]) -> Self {
        Self {
            line_color,
            line_width: options.line_width_world,
            point_radius: options.point_radius_world,
        }
    }
}

/// Rückgabe der Werkzeug-Ereignisse; steuert den Ablauf.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolAction {
    /// Nichts zu tun (oder nur interner Zustand geändert)
    Continue,
    /// Fertige Annotation übernehmen
    Commit(AnnotationKind),
    /// Text-Eingabe an Position öffnen
    RequestText { pos: Vec2 },
    /// Oberste Annotation an Position löschen
    Erase { pos: Vec2 },
}

/// Vorschau-Element einer laufenden Geste.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewShape {
    /// Linie im Endzustand
    Line {
        /// Start
        start: Vec2,
        /// Ende
        end: Vec2,
        /// Farbe
        color: [f32; 4],
        /// Stärke
        width: f32,
    },
    /// Bogen im aktuellen Zustand
    Arc {
        /// Geometrie
        shape: ArcShape,
        /// Farbe
        color: [f32; 4],
        /// Stärke
        width: f32,
    },
    /// Dünne Hilfslinie (z.B. Radius)
    Guide {
        /// Start
        from: Vec2,
        /// Ende
        to: Vec2,
    },
    /// Markierter Punkt (z.B. Bogenmitte)
    Marker {
        /// Position
        pos: Vec2,
    },
}

/// Preview-Geometrie für das Rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolPreview {
    /// Vorschau-Elemente in Zeichenreihenfolge
    pub shapes: Vec<PreviewShape>,
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet die registrierten Zeichen-Werkzeuge.
pub struct ToolManager {
    tools: Vec<Box<dyn DrawTool>>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen ToolManager mit allen Standard-Werkzeugen.
    pub fn new() -> Self {
        let mut manager = Self { tools: Vec::new() };
        manager.register(Box::new(PointTool::new()));
        manager.register(Box::new(LineTool::new()));
        manager.register(Box::new(ArcTool::new()));
        manager.register(Box::new(TextTool::new()));
        manager.register(Box::new(EraserTool::new()));
        manager
    }

    /// Registriert ein Werkzeug; ein vorhandenes für denselben Modus wird ersetzt.
    pub fn register(&mut self, tool: Box<dyn DrawTool>) {
        self.tools.retain(|t| t.mode() != tool.mode());
        self.tools.push(tool);
    }

    /// Werkzeug für `mode` (None für Pan).
    pub fn tool(&self, mode: DrawMode) -> Option<&dyn DrawTool> {
        self.tools
            .iter()
            .find(|t| t.mode() == mode)
            .map(|t| t.as_ref())
    }

    /// Mutables Werkzeug für `mode`.
    pub fn tool_mut(&mut self, mode: DrawMode) -> Option<&mut (dyn DrawTool + 'static)> {
        self.tools
            .iter_mut()
            .find(|t| t.mode() == mode)
            .map(|t| t.as_mut())
    }

    /// `true`, wenn das Werkzeug von `mode` eine angefangene Geste hat.
    pub fn has_pending_input(&self, mode: DrawMode) -> bool {
        self.tool(mode).is_some_and(|t| t.has_pending_input())
    }

    /// Setzt alle Werkzeuge zurück (Modus-Wechsel, Escape, Reset).
    pub fn reset_all(&mut self) {
        for tool in &mut self.tools {
            tool.reset();
        }
    }
}
