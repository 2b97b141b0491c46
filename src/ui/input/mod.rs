//! Viewport-Input-Handling: Maus-Events, Instrument-Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `primary`: Linksziehen (Instrument bewegen oder Kamera-Pan), Mittelziehen
//! - `secondary`: Rechte Taste: Zeichen-Gesten (Drücken, Ziehen, Loslassen)
//! - `wheel`: Mausrad: Zoom, Instrument drehen, Zirkel öffnen
//! - `hover`: Cursor-Position, Tooltips und Mauszeiger

mod hover;
mod primary;
mod secondary;
mod wheel;

use super::keyboard;
use crate::app::{AppIntent, AppState};
use crate::core::InstrumentKind;
use glam::Vec2;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    CameraPan,
    /// Verschieben eines Instruments (hat Vorrang vor Pan)
    Instrument(InstrumentKind),
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub state: &'a AppState,
}

impl ViewportContext<'_> {
    /// Absoluter Screen-Punkt → viewport-lokaler Punkt.
    pub(crate) fn to_local(&self, pos: egui::Pos2) -> Vec2 {
        let local = pos - self.response.rect.min;
        Vec2::new(local.x, local.y)
    }

    /// Absoluter Screen-Punkt → Welt-Koordinaten.
    pub(crate) fn to_world(&self, pos: egui::Pos2) -> Vec2 {
        self.state
            .view
            .camera
            .screen_to_world(self.to_local(pos), Vec2::from(self.viewport_size))
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drags, rechte Taste, Mausrad)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    /// Rechte Taste wurde im Viewport gedrückt und ist noch unten
    pub(crate) secondary_active: bool,
    /// Ungenutzter Raste-Bruchteil für die Zirkel-Öffnung (Touchpads)
    pub(crate) opening_residual: f32,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let viewport_size = [response.rect.width(), response.rect.height()];
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            state,
        };

        let mut events = Vec::new();

        if viewport_size != state.view.viewport_size {
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_primary_drag(&ctx, &mut events);
        self.handle_secondary(&ctx, &mut events);
        self.handle_wheel(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);

        events
    }
}
