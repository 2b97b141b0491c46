//! Szenen-Rendering über den egui-Painter: Karte, Annotationen, Instrumente.

mod annotation_renderer;
mod instrument_renderer;
mod texture;

pub use texture::{color32, rasterize_svg, ChartTexture, CHART_TILE_SIZE};

use crate::app::use_cases::drawing::tool_preview;
use crate::app::AppState;
use annotation_renderer::AnnotationRenderer;
use instrument_renderer::InstrumentRenderer;

/// Transformation Welt → absolute Screen-Koordinaten für einen Frame.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    /// Viewport-Rechteck im egui-Koordinatensystem
    pub rect: egui::Rect,
    /// Kamera-Zentrum in Welt-Koordinaten
    pub position: glam::Vec2,
    /// Screen-Punkte pro Karten-Pixel
    pub zoom: f32,
}

impl ViewTransform {
    /// Erstellt die Transformation aus dem aktuellen View-State.
    pub fn from_state(state: &AppState, rect: egui::Rect) -> Self {
        Self {
            rect,
            position: state.view.camera.position,
            zoom: state.view.camera.zoom,
        }
    }

    /// Welt-Punkt → absoluter Screen-Punkt.
    pub fn world_to_screen(&self, world: glam::Vec2) -> egui::Pos2 {
        let local = (world - self.position) * self.zoom;
        self.rect.center() + egui::vec2(local.x, local.y)
    }

    /// Viewport-lokaler Punkt → absoluter Screen-Punkt.
    pub fn local_to_screen(&self, local: glam::Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(local.x, local.y)
    }

    /// Länge in Karten-Pixeln → Screen-Punkte.
    pub fn scale(&self, world_len: f32) -> f32 {
        world_len * self.zoom
    }
}

/// Haupt-Renderer der Kartenansicht.
///
/// Hält die hochgeladenen Texturen und zeichnet pro Frame in der Reihenfolge
/// Karte → Annotationen → Vorschau → Instrumente.
#[derive(Default)]
pub struct SceneRenderer {
    chart: Option<ChartTexture>,
    annotations: AnnotationRenderer,
    instruments: InstrumentRenderer,
}

impl SceneRenderer {
    /// Erstellt einen leeren Renderer (Texturen werden bei Bedarf geladen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt die Karten-Textur neu, wenn sich die Karte geändert hat.
    pub fn sync_chart(&mut self, ctx: &egui::Context, state: &mut AppState) {
        if !state.view.chart_dirty {
            return;
        }
        state.view.chart_dirty = false;

        match state.view.chart.as_deref() {
            Some(chart) => {
                self.chart = Some(ChartTexture::upload(ctx, chart));
                log::info!("Karte in Renderer hochgeladen");
            }
            None => {
                self.chart = None;
                log::info!("Karte aus Renderer entfernt");
            }
        }
    }

    /// Zeichnet die komplette Szene in `rect`.
    pub fn paint(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        state: &AppState,
    ) {
        let view = ViewTransform::from_state(state, rect);

        if let Some(chart) = &self.chart {
            chart.paint(painter, &view);
        }

        self.annotations.paint(painter, &view, &state.annotations);
        self.annotations
            .paint_preview(painter, &view, &tool_preview(state));

        self.instruments.paint(ctx, painter, &view, state);
    }

    /// `true`, wenn eine Karten-Textur vorhanden ist.
    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }
}
