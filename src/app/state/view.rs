use crate::core::{Camera2D, ChartImage, GeoCalibration};
use std::sync::Arc;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Geladene Seekarte (optional)
    pub chart: Option<Arc<ChartImage>>,
    /// Signalisiert, dass die Karten-Textur neu hochgeladen werden muss
    pub chart_dirty: bool,
    /// Pixel ↔ Breite/Länge
    pub calibration: GeoCalibration,
    /// Letzte Cursor-Position in Welt-Koordinaten
    pub cursor_world: Option<glam::Vec2>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            chart: None,
            chart_dirty: false,
            calibration: GeoCalibration::default(),
            cursor_world: None,
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn viewport_vec(&self) -> glam::Vec2 {
        glam::Vec2::from(self.viewport_size)
    }
}
