//! 2D-Kamera für Pan und Zoom über der Seekarte.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Welt-Koordinaten sind Karten-Pixel (Ursprung oben links, y nach unten).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Welt-Punkt in der Viewport-Mitte
    pub position: Vec2,
    /// Screen-Punkte pro Karten-Pixel
    pub zoom: f32,
}

impl Camera2D {
    /// Start-Zoom.
    pub const ZOOM_DEFAULT: f32 = 0.2;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.09;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 1.0;

    /// Erstellt eine neue Kamera mit Start-Zoom.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: Self::ZOOM_DEFAULT,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan) um ein Welt-Delta
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom innerhalb der Standardgrenzen.
    pub fn zoom_by(&mut self, factor: f32) -> bool {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX)
    }

    /// Ändert den Zoom innerhalb `[min, max]`.
    ///
    /// Gibt `false` zurück, wenn der geklemmte Wert unverändert bleibt.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) -> bool {
        let next = (self.zoom * factor).clamp(min, max);
        if (next - self.zoom).abs() <= f32::EPSILON {
            return false;
        }
        self.zoom = next;
        true
    }

    /// Zoomt so, dass `focus` auf dem Bildschirm an derselben Stelle bleibt.
    pub fn zoom_towards(&mut self, factor: f32, focus: Vec2, min: f32, max: f32) -> bool {
        let old_zoom = self.zoom;
        if !self.zoom_by_clamped(factor, min, max) {
            return false;
        }
        self.position = focus + (self.position - focus) * (old_zoom / self.zoom);
        true
    }

    /// Konvertiert viewport-lokale Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        self.position + (screen_pos - viewport_size * 0.5) / self.zoom
    }

    /// Konvertiert Welt-Koordinaten zu viewport-lokalen Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom + viewport_size * 0.5
    }

    /// Welt-Einheiten pro Screen-Pixel.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }

    /// Rechnet einen Pixel-Radius in Welt-Einheiten um.
    pub fn pick_radius_world(&self, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel()
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
