//! Zentrale Konfiguration für Carta Náutica.
//!
//! `ChartOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Zoom (Screen-Punkte pro Karten-Pixel).
pub const CAMERA_ZOOM_DEFAULT: f32 = 0.2;
/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.09;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 1.0;
/// Zoom-Schritt bei stufenweisem Zoom (Toolbar / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt pro Mausrad-Raste.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Zeichnen ────────────────────────────────────────────────────────

/// Standard-Linienfarbe (RGBA: Rot).
pub const LINE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Standard-Punktfarbe (RGBA: #0066cc).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.4, 0.8, 1.0];
/// Linienstärke in Karten-Pixeln.
pub const LINE_WIDTH_WORLD: f32 = 8.0;
/// Punkt-Radius in Karten-Pixeln.
pub const POINT_RADIUS_WORLD: f32 = 15.0;
/// Schriftgröße von Textfeldern in Karten-Pixeln.
pub const TEXT_SIZE_WORLD: f32 = 48.0;
/// Kürzere Linien werden beim Loslassen verworfen.
pub const MIN_LINE_LENGTH_WORLD: f32 = 2.0;
/// Kleinere Bogenradien werden ignoriert.
pub const MIN_ARC_RADIUS_WORLD: f32 = 2.0;
/// Bögen mit kleinerem Öffnungswinkel werden verworfen.
pub const MIN_ARC_SWEEP_DEG: f32 = 0.5;
/// Radierer-Toleranz in Screen-Pixeln.
pub const ERASER_TOLERANCE_PX: f32 = 6.0;

// ── Instrumente ─────────────────────────────────────────────────────

/// Scroll-Punkte, die einer Mausrad-Raste entsprechen.
pub const WHEEL_POINTS_PER_NOTCH: f32 = 40.0;
/// Rotation pro Mausrad-Raste (15° × 0.1).
pub const ROTATION_DEG_PER_NOTCH: f32 = 1.5;
/// Öffnungsänderung des Zirkels pro Raste.
pub const COMPASS_OPENING_STEP_DEG: f32 = 2.0;
/// Minimale Zirkelöffnung.
pub const COMPASS_OPENING_MIN_DEG: f32 = 5.0;
/// Maximale Zirkelöffnung.
pub const COMPASS_OPENING_MAX_DEG: f32 = 150.0;
/// Start-Öffnung des Zirkels.
pub const COMPASS_OPENING_DEFAULT_DEG: f32 = 35.0;

/// Zielgröße des Geodreiecks (Screen-Punkte).
pub const PROTRACTOR_SIZE: [f32; 2] = [580.0, 380.0];
/// Zielgröße des Lineals.
pub const RULER_SIZE: [f32; 2] = [600.0, 100.0];
/// Zielgröße des Zirkels.
pub const COMPASS_SIZE: [f32; 2] = [220.0, 360.0];
/// Viewport-Position beim ersten Einblenden des Geodreiecks.
pub const PROTRACTOR_SPAWN_PX: [f32; 2] = [20.0, 20.0];
/// Viewport-Position beim ersten Einblenden des Lineals.
pub const RULER_SPAWN_PX: [f32; 2] = [20.0, 150.0];
/// Viewport-Position beim ersten Einblenden des Zirkels.
pub const COMPASS_SPAWN_PX: [f32; 2] = [20.0, 280.0];

// ── Dateien ─────────────────────────────────────────────────────────

/// Dateiname der Navigations-Datenbank neben der Executable.
pub const DATABASE_FILE_NAME: &str = "navdb.sqlite";
/// Dateiname der Optionen neben der Executable.
pub const OPTIONS_FILE_NAME: &str = "carta_nautica.toml";

/// Ein Referenzpunkt der Kartenkalibrierung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoReference {
    /// Karten-Pixel (x, y)
    pub pixel: [f64; 2],
    /// Breite in Grad (Nord positiv)
    pub lat: f64,
    /// Länge in Grad (Ost positiv)
    pub lon: f64,
}

/// Referenzpunkt oben links der Standardkarte (36°20'N 6°20'W).
pub const GEO_REFERENCE_TOP_LEFT: GeoReference = GeoReference {
    pixel: [0.0, 0.0],
    lat: 36.0 + 20.0 / 60.0,
    lon: -(6.0 + 20.0 / 60.0),
};
/// Referenzpunkt unten rechts der Standardkarte (35°40'N 5°00'W).
pub const GEO_REFERENCE_BOTTOM_RIGHT: GeoReference = GeoReference {
    pixel: [8000.0, 5000.0],
    lat: 35.0 + 40.0 / 60.0,
    lon: -5.0,
};

/// Laufzeit-Optionen (persistiert als TOML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Start-Zoom
    pub camera_zoom_default: f32,
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Toolbar / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt pro Mausrad-Raste
    pub camera_scroll_zoom_step: f32,

    // ── Zeichnen ────────────────────────────────────────────────
    /// Farbe neuer Linien, Bögen und Texte
    pub line_color: [f32; 4],
    /// Gemeinsame Farbe aller Punkte
    pub point_color: [f32; 4],
    /// Linienstärke (Karten-Pixel)
    pub line_width_world: f32,
    /// Punkt-Radius (Karten-Pixel)
    pub point_radius_world: f32,
    /// Schriftgröße (Karten-Pixel)
    pub text_size_world: f32,
    /// Radierer-Toleranz (Screen-Pixel)
    pub eraser_tolerance_px: f32,

    // ── Instrumente ─────────────────────────────────────────────
    /// Scroll-Punkte pro Mausrad-Raste
    pub wheel_points_per_notch: f32,
    /// Rotation pro Raste in Grad
    pub rotation_deg_per_notch: f32,
    /// Zirkel-Öffnung pro Raste in Grad
    pub compass_opening_step_deg: f32,
    /// Zielgröße Geodreieck
    pub protractor_size: [f32; 2],
    /// Zielgröße Lineal
    pub ruler_size: [f32; 2],
    /// Zielgröße Zirkel
    pub compass_size: [f32; 2],

    // ── Kalibrierung ───────────────────────────────────────────
    /// Erster Referenzpunkt
    pub geo_reference_a: GeoReference,
    /// Zweiter Referenzpunkt
    pub geo_reference_b: GeoReference,

    // ── Dateien ─────────────────────────────────────────────────
    /// Zuletzt geöffnete Karte
    pub last_chart_path: Option<String>,
    /// Datenbank-Pfad (None = `navdb.sqlite` neben der Executable)
    pub database_path: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            camera_zoom_default: CAMERA_ZOOM_DEFAULT,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            line_color: LINE_COLOR,
            point_color: POINT_COLOR,
            line_width_world: LINE_WIDTH_WORLD,
            point_radius_world: POINT_RADIUS_WORLD,
            text_size_world: TEXT_SIZE_WORLD,
            eraser_tolerance_px: ERASER_TOLERANCE_PX,

            wheel_points_per_notch: WHEEL_POINTS_PER_NOTCH,
            rotation_deg_per_notch: ROTATION_DEG_PER_NOTCH,
            compass_opening_step_deg: COMPASS_OPENING_STEP_DEG,
            protractor_size: PROTRACTOR_SIZE,
            ruler_size: RULER_SIZE,
            compass_size: COMPASS_SIZE,

            geo_reference_a: GEO_REFERENCE_TOP_LEFT,
            geo_reference_b: GEO_REFERENCE_BOTTOM_RIGHT,

            last_chart_path: None,
            database_path: None,
        }
    }
}

impl ChartOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt die Datei, werden Standardwerte verwendet.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Executable.
    pub fn config_path() -> PathBuf {
        executable_dir().join(OPTIONS_FILE_NAME)
    }

    /// Effektiver Datenbank-Pfad.
    pub fn resolved_database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => executable_dir().join(DATABASE_FILE_NAME),
        }
    }

    /// Klemmt einen Zoom-Wert auf die konfigurierten Grenzen.
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        let (min, max) = self.zoom_limits();
        zoom.clamp(min, max)
    }

    /// Zoom-Grenzen `(min, max)`, tolerant gegen vertauschte Werte.
    pub fn zoom_limits(&self) -> (f32, f32) {
        let min = self.camera_zoom_min.max(f32::EPSILON);
        let max = self.camera_zoom_max.max(min);
        (min, max)
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_roundtrip_through_toml() {
        let options = ChartOptions::default();
        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: ChartOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed: ChartOptions =
            toml::from_str("camera_zoom_max = 0.5\n").expect("Teil-TOML parsebar");
        assert_eq!(parsed.camera_zoom_max, 0.5);
        assert_eq!(parsed.camera_zoom_min, CAMERA_ZOOM_MIN);
        assert_eq!(parsed.line_color, LINE_COLOR);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = ChartOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(options, ChartOptions::default());
    }

    #[test]
    fn save_and_load_keeps_changes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("opts.toml");
        let mut options = ChartOptions::default();
        options.line_width_world = 3.0;
        options.last_chart_path = Some("karte.jpg".into());
        options.save_to_file(&path).expect("speichern");

        let loaded = ChartOptions::load_from_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn swapped_zoom_limits_are_tolerated() {
        let options = ChartOptions {
            camera_zoom_min: 2.0,
            camera_zoom_max: 1.0,
            ..ChartOptions::default()
        };
        assert_eq!(options.zoom_limits(), (2.0, 2.0));
    }
}
