//! Rasterkarte als Zeichenfläche.

use anyhow::{Context, Result};
use glam::Vec2;
use image::{ImageReader, RgbaImage};
use std::io::BufReader;
use std::sync::Arc;

/// Geladene Seekarte (RGBA8, unskaliert).
#[derive(Clone)]
pub struct ChartImage {
    path: String,
    pixels: Arc<RgbaImage>,
}

impl ChartImage {
    /// Lädt eine Karte aus einer Bilddatei (PNG/JPEG).
    ///
    /// Schlägt die Erkennung über die Dateiendung fehl, wird das Format
    /// anhand des Dateiinhalts bestimmt.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}",
                    path,
                    ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Karte nicht gefunden: {}", path))?;
                ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", path))?
                    .decode()
                    .with_context(|| format!("Fehler beim Dekodieren der Karte: {}", path))?
            }
        };

        let pixels = image.to_rgba8();
        log::info!(
            "Karte geladen: {} ({}x{})",
            path,
            pixels.width(),
            pixels.height()
        );
        Ok(Self::from_rgba(path, pixels))
    }

    /// Erstellt eine Karte aus bereits dekodierten Pixeln.
    pub fn from_rgba(path: &str, pixels: RgbaImage) -> Self {
        Self {
            path: path.to_string(),
            pixels: Arc::new(pixels),
        }
    }

    /// Quellpfad der Karte.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// RGBA-Pixeldaten.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Größe in Karten-Pixeln.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.pixels.width() as f32, self.pixels.height() as f32)
    }

    /// Mittelpunkt in Karten-Pixeln.
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Prüft, ob ein Welt-Punkt auf der Karte liegt.
    pub fn contains(&self, world_pos: Vec2) -> bool {
        let size = self.size();
        (0.0..=size.x).contains(&world_pos.x) && (0.0..=size.y).contains(&world_pos.y)
    }
}

impl std::fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartImage")
            .field("path", &self.path)
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_center_follow_pixels() {
        let chart = ChartImage::from_rgba("mem", RgbaImage::new(200, 100));
        assert_eq!(chart.size(), Vec2::new(200.0, 100.0));
        assert_eq!(chart.center(), Vec2::new(100.0, 50.0));
        assert!(chart.contains(Vec2::new(10.0, 99.0)));
        assert!(!chart.contains(Vec2::new(-1.0, 10.0)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ChartImage::load_from_file("/nicht/vorhanden.jpg").expect_err("Fehler erwartet");
        assert!(format!("{:#}", err).contains("/nicht/vorhanden.jpg"));
    }

    #[test]
    fn png_file_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("karte.png");
        RgbaImage::new(12, 8).save(&path).expect("png schreiben");

        let chart = ChartImage::load_from_file(path.to_str().expect("utf8")).expect("laden");
        assert_eq!(chart.size(), Vec2::new(12.0, 8.0));
    }
}
