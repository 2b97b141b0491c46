//! Kartenkalibrierung (Pixel ↔ Breite/Länge) und DMS-Formatierung.

use anyhow::{bail, Result};
use glam::{DAffine2, DVec2, Vec2};

use crate::shared::options::GeoReference;

/// Geographische Position in Dezimalgrad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Breite (Nord positiv)
    pub lat: f64,
    /// Länge (Ost positiv)
    pub lon: f64,
}

/// Achse einer Koordinate; bestimmt Hemisphären-Buchstaben und Gradstellen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoAxis {
    /// Breite: N/S, zweistellige Grad
    Latitude,
    /// Länge: E/W, dreistellige Grad
    Longitude,
}

/// Affine Abbildung Karten-Pixel → (Länge, Breite).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCalibration {
    pixel_to_geo: DAffine2,
    geo_to_pixel: DAffine2,
}

impl GeoCalibration {
    /// Baut eine achsparallele Kalibrierung aus zwei diagonalen Referenzpunkten.
    pub fn from_references(a: &GeoReference, b: &GeoReference) -> Result<Self> {
        let dx = b.pixel[0] - a.pixel[0];
        let dy = b.pixel[1] - a.pixel[1];
        if dx.abs() < f64::EPSILON || dy.abs() < f64::EPSILON {
            bail!(
                "Kalibrierung entartet: Referenzpunkte ({:?}, {:?}) spannen keine Fläche auf",
                a.pixel,
                b.pixel
            );
        }

        let lon_per_px = (b.lon - a.lon) / dx;
        let lat_per_px = (b.lat - a.lat) / dy;
        let translation = DVec2::new(
            a.lon - a.pixel[0] * lon_per_px,
            a.lat - a.pixel[1] * lat_per_px,
        );
        let affine = DAffine2::from_cols(
            DVec2::new(lon_per_px, 0.0),
            DVec2::new(0.0, lat_per_px),
            translation,
        );
        Self::from_affine(affine)
    }

    /// Übernimmt eine beliebige (invertierbare) affine Abbildung.
    pub fn from_affine(pixel_to_geo: DAffine2) -> Result<Self> {
        if pixel_to_geo.matrix2.determinant().abs() < f64::EPSILON * f64::EPSILON {
            bail!("Kalibrierung nicht invertierbar");
        }
        Ok(Self {
            pixel_to_geo,
            geo_to_pixel: pixel_to_geo.inverse(),
        })
    }

    /// Kalibrierung aus den Optionen, bei Fehlern die Standardkarte.
    pub fn from_options_or_default(a: &GeoReference, b: &GeoReference) -> Self {
        match Self::from_references(a, b) {
            Ok(calibration) => calibration,
            Err(e) => {
                log::warn!("{:#}; verwende Standard-Kalibrierung", e);
                Self::default()
            }
        }
    }

    /// Karten-Pixel → geographische Position.
    pub fn pixel_to_geo(&self, pixel: Vec2) -> GeoPoint {
        let geo = self
            .pixel_to_geo
            .transform_point2(DVec2::new(pixel.x as f64, pixel.y as f64));
        GeoPoint {
            lat: geo.y,
            lon: geo.x,
        }
    }

    /// Geographische Position → Karten-Pixel.
    pub fn geo_to_pixel(&self, geo: GeoPoint) -> Vec2 {
        let pixel = self
            .geo_to_pixel
            .transform_point2(DVec2::new(geo.lon, geo.lat));
        Vec2::new(pixel.x as f32, pixel.y as f32)
    }

    /// Distanz zweier Karten-Pixel in Seemeilen.
    pub fn nautical_miles_between_pixels(&self, a: Vec2, b: Vec2) -> f64 {
        nautical_miles_between(self.pixel_to_geo(a), self.pixel_to_geo(b))
    }
}

impl Default for GeoCalibration {
    fn default() -> Self {
        use crate::shared::options::{GEO_REFERENCE_BOTTOM_RIGHT, GEO_REFERENCE_TOP_LEFT};

        let lon_per_px = (GEO_REFERENCE_BOTTOM_RIGHT.lon - GEO_REFERENCE_TOP_LEFT.lon)
            / (GEO_REFERENCE_BOTTOM_RIGHT.pixel[0] - GEO_REFERENCE_TOP_LEFT.pixel[0]);
        let lat_per_px = (GEO_REFERENCE_BOTTOM_RIGHT.lat - GEO_REFERENCE_TOP_LEFT.lat)
            / (GEO_REFERENCE_BOTTOM_RIGHT.pixel[1] - GEO_REFERENCE_TOP_LEFT.pixel[1]);
        let pixel_to_geo = DAffine2::from_cols(
            DVec2::new(lon_per_px, 0.0),
            DVec2::new(0.0, lat_per_px),
            DVec2::new(GEO_REFERENCE_TOP_LEFT.lon, GEO_REFERENCE_TOP_LEFT.lat),
        );
        Self {
            pixel_to_geo,
            geo_to_pixel: pixel_to_geo.inverse(),
        }
    }
}

/// Formatiert einen Dezimalgrad-Wert als `DD°MM'SS.S" H`.
///
/// Sekunden werden auf eine Nachkommastelle gerundet; ein Überlauf auf
/// 60.0" bzw. 60' wird in die nächsthöhere Einheit übertragen.
pub fn format_dms(value: f64, axis: GeoAxis) -> String {
    let hemisphere = match (axis, value < 0.0) {
        (GeoAxis::Latitude, false) => 'N',
        (GeoAxis::Latitude, true) => 'S',
        (GeoAxis::Longitude, false) => 'E',
        (GeoAxis::Longitude, true) => 'W',
    };

    let abs = value.abs();
    let mut degrees = abs.trunc() as u32;
    let minutes_f = (abs - abs.trunc()) * 60.0;
    let mut minutes = minutes_f.trunc() as u32;
    let mut seconds = ((minutes_f - minutes_f.trunc()) * 600.0).round() / 10.0;

    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }

    match axis {
        GeoAxis::Latitude => format!(
            "{:02}°{:02}'{:04.1}\" {}",
            degrees, minutes, seconds, hemisphere
        ),
        GeoAxis::Longitude => format!(
            "{:03}°{:02}'{:04.1}\" {}",
            degrees, minutes, seconds, hemisphere
        ),
    }
}

/// Formatiert eine Position als `Breite  Länge`.
pub fn format_lat_lon(point: GeoPoint) -> String {
    format!(
        "{}  {}",
        format_dms(point.lat, GeoAxis::Latitude),
        format_dms(point.lon, GeoAxis::Longitude)
    )
}

/// Distanz in Seemeilen (1' Breite = 1 sm, Länge mit cos(mittlere Breite) skaliert).
pub fn nautical_miles_between(a: GeoPoint, b: GeoPoint) -> f64 {
    let mean_lat = ((a.lat + b.lat) * 0.5).to_radians();
    let dlat_min = (b.lat - a.lat) * 60.0;
    let dlon_min = (b.lon - a.lon) * 60.0 * mean_lat.cos();
    dlat_min.hypot(dlon_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::{GEO_REFERENCE_BOTTOM_RIGHT, GEO_REFERENCE_TOP_LEFT};
    use approx::assert_relative_eq;

    fn calibration() -> GeoCalibration {
        GeoCalibration::from_references(&GEO_REFERENCE_TOP_LEFT, &GEO_REFERENCE_BOTTOM_RIGHT)
            .expect("gültige Referenzen")
    }

    #[test]
    fn reference_points_map_exactly() {
        let cal = calibration();
        let top_left = cal.pixel_to_geo(Vec2::ZERO);
        assert_relative_eq!(top_left.lat, GEO_REFERENCE_TOP_LEFT.lat, epsilon = 1e-9);
        assert_relative_eq!(top_left.lon, GEO_REFERENCE_TOP_LEFT.lon, epsilon = 1e-9);

        let bottom_right = cal.pixel_to_geo(Vec2::new(8000.0, 5000.0));
        assert_relative_eq!(bottom_right.lat, 35.0 + 40.0 / 60.0, epsilon = 1e-9);
        assert_relative_eq!(bottom_right.lon, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn geo_to_pixel_inverts_pixel_to_geo() {
        let cal = calibration();
        let pixel = Vec2::new(1234.5, 4321.0);
        let back = cal.geo_to_pixel(cal.pixel_to_geo(pixel));
        assert_relative_eq!(back.x, pixel.x, epsilon = 1e-2);
        assert_relative_eq!(back.y, pixel.y, epsilon = 1e-2);
    }

    #[test]
    fn default_matches_reference_calibration() {
        let a = GeoCalibration::default().pixel_to_geo(Vec2::new(4000.0, 2500.0));
        let b = calibration().pixel_to_geo(Vec2::new(4000.0, 2500.0));
        assert_relative_eq!(a.lat, b.lat, epsilon = 1e-9);
        assert_relative_eq!(a.lon, b.lon, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_references_are_rejected() {
        let mut b = GEO_REFERENCE_BOTTOM_RIGHT;
        b.pixel[1] = GEO_REFERENCE_TOP_LEFT.pixel[1];
        assert!(GeoCalibration::from_references(&GEO_REFERENCE_TOP_LEFT, &b).is_err());

        let fallback = GeoCalibration::from_options_or_default(&GEO_REFERENCE_TOP_LEFT, &b);
        assert_eq!(fallback, GeoCalibration::default());
    }

    #[test]
    fn dms_latitude_north() {
        assert_eq!(format_dms(36.125, GeoAxis::Latitude), "36°07'30.0\" N");
    }

    #[test]
    fn dms_longitude_west_uses_three_degree_digits() {
        assert_eq!(format_dms(-5.35, GeoAxis::Longitude), "005°21'00.0\" W");
    }

    #[test]
    fn dms_southern_and_eastern_hemisphere() {
        assert_eq!(format_dms(-0.5, GeoAxis::Latitude), "00°30'00.0\" S");
        assert_eq!(format_dms(12.0, GeoAxis::Longitude), "012°00'00.0\" E");
    }

    #[test]
    fn dms_rounding_carries_into_minutes_and_degrees() {
        // 59'59.99" rundet auf 60.0" → 1°00'00.0"
        let value = 1.0 - 0.01 / 3600.0;
        assert_eq!(format_dms(value, GeoAxis::Latitude), "01°00'00.0\" N");
    }

    #[test]
    fn lat_lon_is_joined() {
        let text = format_lat_lon(GeoPoint {
            lat: 36.0,
            lon: -6.0,
        });
        assert_eq!(text, "36°00'00.0\" N  006°00'00.0\" W");
    }

    #[test]
    fn one_minute_of_latitude_is_one_nautical_mile() {
        let a = GeoPoint { lat: 36.0, lon: -5.5 };
        let b = GeoPoint {
            lat: 36.0 + 1.0 / 60.0,
            lon: -5.5,
        };
        assert_relative_eq!(nautical_miles_between(a, b), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn longitude_distance_shrinks_with_latitude() {
        let a = GeoPoint { lat: 60.0, lon: 0.0 };
        let b = GeoPoint {
            lat: 60.0,
            lon: 1.0 / 60.0,
        };
        assert_relative_eq!(nautical_miles_between(a, b), 0.5, epsilon = 1e-9);
    }
}
