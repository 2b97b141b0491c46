//! Zirkel-Geometrie: zwei Schenkel um ein gemeinsames Gelenk.
//!
//! Schenkel-Koordinaten: x ∈ [-12, 12], y ∈ [0, 370]; das Gelenk liegt bei
//! (0, 10). Zirkel-lokale Koordinaten haben das Gelenk im Ursprung.

use glam::Vec2;

use super::Bounds2D;
use crate::shared::options::COMPASS_OPENING_DEFAULT_DEG;

/// Größe eines Schenkel-SVGs.
pub(super) const LEG_SIZE: Vec2 = Vec2::new(24.0, 370.0);
/// Gelenkpunkt in Schenkel-Koordinaten.
pub const COMPASS_HINGE_LOCAL: Vec2 = Vec2::new(0.0, 10.0);
/// Pick-Radius des Gelenks (lokale Einheiten).
pub const COMPASS_HINGE_PICK_RADIUS: f32 = 12.0;

const BOUNDS_PADDING: f32 = 2.0;

/// Winkelzustand des Zirkels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassGeometry {
    /// Winkel des festen Schenkels
    pub fixed_angle_deg: f32,
    /// Öffnung zwischen festem und beweglichem Schenkel
    pub opening_deg: f32,
}

impl Default for CompassGeometry {
    fn default() -> Self {
        Self {
            fixed_angle_deg: 0.0,
            opening_deg: COMPASS_OPENING_DEFAULT_DEG,
        }
    }
}

impl CompassGeometry {
    /// Winkel des beweglichen Schenkels.
    pub fn moving_angle_deg(&self) -> f32 {
        self.fixed_angle_deg + self.opening_deg
    }

    /// Ecken eines Schenkels (oben links, oben rechts, unten rechts, unten links).
    pub fn leg_corners(&self, angle_deg: f32) -> [Vec2; 4] {
        let half_w = LEG_SIZE.x * 0.5;
        [
            Vec2::new(-half_w, 0.0),
            Vec2::new(half_w, 0.0),
            Vec2::new(half_w, LEG_SIZE.y),
            Vec2::new(-half_w, LEG_SIZE.y),
        ]
        .map(|p| leg_to_local(p, angle_deg))
    }

    /// Ecken beider Schenkel (fest, beweglich).
    pub fn legs(&self) -> [[Vec2; 4]; 2] {
        [
            self.leg_corners(self.fixed_angle_deg),
            self.leg_corners(self.moving_angle_deg()),
        ]
    }

    /// Spitzen beider Schenkel (fest, beweglich).
    pub fn tips_local(&self) -> (Vec2, Vec2) {
        let tip = Vec2::new(0.0, LEG_SIZE.y);
        (
            leg_to_local(tip, self.fixed_angle_deg),
            leg_to_local(tip, self.moving_angle_deg()),
        )
    }

    /// Vereinigung beider Schenkel und des Gelenkkreises, um 2 gepolstert.
    pub fn bounding_rect(&self) -> Bounds2D {
        let hinge = Bounds2D {
            min: Vec2::splat(-COMPASS_HINGE_PICK_RADIUS),
            max: Vec2::splat(COMPASS_HINGE_PICK_RADIUS),
        };
        Bounds2D::from_points(self.legs().into_iter().flatten())
            .map_or(hinge, |legs| legs.union(hinge))
            .expand(BOUNDS_PADDING)
    }

    /// Treffer auf einen der Schenkel oder das Gelenk.
    pub fn contains_local(&self, p: Vec2) -> bool {
        if p.length() <= COMPASS_HINGE_PICK_RADIUS {
            return true;
        }
        [self.fixed_angle_deg, self.moving_angle_deg()]
            .into_iter()
            .any(|angle| {
                let leg = local_to_leg(p, angle);
                leg.x.abs() <= LEG_SIZE.x * 0.5 && (0.0..=LEG_SIZE.y).contains(&leg.y)
            })
    }

    /// Ändert die Öffnung um `delta_deg` innerhalb `[min, max]`.
    pub fn adjust_opening(&mut self, delta_deg: f32, min: f32, max: f32) -> bool {
        let next = (self.opening_deg + delta_deg).clamp(min, max.max(min));
        if (next - self.opening_deg).abs() <= f32::EPSILON {
            return false;
        }
        self.opening_deg = next;
        true
    }
}

fn leg_to_local(p: Vec2, angle_deg: f32) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians()).rotate(p - COMPASS_HINGE_LOCAL)
}

fn local_to_leg(p: Vec2, angle_deg: f32) -> Vec2 {
    Vec2::from_angle(-angle_deg.to_radians()).rotate(p) + COMPASS_HINGE_LOCAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_leg_points_down_from_hinge() {
        let geometry = CompassGeometry::default();
        let (fixed, moving) = geometry.tips_local();
        assert_relative_eq!(fixed.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(fixed.y, 360.0, epsilon = 1e-4);
        // 35° im Uhrzeigersinn (y nach unten) schwenkt nach links
        assert!(moving.x < 0.0);
        assert_relative_eq!(moving.length(), 360.0, epsilon = 1e-3);
    }

    #[test]
    fn hinge_and_legs_are_hit() {
        let geometry = CompassGeometry::default();
        assert!(geometry.contains_local(Vec2::new(0.0, 0.0)));
        assert!(geometry.contains_local(Vec2::new(5.0, 200.0)));
        assert!(!geometry.contains_local(Vec2::new(100.0, 200.0)));
        assert!(!geometry.contains_local(Vec2::new(0.0, -30.0)));
    }

    #[test]
    fn bounding_rect_contains_both_tips_and_padding() {
        let geometry = CompassGeometry::default();
        let rect = geometry.bounding_rect();
        let (fixed, moving) = geometry.tips_local();
        assert!(rect.contains(fixed));
        assert!(rect.contains(moving));
        assert!(rect.min.y <= -COMPASS_HINGE_PICK_RADIUS - 2.0);
    }

    #[test]
    fn opening_is_clamped() {
        let mut geometry = CompassGeometry::default();
        assert!(geometry.adjust_opening(500.0, 5.0, 150.0));
        assert_relative_eq!(geometry.opening_deg, 150.0);
        assert!(!geometry.adjust_opening(2.0, 5.0, 150.0));
        assert!(geometry.adjust_opening(-500.0, 5.0, 150.0));
        assert_relative_eq!(geometry.opening_deg, 5.0);
    }
}
