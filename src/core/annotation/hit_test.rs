//! Geometrische Treffertests für Annotationen.

use glam::Vec2;

use super::{text_extent, ArcShape, AnnotationKind};

/// Prüft, ob `pos` die Annotation (inkl. Toleranz in Welt-Einheiten) trifft.
pub(super) fn hits(kind: &AnnotationKind, pos: Vec2, tolerance: f32) -> bool {
    match kind {
        AnnotationKind::Point { pos: center, radius } => {
            center.distance(pos) <= radius + tolerance
        }
        AnnotationKind::Line {
            start, end, width, ..
        } => distance_to_segment(pos, *start, *end) <= width * 0.5 + tolerance,
        AnnotationKind::Arc { shape, width, .. } => hits_arc(shape, pos, width * 0.5 + tolerance),
        AnnotationKind::Text {
            pos: anchor,
            text,
            size,
            ..
        } => {
            let extent = text_extent(text, *size);
            let min = *anchor - Vec2::splat(tolerance);
            let max = *anchor + extent + Vec2::splat(tolerance);
            pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
        }
    }
}

/// Abstand eines Punkts zu einer Strecke.
pub(crate) fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn hits_arc(shape: &ArcShape, pos: Vec2, half_width: f32) -> bool {
    let offset = pos - shape.center;
    let ring_distance = (offset.length() - shape.radius).abs();
    if ring_distance > half_width {
        return false;
    }
    if offset.length_squared() <= f32::EPSILON {
        return shape.radius <= half_width;
    }
    let angle = offset.y.atan2(offset.x);
    shape.covers_angle(angle)
        || shape.start_point().distance(pos) <= half_width
        || shape.end_point().distance(pos) <= half_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(Vec2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment(Vec2::new(13.0, 4.0), a, b), 5.0);
        assert_eq!(distance_to_segment(Vec2::new(1.0, 1.0), a, a), 2f32.sqrt());
    }

    #[test]
    fn line_hit_respects_width() {
        let kind = AnnotationKind::Line {
            start: Vec2::ZERO,
            end: Vec2::new(100.0, 0.0),
            color: [1.0; 4],
            width: 8.0,
        };
        assert!(hits(&kind, Vec2::new(50.0, 4.0), 0.0));
        assert!(!hits(&kind, Vec2::new(50.0, 5.0), 0.0));
        assert!(hits(&kind, Vec2::new(50.0, 5.0), 1.5));
    }

    #[test]
    fn arc_hit_only_inside_sweep() {
        let kind = AnnotationKind::Arc {
            shape: ArcShape {
                center: Vec2::ZERO,
                radius: 50.0,
                start_angle: 0.0,
                sweep: FRAC_PI_2,
            },
            color: [1.0; 4],
            width: 4.0,
        };
        // 45° liegt im Bogen, 180° nicht
        let inside = Vec2::from_angle(FRAC_PI_2 * 0.5) * 50.0;
        assert!(hits(&kind, inside, 0.0));
        assert!(!hits(&kind, Vec2::new(-50.0, 0.0), 0.0));
        // Innerhalb des Winkels, aber weit weg vom Ring
        assert!(!hits(&kind, inside * 0.5, 0.0));
    }

    #[test]
    fn text_hit_uses_estimated_bounds() {
        let kind = AnnotationKind::Text {
            pos: Vec2::new(10.0, 10.0),
            text: "Faro".into(),
            color: [1.0; 4],
            size: 10.0,
        };
        assert!(hits(&kind, Vec2::new(20.0, 15.0), 0.0));
        assert!(!hits(&kind, Vec2::new(60.0, 15.0), 0.0));
    }
}
