//! Annotationen auf der Seekarte: Punkte, Linien, Bögen und Textfelder.

mod hit_test;

use glam::Vec2;
use indexmap::IndexMap;
use std::f32::consts::TAU;

use super::spatial::SpatialIndex;

/// Eindeutige ID einer Annotation.
pub type AnnotationId = u64;

/// Kreisbogen um `center`; Winkel in Radiant, im Karten-System (y nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    /// Mittelpunkt
    pub center: Vec2,
    /// Radius in Karten-Pixeln
    pub radius: f32,
    /// Startwinkel
    pub start_angle: f32,
    /// Vorzeichenbehafteter Öffnungswinkel, |sweep| ≤ 2π
    pub sweep: f32,
}

impl ArcShape {
    /// Punkt auf dem Kreis bei `angle`.
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// Startpunkt des Bogens.
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    /// Endpunkt des Bogens.
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.start_angle + self.sweep)
    }

    /// Prüft, ob die Richtung `angle` innerhalb des überstrichenen Bereichs liegt.
    pub fn covers_angle(&self, angle: f32) -> bool {
        if self.sweep.abs() >= TAU {
            return true;
        }
        let relative = (angle - self.start_angle).rem_euclid(TAU);
        if self.sweep >= 0.0 {
            relative <= self.sweep
        } else {
            relative == 0.0 || relative >= TAU + self.sweep
        }
    }

    /// Tastet den Bogen mit höchstens `max_step` Radiant Schrittweite ab.
    pub fn sample_points(&self, max_step: f32) -> Vec<Vec2> {
        let steps = ((self.sweep.abs() / max_step.max(1e-3)).ceil() as usize).max(1);
        (0..=steps)
            .map(|i| self.point_at(self.start_angle + self.sweep * i as f32 / steps as f32))
            .collect()
    }
}

/// Geometrie und Stil einer Annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationKind {
    /// Gefüllter Punkt; Farbe kommt aus `AnnotationStore::point_color`.
    Point {
        /// Mittelpunkt
        pos: Vec2,
        /// Radius
        radius: f32,
    },
    /// Gerade Linie
    Line {
        /// Startpunkt
        start: Vec2,
        /// Endpunkt
        end: Vec2,
        /// RGBA-Farbe
        color: [f32; 4],
        /// Linienstärke
        width: f32,
    },
    /// Kreisbogen
    Arc {
        /// Bogengeometrie
        shape: ArcShape,
        /// RGBA-Farbe
        color: [f32; 4],
        /// Linienstärke
        width: f32,
    },
    /// Textfeld, verankert oben links
    Text {
        /// Ankerpunkt (oben links)
        pos: Vec2,
        /// Inhalt
        text: String,
        /// RGBA-Farbe
        color: [f32; 4],
        /// Schriftgröße in Karten-Pixeln
        size: f32,
    },
}

impl AnnotationKind {
    /// Kurzbezeichnung für Logs und Statuszeile.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Point { .. } => "Punkt",
            Self::Line { .. } => "Linie",
            Self::Arc { .. } => "Bogen",
            Self::Text { .. } => "Text",
        }
    }
}

/// Geschätzte Text-Ausdehnung (Breite, Höhe) in Karten-Pixeln.
pub fn text_extent(text: &str, size: f32) -> Vec2 {
    let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let lines = text.lines().count().max(1);
    Vec2::new(longest as f32 * size * 0.6, lines as f32 * size * 1.2)
}

/// Eine Annotation mit ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Eindeutige ID
    pub id: AnnotationId,
    /// Geometrie und Stil
    pub kind: AnnotationKind,
}

/// Alle Annotationen in Zeichenreihenfolge (später eingefügt = weiter oben).
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    items: IndexMap<AnnotationId, Annotation>,
    next_id: AnnotationId,
    point_color: [f32; 4],
    point_index: SpatialIndex,
}

impl AnnotationStore {
    /// Erstellt einen leeren Store mit gemeinsamer Punktfarbe.
    pub fn new(point_color: [f32; 4]) -> Self {
        Self {
            items: IndexMap::new(),
            next_id: 1,
            point_color,
            point_index: SpatialIndex::empty(),
        }
    }

    /// Anzahl der Annotationen.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true`, wenn keine Annotationen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iteriert von unten nach oben.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Annotation> {
        self.items.values()
    }

    /// Annotation per ID.
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.items.get(&id)
    }

    /// Fügt eine Annotation oben auf und gibt ihre ID zurück.
    pub fn add(&mut self, kind: AnnotationKind) -> AnnotationId {
        let id = self.next_id;
        self.next_id += 1;
        let is_point = matches!(kind, AnnotationKind::Point { .. });
        self.items.insert(id, Annotation { id, kind });
        if is_point {
            self.rebuild_point_index();
        }
        id
    }

    /// Entfernt eine Annotation; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        let removed = self.items.shift_remove(&id)?;
        if matches!(removed.kind, AnnotationKind::Point { .. }) {
            self.rebuild_point_index();
        }
        Some(removed)
    }

    /// Entfernt alle Annotationen.
    pub fn clear(&mut self) {
        self.items.clear();
        self.point_index = SpatialIndex::empty();
    }

    /// Gemeinsame Farbe aller Punkte.
    pub fn point_color(&self) -> [f32; 4] {
        self.point_color
    }

    /// Färbt alle (auch bestehende) Punkte um.
    pub fn set_point_color(&mut self, color: [f32; 4]) {
        self.point_color = color;
    }

    /// Anzahl der Punkt-Annotationen.
    pub fn point_count(&self) -> usize {
        self.point_index.len()
    }

    /// 1-basierte Nummer eines Punkts unter allen Punkten.
    pub fn point_number(&self, id: AnnotationId) -> Option<usize> {
        self.items
            .values()
            .filter(|a| matches!(a.kind, AnnotationKind::Point { .. }))
            .position(|a| a.id == id)
            .map(|i| i + 1)
    }

    /// Koordinaten aller Punkte in Einfügereihenfolge.
    pub fn point_coordinates(&self) -> Vec<Vec2> {
        self.items
            .values()
            .filter_map(|a| match a.kind {
                AnnotationKind::Point { pos, .. } => Some(pos),
                _ => None,
            })
            .collect()
    }

    /// Oberster Punkt, dessen Fläche (plus Toleranz) `pos` enthält.
    pub fn point_at(&self, pos: Vec2, tolerance: f32) -> Option<&Annotation> {
        let max_radius = self.max_point_radius();
        self.point_index
            .within_radius(pos, max_radius + tolerance)
            .into_iter()
            .filter_map(|m| self.items.get_full(&m.id))
            .filter(|(_, _, a)| hit_test::hits(&a.kind, pos, tolerance))
            .max_by_key(|(order, _, _)| *order)
            .map(|(_, _, a)| a)
    }

    /// Oberste Annotation unter `pos` (Radierer-Treffer).
    pub fn topmost_hit(&self, pos: Vec2, tolerance: f32) -> Option<AnnotationId> {
        let point_candidates: Vec<AnnotationId> = self
            .point_index
            .within_radius(pos, self.max_point_radius() + tolerance)
            .into_iter()
            .map(|m| m.id)
            .collect();

        self.items
            .values()
            .rev()
            .find(|a| match a.kind {
                AnnotationKind::Point { .. } => {
                    point_candidates.contains(&a.id) && hit_test::hits(&a.kind, pos, tolerance)
                }
                _ => hit_test::hits(&a.kind, pos, tolerance),
            })
            .map(|a| a.id)
    }

    fn max_point_radius(&self) -> f32 {
        self.items
            .values()
            .filter_map(|a| match a.kind {
                AnnotationKind::Point { radius, .. } => Some(radius),
                _ => None,
            })
            .fold(0.0, f32::max)
    }

    fn rebuild_point_index(&mut self) {
        self.point_index = SpatialIndex::from_entries(self.items.values().filter_map(|a| {
            match a.kind {
                AnnotationKind::Point { pos, .. } => Some((a.id, pos)),
                _ => None,
            }
        }));
    }
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new(crate::shared::options::POINT_COLOR)
    }
}
