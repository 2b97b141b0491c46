//! Spatial-Index (KD-Tree) für schnelle Abfragen auf Punkt-Annotationen.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID der gefundenen Annotation
    pub id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über Positionen mit ID.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus `(id, position)`-Paaren.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u64, Vec2)>,
    {
        let (ids, coords): (Vec<u64>, Vec<[f64; 2]>) = entries
            .into_iter()
            .map(|(id, pos)| (id, [pos.x as f64, pos.y as f64]))
            .unzip();

        Self {
            tree: (&coords).into(),
            ids,
        }
    }

    /// Gibt die Anzahl indexierter Einträge zurück.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Gibt `true` zurück, wenn der Index leer ist.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Findet den nächsten Eintrag zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let id = *self.ids.get(result.item as usize)?;

        Some(SpatialMatch {
            id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Einträge innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let id = *self.ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
