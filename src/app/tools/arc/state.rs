//! State-Definitionen für das Bogen-Werkzeug.

use crate::core::ArcShape;
use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Phasen des Bogen-Werkzeugs
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Phase {
    /// Mittelpunkt wählen
    Center,
    /// Radius wählen (Mitte gesetzt)
    Radius {
        /// Mittelpunkt
        center: Vec2,
    },
    /// Überstreichwinkel wählen
    Sweep {
        /// Bisherige Geometrie
        shape: ArcShape,
        /// Winkel der letzten Mausposition (für inkrementelle Akkumulation)
        last_angle: f32,
    },
}

/// Kreisbogen-Werkzeug
#[derive(Debug)]
pub struct ArcTool {
    pub(crate) phase: Phase,
    /// Letzte Cursor-Position (für Radius-Vorschau)
    pub(crate) cursor: Option<Vec2>,
}

impl Default for ArcTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcTool {
    /// Erstellt das Werkzeug in der Mitte-Phase.
    pub fn new() -> Self {
        Self {
            phase: Phase::Center,
            cursor: None,
        }
    }

    /// Aktualisiert den Überstreichwinkel anhand der Mausposition.
    ///
    /// Der Winkel wächst um die kleinste Differenz zur letzten Position und
    /// bleibt auf ±360° begrenzt.
    pub(crate) fn track_sweep(&mut self, pos: Vec2) {
        if let Phase::Sweep { shape, last_angle } = &mut self.phase {
            let offset = pos - shape.center;
            if offset.length_squared() <= f32::EPSILON {
                return;
            }
            let angle = offset.y.atan2(offset.x);
            let delta = wrap_angle(angle - *last_angle);
            shape.sweep = (shape.sweep + delta).clamp(-TAU, TAU);
            *last_angle = angle;
        }
    }
}

/// Normalisiert einen Winkel auf `(-π, π]`.
pub(crate) fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
