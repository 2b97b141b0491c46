//! Zeichnet Annotationen und die Vorschau der laufenden Geste.

use egui::{Align2, Color32, FontId, Shape, Stroke};
use glam::Vec2;

use super::{color32, ViewTransform};
use crate::app::tools::{PreviewShape, ToolPreview};
use crate::core::{AnnotationKind, AnnotationStore, ArcShape};

/// Maximale Winkel-Schrittweite beim Abtasten von Bögen (Radiant).
const ARC_SAMPLE_STEP: f32 = 0.03;
const GUIDE_COLOR: Color32 = Color32::from_rgb(90, 90, 90);
const MARKER_RADIUS_PX: f32 = 5.0;

#[derive(Debug, Default)]
pub(super) struct AnnotationRenderer;

impl AnnotationRenderer {
    /// Zeichnet alle Annotationen in Einfüge-Reihenfolge.
    pub(super) fn paint(
        &self,
        painter: &egui::Painter,
        view: &ViewTransform,
        store: &AnnotationStore,
    ) {
        let point_color = color32(store.point_color());
        for annotation in store.iter() {
            match &annotation.kind {
                AnnotationKind::Point { pos, radius } => {
                    painter.circle_filled(
                        view.world_to_screen(*pos),
                        view.scale(*radius).max(1.0),
                        point_color,
                    );
                }
                AnnotationKind::Line {
                    start,
                    end,
                    color,
                    width,
                } => paint_line(painter, view, *start, *end, color32(*color), *width),
                AnnotationKind::Arc {
                    shape,
                    color,
                    width,
                } => paint_arc(painter, view, shape, color32(*color), *width),
                AnnotationKind::Text {
                    pos,
                    text,
                    color,
                    size,
                } => {
                    painter.text(
                        view.world_to_screen(*pos),
                        Align2::LEFT_TOP,
                        text,
                        FontId::proportional(view.scale(*size).max(1.0)),
                        color32(*color),
                    );
                }
            }
        }
    }

    /// Zeichnet die Vorschau des aktiven Werkzeugs.
    pub(super) fn paint_preview(
        &self,
        painter: &egui::Painter,
        view: &ViewTransform,
        preview: &ToolPreview,
    ) {
        for shape in &preview.shapes {
            match shape {
                PreviewShape::Line {
                    start,
                    end,
                    color,
                    width,
                } => paint_line(painter, view, *start, *end, color32(*color), *width),
                PreviewShape::Arc {
                    shape,
                    color,
                    width,
                } => paint_arc(painter, view, shape, color32(*color), *width),
                PreviewShape::Guide { from, to } => {
                    painter.extend(Shape::dashed_line(
                        &[view.world_to_screen(*from), view.world_to_screen(*to)],
                        Stroke::new(1.0, GUIDE_COLOR),
                        6.0,
                        4.0,
                    ));
                }
                PreviewShape::Marker { pos } => {
                    painter.circle_stroke(
                        view.world_to_screen(*pos),
                        MARKER_RADIUS_PX,
                        Stroke::new(1.5, GUIDE_COLOR),
                    );
                }
            }
        }
    }
}

/// Linie mit runden Enden.
fn paint_line(
    painter: &egui::Painter,
    view: &ViewTransform,
    start: Vec2,
    end: Vec2,
    color: Color32,
    width: f32,
) {
    let width_px = view.scale(width).max(1.0);
    let a = view.world_to_screen(start);
    let b = view.world_to_screen(end);
    painter.line_segment([a, b], Stroke::new(width_px, color));
    painter.circle_filled(a, width_px * 0.5, color);
    painter.circle_filled(b, width_px * 0.5, color);
}

fn paint_arc(
    painter: &egui::Painter,
    view: &ViewTransform,
    shape: &ArcShape,
    color: Color32,
    width: f32,
) {
    let points: Vec<egui::Pos2> = shape
        .sample_points(ARC_SAMPLE_STEP)
        .into_iter()
        .map(|p| view.world_to_screen(p))
        .collect();
    if points.len() < 2 {
        return;
    }
    painter.add(Shape::line(points, Stroke::new(view.scale(width).max(1.0), color)));
}
