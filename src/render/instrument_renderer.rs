//! Zeichnet Geodreieck, Lineal und Zirkel als gedrehte, texturierte Quads.

use egui::epaint::{Mesh, Vertex};
use egui::{Color32, Shape, Stroke};
use glam::Vec2;

use super::{rasterize_svg, ViewTransform};
use crate::app::use_cases::instruments::pivot_screen;
use crate::app::AppState;
use crate::core::instrument::COMPASS_HINGE_PICK_RADIUS;
use crate::core::{Instrument, InstrumentKind};

const PROTRACTOR_SVG: &[u8] = include_bytes!("../../assets/protractor.svg");
const RULER_SVG: &[u8] = include_bytes!("../../assets/ruler.svg");
const COMPASS_LEG_SVG: &[u8] = include_bytes!("../../assets/compass_leg.svg");

/// Überabtastung beim Rastern, damit vergrößerte Instrumente scharf bleiben.
const RASTER_SCALE: f32 = 2.0;
const OUTLINE_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
const HINGE_COLOR: Color32 = Color32::from_rgb(70, 70, 70);

/// Texturen werden beim ersten Zeichnen gerastert; ein Fehlschlag wird
/// gemerkt und das Instrument nur als Umriss gezeichnet.
#[derive(Default)]
pub(super) struct InstrumentRenderer {
    textures: [Option<Option<egui::TextureHandle>>; 3],
}

impl InstrumentRenderer {
    pub(super) fn paint(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        view: &ViewTransform,
        state: &AppState,
    ) {
        for instrument in state.editor.instruments.visible() {
            let pivot = pivot_screen(state, instrument);
            let texture = self.texture(ctx, instrument.kind);
            match &instrument.compass {
                Some(geometry) => {
                    for leg in geometry.legs() {
                        let corners = to_screen(instrument, view, pivot, leg);
                        paint_quad(painter, texture, corners);
                    }
                    let hinge = view.local_to_screen(pivot);
                    painter.circle_filled(
                        hinge,
                        COMPASS_HINGE_PICK_RADIUS * 0.5 * instrument.scale,
                        HINGE_COLOR,
                    );
                }
                None => {
                    let corners = instrument
                        .quad_screen(pivot)
                        .map(|p| view.local_to_screen(p));
                    paint_quad(painter, texture, corners);
                }
            }
        }
    }

    fn texture(&mut self, ctx: &egui::Context, kind: InstrumentKind) -> Option<egui::TextureId> {
        self.textures[kind.index()]
            .get_or_insert_with(|| load_texture(ctx, kind))
            .as_ref()
            .map(|texture| texture.id())
    }
}

fn load_texture(ctx: &egui::Context, kind: InstrumentKind) -> Option<egui::TextureHandle> {
    let svg = match kind {
        InstrumentKind::Protractor => PROTRACTOR_SVG,
        InstrumentKind::Ruler => RULER_SVG,
        InstrumentKind::Compass => COMPASS_LEG_SVG,
    };
    match rasterize_svg(svg, RASTER_SCALE) {
        Ok(image) => {
            log::debug!("{}-Textur gerastert: {:?}", kind.label(), image.size);
            Some(ctx.load_texture(
                format!("instrument_{}", kind.index()),
                image,
                egui::TextureOptions::LINEAR,
            ))
        }
        Err(e) => {
            log::warn!("{}-Grafik nicht verfügbar: {:#}", kind.label(), e);
            None
        }
    }
}

fn to_screen(
    instrument: &Instrument,
    view: &ViewTransform,
    pivot: Vec2,
    local: [Vec2; 4],
) -> [egui::Pos2; 4] {
    local.map(|p| view.local_to_screen(instrument.local_to_screen(p, pivot)))
}

/// Quad mit Ecken im Uhrzeigersinn ab oben links.
fn paint_quad(painter: &egui::Painter, texture: Option<egui::TextureId>, corners: [egui::Pos2; 4]) {
    let Some(texture) = texture else {
        painter.add(Shape::closed_line(
            corners.to_vec(),
            Stroke::new(1.5, OUTLINE_COLOR),
        ));
        return;
    };

    let uvs = [
        egui::pos2(0.0, 0.0),
        egui::pos2(1.0, 0.0),
        egui::pos2(1.0, 1.0),
        egui::pos2(0.0, 1.0),
    ];
    let mut mesh = Mesh::with_texture(texture);
    for (pos, uv) in corners.into_iter().zip(uvs) {
        mesh.vertices.push(Vertex {
            pos,
            uv,
            color: Color32::WHITE,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}
