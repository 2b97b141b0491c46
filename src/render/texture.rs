//! Textur-Utilities: Karten-Kacheln und SVG-Rasterung.

use anyhow::{Context, Result};
use glam::Vec2;

use super::ViewTransform;
use crate::core::ChartImage;

/// Kantenlänge einer Karten-Kachel; hält jede Textur unter GPU-Limits.
pub const CHART_TILE_SIZE: u32 = 2048;

/// sRGB-Farbe mit Kanälen in `[0, 1]` → `Color32`.
pub fn color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

struct ChartTile {
    texture: egui::TextureHandle,
    world_min: Vec2,
    world_max: Vec2,
}

/// Auf die GPU geladene Seekarte, in Kacheln zerlegt.
pub struct ChartTexture {
    tiles: Vec<ChartTile>,
}

impl ChartTexture {
    /// Lädt die Karte kachelweise als egui-Texturen hoch.
    pub fn upload(ctx: &egui::Context, chart: &ChartImage) -> Self {
        let pixels = chart.pixels();
        let (width, height) = pixels.dimensions();
        let mut tiles = Vec::new();

        for y in (0..height).step_by(CHART_TILE_SIZE as usize) {
            for x in (0..width).step_by(CHART_TILE_SIZE as usize) {
                let tile_w = CHART_TILE_SIZE.min(width - x);
                let tile_h = CHART_TILE_SIZE.min(height - y);
                let view = image::imageops::crop_imm(pixels, x, y, tile_w, tile_h).to_image();
                let color = egui::ColorImage::from_rgba_unmultiplied(
                    [tile_w as usize, tile_h as usize],
                    view.as_raw(),
                );
                let texture = ctx.load_texture(
                    format!("chart_{}_{}", x, y),
                    color,
                    egui::TextureOptions::LINEAR,
                );
                tiles.push(ChartTile {
                    texture,
                    world_min: Vec2::new(x as f32, y as f32),
                    world_max: Vec2::new((x + tile_w) as f32, (y + tile_h) as f32),
                });
            }
        }

        log::debug!(
            "Karten-Textur: {}x{} Pixel in {} Kacheln",
            width,
            height,
            tiles.len()
        );
        Self { tiles }
    }

    /// Zeichnet alle sichtbaren Kacheln.
    pub(super) fn paint(&self, painter: &egui::Painter, view: &ViewTransform) {
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        for tile in &self.tiles {
            let screen = egui::Rect::from_min_max(
                view.world_to_screen(tile.world_min),
                view.world_to_screen(tile.world_max),
            );
            if !screen.intersects(view.rect) {
                continue;
            }
            painter.image(tile.texture.id(), screen, uv, egui::Color32::WHITE);
        }
    }
}

/// Rastert ein SVG mit Skalierung `scale` in ein egui-Bild.
pub fn rasterize_svg(data: &[u8], scale: f32) -> Result<egui::ColorImage> {
    let tree = resvg::usvg::Tree::from_data(data, &resvg::usvg::Options::default())
        .context("SVG konnte nicht gelesen werden")?;
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("Pixmap {}x{} konnte nicht angelegt werden", width, height))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(egui::ColorImage::from_rgba_premultiplied(
        [width as usize, height as usize],
        pixmap.data(),
    ))
}
