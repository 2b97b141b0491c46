//! Avatar-Bilder: Laden aus Dateien und Ablage als PNG.

use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use super::error::NavResult;

/// Maximale Kantenlänge gespeicherter Avatare.
pub const AVATAR_MAX_EDGE: u32 = 128;

/// Lädt ein beliebiges Bild, verkleinert es und kodiert es als PNG.
pub fn avatar_png_from_file(path: &Path) -> NavResult<Vec<u8>> {
    let image = image::open(path)?;
    let thumbnail = image.thumbnail(AVATAR_MAX_EDGE, AVATAR_MAX_EDGE);
    let mut bytes = Vec::new();
    thumbnail.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!(
        "Avatar geladen: {} ({} Bytes PNG)",
        path.display(),
        bytes.len()
    );
    Ok(bytes)
}

/// Dekodiert einen gespeicherten PNG-Avatar.
pub fn decode_avatar(png: &[u8]) -> NavResult<RgbaImage> {
    Ok(image::load_from_memory_with_format(png, ImageFormat::Png)?.to_rgba8())
}
