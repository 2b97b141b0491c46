//! Use-Case: Seekarte laden.

use crate::app::AppState;
use crate::core::ChartImage;
use anyhow::Context;
use std::sync::Arc;

/// Fordert den Seekarten-Dialog an.
pub fn request_open_dialog(state: &mut AppState) {
    state.ui.show_chart_dialog = true;
}

/// Lädt eine Seekarte und zentriert die Ansicht darauf.
///
/// Bei einem Fehler bleibt die bisherige Karte erhalten.
pub fn load_chart(state: &mut AppState, path: String) -> anyhow::Result<()> {
    log::info!("Lade Seekarte: {}", path);
    let chart = ChartImage::load_from_file(&path)
        .with_context(|| format!("Seekarte konnte nicht geladen werden: {}", path))?;
    state.view.chart = Some(Arc::new(chart));
    state.view.chart_dirty = true;
    state.options.last_chart_path = Some(path);
    super::camera::reset_view(state);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_keeps_previous_chart() {
        let mut state = AppState::new();
        let previous = Arc::new(ChartImage::from_rgba(
            "alt.png",
            image::RgbaImage::new(4, 4),
        ));
        state.view.chart = Some(Arc::clone(&previous));

        let result = load_chart(&mut state, "/gibt/es/nicht.png".into());

        assert!(result.is_err());
        let kept = state.view.chart.as_ref().expect("alte Karte bleibt");
        assert_eq!(kept.path(), "alt.png");
        assert!(state.options.last_chart_path.is_none());
    }

    #[test]
    fn loaded_chart_centers_camera() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("karte.png");
        image::RgbaImage::new(200, 100)
            .save(&path)
            .expect("PNG schreiben");

        let mut state = AppState::new();
        load_chart(&mut state, path.to_string_lossy().into_owned()).expect("Karte laden");

        assert!(state.view.chart_dirty);
        assert_eq!(state.view.camera.position, glam::Vec2::new(100.0, 50.0));
        assert!(state.options.last_chart_path.is_some());
    }
}
