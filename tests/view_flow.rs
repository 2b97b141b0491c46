use approx::assert_relative_eq;
use carta_nautica::{AppController, AppIntent, AppState, ChartOptions};
use glam::Vec2;

fn write_chart(dir: &tempfile::TempDir, width: u32, height: u32) -> String {
    let path = dir.path().join("estrecho.png");
    image::RgbaImage::from_pixel(width, height, image::Rgba([200, 220, 255, 255]))
        .save(&path)
        .expect("PNG schreiben");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_chart_selection_loads_and_centers_view() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = write_chart(&dir, 400, 300);
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ChartFileSelected { path: path.clone() })
        .expect("Karte sollte laden");

    assert!(state.view.chart_dirty);
    assert_eq!(state.view.camera.position, Vec2::new(200.0, 150.0));
    assert_eq!(state.options.last_chart_path.as_deref(), Some(path.as_str()));
}

#[test]
fn test_missing_chart_is_reported_as_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ChartFileSelected {
            path: "/nicht/vorhanden.png".into(),
        },
    );

    assert!(result.is_err());
    assert!(state.view.chart.is_none());
}

#[test]
fn test_open_chart_request_sets_dialog_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenChartRequested)
        .expect("OpenChartRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_chart_dialog);
}

#[test]
fn test_wheel_zoom_keeps_focus_and_respects_limits() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    let focus = Vec2::new(500.0, 300.0);
    let viewport = Vec2::new(800.0, 600.0);
    let before = state.view.camera.world_to_screen(focus, viewport);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraZoom {
                notches: 2.0,
                focus_world: Some(focus),
            },
        )
        .expect("Zoom sollte ohne Fehler durchlaufen");

    let options = ChartOptions::default();
    assert_relative_eq!(
        state.view.camera.zoom,
        options.camera_zoom_default * options.camera_scroll_zoom_step.powi(2),
        epsilon = 1e-5
    );
    let after = state.view.camera.world_to_screen(focus, viewport);
    assert_relative_eq!(before.x, after.x, epsilon = 1e-2);
    assert_relative_eq!(before.y, after.y, epsilon = 1e-2);

    for _ in 0..50 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .expect("ZoomIn sollte ohne Fehler durchlaufen");
    }
    assert_relative_eq!(state.view.camera.zoom, options.camera_zoom_max);
}

#[test]
fn test_reset_view_restores_start_zoom() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::ZoomOutRequested)
        .expect("ZoomOut sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(30.0, -10.0),
            },
        )
        .expect("Pan sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert_relative_eq!(
        state.view.camera.zoom,
        ChartOptions::default().camera_zoom_default
    );
    assert_eq!(state.view.camera.position, Vec2::ZERO);
}

#[test]
fn test_pointer_moved_updates_status_cursor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Some(Vec2::new(12.0, 34.0)),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    assert_eq!(state.view.cursor_world, Some(Vec2::new(12.0, 34.0)));

    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { world_pos: None })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    assert_eq!(state.view.cursor_world, None);
}

#[test]
fn test_help_opens_bundled_text_and_closes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::HelpRequested)
        .expect("HelpRequested sollte ohne Fehler durchlaufen");
    assert!(state.ui.help_text.is_some());

    controller
        .handle_intent(&mut state, AppIntent::HelpClosed)
        .expect("HelpClosed sollte ohne Fehler durchlaufen");
    assert!(state.ui.help_text.is_none());
}

#[test]
fn test_messages_are_shown_in_order() {
    let mut state = AppState::new();
    let mut controller = AppController::new();
    state
        .ui
        .push_message(carta_nautica::app::MessageLevel::Warning, "erste");
    state
        .ui
        .push_message(carta_nautica::app::MessageLevel::Info, "zweite");

    controller
        .handle_intent(&mut state, AppIntent::MessageDismissed)
        .expect("MessageDismissed sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.ui.current_message().map(|m| m.text.as_str()),
        Some("zweite")
    );
}
