use carta_nautica::{AnnotationKind, AppController, AppIntent, AppState, DrawMode};
use glam::Vec2;

fn select(controller: &mut AppController, state: &mut AppState, mode: DrawMode) {
    controller
        .handle_intent(state, AppIntent::DrawModeSelected { mode })
        .expect("Moduswahl sollte ohne Fehler durchlaufen");
}

fn right_click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::SecondaryPressed { world_pos: pos })
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(state, AppIntent::SecondaryReleased { world_pos: pos })
        .expect("SecondaryReleased sollte ohne Fehler durchlaufen");
}

#[test]
fn test_right_click_in_pan_mode_adds_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    right_click(&mut controller, &mut state, Vec2::new(10.0, 10.0));

    assert!(state.annotations.is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_point_mode_places_numbered_points_with_shared_color() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select(&mut controller, &mut state, DrawMode::Point);

    right_click(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    right_click(&mut controller, &mut state, Vec2::new(300.0, 100.0));

    assert_eq!(state.annotations.point_count(), 2);

    let color = [0.0, 1.0, 0.0, 1.0];
    controller
        .handle_intent(&mut state, AppIntent::PointColorChanged { color })
        .expect("PointColorChanged sollte ohne Fehler durchlaufen");
    assert_eq!(state.annotations.point_color(), color);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_ne!(state.annotations.point_color(), color);
    assert_eq!(state.annotations.point_count(), 2);
}

#[test]
fn test_line_gesture_commits_on_release_with_current_color() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let color = [0.2, 0.4, 0.6, 1.0];
    controller
        .handle_intent(&mut state, AppIntent::LineColorChanged { color })
        .expect("LineColorChanged sollte ohne Fehler durchlaufen");
    select(&mut controller, &mut state, DrawMode::Line);

    for intent in [
        AppIntent::SecondaryPressed {
            world_pos: Vec2::new(0.0, 0.0),
        },
        AppIntent::SecondaryDragged {
            world_pos: Vec2::new(50.0, 0.0),
        },
        AppIntent::SecondaryReleased {
            world_pos: Vec2::new(100.0, 0.0),
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Linien-Geste sollte ohne Fehler durchlaufen");
    }

    let line = state
        .annotations
        .iter()
        .next()
        .expect("Eine Linie sollte existieren");
    match &line.kind {
        AnnotationKind::Line {
            start,
            end,
            color: line_color,
            ..
        } => {
            assert_eq!(*start, Vec2::ZERO);
            assert_eq!(*end, Vec2::new(100.0, 0.0));
            assert_eq!(*line_color, color);
        }
        other => panic!("Linie erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_escape_aborts_line_and_returns_to_pan() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select(&mut controller, &mut state, DrawMode::Line);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryPressed {
                world_pos: Vec2::ZERO,
            },
        )
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::EscapePressed)
        .expect("EscapePressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryReleased {
                world_pos: Vec2::new(200.0, 0.0),
            },
        )
        .expect("SecondaryReleased sollte ohne Fehler durchlaufen");

    assert_eq!(state.editor.mode, DrawMode::Pan);
    assert!(state.annotations.is_empty());
}

#[test]
fn test_arc_needs_three_clicks() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select(&mut controller, &mut state, DrawMode::Arc);

    right_click(&mut controller, &mut state, Vec2::ZERO);
    right_click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    assert!(state.annotations.is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Some(Vec2::new(70.0, 70.0)),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    right_click(&mut controller, &mut state, Vec2::new(0.0, 100.0));

    assert_eq!(state.annotations.len(), 1);
    let arc = state.annotations.iter().next().expect("Bogen erwartet");
    match &arc.kind {
        AnnotationKind::Arc { shape, .. } => {
            approx::assert_relative_eq!(shape.radius, 100.0, epsilon = 1e-3);
            approx::assert_relative_eq!(
                shape.sweep,
                std::f32::consts::FRAC_PI_2,
                epsilon = 1e-3
            );
        }
        other => panic!("Bogen erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_text_entry_confirm_and_cancel() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select(&mut controller, &mut state, DrawMode::Text);

    right_click(&mut controller, &mut state, Vec2::new(40.0, 60.0));
    assert!(state.editor.pending_text.is_some());

    // Weitere Klicks werden ignoriert, solange die Eingabe offen ist
    right_click(&mut controller, &mut state, Vec2::new(400.0, 600.0));
    assert_eq!(
        state.editor.pending_text.as_ref().map(|entry| entry.pos),
        Some(Vec2::new(40.0, 60.0))
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::TextEntryConfirmed {
                text: "  Cabo Trafalgar ".into(),
            },
        )
        .expect("TextEntryConfirmed sollte ohne Fehler durchlaufen");
    assert!(state.editor.pending_text.is_none());
    let text = state.annotations.iter().next().expect("Text erwartet");
    match &text.kind {
        AnnotationKind::Text { text, pos, .. } => {
            assert_eq!(text, "Cabo Trafalgar");
            assert_eq!(*pos, Vec2::new(40.0, 60.0));
        }
        other => panic!("Text erwartet, erhalten: {other:?}"),
    }

    right_click(&mut controller, &mut state, Vec2::new(10.0, 10.0));
    controller
        .handle_intent(&mut state, AppIntent::TextEntryCancelled)
        .expect("TextEntryCancelled sollte ohne Fehler durchlaufen");
    assert!(state.editor.pending_text.is_none());
    assert_eq!(state.annotations.len(), 1);
}

#[test]
fn test_eraser_drag_removes_touched_marks() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select(&mut controller, &mut state, DrawMode::Point);
    right_click(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    right_click(&mut controller, &mut state, Vec2::new(500.0, 0.0));
    right_click(&mut controller, &mut state, Vec2::new(0.0, 500.0));

    select(&mut controller, &mut state, DrawMode::Eraser);
    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryPressed {
                world_pos: Vec2::new(0.0, 0.0),
            },
        )
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryDragged {
                world_pos: Vec2::new(500.0, 0.0),
            },
        )
        .expect("SecondaryDragged sollte ohne Fehler durchlaufen");

    assert_eq!(state.annotations.len(), 1);
}

#[test]
fn test_clear_is_undoable_and_resets_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select(&mut controller, &mut state, DrawMode::Point);
    right_click(&mut controller, &mut state, Vec2::new(5.0, 5.0));

    controller
        .handle_intent(&mut state, AppIntent::ClearAnnotationsRequested)
        .expect("ClearAnnotationsRequested sollte ohne Fehler durchlaufen");
    assert!(state.annotations.is_empty());
    assert_eq!(state.editor.mode, DrawMode::Pan);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.annotations.len(), 1);

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    assert!(state.annotations.is_empty());
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(state.ui.messages.is_empty());
}
