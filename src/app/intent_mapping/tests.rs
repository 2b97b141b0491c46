use crate::app::state::{DrawMode, PendingTextEntry};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::InstrumentKind;
use approx::assert_relative_eq;
use glam::Vec2;

use super::map_intent_to_commands;

fn wheel(kind: InstrumentKind, shift: bool, ctrl: bool, over_hinge: bool) -> AppIntent {
    AppIntent::InstrumentWheel {
        kind,
        notches: 2.0,
        shift,
        ctrl,
        over_hinge,
        focus_world: Some(Vec2::ZERO),
    }
}

#[test]
fn selecting_active_mode_returns_to_pan() {
    let mut state = AppState::new();
    state.editor.mode = DrawMode::Line;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DrawModeSelected {
            mode: DrawMode::Line,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetDrawMode {
            mode: DrawMode::Pan
        }
    ));
}

#[test]
fn selecting_other_mode_switches() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DrawModeSelected {
            mode: DrawMode::Eraser,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::SetDrawMode {
            mode: DrawMode::Eraser
        }
    ));
}

#[test]
fn escape_in_pan_without_gesture_does_nothing() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::EscapePressed).is_empty());
}

#[test]
fn escape_cancels_text_entry_first() {
    let mut state = AppState::new();
    state.editor.mode = DrawMode::Text;
    state.editor.pending_text = Some(PendingTextEntry {
        pos: Vec2::ZERO,
        text: String::new(),
    });

    let commands = map_intent_to_commands(&state, AppIntent::EscapePressed);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CancelTextEntry));
    assert!(matches!(
        commands[1],
        AppCommand::SetDrawMode {
            mode: DrawMode::Pan
        }
    ));
}

#[test]
fn secondary_press_in_pan_mode_is_ignored() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::SecondaryPressed {
            world_pos: Vec2::ONE,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn pointer_move_feeds_active_tool() {
    let mut state = AppState::new();
    state.editor.mode = DrawMode::Arc;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            world_pos: Some(Vec2::ONE),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[1], AppCommand::ToolHover { .. }));
}

#[test]
fn shift_wheel_rotates_by_one_and_a_half_degrees_per_notch() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, wheel(InstrumentKind::Ruler, true, false, false));

    match commands.as_slice() {
        [AppCommand::RotateInstrument { kind, degrees }] => {
            assert_eq!(*kind, InstrumentKind::Ruler);
            assert_relative_eq!(*degrees, 3.0);
        }
        other => panic!("Drehung erwartet, erhalten: {:?}", other),
    }
}

#[test]
fn ctrl_wheel_or_hinge_adjusts_compass() {
    let state = AppState::new();

    for intent in [
        wheel(InstrumentKind::Compass, false, true, false),
        wheel(InstrumentKind::Compass, false, false, true),
    ] {
        let commands = map_intent_to_commands(&state, intent);
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::AdjustCompassOpening { steps: 2 }]
        ));
    }
}

#[test]
fn plain_wheel_over_ruler_zooms_chart() {
    let state = AppState::new();

    let commands =
        map_intent_to_commands(&state, wheel(InstrumentKind::Ruler, false, true, false));

    assert!(matches!(commands.as_slice(), [AppCommand::ZoomCamera { .. }]));
}

#[test]
fn history_requires_login() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::HistoryRequested).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::QuestionBankRequested).is_empty());
}

#[test]
fn user_menu_opens_login_when_logged_out() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::UserMenuRequested);
    assert!(matches!(commands.as_slice(), [AppCommand::OpenLoginDialog]));
}
