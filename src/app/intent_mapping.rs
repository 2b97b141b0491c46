//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::DrawMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::InstrumentKind;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // === Datei & Anwendung ===
        AppIntent::OpenChartRequested => vec![AppCommand::RequestOpenChartDialog],
        AppIntent::ChartFileSelected { path } => vec![AppCommand::LoadChart { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        // === Kamera & Viewport ===
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            notches,
            focus_world,
        } => scroll_zoom(state, notches, focus_world),
        AppIntent::PointerMoved { world_pos } => {
            let mut commands = vec![AppCommand::SetCursorWorld { world_pos }];
            if let Some(world_pos) = world_pos {
                if state.editor.mode != DrawMode::Pan {
                    commands.push(AppCommand::ToolHover { world_pos });
                }
            }
            commands
        }

        // === Zeichnen ===
        AppIntent::DrawModeSelected { mode } => {
            let mode = if state.editor.mode == mode {
                DrawMode::Pan
            } else {
                mode
            };
            vec![AppCommand::SetDrawMode { mode }]
        }
        AppIntent::EscapePressed => {
            if state.editor.pending_text.is_some() {
                vec![
                    AppCommand::CancelTextEntry,
                    AppCommand::SetDrawMode {
                        mode: DrawMode::Pan,
                    },
                ]
            } else if state.editor.mode != DrawMode::Pan || state.editor.has_pending_input() {
                vec![AppCommand::SetDrawMode {
                    mode: DrawMode::Pan,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::SecondaryPressed { world_pos } => {
            gesture(state, AppCommand::ToolPress { world_pos })
        }
        AppIntent::SecondaryDragged { world_pos } => {
            gesture(state, AppCommand::ToolDrag { world_pos })
        }
        AppIntent::SecondaryReleased { world_pos } => {
            gesture(state, AppCommand::ToolRelease { world_pos })
        }
        AppIntent::TextEntryConfirmed { text } => vec![AppCommand::ConfirmTextEntry { text }],
        AppIntent::TextEntryCancelled => vec![AppCommand::CancelTextEntry],
        AppIntent::LineColorChanged { color } => vec![AppCommand::SetLineColor { color }],
        AppIntent::PointColorChanged { color } => vec![AppCommand::SetPointColor { color }],
        AppIntent::ClearAnnotationsRequested => vec![AppCommand::ClearAnnotations],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        // === Instrumente ===
        AppIntent::InstrumentToggled { kind, visible } => {
            vec![AppCommand::ToggleInstrument { kind, visible }]
        }
        AppIntent::InstrumentDragStarted { kind } => {
            vec![AppCommand::SetInstrumentDrag { kind: Some(kind) }]
        }
        AppIntent::InstrumentDragged { kind, delta_screen } => {
            vec![AppCommand::MoveInstrument { kind, delta_screen }]
        }
        AppIntent::InstrumentDragEnded => vec![AppCommand::SetInstrumentDrag { kind: None }],
        AppIntent::InstrumentWheel {
            kind,
            notches,
            shift,
            ctrl,
            over_hinge,
            focus_world,
        } => {
            if shift {
                vec![AppCommand::RotateInstrument {
                    kind,
                    degrees: notches * state.options.rotation_deg_per_notch,
                }]
            } else if kind == InstrumentKind::Compass && (ctrl || over_hinge) {
                let steps = notches.round() as i32;
                if steps == 0 {
                    vec![]
                } else {
                    vec![AppCommand::AdjustCompassOpening { steps }]
                }
            } else {
                scroll_zoom(state, notches, focus_world)
            }
        }

        // === Benutzerkonto ===
        AppIntent::UserMenuRequested => {
            if state.account.is_logged_in() {
                vec![AppCommand::OpenProfileDialog]
            } else {
                vec![AppCommand::OpenLoginDialog]
            }
        }
        AppIntent::LoginSubmitted { nick, password } => {
            vec![AppCommand::Login { nick, password }]
        }
        AppIntent::LoginCancelled => vec![AppCommand::CloseLoginDialog],
        AppIntent::RegisterRequested => vec![AppCommand::OpenRegisterDialog],
        AppIntent::RegisterSubmitted { form } => vec![AppCommand::Register { form }],
        AppIntent::RegisterCancelled => vec![AppCommand::CloseRegisterDialog],
        AppIntent::ProfileSaveRequested { form } => vec![AppCommand::UpdateProfile { form }],
        AppIntent::ProfileClosed => vec![AppCommand::CloseProfileDialog],
        AppIntent::LogoutRequested => logged_in(state, AppCommand::Logout),

        // === Statistik & Fragen ===
        AppIntent::HistoryRequested => logged_in(state, AppCommand::OpenHistory),
        AppIntent::HistoryClosed => vec![AppCommand::CloseHistory],
        AppIntent::QuestionBankRequested => logged_in(state, AppCommand::OpenQuestionBank),
        AppIntent::QuestionBankClosed => vec![AppCommand::CloseQuestionBank],
        AppIntent::ImportProblemsRequested => vec![AppCommand::RequestImportProblemsDialog],
        AppIntent::ProblemsFileSelected { path } => vec![AppCommand::ImportProblems { path }],
        AppIntent::ProblemOpenRequested { index } => {
            if state.account.is_logged_in() {
                vec![AppCommand::CloseQuestionBank, AppCommand::OpenProblem { index }]
            } else {
                vec![]
            }
        }
        AppIntent::ProblemCheckRequested { selected } => {
            vec![AppCommand::CheckAnswer { selected }]
        }
        AppIntent::ProblemNextRequested => vec![AppCommand::NextProblem],
        AppIntent::ProblemCollapseToggled => vec![AppCommand::ToggleProblemCollapsed],
        AppIntent::ProblemClosed => vec![AppCommand::CloseProblem],

        // === Hilfe, Meldungen, Optionen ===
        AppIntent::HelpRequested => vec![AppCommand::OpenHelp],
        AppIntent::HelpClosed => vec![AppCommand::CloseHelp],
        AppIntent::MessageDismissed => vec![AppCommand::DismissMessage],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Mausrad-Zoom: `scroll_zoom_step ^ notches`, anker unter der Maus.
fn scroll_zoom(
    state: &AppState,
    notches: f32,
    focus_world: Option<glam::Vec2>,
) -> Vec<AppCommand> {
    if notches == 0.0 {
        return vec![];
    }
    vec![AppCommand::ZoomCamera {
        factor: state.options.camera_scroll_zoom_step.powf(notches),
        focus_world,
    }]
}

/// Rechte-Taste-Gesten gehen nur im Zeichen-Modus ohne offene Text-Eingabe
/// an das Werkzeug.
fn gesture(state: &AppState, command: AppCommand) -> Vec<AppCommand> {
    if state.editor.mode == DrawMode::Pan || state.editor.pending_text.is_some() {
        vec![]
    } else {
        vec![command]
    }
}

fn logged_in(state: &AppState, command: AppCommand) -> Vec<AppCommand> {
    if state.account.is_logged_in() {
        vec![command]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests;
