//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Datei & Anwendung ===
            AppCommand::RequestOpenChartDialog => handlers::view::request_open_chart(state),
            AppCommand::LoadChart { path } => handlers::view::load_chart(state, path)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state)?,

            // === Kamera & Viewport ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::SetCursorWorld { world_pos } => handlers::view::set_cursor(state, world_pos),

            // === Zeichnen ===
            AppCommand::SetDrawMode { mode } => handlers::drawing::set_mode(state, mode),
            AppCommand::ToolPress { world_pos } => handlers::drawing::press(state, world_pos),
            AppCommand::ToolDrag { world_pos } => handlers::drawing::drag(state, world_pos),
            AppCommand::ToolRelease { world_pos } => handlers::drawing::release(state, world_pos),
            AppCommand::ToolHover { world_pos } => handlers::drawing::hover(state, world_pos),
            AppCommand::ConfirmTextEntry { text } => handlers::drawing::confirm_text(state, &text),
            AppCommand::CancelTextEntry => handlers::drawing::cancel_text(state),
            AppCommand::SetLineColor { color } => handlers::drawing::set_line_color(state, color),
            AppCommand::SetPointColor { color } => handlers::drawing::set_point_color(state, color),
            AppCommand::ClearAnnotations => handlers::drawing::clear(state),
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Instrumente ===
            AppCommand::ToggleInstrument { kind, visible } => {
                handlers::instruments::toggle(state, kind, visible)
            }
            AppCommand::SetInstrumentDrag { kind } => handlers::instruments::set_drag(state, kind),
            AppCommand::MoveInstrument { kind, delta_screen } => {
                handlers::instruments::move_by(state, kind, delta_screen)
            }
            AppCommand::RotateInstrument { kind, degrees } => {
                handlers::instruments::rotate(state, kind, degrees)
            }
            AppCommand::AdjustCompassOpening { steps } => {
                handlers::instruments::adjust_opening(state, steps)
            }

            // === Benutzerkonto ===
            AppCommand::OpenLoginDialog => handlers::account::open_login(state),
            AppCommand::CloseLoginDialog => handlers::account::close_login(state),
            AppCommand::Login { nick, password } => {
                handlers::account::login(state, &nick, &password)?
            }
            AppCommand::OpenRegisterDialog => handlers::account::open_register(state),
            AppCommand::CloseRegisterDialog => handlers::account::close_register(state),
            AppCommand::Register { form } => handlers::account::register(state, form)?,
            AppCommand::OpenProfileDialog => handlers::account::open_profile(state),
            AppCommand::CloseProfileDialog => handlers::account::close_profile(state),
            AppCommand::UpdateProfile { form } => handlers::account::update_profile(state, form)?,
            AppCommand::Logout => handlers::account::logout(state)?,

            // === Statistik & Fragen ===
            AppCommand::OpenHistory => handlers::quiz::open_history(state),
            AppCommand::CloseHistory => handlers::quiz::close_history(state),
            AppCommand::OpenQuestionBank => handlers::quiz::open_question_bank(state),
            AppCommand::CloseQuestionBank => handlers::quiz::close_question_bank(state),
            AppCommand::RequestImportProblemsDialog => handlers::quiz::request_import(state),
            AppCommand::ImportProblems { path } => handlers::quiz::import(state, &path)?,
            AppCommand::OpenProblem { index } => handlers::quiz::open_problem(state, index)?,
            AppCommand::CheckAnswer { selected } => handlers::quiz::check(state, selected),
            AppCommand::NextProblem => handlers::quiz::next(state)?,
            AppCommand::ToggleProblemCollapsed => handlers::quiz::toggle_collapsed(state),
            AppCommand::CloseProblem => handlers::quiz::close_problem(state),

            // === Hilfe, Meldungen, Optionen ===
            AppCommand::OpenHelp => handlers::dialog::open_help(state),
            AppCommand::CloseHelp => handlers::dialog::close_help(state),
            AppCommand::DismissMessage => handlers::dialog::dismiss_message(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
