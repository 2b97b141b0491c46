//! Carta Náutica.
//!
//! Seekarten-Betrachter mit Zeichenwerkzeugen, Navigationsinstrumenten,
//! Benutzerkonten und Fragenkatalog auf Basis von egui.

use eframe::egui;
use carta_nautica::app::MessageLevel;
use carta_nautica::app::use_cases;
use carta_nautica::{render, ui, AppController, AppIntent, AppState, ChartOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Carta Náutica v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_min_inner_size([640.0, 480.0])
                .with_title("Carta Náutica"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Carta Náutica",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(ChartApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ChartApp {
    state: AppState,
    controller: AppController,
    renderer: render::SceneRenderer,
    input: ui::InputState,
    /// Viewport-Rechteck des letzten Frames (Anker für das Text-Eingabefeld)
    viewport_rect: egui::Rect,
    options_saved: bool,
}

impl ChartApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ChartOptions::config_path();
        let chart_options = ChartOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(chart_options);

        let db_path = state.options.resolved_database_path();
        if let Err(e) = use_cases::account::open_database(&mut state, &db_path) {
            log::error!("Datenbank nicht verfügbar: {:#}", e);
            state.ui.push_message(
                MessageLevel::Error,
                format!("The navigation database could not be opened: {e}"),
            );
        }

        if let Some(path) = state.options.last_chart_path.clone() {
            if let Err(e) = use_cases::chart::load_chart(&mut state, path) {
                log::warn!("Letzte Seekarte nicht ladbar: {:#}", e);
                state.options.last_chart_path = None;
            }
        }

        Self {
            state,
            controller: AppController::new(),
            renderer: render::SceneRenderer::new(),
            input: ui::InputState::new(),
            viewport_rect: egui::Rect::NOTHING,
            options_saved: false,
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        if ctx.input(|i| i.viewport().close_requested()) && !self.state.should_exit {
            events.push(AppIntent::ExitRequested);
        }

        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if self.state.should_exit {
            self.save_options();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ChartApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        {
            let state = &mut self.state;
            let problems = state
                .account
                .navigation
                .as_ref()
                .map_or(&[][..], |nav| nav.problems());

            events.extend(ui::show_login_dialog(ctx, &mut state.ui));
            events.extend(ui::show_register_dialog(ctx, &mut state.ui));
            events.extend(ui::show_profile_dialog(
                ctx,
                &mut state.ui,
                state.account.current_nick(),
            ));
            events.extend(ui::show_history_dialog(
                ctx,
                &mut state.ui,
                state.account.current_user(),
            ));
            events.extend(ui::show_question_bank(ctx, &mut state.ui, problems));
            events.extend(ui::show_problem_window(ctx, &mut state.quiz, problems));
        }
        events.extend(ui::show_help_dialog(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));
        events.extend(ui::show_text_entry(ctx, &mut self.state, self.viewport_rect));
        events.extend(ui::show_message_dialog(ctx, &self.state.ui));

        self.renderer.sync_chart(ctx, &mut self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(32)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.viewport_rect = rect;

                events.extend(self.input.collect_viewport_events(ui, &response, &self.state));

                let painter = ui.painter_at(rect);
                self.renderer.paint(ctx, &painter, rect, &self.state);

                if !self.renderer.has_chart() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No chart loaded. Use File → Open chart",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
                self.state
                    .ui
                    .push_message(MessageLevel::Error, format!("{e:#}"));
            }
        }
    }

    fn save_options(&mut self) {
        if self.options_saved {
            return;
        }
        self.options_saved = true;
        if let Err(e) = self.state.options.save_to_file(&ChartOptions::config_path()) {
            log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.view.chart_dirty
        {
            ctx.request_repaint();
        }
    }
}
