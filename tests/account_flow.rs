use carta_nautica::app::use_cases;
use carta_nautica::nav::{Answer, Problem};
use carta_nautica::{AppController, AppIntent, AppState, Navigation};
use carta_nautica::app::RegistrationForm;
use chrono::NaiveDate;
use std::io::Write;

const NICK: &str = "capitan_1";
const PASSWORD: &str = "Barco123!";

fn state_with_database() -> AppState {
    let mut state = AppState::new();
    state.account.navigation =
        Some(Navigation::open_in_memory().expect("In-Memory-Datenbank sollte öffnen"));
    state
}

fn registration() -> RegistrationForm {
    RegistrationForm {
        nick: NICK.into(),
        password: PASSWORD.into(),
        email: "capitan@mar.es".into(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).expect("Datum"),
        avatar: None,
    }
}

fn register(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(
            state,
            AppIntent::RegisterSubmitted {
                form: registration(),
            },
        )
        .expect("Registrierung sollte ohne Fehler durchlaufen");
}

fn problem(text: &str, valid: usize) -> Problem {
    Problem::new(
        text,
        (0..4)
            .map(|i| Answer::new(format!("{text} {i}"), i == valid))
            .collect(),
    )
}

fn import(controller: &mut AppController, state: &mut AppState, problems: &[Problem]) {
    let mut file = tempfile::NamedTempFile::new().expect("Temp-Datei");
    let json = serde_json::to_string(problems).expect("JSON");
    file.write_all(json.as_bytes()).expect("schreiben");
    controller
        .handle_intent(
            state,
            AppIntent::ProblemsFileSelected {
                path: file.path().to_string_lossy().into_owned(),
            },
        )
        .expect("Import sollte ohne Fehler durchlaufen");
}

/// Anzeige-Index der richtigen Antwort der offenen Frage.
fn correct_display(state: &AppState) -> usize {
    let view = state.quiz.current.as_ref().expect("offene Frage");
    let problem = &state
        .account
        .navigation
        .as_ref()
        .expect("Datenbank")
        .problems()[view.problem_index];
    view.order
        .iter()
        .position(|&original| problem.answers[original].valid)
        .expect("richtige Antwort")
}

#[test]
fn test_user_menu_opens_login_when_logged_out() {
    let mut controller = AppController::new();
    let mut state = state_with_database();

    controller
        .handle_intent(&mut state, AppIntent::UserMenuRequested)
        .expect("UserMenuRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.login.visible);
    assert!(!state.ui.profile.visible);
}

#[test]
fn test_registration_logs_in_and_reports_duplicates() {
    let mut controller = AppController::new();
    let mut state = state_with_database();

    register(&mut controller, &mut state);
    assert_eq!(state.account.current_nick(), Some(NICK));
    assert!(!state.ui.register.visible);
    assert_eq!(state.ui.messages.len(), 1);

    controller
        .handle_intent(&mut state, AppIntent::LogoutRequested)
        .expect("Logout sollte ohne Fehler durchlaufen");
    assert!(!state.account.is_logged_in());

    register(&mut controller, &mut state);
    assert!(!state.account.is_logged_in());
    assert!(state
        .ui
        .register
        .issues
        .iter()
        .any(|issue| issue.contains("already exists")));
}

#[test]
fn test_invalid_registration_collects_issues() {
    let mut controller = AppController::new();
    let mut state = state_with_database();
    let form = RegistrationForm {
        nick: "ab".into(),
        password: "kurz".into(),
        email: "kein-mail".into(),
        ..registration()
    };

    controller
        .handle_intent(&mut state, AppIntent::RegisterSubmitted { form })
        .expect("Registrierung sollte ohne Fehler durchlaufen");

    assert_eq!(state.ui.register.issues.len(), 3);
    assert_eq!(
        state.account.navigation.as_ref().map(|nav| nav.user_count()),
        Some(0)
    );
}

#[test]
fn test_wrong_password_keeps_dialog_with_error() {
    let mut controller = AppController::new();
    let mut state = state_with_database();
    register(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::LogoutRequested)
        .expect("Logout sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::UserMenuRequested)
        .expect("UserMenuRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LoginSubmitted {
                nick: NICK.into(),
                password: "Falsch123!".into(),
            },
        )
        .expect("Login sollte ohne Fehler durchlaufen");

    assert!(!state.account.is_logged_in());
    assert!(state.ui.login.visible);
    assert!(state.ui.login.error.is_some());

    controller
        .handle_intent(
            &mut state,
            AppIntent::LoginSubmitted {
                nick: format!("  {NICK} "),
                password: PASSWORD.into(),
            },
        )
        .expect("Login sollte ohne Fehler durchlaufen");
    assert_eq!(state.account.current_nick(), Some(NICK));
    assert!(!state.ui.login.visible);
}

#[test]
fn test_quiz_results_are_stored_as_session_on_logout() {
    let mut controller = AppController::new();
    let mut state = state_with_database();
    register(&mut controller, &mut state);
    import(
        &mut controller,
        &mut state,
        &[problem("Faro", 1), problem("Rumbo", 3)],
    );

    controller
        .handle_intent(&mut state, AppIntent::ProblemOpenRequested { index: 0 })
        .expect("Frage öffnen sollte ohne Fehler durchlaufen");
    let selected = Some(correct_display(&state));
    controller
        .handle_intent(&mut state, AppIntent::ProblemCheckRequested { selected })
        .expect("Prüfen sollte ohne Fehler durchlaufen");
    assert_eq!(state.quiz.hits, 1);

    // Zweites Prüfen derselben Frage zählt nicht
    controller
        .handle_intent(&mut state, AppIntent::ProblemCheckRequested { selected })
        .expect("Prüfen sollte ohne Fehler durchlaufen");
    assert_eq!(state.quiz.hits, 1);

    controller
        .handle_intent(&mut state, AppIntent::ProblemNextRequested)
        .expect("Weiter sollte ohne Fehler durchlaufen");
    let view = state.quiz.current.as_ref().expect("nächste Frage");
    assert_eq!(view.problem_index, 1);
    let wrong = (correct_display(&state) + 1) % 4;
    controller
        .handle_intent(
            &mut state,
            AppIntent::ProblemCheckRequested {
                selected: Some(wrong),
            },
        )
        .expect("Prüfen sollte ohne Fehler durchlaufen");
    assert_eq!(state.quiz.faults, 1);

    controller
        .handle_intent(&mut state, AppIntent::LogoutRequested)
        .expect("Logout sollte ohne Fehler durchlaufen");

    let user = state
        .account
        .navigation
        .as_ref()
        .and_then(|nav| nav.find_user(NICK))
        .expect("Benutzer");
    assert_eq!(user.sessions.len(), 1);
    assert_eq!(user.sessions[0].hits, 1);
    assert_eq!(user.sessions[0].faults, 1);
    assert_eq!(state.quiz.hits, 0);
    assert!(state.quiz.current.is_none());
}

#[test]
fn test_check_without_selection_only_requests_focus() {
    let mut controller = AppController::new();
    let mut state = state_with_database();
    register(&mut controller, &mut state);
    import(&mut controller, &mut state, &[problem("Marea", 0)]);

    controller
        .handle_intent(&mut state, AppIntent::ProblemOpenRequested { index: 0 })
        .expect("Frage öffnen sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ProblemCheckRequested { selected: None })
        .expect("Prüfen sollte ohne Fehler durchlaufen");

    let view = state.quiz.current.as_ref().expect("offene Frage");
    assert!(view.focus_first_answer);
    assert!(!view.checked);
    assert!(!state.quiz.has_results());
}

#[test]
fn test_question_bank_and_problems_need_login() {
    let mut controller = AppController::new();
    let mut state = state_with_database();
    import(&mut controller, &mut state, &[problem("Sonda", 2)]);

    controller
        .handle_intent(&mut state, AppIntent::QuestionBankRequested)
        .expect("QuestionBankRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ProblemOpenRequested { index: 0 })
        .expect("ProblemOpenRequested sollte ohne Fehler durchlaufen");

    assert!(!state.ui.question_bank.visible);
    assert!(state.quiz.current.is_none());
}

#[test]
fn test_exit_flushes_open_session() {
    let mut controller = AppController::new();
    let mut state = state_with_database();
    register(&mut controller, &mut state);
    import(&mut controller, &mut state, &[problem("Viento", 0)]);
    controller
        .handle_intent(&mut state, AppIntent::ProblemOpenRequested { index: 0 })
        .expect("Frage öffnen sollte ohne Fehler durchlaufen");
    let selected = Some(correct_display(&state));
    controller
        .handle_intent(&mut state, AppIntent::ProblemCheckRequested { selected })
        .expect("Prüfen sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    let sessions = &state
        .account
        .current_user()
        .expect("weiterhin angemeldet")
        .sessions;
    assert_eq!(sessions.len(), 1);
}

#[test]
fn test_logout_completes_when_session_cannot_be_stored() {
    let mut controller = AppController::new();
    let mut state = state_with_database();
    register(&mut controller, &mut state);
    state.quiz.hits = 2;
    state.account.navigation = None;

    let result = controller.handle_intent(&mut state, AppIntent::LogoutRequested);

    assert!(result.is_err(), "Speicherfehler sollte gemeldet werden");
    assert!(!state.account.is_logged_in());
    assert_eq!(state.quiz.hits, 0);

    // Erneutes Abmelden ist ein No-op
    controller
        .handle_intent(&mut state, AppIntent::LogoutRequested)
        .expect("zweites Abmelden sollte ohne Fehler durchlaufen");
}

#[test]
fn test_database_persists_users_across_reopen() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("navdb.sqlite");

    {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        use_cases::account::open_database(&mut state, &path)
            .expect("Datenbank sollte angelegt werden");
        register(&mut controller, &mut state);
    }

    let mut state = AppState::new();
    use_cases::account::open_database(&mut state, &path)
        .expect("Datenbank sollte erneut öffnen");
    let user = state
        .account
        .navigation
        .as_ref()
        .and_then(|nav| nav.authenticate(NICK, PASSWORD))
        .expect("Benutzer sollte gespeichert sein");
    assert_eq!(user.email, "capitan@mar.es");
}
