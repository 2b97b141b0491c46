//! Application State: zentrale Datenhaltung.

mod account;
mod app_state;
mod dialogs;
mod editor;
mod quiz;
mod view;

pub use account::{AccountState, ProfileForm, RegistrationForm};
pub use app_state::AppState;
pub use dialogs::{
    HistoryDialogState, LoginDialogState, MessageLevel, ProfileDialogState,
    QuestionBankDialogState, RegisterDialogState, UiMessage, UiState,
};
pub use editor::{DrawMode, EditorState, PendingTextEntry};
pub use quiz::{AnswerMark, ProblemView, QuizState};
pub use view::ViewState;
