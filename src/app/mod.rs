//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Karte, View, Werkzeuge, Konto).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{
    AppState, DrawMode, EditorState, MessageLevel, ProfileForm, RegistrationForm, UiState,
    ViewState,
};
