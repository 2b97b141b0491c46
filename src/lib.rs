//! Carta Náutica Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod nav;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawMode, EditorState, UiState, ViewState,
};
pub use core::{
    Annotation, AnnotationKind, AnnotationStore, ArcShape, Camera2D, ChartImage, GeoCalibration,
    GeoPoint, Instrument, InstrumentKind, InstrumentSet, SpatialIndex, SpatialMatch,
};
pub use nav::{Navigation, NavigationDao, Problem, Session, User, UserAgent};
pub use shared::ChartOptions;
