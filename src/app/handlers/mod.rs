//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod account;
pub mod dialog;
pub mod drawing;
pub mod history;
pub mod instruments;
pub mod quiz;
pub mod view;
