//! Use-Cases der Application-Layer-Orchestrierung.

pub mod account;
pub mod camera;
pub mod chart;
pub mod drawing;
pub mod help;
pub mod history;
pub mod instruments;
pub mod quiz;
