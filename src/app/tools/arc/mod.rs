//! Bogen-Werkzeug: Kreisbogen in drei Rechtsklicks.
//!
//! **Mitte:** 1. Klick setzt den Mittelpunkt, Bewegung zeigt den Radius.
//! **Radius:** 2. Klick legt Radius und Startwinkel fest (ignoriert unter 2 px).
//! **Winkel:** Bewegung akkumuliert den Überstreichwinkel schrittweise, damit
//! auch Bögen über 180° und beide Richtungen funktionieren; 3. Klick übernimmt.
//!
//! Aufgeteilt in:
//! - `state`     : Phasen, Struct, Winkel-Akkumulation
//! - `lifecycle` : DrawTool-Implementierung

mod lifecycle;
mod state;

pub use state::ArcTool;

#[cfg(test)]
mod tests;
