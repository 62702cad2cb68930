//! Feature-Handler für den Controller.
//!
//! Jeder Handler führt genau einen Command auf dem `EditorState` aus.

pub mod curve;
pub mod view;
