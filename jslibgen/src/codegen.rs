/// Code generation module for creating Emscripten glue from container units

pub mod glue;
mod jslib;
mod jspre;
pub mod kind;

pub use glue::GlueCodegen;
pub use kind::ArtifactKind;
