//! Menu rendering module
//!
//! Backend-agnostic paint commands for open menus

pub mod commands;
pub mod renderer;

pub use commands::MenuPaintCommand;
pub use renderer::MenuRenderer;
