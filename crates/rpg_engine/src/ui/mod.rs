//! UI System Module
//!
//! Script-driven game menus, kept apart from the rendering backend.
//!
//! Architecture:
//! - backend: collaborator traits the menus consume (script, game, saves, fonts)
//! - enum_string: option strings cycled by choice items
//! - menu/: menu items, navigation controller and the menu stack
//! - rendering/: backend-agnostic paint commands

pub mod backend;
pub mod enum_string;
pub mod menu;
pub mod rendering;

pub use backend::{
    FontMetrics, FontRef, FontStyle, GameSession, GameTime, ImageHandle, MenuServices, SaveError,
    SaveGameHeader, SaveStorage, ScriptRuntime, TextureLoader, WallClock,
};

pub use menu::{GameMenu, MenuError, MenuItem, MenuRequest, MenuRoot};

pub use rendering::{MenuPaintCommand, MenuRenderer};
