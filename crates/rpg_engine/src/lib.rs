//! # RPG Engine
//!
//! Script-driven game menus and material pipeline selection for a Vulkan
//! renderer.
//!
//! ## Features
//!
//! - **Menus**: script-described menus with keyboard navigation, option
//!   cycling, save slot previews and a menu stack
//! - **Pipelines**: shader templates loaded at startup and pipelines built
//!   lazily per material, bucket and pass
//! - **Configuration**: TOML/RON application config and persisted settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rpg_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::load_or_default("config.toml")?;
//!     config.validate()?;
//!     rpg_engine::foundation::logging::init_with_level(&config.engine.log_level);
//!
//!     let menus = MenuRoot::new(config.menu.clone(), IVec2::new(800, 600));
//!     assert!(menus.is_empty());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod assets;
pub mod audio;
pub mod render;
pub mod settings;
pub mod ui;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{DirectoryShaderRepository, FileTextureLoader},
        audio::{GameMusic, SoundService},
        config::Config,
        foundation::math::IVec2,
        core::config::{ApplicationConfig, MenuConfig, ShaderConfig},
        render::{AlphaMode, BucketType, Material, PassType, PipelineManager},
        settings::{FileSettings, SettingsStore},
        ui::{GameMenu, MenuRenderer, MenuRoot, MenuServices},
    };
}
