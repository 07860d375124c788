//! # Unified Configuration System
//!
//! Consolidates the configuration of every engine subsystem into one
//! serializable structure.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging
//! - **Menu Config**: script-space scaling, timer rate, save slot naming
//! - **Shader Config**: shader blob location and pipeline feature toggles

use serde::{Serialize, Deserialize};
use std::path::Path;

pub use crate::config::{Config, ConfigError};

/// # Shader Configuration
///
/// Where compiled shader blobs live and which optional pipeline features
/// the shader registry should request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShaderConfig {
    /// Directory holding `<tag>.<stage>.sprv` blobs
    pub shader_dir: String,
    /// Load mesh-shading stages for geometry templates
    pub mesh_shading: bool,
    /// Workgroup size baked into mesh shader blob names
    pub mesh_workgroup_size: u32,
    /// Render opaque geometry additively to visualize overdraw
    pub overdraw_debug: bool,
}

impl ShaderConfig {
    /// Create a new shader configuration rooted at `shader_dir`
    pub fn new(shader_dir: impl Into<String>) -> Self {
        Self {
            shader_dir: shader_dir.into(),
            ..Self::default()
        }
    }

    /// Create shader config with automatic directory resolution
    ///
    /// Tries the common build output locations and keeps the first that
    /// exists, useful for binaries run from different working directories.
    pub fn with_path_resolution() -> Self {
        let shader_dirs = [
            "target/shaders",
            "shaders",
            "resources/shaders",
            "../shaders",
        ];

        let shader_dir = shader_dirs
            .iter()
            .find(|dir| Path::new(dir).is_dir())
            .map_or_else(|| "shaders".to_string(), |dir| (*dir).to_string());

        Self::new(shader_dir)
    }

    /// Enable or disable mesh shading
    pub fn with_mesh_shading(mut self, enabled: bool) -> Self {
        self.mesh_shading = enabled;
        self
    }

    /// Enable or disable overdraw visualization
    pub fn with_overdraw_debug(mut self, enabled: bool) -> Self {
        self.overdraw_debug = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.shader_dir.is_empty() {
            return Err("Shader directory cannot be empty".to_string());
        }
        if self.mesh_shading && self.mesh_workgroup_size == 0 {
            return Err("Mesh workgroup size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            shader_dir: "shaders".to_string(),
            mesh_shading: false,
            mesh_workgroup_size: 64,
            overdraw_debug: false,
        }
    }
}

/// # Menu Configuration
///
/// Constants the menu controller uses to map script data onto the screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    /// Period of the menu timer in milliseconds
    pub tick_interval_ms: u64,
    /// Virtual screen width used for menus that opt out of scaling
    pub virtual_width: i32,
    /// Virtual screen height used for menus that opt out of scaling
    pub virtual_height: i32,
    /// Item image width (script units) when the item has none
    pub default_item_width: i32,
    /// Item image height (script units) when the item has none
    pub default_item_height: i32,
    /// Info overlay x position (script units) unless the script overrides it
    pub info_x: i32,
    /// Info overlay y position (script units) unless the script overrides it
    pub info_y: i32,
    /// Distance of the hint line baseline from the bottom edge in pixels
    pub hint_bottom_margin: i32,
    /// Save file name template, `{}` is replaced with the slot id
    pub save_slot_template: String,
}

impl MenuConfig {
    /// File name of the save game stored in `slot`
    pub fn save_slot_file(&self, slot: usize) -> String {
        self.save_slot_template.replacen("{}", &slot.to_string(), 1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.virtual_width <= 0 || self.virtual_height <= 0 {
            return Err("Virtual menu resolution must be positive".to_string());
        }
        if !self.save_slot_template.contains("{}") {
            return Err("Save slot template must contain '{}'".to_string());
        }
        Ok(())
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            virtual_width: 640,
            virtual_height: 480,
            default_item_width: 8192,
            default_item_height: 750,
            info_x: 1000,
            info_y: 7500,
            hint_bottom_margin: 12,
            save_slot_template: "save_slot_{}.sav".to_string(),
        }
    }
}

/// # Engine Configuration
///
/// Core engine behavior shared by every subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
}

impl EngineConfig {
    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Menu system configuration
    pub menu: MenuConfig,
    /// Shader registry configuration
    pub shaders: ShaderConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.menu.validate().map_err(ConfigError::Invalid)?;
        self.shaders.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}
