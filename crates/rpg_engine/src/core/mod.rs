//! # Core Engine Module
//!
//! Shared abstractions used by every subsystem.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration system for all engine subsystems

pub mod config;

pub use config::{
    ApplicationConfig,
    EngineConfig,
    MenuConfig,
    ShaderConfig,
    Config,
    ConfigError,
};
