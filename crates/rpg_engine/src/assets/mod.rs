//! Asset loading
//!
//! File-backed implementations of the texture and shader collaborators.

pub mod image_loader;
pub mod shader_repository;

pub use image_loader::FileTextureLoader;
pub use shader_repository::{DirectoryShaderRepository, MemoryShaderRepository};

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset exists but could not be decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}
