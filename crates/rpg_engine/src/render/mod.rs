//! # Rendering System
//!
//! Material-driven pipeline selection over a pluggable graphics device.
//!
//! ## Architecture
//!
//! - **Material**: alpha modes, geometry buckets and pass types a draw call is keyed on
//! - **Pipeline**: render state, shader sets and the lazily filled pipeline cache
//! - **Vulkan Backend**: `ash` implementation of the graphics device interface
//!
//! ## Design Goals
//!
//! - **API Agnostic**: pipeline selection only talks to the [`pipeline::GraphicsDevice`] trait
//! - **Build Once**: every pipeline configuration is compiled at most once per process

pub mod material;
pub mod pipeline;
pub mod vulkan;

use thiserror::Error;

pub use material::{AlphaMode, BucketType, Material, PassType};
pub use pipeline::{
    BlendFactor, CullMode, DepthTest, DeviceCapabilities, GraphicsDevice, PipelineId, PipelineManager,
    RenderState, ShaderRepository, ShaderStages, Topology,
};

/// High-level rendering error types
///
/// Backend errors are flattened into [`RenderError::Device`] so pipeline
/// selection stays independent of the graphics API.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A required shader blob is missing from the repository
    ///
    /// Indicates an incomplete asset build; callers are not expected to recover.
    #[error("Shader '{name}' not found")]
    ShaderNotFound {
        /// Blob file name
        name: String,
    },

    /// Shader bytecode was rejected
    #[error("Invalid shader '{name}': {reason}")]
    InvalidShader {
        /// Blob file name
        name: String,
        /// Why the bytecode was rejected
        reason: String,
    },

    /// Backend-specific error occurred
    #[error("Device error: {0}")]
    Device(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
