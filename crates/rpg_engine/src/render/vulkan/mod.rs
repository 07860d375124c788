//! Vulkan rendering backend
//!
//! `ash` implementation of [`crate::render::pipeline::GraphicsDevice`].
//! Every Vulkan object is wrapped in an owner that destroys it on drop.

pub mod device;
pub mod shader;
pub mod state;

use ash::vk;
use thiserror::Error;

use crate::render::RenderError;

pub use device::VulkanDevice;
pub use shader::{ComputePipeline, GraphicsPipeline, ShaderModule};

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// General Vulkan API error with result code
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// Invalid operation attempted
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Description of why the operation is invalid
        reason: String,
    },
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;

impl From<VulkanError> for RenderError {
    fn from(err: VulkanError) -> Self {
        RenderError::Device(err.to_string())
    }
}
