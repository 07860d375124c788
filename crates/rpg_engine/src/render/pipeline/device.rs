//! Graphics device interface
//!
//! The pipeline cache only creates shaders and pipelines; everything else
//! about the device stays behind this trait.

use std::borrow::Cow;

use super::pipeline_config::{RenderState, Topology};
use crate::render::RenderResult;

/// Optional device features that change which shaders are loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceCapabilities {
    /// Tessellation shaders are available
    pub tessellation: bool,
    /// Mesh shaders are available
    pub mesh_shading: bool,
}

/// Shader stages of a graphics pipeline
#[derive(Debug)]
pub enum ShaderStages<'a, S> {
    /// Vertex + fragment
    Classic {
        /// Vertex stage
        vertex: &'a S,
        /// Fragment stage
        fragment: &'a S,
    },
    /// Vertex + tessellation control/evaluation + fragment
    Tessellated {
        /// Vertex stage
        vertex: &'a S,
        /// Tessellation control stage
        control: &'a S,
        /// Tessellation evaluation stage
        evaluation: &'a S,
        /// Fragment stage
        fragment: &'a S,
    },
    /// Mesh + fragment
    Mesh {
        /// Mesh stage
        mesh: &'a S,
        /// Fragment stage
        fragment: &'a S,
    },
}

/// Device able to build shaders and pipelines
pub trait GraphicsDevice {
    /// Compiled shader module
    type Shader;
    /// Graphics pipeline
    type Pipeline;
    /// Compute pipeline
    type ComputePipeline;

    /// Optional features of this device
    fn capabilities(&self) -> DeviceCapabilities;

    /// Create a shader module from SPIR-V bytecode
    fn create_shader(&mut self, name: &str, code: &[u8]) -> RenderResult<Self::Shader>;

    /// Create a graphics pipeline
    fn create_pipeline(
        &mut self,
        topology: Topology,
        state: &RenderState,
        stages: ShaderStages<'_, Self::Shader>,
    ) -> RenderResult<Self::Pipeline>;

    /// Create a compute pipeline
    fn create_compute_pipeline(&mut self, shader: &Self::Shader) -> RenderResult<Self::ComputePipeline>;
}

/// Source of shader bytecode keyed by file name
pub trait ShaderRepository {
    /// Fetch a blob; a missing blob is [`crate::render::RenderError::ShaderNotFound`]
    fn get(&mut self, name: &str) -> RenderResult<Cow<'_, [u8]>>;
}

/// Fetch a blob and compile it on the device
pub fn load_shader<D: GraphicsDevice + ?Sized>(
    device: &mut D,
    repository: &mut dyn ShaderRepository,
    name: &str,
) -> RenderResult<D::Shader> {
    let code = repository.get(name)?;
    device.create_shader(name, &code)
}
