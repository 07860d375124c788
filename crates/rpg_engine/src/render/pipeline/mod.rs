//! Pipeline management for material rendering
//!
//! Material pipelines are selected by alpha mode, geometry bucket and pass
//! type. Each distinct combination is built once from the shader templates
//! and cached for the lifetime of the [`PipelineManager`].

pub mod device;
pub mod pipeline_config;
pub mod pipeline_manager;
pub mod shader_set;

#[cfg(test)]
pub(crate) mod test_support;

pub use device::{DeviceCapabilities, GraphicsDevice, ShaderRepository, ShaderStages};
pub use pipeline_config::{BlendFactor, CullMode, DepthTest, RenderState, Topology};
pub use pipeline_manager::{material_state, pass_templates, PassTemplates, PipelineId, PipelineManager};
pub use shader_set::{MaterialTemplate, ShaderSet, TemplateKind, TemplateLibrary};
