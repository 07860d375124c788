//! Vulkan graphics device
//!
//! Adapts a logical `ash::Device` and render pass to the pipeline cache's
//! device interface.

use ash::{vk, Device};

use super::shader::{ComputePipeline, GraphicsPipeline, PipelineLayoutDesc, ShaderModule};
use crate::render::pipeline::{DeviceCapabilities, GraphicsDevice, RenderState, ShaderStages, Topology};
use crate::render::{RenderError, RenderResult};

/// Pipeline factory over a Vulkan logical device
///
/// Does not own the device, render pass or descriptor set layouts; they
/// must outlive every shader and pipeline created here.
pub struct VulkanDevice {
    device: Device,
    render_pass: vk::RenderPass,
    set_layouts: Vec<vk::DescriptorSetLayout>,
    push_constant_size: u32,
    capabilities: DeviceCapabilities,
}

impl VulkanDevice {
    /// Wrap a logical device
    pub fn new(
        device: Device,
        render_pass: vk::RenderPass,
        set_layouts: Vec<vk::DescriptorSetLayout>,
        push_constant_size: u32,
        capabilities: DeviceCapabilities,
    ) -> Self {
        Self {
            device,
            render_pass,
            set_layouts,
            push_constant_size,
            capabilities,
        }
    }

    /// Capabilities from the physical device's feature structs
    pub fn capabilities_from_features(
        features: &vk::PhysicalDeviceFeatures,
        mesh_features: Option<&vk::PhysicalDeviceMeshShaderFeaturesEXT>,
    ) -> DeviceCapabilities {
        DeviceCapabilities {
            tessellation: features.tessellation_shader == vk::TRUE,
            mesh_shading: mesh_features.is_some_and(|f| f.mesh_shader == vk::TRUE),
        }
    }

    fn layout_desc(&self) -> PipelineLayoutDesc<'_> {
        PipelineLayoutDesc {
            set_layouts: &self.set_layouts,
            push_constant_size: self.push_constant_size,
        }
    }
}

impl GraphicsDevice for VulkanDevice {
    type Shader = ShaderModule;
    type Pipeline = GraphicsPipeline;
    type ComputePipeline = ComputePipeline;

    fn capabilities(&self) -> DeviceCapabilities {
        self.capabilities
    }

    fn create_shader(&mut self, name: &str, code: &[u8]) -> RenderResult<ShaderModule> {
        ShaderModule::from_bytes(self.device.clone(), code).map_err(|e| RenderError::InvalidShader {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn create_pipeline(
        &mut self,
        topology: Topology,
        state: &RenderState,
        stages: ShaderStages<'_, ShaderModule>,
    ) -> RenderResult<GraphicsPipeline> {
        let stage_infos = match stages {
            ShaderStages::Classic { vertex, fragment } => vec![
                vertex.create_stage_info(vk::ShaderStageFlags::VERTEX),
                fragment.create_stage_info(vk::ShaderStageFlags::FRAGMENT),
            ],
            ShaderStages::Tessellated {
                vertex,
                control,
                evaluation,
                fragment,
            } => vec![
                vertex.create_stage_info(vk::ShaderStageFlags::VERTEX),
                control.create_stage_info(vk::ShaderStageFlags::TESSELLATION_CONTROL),
                evaluation.create_stage_info(vk::ShaderStageFlags::TESSELLATION_EVALUATION),
                fragment.create_stage_info(vk::ShaderStageFlags::FRAGMENT),
            ],
            ShaderStages::Mesh { mesh, fragment } => vec![
                mesh.create_stage_info(vk::ShaderStageFlags::MESH_EXT),
                fragment.create_stage_info(vk::ShaderStageFlags::FRAGMENT),
            ],
        };

        let pipeline = GraphicsPipeline::new(
            self.device.clone(),
            self.render_pass,
            &self.layout_desc(),
            topology,
            state,
            &stage_infos,
        )?;
        Ok(pipeline)
    }

    fn create_compute_pipeline(&mut self, shader: &ShaderModule) -> RenderResult<ComputePipeline> {
        let pipeline = ComputePipeline::new(self.device.clone(), &self.layout_desc(), shader)?;
        Ok(pipeline)
    }
}
