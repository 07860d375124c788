//! Shader modules and pipelines
//!
//! SPIR-V shader loading and pipeline creation following RAII patterns

use std::ffi::CStr;
use std::io::Cursor;

use ash::{vk, Device};

use super::state;
use super::{VulkanError, VulkanResult};
use crate::render::pipeline::{RenderState, Topology};

/// Entry point every shader stage uses
pub const ENTRY_POINT: &CStr = c"main";

/// Control points per tessellation patch
const PATCH_CONTROL_POINTS: u32 = 3;

/// Shader module wrapper with RAII cleanup
pub struct ShaderModule {
    device: Device,
    module: vk::ShaderModule,
}

impl ShaderModule {
    /// Create shader module from SPIR-V bytecode
    pub fn from_bytes(device: Device, bytes: &[u8]) -> VulkanResult<Self> {
        let code = ash::util::read_spv(&mut Cursor::new(bytes)).map_err(|e| VulkanError::InvalidOperation {
            reason: format!("Invalid SPIR-V bytecode: {}", e),
        })?;

        let create_info = vk::ShaderModuleCreateInfo::builder().code(&code);

        let module = unsafe {
            device
                .create_shader_module(&create_info, None)
                .map_err(VulkanError::Api)?
        };

        Ok(Self { device, module })
    }

    /// Get shader module handle
    pub fn handle(&self) -> vk::ShaderModule {
        self.module
    }

    /// Create shader stage create info
    pub fn create_stage_info(&self, stage: vk::ShaderStageFlags) -> vk::PipelineShaderStageCreateInfo {
        vk::PipelineShaderStageCreateInfo::builder()
            .stage(stage)
            .module(self.module)
            .name(ENTRY_POINT)
            .build()
    }
}

impl Drop for ShaderModule {
    fn drop(&mut self) {
        unsafe {
            self.device.destroy_shader_module(self.module, None);
        }
    }
}

fn create_layout(
    device: &Device,
    set_layouts: &[vk::DescriptorSetLayout],
    push_constant_size: u32,
    stage_flags: vk::ShaderStageFlags,
) -> VulkanResult<vk::PipelineLayout> {
    let push_constant_ranges = [vk::PushConstantRange {
        stage_flags,
        offset: 0,
        size: push_constant_size,
    }];
    let mut layout_info = vk::PipelineLayoutCreateInfo::builder().set_layouts(set_layouts);
    if push_constant_size > 0 {
        layout_info = layout_info.push_constant_ranges(&push_constant_ranges);
    }

    unsafe {
        device
            .create_pipeline_layout(&layout_info, None)
            .map_err(VulkanError::Api)
    }
}

/// Layout inputs shared by every pipeline of a device
pub struct PipelineLayoutDesc<'a> {
    /// Descriptor set layouts
    pub set_layouts: &'a [vk::DescriptorSetLayout],
    /// Push constant block size in bytes, 0 for none
    pub push_constant_size: u32,
}

/// Graphics pipeline wrapper with RAII cleanup
pub struct GraphicsPipeline {
    device: Device,
    pipeline: vk::Pipeline,
    layout: vk::PipelineLayout,
}

impl GraphicsPipeline {
    /// Create graphics pipeline
    ///
    /// Viewport and scissor are dynamic. Vertex data is fetched by the
    /// shaders, so the vertex input state is empty. Mesh pipelines (a
    /// `MESH_EXT` stage in `stages`) get no vertex input or input assembly.
    pub fn new(
        device: Device,
        render_pass: vk::RenderPass,
        layout_desc: &PipelineLayoutDesc<'_>,
        topology: Topology,
        render_state: &RenderState,
        stages: &[vk::PipelineShaderStageCreateInfo],
    ) -> VulkanResult<Self> {
        let is_mesh = stages
            .iter()
            .any(|s| s.stage.contains(vk::ShaderStageFlags::MESH_EXT));
        let stage_flags = stages
            .iter()
            .fold(vk::ShaderStageFlags::empty(), |flags, s| flags | s.stage);

        let vertex_input = vk::PipelineVertexInputStateCreateInfo::builder();

        let input_assembly = vk::PipelineInputAssemblyStateCreateInfo::builder()
            .topology(state::primitive_topology(topology))
            .primitive_restart_enable(false);

        let tessellation =
            vk::PipelineTessellationStateCreateInfo::builder().patch_control_points(PATCH_CONTROL_POINTS);

        // Viewport and scissor (set dynamically)
        let viewport_state = vk::PipelineViewportStateCreateInfo::builder()
            .viewport_count(1)
            .scissor_count(1);

        let dynamic_states = [vk::DynamicState::VIEWPORT, vk::DynamicState::SCISSOR];
        let dynamic_state = vk::PipelineDynamicStateCreateInfo::builder().dynamic_states(&dynamic_states);

        let rasterizer = vk::PipelineRasterizationStateCreateInfo::builder()
            .depth_clamp_enable(false)
            .rasterizer_discard_enable(false)
            .polygon_mode(vk::PolygonMode::FILL)
            .line_width(1.0)
            .cull_mode(state::cull_mode_flags(render_state.cull_mode))
            .front_face(vk::FrontFace::CLOCKWISE)
            .depth_bias_enable(false);

        let multisampling = vk::PipelineMultisampleStateCreateInfo::builder()
            .sample_shading_enable(false)
            .rasterization_samples(vk::SampleCountFlags::TYPE_1);

        let depth_stencil = vk::PipelineDepthStencilStateCreateInfo::builder()
            .depth_test_enable(true)
            .depth_write_enable(render_state.depth_write)
            .depth_compare_op(state::compare_op(render_state.depth_test))
            .depth_bounds_test_enable(false)
            .stencil_test_enable(false);

        let color_blend_attachments = [state::color_blend_attachment(render_state)];
        let color_blending = vk::PipelineColorBlendStateCreateInfo::builder()
            .logic_op_enable(false)
            .attachments(&color_blend_attachments);

        let layout = create_layout(
            &device,
            layout_desc.set_layouts,
            layout_desc.push_constant_size,
            stage_flags,
        )?;

        let mut pipeline_info = vk::GraphicsPipelineCreateInfo::builder()
            .stages(stages)
            .viewport_state(&viewport_state)
            .dynamic_state(&dynamic_state)
            .rasterization_state(&rasterizer)
            .multisample_state(&multisampling)
            .depth_stencil_state(&depth_stencil)
            .color_blend_state(&color_blending)
            .layout(layout)
            .render_pass(render_pass)
            .subpass(0);
        if !is_mesh {
            pipeline_info = pipeline_info
                .vertex_input_state(&vertex_input)
                .input_assembly_state(&input_assembly);
        }
        if topology == Topology::Patches {
            pipeline_info = pipeline_info.tessellation_state(&tessellation);
        }

        let pipelines = unsafe {
            device.create_graphics_pipelines(vk::PipelineCache::null(), &[pipeline_info.build()], None)
        };
        let pipeline = match pipelines {
            Ok(pipelines) => pipelines[0],
            Err((_, err)) => {
                unsafe { device.destroy_pipeline_layout(layout, None) };
                return Err(VulkanError::Api(err));
            }
        };

        Ok(Self {
            device,
            pipeline,
            layout,
        })
    }

    /// Get pipeline handle
    pub fn handle(&self) -> vk::Pipeline {
        self.pipeline
    }

    /// Get layout handle
    pub fn layout(&self) -> vk::PipelineLayout {
        self.layout
    }
}

impl Drop for GraphicsPipeline {
    fn drop(&mut self) {
        unsafe {
            self.device.destroy_pipeline(self.pipeline, None);
            self.device.destroy_pipeline_layout(self.layout, None);
        }
    }
}

/// Compute pipeline wrapper with RAII cleanup
pub struct ComputePipeline {
    device: Device,
    pipeline: vk::Pipeline,
    layout: vk::PipelineLayout,
}

impl ComputePipeline {
    /// Create compute pipeline
    pub fn new(device: Device, layout_desc: &PipelineLayoutDesc<'_>, shader: &ShaderModule) -> VulkanResult<Self> {
        let layout = create_layout(
            &device,
            layout_desc.set_layouts,
            layout_desc.push_constant_size,
            vk::ShaderStageFlags::COMPUTE,
        )?;

        let pipeline_info = vk::ComputePipelineCreateInfo::builder()
            .stage(shader.create_stage_info(vk::ShaderStageFlags::COMPUTE))
            .layout(layout);

        let pipelines = unsafe {
            device.create_compute_pipelines(vk::PipelineCache::null(), &[pipeline_info.build()], None)
        };
        let pipeline = match pipelines {
            Ok(pipelines) => pipelines[0],
            Err((_, err)) => {
                unsafe { device.destroy_pipeline_layout(layout, None) };
                return Err(VulkanError::Api(err));
            }
        };

        Ok(Self {
            device,
            pipeline,
            layout,
        })
    }

    /// Get pipeline handle
    pub fn handle(&self) -> vk::Pipeline {
        self.pipeline
    }

    /// Get layout handle
    pub fn layout(&self) -> vk::PipelineLayout {
        self.layout
    }
}

impl Drop for ComputePipeline {
    fn drop(&mut self) {
        unsafe {
            self.device.destroy_pipeline(self.pipeline, None);
            self.device.destroy_pipeline_layout(self.layout, None);
        }
    }
}
