//! Translation of backend-independent render state into Vulkan state

use ash::vk;

use crate::render::pipeline::{BlendFactor, CullMode, DepthTest, RenderState, Topology};

/// Vulkan cull mode flags
pub fn cull_mode_flags(mode: CullMode) -> vk::CullModeFlags {
    match mode {
        CullMode::None => vk::CullModeFlags::NONE,
        CullMode::Front => vk::CullModeFlags::FRONT,
        CullMode::Back => vk::CullModeFlags::BACK,
    }
}

/// Vulkan depth compare operation
pub fn compare_op(test: DepthTest) -> vk::CompareOp {
    match test {
        DepthTest::Always => vk::CompareOp::ALWAYS,
        DepthTest::Never => vk::CompareOp::NEVER,
        DepthTest::Less => vk::CompareOp::LESS,
        DepthTest::LessEqual => vk::CompareOp::LESS_OR_EQUAL,
        DepthTest::Greater => vk::CompareOp::GREATER,
        DepthTest::GreaterEqual => vk::CompareOp::GREATER_OR_EQUAL,
        DepthTest::Equal => vk::CompareOp::EQUAL,
        DepthTest::NotEqual => vk::CompareOp::NOT_EQUAL,
    }
}

/// Vulkan blend factor
pub fn blend_factor(factor: BlendFactor) -> vk::BlendFactor {
    match factor {
        BlendFactor::Zero => vk::BlendFactor::ZERO,
        BlendFactor::One => vk::BlendFactor::ONE,
        BlendFactor::SrcAlpha => vk::BlendFactor::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => vk::BlendFactor::ONE_MINUS_SRC_ALPHA,
        BlendFactor::SrcColor => vk::BlendFactor::SRC_COLOR,
        BlendFactor::DstColor => vk::BlendFactor::DST_COLOR,
    }
}

/// Vulkan primitive topology
pub fn primitive_topology(topology: Topology) -> vk::PrimitiveTopology {
    match topology {
        Topology::Triangles => vk::PrimitiveTopology::TRIANGLE_LIST,
        Topology::Patches => vk::PrimitiveTopology::PATCH_LIST,
    }
}

/// Color attachment blend state
///
/// Alpha is always written as-is; only color channels are blended.
pub fn color_blend_attachment(state: &RenderState) -> vk::PipelineColorBlendAttachmentState {
    if !state.has_blending() {
        return vk::PipelineColorBlendAttachmentState::builder()
            .color_write_mask(vk::ColorComponentFlags::RGBA)
            .blend_enable(false)
            .build();
    }

    vk::PipelineColorBlendAttachmentState::builder()
        .color_write_mask(vk::ColorComponentFlags::RGBA)
        .blend_enable(true)
        .src_color_blend_factor(blend_factor(state.blend_src))
        .dst_color_blend_factor(blend_factor(state.blend_dst))
        .color_blend_op(vk::BlendOp::ADD)
        .src_alpha_blend_factor(vk::BlendFactor::ONE)
        .dst_alpha_blend_factor(vk::BlendFactor::ZERO)
        .alpha_blend_op(vk::BlendOp::ADD)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_state_disables_blending() {
        let attachment = color_blend_attachment(&RenderState::default());
        assert_eq!(attachment.blend_enable, vk::FALSE);
        assert_eq!(attachment.color_write_mask, vk::ColorComponentFlags::RGBA);
    }

    #[test]
    fn test_additive_blend() {
        let state = RenderState::default().with_blend(BlendFactor::SrcAlpha, BlendFactor::One);
        let attachment = color_blend_attachment(&state);
        assert_eq!(attachment.blend_enable, vk::TRUE);
        assert_eq!(attachment.src_color_blend_factor, vk::BlendFactor::SRC_ALPHA);
        assert_eq!(attachment.dst_color_blend_factor, vk::BlendFactor::ONE);
    }

    #[test]
    fn test_shadow_depth_and_culling() {
        assert_eq!(compare_op(DepthTest::Greater), vk::CompareOp::GREATER);
        assert_eq!(compare_op(DepthTest::LessEqual), vk::CompareOp::LESS_OR_EQUAL);
        assert_eq!(cull_mode_flags(CullMode::Front), vk::CullModeFlags::FRONT);
        assert_eq!(primitive_topology(Topology::Patches), vk::PrimitiveTopology::PATCH_LIST);
    }
}
