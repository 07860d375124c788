//! Pipeline state configuration
//!
//! Fixed-function state a pipeline is built with. Values are backend
//! independent; the Vulkan backend translates them in `render::vulkan::state`.

/// Face culling modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    /// No culling (double-sided)
    None,
    /// Cull front faces
    #[default]
    Front,
    /// Cull back faces
    Back,
}

/// Depth comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthTest {
    /// Always pass
    Always,
    /// Never pass
    Never,
    /// Pass if closer
    Less,
    /// Pass if closer or equal
    #[default]
    LessEqual,
    /// Pass if farther
    Greater,
    /// Pass if farther or equal
    GreaterEqual,
    /// Pass if equal
    Equal,
    /// Pass if not equal
    NotEqual,
}

/// Blend factor applied to source or destination color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// 0
    Zero,
    /// 1
    One,
    /// Source alpha
    SrcAlpha,
    /// 1 - source alpha
    OneMinusSrcAlpha,
    /// Source color
    SrcColor,
    /// Destination color
    DstColor,
}

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Triangle list
    Triangles,
    /// Tessellation patches
    Patches,
}

/// Fixed-function state of one pipeline
///
/// `One`/`Zero` blend factors mean no blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderState {
    /// Face culling
    pub cull_mode: CullMode,
    /// Depth comparison
    pub depth_test: DepthTest,
    /// Write depth
    pub depth_write: bool,
    /// Source blend factor
    pub blend_src: BlendFactor,
    /// Destination blend factor
    pub blend_dst: BlendFactor,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            cull_mode: CullMode::Front,
            depth_test: DepthTest::LessEqual,
            depth_write: true,
            blend_src: BlendFactor::One,
            blend_dst: BlendFactor::Zero,
        }
    }
}

impl RenderState {
    /// Set culling
    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    /// Set depth comparison
    pub fn with_depth_test(mut self, depth_test: DepthTest) -> Self {
        self.depth_test = depth_test;
        self
    }

    /// Enable or disable depth writes
    pub fn with_depth_write(mut self, enabled: bool) -> Self {
        self.depth_write = enabled;
        self
    }

    /// Set blend factors
    pub fn with_blend(mut self, src: BlendFactor, dst: BlendFactor) -> Self {
        self.blend_src = src;
        self.blend_dst = dst;
        self
    }

    /// Whether the state blends with the framebuffer
    pub fn has_blending(&self) -> bool {
        !(self.blend_src == BlendFactor::One && self.blend_dst == BlendFactor::Zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque() {
        let state = RenderState::default();
        assert_eq!(state.cull_mode, CullMode::Front);
        assert_eq!(state.depth_test, DepthTest::LessEqual);
        assert!(state.depth_write);
        assert!(!state.has_blending());
    }

    #[test]
    fn test_blend_enables_blending() {
        let state = RenderState::default().with_blend(BlendFactor::SrcAlpha, BlendFactor::One);
        assert!(state.has_blending());
    }
}
