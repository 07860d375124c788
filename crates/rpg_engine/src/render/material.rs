//! Material classification used for pipeline selection

/// Blending category of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaMode {
    /// Opaque
    #[default]
    Solid,
    /// Opaque with alpha-tested cutouts
    AlphaTest,
    /// Animated water surface
    Water,
    /// Semi-transparent ghost rendering
    Ghost,
    /// Alpha blended
    Transparent,
    /// Additive light sprites
    AdditiveLight,
    /// Multiplicative blend
    Multiply,
    /// Double-strength multiplicative blend
    Multiply2,
}

/// Geometry archetype a draw call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketType {
    /// World mesh
    Landscape,
    /// World mesh drawn into shadow maps only
    LandscapeShadow,
    /// Static object
    Static,
    /// Object that can move but is not skinned
    Movable,
    /// Morph mesh (faces)
    Morph,
    /// Skinned mesh
    Animated,
    /// Particle effect
    Pfx,
}

/// Rendering pass a pipeline is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassType {
    /// Forward shading
    Forward,
    /// G-buffer fill
    Deferred,
    /// Shadow map
    Shadow,
}

/// Material properties relevant to pipeline selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Material {
    /// Nominal blending category
    pub alpha: AlphaMode,
    /// Ghost rendering overrides the nominal alpha mode
    pub is_ghost: bool,
}

impl Material {
    /// Create a material with the given alpha mode
    pub fn new(alpha: AlphaMode) -> Self {
        Self { alpha, is_ghost: false }
    }

    /// Set the ghost flag
    pub fn with_ghost(mut self, ghost: bool) -> Self {
        self.is_ghost = ghost;
        self
    }

    /// Alpha mode used for pipeline selection
    pub fn effective_alpha(&self) -> AlphaMode {
        if self.is_ghost {
            AlphaMode::Ghost
        } else {
            self.alpha
        }
    }
}
