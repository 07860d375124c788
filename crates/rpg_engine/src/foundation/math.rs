//! Math utilities and types
//!
//! Menu scripts place everything in a virtual 8192x8192 coordinate space.
//! These helpers map that space onto pixels.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Integer 2D vector used for pixel positions and sizes
pub type IVec2 = Vector2<i32>;

/// Extent of the normalized script coordinate space along each axis
pub const SCRIPT_DIV: f32 = 8192.0;

/// Convert a script coordinate into a fraction of the target extent
pub fn script_to_unit(value: i32) -> f32 {
    value as f32 / SCRIPT_DIV
}

/// Scale a script coordinate onto a pixel extent, truncating like the script engine does
pub fn script_to_pixels(value: i32, extent: i32) -> i32 {
    (extent as f32 * value as f32 / SCRIPT_DIV) as i32
}

/// Scale a script-space point onto a pixel viewport
pub fn script_point_to_pixels(point: IVec2, viewport: IVec2) -> IVec2 {
    IVec2::new(
        script_to_pixels(point.x, viewport.x),
        script_to_pixels(point.y, viewport.y),
    )
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// Top-left corner
    pub position: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl PixelRect {
    /// Create a rectangle from its components
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Width in pixels
    pub fn w(&self) -> i32 {
        self.size.x
    }

    /// Height in pixels
    pub fn h(&self) -> i32 {
        self.size.y
    }
}
