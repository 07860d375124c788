//! Menu placement inside the owning window

use crate::core::config::MenuConfig;
use crate::foundation::math::{script_to_unit, IVec2, PixelRect};

use super::descriptor::{MenuDescriptor, MenuFlags};

fn virtual_pixels(value: i32, extent: i32) -> i32 {
    (script_to_unit(value) * extent as f32) as i32
}

/// Resolve a menu's rectangle for an owner of `owner` pixels
///
/// Unscaled menus take their size from the descriptor in virtual 640x480
/// units; all others fill the owner. Centered menus are centered in the
/// owner, unscaled ones use their descriptor position. Otherwise the
/// current position is kept.
pub fn resolve_geometry(
    menu: &MenuDescriptor,
    current: PixelRect,
    owner: IVec2,
    config: &MenuConfig,
) -> PixelRect {
    let unscaled = menu.flags.contains(MenuFlags::DONTSCALE_DIM);

    let size = if unscaled {
        IVec2::new(
            virtual_pixels(menu.dim.x, config.virtual_width),
            virtual_pixels(menu.dim.y, config.virtual_height),
        )
    } else {
        owner
    };

    let position = if menu.flags.contains(MenuFlags::ALIGN_CENTER) {
        (owner - size) / 2
    } else if unscaled {
        IVec2::new(
            virtual_pixels(menu.pos.x, config.virtual_width),
            virtual_pixels(menu.pos.y, config.virtual_height),
        )
    } else {
        current.position
    };

    PixelRect { position, size }
}
