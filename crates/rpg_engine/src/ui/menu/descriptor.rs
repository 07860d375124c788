//! Menu descriptor
//!
//! The parent menu instance a script section defines: background, layout,
//! default selection and the item symbols by slot.

use bitflags::bitflags;

use crate::foundation::math::IVec2;

/// Maximum number of item slots in one menu
pub const MAX_ITEMS: usize = 150;

bitflags! {
    /// Menu layout flags as stored by the script
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MenuFlags: u32 {
        /// Drawn over the previous menu
        const OVERTOP        = 1 << 0;
        /// Exclusive input
        const EXCLUSIVE      = 1 << 1;
        /// No open animation
        const NOANI          = 1 << 2;
        /// Size is fixed in virtual pixels instead of scaling with the screen
        const DONTSCALE_DIM  = 1 << 3;
        /// Position is fixed in virtual pixels
        const DONTSCALE_POS  = 1 << 4;
        /// Centered inside the owner
        const ALIGN_CENTER   = 1 << 5;
        /// Placed as an info overlay
        const SHOW_INFO      = 1 << 6;
    }
}

/// Menu instance as defined by the script
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDescriptor {
    /// Background image path
    pub back_pic: String,
    /// Position in script units
    pub pos: IVec2,
    /// Size in script units
    pub dim: IVec2,
    /// Layout flags
    pub flags: MenuFlags,
    /// Item slot selected first when opened from the main menu
    pub default_out_game: i32,
    /// Item slot selected first when opened while playing
    pub default_in_game: i32,
    /// Item symbol per slot; empty names mark unused slots
    pub items: Vec<String>,
}

impl MenuDescriptor {
    /// Default selection for the current game state
    pub fn default_selection(&self, in_game: bool) -> i32 {
        if in_game {
            self.default_in_game
        } else {
            self.default_out_game
        }
    }

    /// Named item slots, limited to [`MAX_ITEMS`]
    pub fn item_slots(&self) -> impl Iterator<Item = (usize, &str)> {
        self.items
            .iter()
            .take(MAX_ITEMS)
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(slot, name)| (slot, name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_slots_skip_empty() {
        let menu = MenuDescriptor {
            items: vec!["A".into(), String::new(), "C".into()],
            ..Default::default()
        };
        let slots: Vec<_> = menu.item_slots().collect();
        assert_eq!(slots, vec![(0, "A"), (2, "C")]);
    }

    #[test]
    fn test_default_selection() {
        let menu = MenuDescriptor {
            default_in_game: 3,
            default_out_game: 1,
            ..Default::default()
        };
        assert_eq!(menu.default_selection(true), 3);
        assert_eq!(menu.default_selection(false), 1);
    }
}
