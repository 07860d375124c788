//! Save slot resolution
//!
//! Load/save menus name their slot items `MENUITEM_LOAD_SLOT<n>` and
//! `MENUITEM_SAVE_SLOT<n>`. The slot id is the decimal suffix.

use crate::ui::backend::{GameTime, SaveGameHeader, WallClock};

const SLOT_PREFIXES: [&str; 2] = ["MENUITEM_LOAD_SLOT", "MENUITEM_SAVE_SLOT"];

/// Binding receiving the save preview image
pub const THUMB_PIC: &str = "MENUITEM_LOADSAVE_THUMBPIC";
/// Binding receiving the world name
pub const LEVEL_NAME: &str = "MENUITEM_LOADSAVE_LEVELNAME_VALUE";
/// Binding receiving the real-world save time
pub const DATE_TIME: &str = "MENUITEM_LOADSAVE_DATETIME_VALUE";
/// Binding receiving the in-game save time
pub const GAME_TIME: &str = "MENUITEM_LOADSAVE_GAMETIME_VALUE";
/// Binding receiving the play time
pub const PLAY_TIME: &str = "MENUITEM_LOADSAVE_PLAYTIME_VALUE";

/// Close-action argument starting a new game
pub const CMD_NEW_GAME: &str = "NEW_GAME";
/// Close-action argument quitting the application
pub const CMD_LEAVE_GAME: &str = "LEAVE_GAME";
/// Close-action argument saving into the item's slot
pub const CMD_SAVEGAME_SAVE: &str = "SAVEGAME_SAVE";
/// Close-action argument loading the item's slot
pub const CMD_SAVEGAME_LOAD: &str = "SAVEGAME_LOAD";

/// Slot id encoded in an item name
///
/// An optional `_` may separate prefix and digits. Any other non-digit in
/// the suffix makes the name invalid; there is no partial parse.
pub fn save_slot_id(name: &str) -> Option<usize> {
    let suffix = SLOT_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))?;
    let digits = suffix.strip_prefix('_').unwrap_or(suffix);

    digits.bytes().try_fold(0usize, |id, b| {
        if b.is_ascii_digit() {
            id.checked_mul(10)?.checked_add(usize::from(b - b'0'))
        } else {
            None
        }
    })
}

/// Format a wall clock time as `H:MM`
pub fn format_wall_clock(time: WallClock) -> String {
    format!("{}:{:02}", time.hour, time.minute)
}

/// Format an in-game time as `D - H:MM`
pub fn format_game_time(time: GameTime) -> String {
    format!("{} - {}:{:02}", time.day, time.hour, time.minute)
}

/// Display strings derived from a save header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    /// Preview image path
    pub preview: String,
    /// World name
    pub level_name: String,
    /// Real-world save time
    pub date_time: String,
    /// In-game save time
    pub game_time: String,
}

impl From<&SaveGameHeader> for SaveSummary {
    fn from(header: &SaveGameHeader) -> Self {
        Self {
            preview: header.preview.clone(),
            level_name: header.world.clone(),
            date_time: format_wall_clock(header.saved_at),
            game_time: format_game_time(header.world_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ids() {
        assert_eq!(save_slot_id("MENUITEM_LOAD_SLOT_07"), Some(7));
        assert_eq!(save_slot_id("MENUITEM_SAVE_SLOT12"), Some(12));
        assert_eq!(save_slot_id("MENUITEM_LOAD_SLOT3"), Some(3));
    }

    #[test]
    fn test_non_digit_rejected() {
        assert_eq!(save_slot_id("MENUITEM_LOAD_SLOT_7a"), None);
        assert_eq!(save_slot_id("MENUITEM_SAVE_SLOT_x"), None);
        assert_eq!(save_slot_id("MENUITEM_LOAD_SLOT__1"), None);
    }

    #[test]
    fn test_unrelated_names() {
        assert_eq!(save_slot_id("MENUITEM_OPTIONS"), None);
        assert_eq!(save_slot_id("LOAD_SLOT_1"), None);
    }

    #[test]
    fn test_overflow_is_invalid() {
        assert_eq!(save_slot_id("MENUITEM_LOAD_SLOT_999999999999999999999999"), None);
    }

    #[test]
    fn test_summary_formatting() {
        let header = SaveGameHeader {
            preview: "thumb.tga".into(),
            world: "NEWWORLD.ZEN".into(),
            saved_at: WallClock { hour: 9, minute: 5 },
            world_time: GameTime { day: 3, hour: 14, minute: 0 },
        };
        let summary = SaveSummary::from(&header);
        assert_eq!(summary.date_time, "9:05");
        assert_eq!(summary.game_time, "3 - 14:00");
        assert_eq!(summary.level_name, "NEWWORLD.ZEN");
    }
}
