//! Named value bindings
//!
//! The engine pushes runtime values (player stats, clock, save previews) into
//! menu items by their script name.

use crate::ui::backend::{ImageHandle, MenuServices, WallClock};
use crate::ui::enum_string;

use super::controller::GameMenu;
use super::save_slot::format_wall_clock;

/// Value written into a named menu item
#[derive(Debug, Clone, PartialEq)]
pub enum BindingValue {
    /// Literal text
    Text(String),
    /// Decimal integer
    Int(i32),
    /// Integer followed by a unit suffix, e.g. `"75%"`
    IntWithSuffix(i32, String),
    /// Current over maximum, e.g. `"12/40"`
    Ratio(i32, i32),
    /// Item image; `None` clears it
    Image(Option<ImageHandle>),
}

impl BindingValue {
    /// Text form, `None` for image bindings
    pub fn to_text(&self) -> Option<String> {
        match self {
            BindingValue::Text(text) => Some(text.clone()),
            BindingValue::Int(value) => Some(value.to_string()),
            BindingValue::IntWithSuffix(value, suffix) => Some(format!("{}{}", value, suffix)),
            BindingValue::Ratio(current, max) => Some(format!("{}/{}", current, max)),
            BindingValue::Image(_) => None,
        }
    }
}

impl From<&str> for BindingValue {
    fn from(text: &str) -> Self {
        BindingValue::Text(text.to_string())
    }
}

impl From<String> for BindingValue {
    fn from(text: String) -> Self {
        BindingValue::Text(text)
    }
}

impl From<i32> for BindingValue {
    fn from(value: i32) -> Self {
        BindingValue::Int(value)
    }
}

impl From<Option<ImageHandle>> for BindingValue {
    fn from(image: Option<ImageHandle>) -> Self {
        BindingValue::Image(image)
    }
}

/// Well-known item names filled in by the engine
pub mod names {
    /// Guild name
    pub const PLAYER_GUILD: &str = "MENU_ITEM_PLAYERGUILD";
    /// Player level
    pub const LEVEL: &str = "MENU_ITEM_LEVEL";
    /// Content viewer entry, hidden in menus
    pub const CONTENT_VIEWER: &str = "MENU_ITEM_CONTENT_VIEWER";
    /// World day
    pub const DAY: &str = "MENU_ITEM_DAY";
    /// World clock
    pub const TIME: &str = "MENU_ITEM_TIME";
    /// Experience
    pub const EXP: &str = "MENU_ITEM_EXP";
    /// Experience needed for the next level
    pub const LEVEL_NEXT: &str = "MENU_ITEM_LEVEL_NEXT";
    /// Learning points
    pub const LEARN: &str = "MENU_ITEM_LEARN";
    /// Strength, dexterity, mana and hit points
    pub const ATTRIBUTES: [&str; 4] = [
        "MENU_ITEM_ATTRIBUTE_1",
        "MENU_ITEM_ATTRIBUTE_2",
        "MENU_ITEM_ATTRIBUTE_3",
        "MENU_ITEM_ATTRIBUTE_4",
    ];
    /// Protection values
    pub const ARMORS: [&str; 4] = [
        "MENU_ITEM_ARMOR_1",
        "MENU_ITEM_ARMOR_2",
        "MENU_ITEM_ARMOR_3",
        "MENU_ITEM_ARMOR_4",
    ];
}

/// Talent line of the character sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TalentStats {
    /// Skill tier, indexes the talent's skill option string
    pub skill: i32,
    /// Hit chance in percent
    pub hit_chance: i32,
}

/// Player values shown on the character sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerStats {
    /// Index into the script's guild names
    pub guild: usize,
    /// Level
    pub level: i32,
    /// Experience points
    pub experience: i32,
    /// Experience needed for the next level
    pub experience_next: i32,
    /// Unspent learning points
    pub learning_points: i32,
    /// Strength
    pub strength: i32,
    /// Dexterity
    pub dexterity: i32,
    /// Current mana
    pub mana: i32,
    /// Maximum mana
    pub mana_max: i32,
    /// Current hit points
    pub hitpoints: i32,
    /// Maximum hit points
    pub hitpoints_max: i32,
    /// Protection against edge, point, fire and magic damage
    pub protection: [i32; 4],
    /// Talent lines, indexed like the script's talent tables
    pub talents: Vec<TalentStats>,
}

impl GameMenu {
    /// Write `value` into the first item named `name`; unknown names are ignored
    pub fn set(&mut self, name: &str, value: impl Into<BindingValue>) {
        let Some(item) = self.item_by_name_mut(name) else {
            return;
        };
        match value.into() {
            BindingValue::Image(image) => item.image = image,
            other => {
                if let Some(text) = other.to_text() {
                    item.data.text[0] = text;
                }
            }
        }
    }

    /// Fill the standard bindings after the menu opened
    pub fn init_values(&mut self, services: &mut MenuServices<'_>) {
        let time = services.game.world_time().unwrap_or_default();

        self.set(names::PLAYER_GUILD, "Debugger");
        self.set(names::LEVEL, "0");

        for slot in 0..self.items().len() {
            let Some(item) = self.item_mut(slot) else {
                continue;
            };
            match item.name.as_str() {
                names::CONTENT_VIEWER => item.visible = false,
                names::DAY => item.data.text[0] = time.day.to_string(),
                names::TIME => item.data.text[0] = format_wall_clock(WallClock {
                    hour: time.hour,
                    minute: time.minute,
                }),
                _ => {}
            }
        }

        if let Some(slot) = self.selection() {
            self.update_save_thumbnail(slot, services);
        }
    }

    /// Populate the character sheet; does nothing outside a running game
    pub fn set_player(&mut self, stats: &PlayerStats, services: &MenuServices<'_>) {
        if !services.game.is_in_game() {
            return;
        }
        let script = &*services.script;

        let guild = script.string_symbol("TXT_GUILDS", stats.guild).unwrap_or_default();
        self.set(names::PLAYER_GUILD, guild);

        self.set(names::LEVEL, stats.level);
        self.set(names::EXP, stats.experience);
        self.set(names::LEVEL_NEXT, stats.experience_next);
        self.set(names::LEARN, stats.learning_points);

        self.set(names::ATTRIBUTES[0], stats.strength);
        self.set(names::ATTRIBUTES[1], stats.dexterity);
        self.set(names::ATTRIBUTES[2], BindingValue::Ratio(stats.mana, stats.mana_max));
        self.set(names::ATTRIBUTES[3], BindingValue::Ratio(stats.hitpoints, stats.hitpoints_max));

        for (name, value) in names::ARMORS.into_iter().zip(stats.protection) {
            self.set(name, value);
        }

        for (i, talent) in stats.talents.iter().enumerate() {
            let title = script.string_symbol("TXT_TALENTS", i).unwrap_or_default();
            if title.is_empty() {
                continue;
            }
            let skills = script.string_symbol("TXT_TALENTS_SKILLS", i).unwrap_or_default();

            self.set(&format!("MENU_ITEM_TALENT_{}_TITLE", i), title);
            self.set(
                &format!("MENU_ITEM_TALENT_{}_SKILL", i),
                enum_string::option_text(&skills, talent.skill),
            );
            self.set(
                &format!("MENU_ITEM_TALENT_{}", i),
                BindingValue::IntWithSuffix(talent.hit_chance, "%".to_string()),
            );
        }
    }
}
