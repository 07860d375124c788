//! Menu item model
//!
//! [`MenuItemData`] is the item instance as the script defines it;
//! [`MenuItem`] wraps it with the runtime display state the controller
//! mutates.

use bitflags::bitflags;

use crate::foundation::math::IVec2;
use crate::ui::backend::ImageHandle;
use crate::ui::enum_string;

/// Number of text slots per item
pub const MAX_USER_STRINGS: usize = 10;

/// Number of on-select action slots per item
pub const MAX_SEL_ACTIONS: usize = 5;

/// Number of event action slots per item
pub const MAX_EVENTS: usize = 10;

/// Event slot of the "execute" script hook
pub const SEL_EVENT_EXECUTE: usize = 1;

bitflags! {
    /// Item behavior flags as stored by the script
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u32 {
        /// Image uses a chroma key
        const CHROMAKEYED    = 1 << 0;
        /// Image is drawn translucent
        const TRANSPARENT    = 1 << 1;
        /// Item can receive the selection
        const SELECTABLE     = 1 << 2;
        /// Item can be dragged
        const MOVEABLE       = 1 << 3;
        /// Text is centered horizontally
        const TXT_CENTER     = 1 << 4;
        /// Item is disabled by script
        const DISABLED       = 1 << 5;
        /// Item fades in
        const FADE           = 1 << 6;
        /// Selecting the item also advances the option of the next item
        const EFFECTS_NEXT   = 1 << 7;
        /// Only usable from the main menu
        const ONLY_OUT_GAME  = 1 << 8;
        /// Only usable while playing
        const ONLY_IN_GAME   = 1 << 9;
        /// Option affects performance
        const PERF_OPTION    = 1 << 10;
        /// Text wraps onto several lines
        const MULTILINE      = 1 << 11;
        /// Changes need an explicit apply
        const NEEDS_APPLY    = 1 << 12;
        /// Changes need a restart
        const NEEDS_RESTART  = 1 << 13;
        /// Item belongs to an extended menu
        const EXTENDED_MENU  = 1 << 14;
    }
}

/// Item widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemKind {
    /// Unknown kind
    #[default]
    Undefined,
    /// Static or selectable text
    Text,
    /// Slider
    Slider,
    /// Text input
    Input,
    /// Mouse cursor
    Cursor,
    /// Option cycling through an enum string
    ChoiceBox,
    /// Button
    Button,
    /// List box
    ListBox,
}

impl ItemKind {
    /// Decode the script kind code
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Text,
            2 => Self::Slider,
            3 => Self::Input,
            4 => Self::Cursor,
            5 => Self::ChoiceBox,
            6 => Self::Button,
            7 => Self::ListBox,
            _ => Self::Undefined,
        }
    }
}

/// Action run when an item is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectAction {
    /// Empty slot
    #[default]
    Undefined,
    /// Leave this menu
    Back,
    /// Open the sub-menu named by the action argument
    StartMenu,
    /// Activate another item
    StartItem,
    /// Close the whole menu stack, optionally running a special command
    Close,
    /// Console commands
    ConsoleCommands,
    /// Play the sound named by the action argument
    PlaySound,
    /// Execute commands
    ExecCommands,
}

impl SelectAction {
    /// Decode the script action code; unknown codes become [`SelectAction::Undefined`]
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Undefined,
            1 => Self::Back,
            2 => Self::StartMenu,
            3 => Self::StartItem,
            4 => Self::Close,
            5 => Self::ConsoleCommands,
            6 => Self::PlaySound,
            7 => Self::ExecCommands,
            other => {
                log::debug!("Ignoring unknown menu action code {}", other);
                Self::Undefined
            }
        }
    }
}

/// Convert a script dimension, where `-1` means "not set"
pub fn script_dimension(value: i32) -> Option<i32> {
    (value != -1).then_some(value)
}

/// Item instance as defined by the script
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemData {
    /// Font used for the item text
    pub font_name: String,
    /// Text slots; slot 0 is the label, slot 1 the hint line
    pub text: [String; MAX_USER_STRINGS],
    /// Background image path
    pub back_pic: String,
    /// Widget kind
    pub kind: ItemKind,
    /// Position in script units
    pub pos: IVec2,
    /// Explicit width in script units
    pub dim_x: Option<i32>,
    /// Explicit height in script units
    pub dim_y: Option<i32>,
    /// Behavior flags
    pub flags: ItemFlags,
    /// On-select actions, run in slot order
    pub on_sel_action: [SelectAction; MAX_SEL_ACTIONS],
    /// String argument of each on-select action
    pub on_sel_action_s: [String; MAX_SEL_ACTIONS],
    /// Settings key changed by the item
    pub on_chg_set_option: String,
    /// Settings section changed by the item
    pub on_chg_set_option_section: String,
    /// Script function indices per event slot
    pub on_event_action: [i32; MAX_EVENTS],
}

impl MenuItemData {
    /// Whether the item is backed by a settings value
    pub fn has_option(&self) -> bool {
        !self.on_chg_set_option_section.is_empty() && !self.on_chg_set_option.is_empty()
    }

    /// Script function bound to the execute event, if any
    pub fn execute_function(&self) -> Option<usize> {
        let index = self.on_event_action[SEL_EVENT_EXECUTE];
        (index > 0).then_some(index as usize)
    }
}

/// Runtime state of one menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Script symbol name
    pub name: String,
    /// Script instance data
    pub data: MenuItemData,
    /// Image drawn behind the text
    pub image: Option<ImageHandle>,
    /// Current option index or gauge value
    pub value: i32,
    /// Whether the item is painted
    pub visible: bool,
}

impl MenuItem {
    /// Wrap a script instance
    pub fn new(name: impl Into<String>, data: MenuItemData) -> Self {
        Self {
            name: name.into(),
            data,
            image: None,
            value: 0,
            visible: true,
        }
    }

    /// Whether the item is usable in the current game state
    pub fn is_enabled(&self, in_game: bool) -> bool {
        let flags = self.data.flags;
        if flags.contains(ItemFlags::ONLY_IN_GAME) && !in_game {
            return false;
        }
        if flags.contains(ItemFlags::ONLY_OUT_GAME) && in_game {
            return false;
        }
        true
    }

    /// Whether the selection may land on this item
    pub fn is_selectable(&self, in_game: bool) -> bool {
        self.data.flags.contains(ItemFlags::SELECTABLE) && self.is_enabled(in_game)
    }

    /// Primary text slot
    pub fn label(&self) -> &str {
        &self.data.text[0]
    }

    /// Secondary text slot shown at the bottom of the screen while selected
    pub fn hint(&self) -> &str {
        &self.data.text[1]
    }

    /// Text to display for the item
    pub fn display_text(&self) -> &str {
        match self.data.kind {
            ItemKind::Text => self.label(),
            ItemKind::ChoiceBox => enum_string::option_text(self.label(), self.value),
            _ => "",
        }
    }

    /// Whether the item has an image worth drawing
    pub fn has_image(&self) -> bool {
        self.image.is_some_and(|img| !img.is_empty())
    }
}
