//! Menu collaborator interfaces
//!
//! The menu controller never talks to the script VM, the game session, the
//! texture cache or the save system directly. Everything it consumes goes
//! through the traits in this module so the navigation logic can run
//! against test doubles.

use thiserror::Error;

use crate::audio::SoundService;
use crate::settings::SettingsStore;
use crate::ui::menu::{MenuDescriptor, MenuItemData};

/// Handle to a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    /// Loader-assigned identifier
    pub id: u64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageHandle {
    /// Whether the image has no pixels to draw
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Image loading service
pub trait TextureLoader {
    /// Load an image by script path, `None` when it cannot be found or decoded
    fn load_texture(&mut self, path: &str) -> Option<ImageHandle>;
}

/// Script virtual machine as seen by menus
pub trait ScriptRuntime {
    /// Whether a symbol with this name exists
    fn has_symbol(&self, name: &str) -> bool;

    /// Instantiate a menu section
    fn menu_instance(&mut self, name: &str) -> Option<MenuDescriptor>;

    /// Instantiate a menu item
    fn menu_item_instance(&mut self, name: &str) -> Option<MenuItemData>;

    /// Read an integer symbol
    fn int_symbol(&self, name: &str) -> Option<i32>;

    /// Read entry `index` of a string array symbol
    fn string_symbol(&self, name: &str, index: usize) -> Option<String>;

    /// Run a script function by symbol index
    fn call_function(&mut self, symbol_index: usize);

    /// Drop the script-side references held by an instance
    fn release_instance(&mut self, name: &str);
}

/// In-game calendar time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameTime {
    /// Day counter
    pub day: i32,
    /// Hour of day
    pub hour: i32,
    /// Minute of hour
    pub minute: i32,
}

/// Wall clock time stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallClock {
    /// Hour of day
    pub hour: i32,
    /// Minute of hour
    pub minute: i32,
}

/// Game session operations menus can trigger
pub trait GameSession {
    /// Whether a world is currently loaded and played
    fn is_in_game(&self) -> bool;

    /// Current world clock, `None` outside of a world
    fn world_time(&self) -> Option<GameTime>;

    /// Pause the game while a menu is open
    fn push_pause(&mut self);

    /// Undo one [`GameSession::push_pause`]
    fn pop_pause(&mut self);

    /// Start a new game in the default world
    fn start_new_game(&mut self);

    /// Ask the application to quit
    fn request_exit(&mut self);

    /// Write the running game into a save file
    fn save_game(&mut self, file_name: &str);

    /// Load a save file
    fn load_game(&mut self, file_name: &str);
}

/// Save header reading errors
#[derive(Error, Debug)]
pub enum SaveError {
    /// Header data could not be allocated
    #[error("out of memory while reading save header")]
    OutOfMemory,

    /// File system or decoding failure
    #[error("save I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary stored at the start of every save file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveGameHeader {
    /// Path of the preview screenshot
    pub preview: String,
    /// World the game was saved in
    pub world: String,
    /// Real-world time of the save
    pub saved_at: WallClock,
    /// In-game time of the save
    pub world_time: GameTime,
}

/// Read access to save files
pub trait SaveStorage {
    /// Whether a save file with this name exists
    fn exists(&self, file_name: &str) -> bool;

    /// Parse the header of a save file
    fn read_header(&self, file_name: &str) -> Result<SaveGameHeader, SaveError>;
}

/// Font variant used to draw an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Regular item
    #[default]
    Normal,
    /// Currently selected item
    Highlighted,
    /// Item unavailable in the current game state
    Disabled,
}

/// Font reference carried by text paint commands
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FontRef {
    /// Script font name, empty for the default font
    pub name: String,
    /// Variant
    pub style: FontStyle,
}

impl FontRef {
    /// Create a font reference
    pub fn new(name: impl Into<String>, style: FontStyle) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }
}

/// Text measuring service
pub trait FontMetrics {
    /// Width of `text` in pixels
    fn text_width(&self, font: &FontRef, text: &str) -> i32;

    /// Nominal glyph height in pixels
    fn pixel_size(&self, font: &FontRef) -> i32;
}

/// Everything a menu needs from the rest of the game
pub struct MenuServices<'a> {
    /// Script VM
    pub script: &'a mut dyn ScriptRuntime,
    /// Running game
    pub game: &'a mut dyn GameSession,
    /// Option values
    pub settings: &'a mut dyn SettingsStore,
    /// Sound effects and music
    pub sound: &'a mut dyn SoundService,
    /// Image loading
    pub textures: &'a mut dyn TextureLoader,
    /// Save files
    pub saves: &'a dyn SaveStorage,
}
