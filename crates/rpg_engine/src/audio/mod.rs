//! Audio interface used by the menu system
//!
//! Playback itself belongs to the game's sound backend; menus only need to
//! resolve named effects, fire them globally and pick a music theme.

/// Handle to a loaded sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u64);

/// Music themes menus can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMusic {
    /// Main/system menu theme
    SysMenu,
}

/// Sound effect names emitted by the menu controller
pub mod fx {
    /// Selection moved
    pub const MENU_BROWSE: &str = "MENU_BROWSE";
    /// Item activated
    pub const MENU_SELECT: &str = "MENU_SELECT";
    /// Menu left or closed
    pub const MENU_ESC: &str = "MENU_ESC";
}

/// Sound service consumed by the menu system
pub trait SoundService {
    /// Resolve a named effect, `None` if the game has no such effect
    fn load_effect(&mut self, name: &str) -> Option<SoundHandle>;

    /// Play an effect without spatialization
    fn play_global(&mut self, effect: SoundHandle);

    /// Switch the active music theme
    fn set_music(&mut self, track: GameMusic);

    /// Resolve and play a named effect; unknown names are ignored
    fn play_effect(&mut self, name: &str) {
        match self.load_effect(name) {
            Some(handle) => self.play_global(handle),
            None => log::debug!("Sound effect '{}' not available", name),
        }
    }
}
