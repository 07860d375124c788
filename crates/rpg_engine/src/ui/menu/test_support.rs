//! In-memory collaborators for menu tests

use std::collections::{HashMap, HashSet};

use crate::audio::{GameMusic, SoundHandle, SoundService};
use crate::settings::FileSettings;
use crate::ui::backend::{
    FontMetrics, FontRef, GameSession, GameTime, ImageHandle, MenuServices, SaveError, SaveGameHeader,
    SaveStorage, ScriptRuntime, TextureLoader,
};

use super::descriptor::MenuDescriptor;
use super::item::{ItemFlags, ItemKind, MenuItemData};

#[derive(Default)]
pub struct StubScript {
    pub menus: HashMap<String, MenuDescriptor>,
    pub items: HashMap<String, MenuItemData>,
    pub ints: HashMap<String, i32>,
    pub strings: HashMap<String, Vec<String>>,
    pub calls: Vec<usize>,
    pub released: Vec<String>,
}

impl StubScript {
    /// Register a menu whose slots hold `items` in order
    pub fn add_menu(&mut self, name: &str, items: Vec<(&str, MenuItemData)>) -> &mut MenuDescriptor {
        let mut descriptor = MenuDescriptor::default();
        for (item_name, data) in items {
            descriptor.items.push(item_name.to_string());
            if !item_name.is_empty() {
                self.items.insert(item_name.to_string(), data);
            }
        }
        self.menus.entry(name.to_string()).or_insert(descriptor)
    }
}

impl ScriptRuntime for StubScript {
    fn has_symbol(&self, name: &str) -> bool {
        self.menus.contains_key(name)
            || self.items.contains_key(name)
            || self.ints.contains_key(name)
            || self.strings.contains_key(name)
    }

    fn menu_instance(&mut self, name: &str) -> Option<MenuDescriptor> {
        self.menus.get(name).cloned()
    }

    fn menu_item_instance(&mut self, name: &str) -> Option<MenuItemData> {
        self.items.get(name).cloned()
    }

    fn int_symbol(&self, name: &str) -> Option<i32> {
        self.ints.get(name).copied()
    }

    fn string_symbol(&self, name: &str, index: usize) -> Option<String> {
        self.strings.get(name)?.get(index).cloned()
    }

    fn call_function(&mut self, symbol_index: usize) {
        self.calls.push(symbol_index);
    }

    fn release_instance(&mut self, name: &str) {
        self.released.push(name.to_string());
    }
}

#[derive(Default)]
pub struct StubGame {
    pub in_game: bool,
    pub time: Option<GameTime>,
    pub pauses: i32,
    pub new_games: u32,
    pub exit_requested: bool,
    pub saved: Vec<String>,
    pub loaded: Vec<String>,
}

impl GameSession for StubGame {
    fn is_in_game(&self) -> bool {
        self.in_game
    }

    fn world_time(&self) -> Option<GameTime> {
        self.time
    }

    fn push_pause(&mut self) {
        self.pauses += 1;
    }

    fn pop_pause(&mut self) {
        self.pauses -= 1;
    }

    fn start_new_game(&mut self) {
        self.new_games += 1;
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn save_game(&mut self, file_name: &str) {
        self.saved.push(file_name.to_string());
    }

    fn load_game(&mut self, file_name: &str) {
        self.loaded.push(file_name.to_string());
    }
}

#[derive(Default)]
pub struct SoundRecorder {
    names: Vec<String>,
    pub played: Vec<String>,
    pub music: Vec<GameMusic>,
}

impl SoundService for SoundRecorder {
    fn load_effect(&mut self, name: &str) -> Option<SoundHandle> {
        if name.is_empty() {
            return None;
        }
        self.names.push(name.to_string());
        Some(SoundHandle(self.names.len() as u64 - 1))
    }

    fn play_global(&mut self, effect: SoundHandle) {
        if let Some(name) = self.names.get(effect.0 as usize) {
            self.played.push(name.clone());
        }
    }

    fn set_music(&mut self, track: GameMusic) {
        self.music.push(track);
    }
}

#[derive(Default)]
pub struct StubTextures {
    pub loaded: Vec<String>,
}

impl TextureLoader for StubTextures {
    fn load_texture(&mut self, path: &str) -> Option<ImageHandle> {
        self.loaded.push(path.to_string());
        Some(ImageHandle {
            id: self.loaded.len() as u64,
            width: 64,
            height: 32,
        })
    }
}

#[derive(Default)]
pub struct StubSaves {
    pub headers: HashMap<String, SaveGameHeader>,
    pub corrupt: HashSet<String>,
}

impl SaveStorage for StubSaves {
    fn exists(&self, file_name: &str) -> bool {
        self.headers.contains_key(file_name) || self.corrupt.contains(file_name)
    }

    fn read_header(&self, file_name: &str) -> Result<SaveGameHeader, SaveError> {
        if self.corrupt.contains(file_name) {
            return Err(SaveError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "truncated header",
            )));
        }
        self.headers
            .get(file_name)
            .cloned()
            .ok_or_else(|| SaveError::Io(std::io::ErrorKind::NotFound.into()))
    }
}

/// Monospace font: 8 pixels per character, 16 pixels high
pub struct FixedFont;

impl FontMetrics for FixedFont {
    fn text_width(&self, _font: &FontRef, text: &str) -> i32 {
        text.chars().count() as i32 * 8
    }

    fn pixel_size(&self, _font: &FontRef) -> i32 {
        16
    }
}

/// Owns one of every collaborator
pub struct Harness {
    pub script: StubScript,
    pub game: StubGame,
    pub settings: FileSettings,
    pub sound: SoundRecorder,
    pub textures: StubTextures,
    pub saves: StubSaves,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            script: StubScript::default(),
            game: StubGame::default(),
            settings: FileSettings::in_memory(),
            sound: SoundRecorder::default(),
            textures: StubTextures::default(),
            saves: StubSaves::default(),
        }
    }

    pub fn services(&mut self) -> MenuServices<'_> {
        MenuServices {
            script: &mut self.script,
            game: &mut self.game,
            settings: &mut self.settings,
            sound: &mut self.sound,
            textures: &mut self.textures,
            saves: &self.saves,
        }
    }
}

/// Plain selectable text item
pub fn selectable(text: &str) -> MenuItemData {
    let mut data = MenuItemData {
        kind: ItemKind::Text,
        flags: ItemFlags::SELECTABLE,
        ..Default::default()
    };
    data.text[0] = text.to_string();
    data
}

/// Unselectable label
pub fn label(text: &str) -> MenuItemData {
    let mut data = MenuItemData {
        kind: ItemKind::Text,
        ..Default::default()
    };
    data.text[0] = text.to_string();
    data
}
