//! Menu navigation controller
//!
//! [`GameMenu`] owns the items of one open menu section, tracks the current
//! selection and runs the actions bound to items. Requests that affect the
//! menu stack are returned to the owner as [`MenuRequest`]s.

use std::time::Duration;
use thiserror::Error;

use crate::audio::{fx, SoundService};
use crate::core::config::MenuConfig;
use crate::foundation::math::{script_to_pixels, IVec2, PixelRect};
use crate::foundation::time::IntervalTimer;
use crate::settings::SettingsStore;
use crate::ui::backend::{ImageHandle, MenuServices, SaveError, ScriptRuntime, TextureLoader};
use crate::ui::enum_string;

use super::descriptor::{MenuDescriptor, MenuFlags, MAX_ITEMS};
use super::item::{ItemFlags, MenuItem, SelectAction};
use super::layout;
use super::save_slot::{
    self, SaveSummary, CMD_LEAVE_GAME, CMD_NEW_GAME, CMD_SAVEGAME_LOAD, CMD_SAVEGAME_SAVE,
};

/// Menu errors
#[derive(Error, Debug)]
pub enum MenuError {
    /// The script has no instantiable menu with this name
    #[error("unknown menu section '{0}'")]
    UnknownMenu(String),
}

/// Stack operation requested by a menu after executing an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRequest {
    /// Open a sub-menu on top of the stack
    Push(String),
    /// Close the top menu
    Pop,
    /// Close every open menu
    CloseAll,
}

/// One open, navigable menu
pub struct GameMenu {
    section: String,
    descriptor: MenuDescriptor,
    background: Option<ImageHandle>,
    items: Vec<Option<MenuItem>>,
    selection: Option<usize>,
    exit_requested: bool,
    close_all_requested: bool,
    geometry: PixelRect,
    timer: IntervalTimer,
    config: MenuConfig,
}

fn load_image(textures: &mut dyn TextureLoader, path: &str) -> Option<ImageHandle> {
    if path.is_empty() {
        return None;
    }
    textures.load_texture(path)
}

impl GameMenu {
    /// Instantiate the menu section `section` and prepare it for display
    pub fn open(
        section: &str,
        services: &mut MenuServices<'_>,
        config: &MenuConfig,
        owner_size: IVec2,
    ) -> Result<Self, MenuError> {
        let descriptor = services
            .script
            .menu_instance(section)
            .ok_or_else(|| MenuError::UnknownMenu(section.to_string()))?;
        let background = load_image(services.textures, &descriptor.back_pic);

        let mut items: Vec<Option<MenuItem>> = vec![None; MAX_ITEMS];
        for (slot, name) in descriptor.item_slots() {
            let Some(data) = services.script.menu_item_instance(name) else {
                log::warn!("Menu '{}': item '{}' has no script instance", section, name);
                continue;
            };
            let mut item = MenuItem::new(name, data);
            item.image = load_image(services.textures, &item.data.back_pic);
            items[slot] = Some(item);
        }

        let mut menu = Self {
            section: section.to_string(),
            descriptor,
            background,
            items,
            selection: None,
            exit_requested: false,
            close_all_requested: false,
            geometry: PixelRect {
                position: IVec2::zeros(),
                size: owner_size,
            },
            timer: IntervalTimer::from_millis(config.tick_interval_ms),
            config: config.clone(),
        };

        for index in 0..MAX_ITEMS {
            menu.update_item_value(index, &*services.settings);
        }

        if menu.descriptor.flags.contains(MenuFlags::SHOW_INFO) {
            menu.place_info_overlay(&*services.script);
        }

        let in_game = services.game.is_in_game();
        menu.set_selection(i64::from(menu.descriptor.default_selection(in_game)), 1, in_game);
        menu.init_values(services);

        services.game.push_pause();
        log::info!("Opened menu '{}'", section);
        Ok(menu)
    }

    /// Release script references, persist settings and resume the game
    pub fn close(self, services: &mut MenuServices<'_>) {
        for item in self.items.iter().flatten() {
            services.script.release_instance(&item.name);
        }
        services.script.release_instance(&self.section);

        if let Err(e) = services.settings.flush() {
            log::warn!("Failed to flush settings on menu close: {}", e);
        }
        services.game.pop_pause();
        log::info!("Closed menu '{}'", self.section);
    }

    fn place_info_overlay(&mut self, script: &dyn ScriptRuntime) {
        let (mut info_x, mut info_y) = (self.config.info_x, self.config.info_y);
        if script.has_symbol("MENU_INFO_X") && script.has_symbol("MENU_INFO_Y") {
            info_x = script.int_symbol("MENU_INFO_X").unwrap_or(info_x);
            info_y = script.int_symbol("MENU_INFO_Y").unwrap_or(info_y);
        }
        self.geometry.position = IVec2::new(
            script_to_pixels(info_x, self.geometry.w()),
            script_to_pixels(info_y, self.geometry.h()),
        );
    }

    /// Script section this menu was opened from
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Script menu instance
    pub fn descriptor(&self) -> &MenuDescriptor {
        &self.descriptor
    }

    /// Background image
    pub fn background(&self) -> Option<ImageHandle> {
        self.background
    }

    /// Item slots; unused slots are `None`
    pub fn items(&self) -> &[Option<MenuItem>] {
        &self.items
    }

    /// Item in `slot`
    pub fn item(&self, slot: usize) -> Option<&MenuItem> {
        self.items.get(slot).and_then(Option::as_ref)
    }

    /// Mutable item in `slot`
    pub fn item_mut(&mut self, slot: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(slot).and_then(Option::as_mut)
    }

    /// First item with the given script name
    pub fn item_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().flatten().find(|item| item.name == name)
    }

    pub(crate) fn item_by_name_mut(&mut self, name: &str) -> Option<&mut MenuItem> {
        self.items.iter_mut().flatten().find(|item| item.name == name)
    }

    /// Index of the selected slot
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Selected item
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selection.and_then(|slot| self.item(slot))
    }

    /// Whether a back action fired
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Whether a close action fired
    pub fn close_all_requested(&self) -> bool {
        self.close_all_requested
    }

    /// Menu rectangle inside its owner
    pub fn geometry(&self) -> PixelRect {
        self.geometry
    }

    /// Menu configuration
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Select the first selectable slot at or after `desired`, stepping by `direction`
    ///
    /// Scanning wraps around the slot count. When a whole cycle finds nothing
    /// the selection becomes `None`.
    pub fn set_selection(&mut self, desired: i64, direction: i32, in_game: bool) {
        let slots = MAX_ITEMS as i64;
        let step = if direction < 0 { -1 } else { 1 };

        let mut cur = desired.rem_euclid(slots);
        for _ in 0..MAX_ITEMS {
            let slot = cur as usize;
            if self.item(slot).is_some_and(|item| item.is_selectable(in_game)) {
                if self.selection != Some(slot) {
                    log::debug!("Menu '{}': selected slot {}", self.section, slot);
                }
                self.selection = Some(slot);
                return;
            }
            cur = (cur + step).rem_euclid(slots);
        }
        self.selection = None;
    }

    /// Next enabled item after `from`, wrapping around
    ///
    /// Returns `from` itself when no other item qualifies.
    pub fn selected_next_item(&self, from: usize, in_game: bool) -> Option<usize> {
        (1..=MAX_ITEMS)
            .map(|offset| (from + offset) % MAX_ITEMS)
            .find(|&slot| self.item(slot).is_some_and(|item| item.is_enabled(in_game)))
    }

    /// Move the selection by `delta` slots
    pub fn on_move(&mut self, delta: i32, services: &mut MenuServices<'_>) {
        services.sound.play_effect(fx::MENU_BROWSE);

        let desired = match self.selection {
            Some(cur) => cur as i64 + i64::from(delta),
            None if delta >= 0 => 0,
            None => -1,
        };
        let direction = if delta > 0 { 1 } else { -1 };
        self.set_selection(desired, direction, services.game.is_in_game());

        if let Some(slot) = self.selection {
            self.update_save_thumbnail(slot, services);
        }
    }

    /// Activate the selected item
    pub fn on_select(&mut self, services: &mut MenuServices<'_>) -> Vec<MenuRequest> {
        let Some(slot) = self.selection else {
            return Vec::new();
        };
        services.sound.play_effect(fx::MENU_SELECT);
        self.execute(slot, services)
    }

    /// Run the action chain starting at `origin`
    ///
    /// The origin runs its full action list. While the current item carries
    /// [`ItemFlags::EFFECTS_NEXT`], the next enabled item only advances its
    /// option value. The chain ends before it would come back to the origin.
    pub fn execute(&mut self, origin: usize, services: &mut MenuServices<'_>) -> Vec<MenuRequest> {
        let mut requests = Vec::new();
        let mut current = Some(origin);
        let mut visited = 0;

        while let Some(slot) = current {
            if slot == origin {
                self.exec_single(slot, services, &mut requests);
            } else {
                self.exec_chg_option(slot, services.settings);
            }

            visited += 1;
            let chains = self
                .item(slot)
                .is_some_and(|item| item.data.flags.contains(ItemFlags::EFFECTS_NEXT));
            current = if chains && visited < MAX_ITEMS {
                self.selected_next_item(slot, services.game.is_in_game())
                    .filter(|&next| next != origin)
            } else {
                None
            };
        }

        if self.close_all_requested {
            requests.push(MenuRequest::CloseAll);
        } else if self.exit_requested {
            requests.push(MenuRequest::Pop);
        }
        requests
    }

    /// Run every on-select action of one item, then advance its option
    pub fn exec_single(&mut self, slot: usize, services: &mut MenuServices<'_>, requests: &mut Vec<MenuRequest>) {
        let Some(item) = self.item(slot) else {
            return;
        };
        let actions: Vec<(SelectAction, String)> = item
            .data
            .on_sel_action
            .iter()
            .copied()
            .zip(item.data.on_sel_action_s.iter().cloned())
            .collect();
        let execute_fn = item.data.execute_function();

        for (action, arg) in actions {
            match action {
                SelectAction::Undefined
                | SelectAction::StartItem
                | SelectAction::ConsoleCommands
                | SelectAction::ExecCommands => {}
                SelectAction::Back => {
                    services.sound.play_effect(fx::MENU_ESC);
                    self.exit_requested = true;
                }
                SelectAction::StartMenu => {
                    if services.script.has_symbol(&arg) {
                        requests.push(MenuRequest::Push(arg));
                    } else {
                        log::warn!("Menu '{}': sub-menu '{}' does not exist", self.section, arg);
                    }
                }
                SelectAction::Close => {
                    services.sound.play_effect(fx::MENU_ESC);
                    self.close_all_requested = true;
                    match arg.as_str() {
                        CMD_NEW_GAME => services.game.start_new_game(),
                        CMD_LEAVE_GAME => services.game.request_exit(),
                        CMD_SAVEGAME_SAVE => self.exec_save_game(slot, services),
                        CMD_SAVEGAME_LOAD => self.exec_load_game(slot, services),
                        _ => {}
                    }
                }
                SelectAction::PlaySound => services.sound.play_effect(&arg),
            }
        }

        if let Some(function) = execute_fn {
            services.script.call_function(function);
        }

        self.exec_chg_option(slot, services.settings);
    }

    /// Advance a settings-backed option by one, wrapping at its option count
    pub fn exec_chg_option(&mut self, slot: usize, settings: &mut dyn SettingsStore) {
        if !self.item(slot).is_some_and(|item| item.data.has_option()) {
            return;
        }
        self.update_item_value(slot, settings);

        let Some(item) = self.item_mut(slot) else {
            return;
        };
        let count = enum_string::option_count(item.label());
        item.value = match i32::try_from(count) {
            Ok(count) if count > 0 => (item.value.rem_euclid(count) + 1) % count,
            _ => 0,
        };
        settings.set_int(
            &item.data.on_chg_set_option_section,
            &item.data.on_chg_set_option,
            item.value,
        );
    }

    /// Reload an item's value from the settings store
    pub fn update_item_value(&mut self, slot: usize, settings: &dyn SettingsStore) {
        if let Some(item) = self.item_mut(slot) {
            if item.data.has_option() {
                item.value = settings.get_int(&item.data.on_chg_set_option_section, &item.data.on_chg_set_option);
            }
        }
    }

    fn slot_file(&self, slot: usize) -> Option<String> {
        let item = self.item(slot)?;
        let id = save_slot::save_slot_id(&item.name)?;
        Some(self.config.save_slot_file(id))
    }

    fn exec_save_game(&self, slot: usize, services: &mut MenuServices<'_>) {
        if let Some(file) = self.slot_file(slot) {
            services.game.save_game(&file);
        }
    }

    fn exec_load_game(&self, slot: usize, services: &mut MenuServices<'_>) {
        if let Some(file) = self.slot_file(slot) {
            services.game.load_game(&file);
        }
    }

    fn read_save_summary(&self, slot: usize, services: &MenuServices<'_>) -> Option<SaveSummary> {
        let file = self.slot_file(slot)?;
        if !services.saves.exists(&file) {
            return None;
        }
        match services.saves.read_header(&file) {
            Ok(header) => Some(SaveSummary::from(&header)),
            Err(SaveError::OutOfMemory) => None,
            Err(e) => {
                log::debug!("Save header '{}' unreadable: {}", file, e);
                None
            }
        }
    }

    /// Refresh the save preview bindings for a load/save slot item
    pub fn update_save_thumbnail(&mut self, slot: usize, services: &mut MenuServices<'_>) {
        let Some(item) = self.item(slot) else {
            return;
        };
        let actions = &item.data.on_sel_action_s;
        if actions[0] != CMD_SAVEGAME_LOAD && actions[1] != CMD_SAVEGAME_SAVE {
            return;
        }

        match self.read_save_summary(slot, services) {
            Some(summary) => {
                let thumb = load_image(services.textures, &summary.preview);
                self.set(save_slot::THUMB_PIC, thumb);
                self.set(save_slot::LEVEL_NAME, summary.level_name);
                self.set(save_slot::DATE_TIME, summary.date_time);
                self.set(save_slot::GAME_TIME, summary.game_time);
                self.set(save_slot::PLAY_TIME, "");
            }
            None => {
                self.set(save_slot::THUMB_PIC, None::<ImageHandle>);
                self.set(save_slot::LEVEL_NAME, "");
                self.set(save_slot::DATE_TIME, "");
                self.set(save_slot::GAME_TIME, "");
                self.set(save_slot::PLAY_TIME, "");
            }
        }
    }

    /// Periodic update: re-resolve layout and keep the menu music playing
    pub fn on_tick(&mut self, owner_size: IVec2, sound: &mut dyn SoundService) {
        sound.set_music(crate::audio::GameMusic::SysMenu);
        self.geometry = layout::resolve_geometry(&self.descriptor, self.geometry, owner_size, &self.config);
    }

    /// Owner was resized
    pub fn on_resize(&mut self, owner_size: IVec2, sound: &mut dyn SoundService) {
        self.on_tick(owner_size, sound);
    }

    /// Advance the menu timer, ticking once per elapsed interval
    pub fn update(&mut self, delta: Duration, owner_size: IVec2, sound: &mut dyn SoundService) {
        if self.timer.advance(delta) > 0 {
            self.on_tick(owner_size, sound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsStore;
    use crate::ui::backend::{GameTime, SaveGameHeader, WallClock};
    use crate::ui::menu::item::{ItemKind, MAX_SEL_ACTIONS};
    use crate::ui::menu::test_support::{label, selectable, Harness};
    use crate::ui::menu::MenuItemData;

    fn open(h: &mut Harness, section: &str) -> GameMenu {
        GameMenu::open(section, &mut h.services(), &MenuConfig::default(), IVec2::new(640, 480))
            .expect("menu opens")
    }

    fn option_item(values: &str, key: &str) -> MenuItemData {
        let mut data = selectable(values);
        data.kind = ItemKind::ChoiceBox;
        data.on_chg_set_option_section = "GAME".to_string();
        data.on_chg_set_option = key.to_string();
        data
    }

    fn with_actions(mut data: MenuItemData, actions: &[(SelectAction, &str)]) -> MenuItemData {
        assert!(actions.len() <= MAX_SEL_ACTIONS);
        for (i, (action, arg)) in actions.iter().enumerate() {
            data.on_sel_action[i] = *action;
            data.on_sel_action_s[i] = arg.to_string();
        }
        data
    }

    fn three_item_menu(h: &mut Harness) {
        h.script.add_menu(
            "MENU_MAIN",
            vec![("A", selectable("a")), ("B", selectable("b")), ("C", selectable("c"))],
        );
    }

    #[test]
    fn test_unknown_section() {
        let mut h = Harness::new();
        let result = GameMenu::open("MENU_NOPE", &mut h.services(), &MenuConfig::default(), IVec2::new(640, 480));
        assert!(matches!(result, Err(MenuError::UnknownMenu(name)) if name == "MENU_NOPE"));
        assert_eq!(h.game.pauses, 0);
    }

    #[test]
    fn test_open_selects_default_and_pauses() {
        let mut h = Harness::new();
        three_item_menu(&mut h);
        h.script.menus.get_mut("MENU_MAIN").unwrap().default_out_game = 1;

        let menu = open(&mut h, "MENU_MAIN");
        assert_eq!(menu.selection(), Some(1));
        assert_eq!(h.game.pauses, 1);

        menu.close(&mut h.services());
        assert_eq!(h.game.pauses, 0);
        assert_eq!(h.script.released, vec!["A", "B", "C", "MENU_MAIN"]);
    }

    #[test]
    fn test_move_wraps_forward_and_backward() {
        let mut h = Harness::new();
        three_item_menu(&mut h);
        let mut menu = open(&mut h, "MENU_MAIN");

        menu.set_selection(2, 1, false);
        menu.on_move(1, &mut h.services());
        assert_eq!(menu.selection(), Some(0));

        menu.on_move(-1, &mut h.services());
        assert_eq!(menu.selection(), Some(2));
        assert_eq!(h.sound.played, vec![fx::MENU_BROWSE, fx::MENU_BROWSE]);
    }

    #[test]
    fn test_move_skips_disabled_and_unselectable() {
        let mut h = Harness::new();
        let mut in_game_only = selectable("continue");
        in_game_only.flags |= ItemFlags::ONLY_IN_GAME;
        h.script.add_menu(
            "MENU_MAIN",
            vec![
                ("A", selectable("new")),
                ("B", in_game_only),
                ("TITLE", label("title")),
                ("C", selectable("quit")),
            ],
        );
        let mut menu = open(&mut h, "MENU_MAIN");
        assert_eq!(menu.selection(), Some(0));

        menu.on_move(1, &mut h.services());
        assert_eq!(menu.selection(), Some(3));

        h.game.in_game = true;
        menu.on_move(-1, &mut h.services());
        assert_eq!(menu.selection(), Some(1));
    }

    #[test]
    fn test_nothing_selectable() {
        let mut h = Harness::new();
        h.script.add_menu("MENU_INFO", vec![("T", label("just text"))]);
        let mut menu = open(&mut h, "MENU_INFO");
        assert_eq!(menu.selection(), None);
        assert!(menu.on_select(&mut h.services()).is_empty());
    }

    #[test]
    fn test_next_item_ignores_selectable_flag() {
        let mut h = Harness::new();
        h.script.add_menu("MENU_MAIN", vec![("A", selectable("a")), ("", label("")), ("T", label("t"))]);
        let menu = open(&mut h, "MENU_MAIN");
        assert_eq!(menu.selected_next_item(0, false), Some(2));
        assert_eq!(menu.selected_next_item(2, false), Some(0));
    }

    #[test]
    fn test_option_wraps_at_count() {
        let mut h = Harness::new();
        h.settings.set_int("GAME", "detail", 2);
        h.script.add_menu("MENU_OPT", vec![("D", option_item("Detail#low|mid|high", "detail"))]);
        let mut menu = open(&mut h, "MENU_OPT");
        assert_eq!(menu.item(0).map(|i| i.value), Some(2));
        assert_eq!(menu.item(0).map(|i| i.display_text()), Some("high"));

        let requests = menu.on_select(&mut h.services());
        assert!(requests.is_empty());
        assert_eq!(menu.item(0).map(|i| i.value), Some(0));
        assert_eq!(h.settings.get_int("GAME", "detail"), 0);
        assert_eq!(h.sound.played, vec![fx::MENU_SELECT]);
    }

    #[test]
    fn test_option_cycles_from_extreme_stored_value() {
        let mut h = Harness::new();
        h.settings.set_int("GAME", "detail", i32::MAX);
        h.script.add_menu("MENU_OPT", vec![("D", option_item("Detail#low|mid|high", "detail"))]);
        let mut menu = open(&mut h, "MENU_OPT");

        menu.on_select(&mut h.services());
        assert_eq!(menu.item(0).map(|i| i.value), Some(2));
        assert_eq!(h.settings.get_int("GAME", "detail"), 2);

        h.settings.set_int("GAME", "detail", i32::MIN);
        menu.on_select(&mut h.services());
        assert_eq!(h.settings.get_int("GAME", "detail"), 2);
    }

    #[test]
    fn test_option_without_choices_resets_to_zero() {
        let mut h = Harness::new();
        h.settings.set_int("GAME", "flag", 4);
        h.script.add_menu("MENU_OPT", vec![("F", option_item("plain", "flag"))]);
        let mut menu = open(&mut h, "MENU_OPT");
        menu.on_select(&mut h.services());
        assert_eq!(h.settings.get_int("GAME", "flag"), 0);
    }

    #[test]
    fn test_effects_next_chain() {
        let mut h = Harness::new();
        let mut first = option_item("#a|b", "x");
        first.flags |= ItemFlags::EFFECTS_NEXT;
        let mut second = option_item("#a|b|c", "y");
        second.flags = ItemFlags::EFFECTS_NEXT;
        let third = option_item("#a|b|c", "z");
        let fourth = option_item("#a|b|c", "w");
        h.script.add_menu(
            "MENU_OPT",
            vec![("X", first), ("Y", second), ("Z", third), ("W", fourth)],
        );
        let mut menu = open(&mut h, "MENU_OPT");
        menu.execute(0, &mut h.services());

        assert_eq!(h.settings.get_int("GAME", "x"), 1);
        assert_eq!(h.settings.get_int("GAME", "y"), 1);
        assert_eq!(h.settings.get_int("GAME", "z"), 1);
        assert_eq!(h.settings.get_int("GAME", "w"), 0);
    }

    #[test]
    fn test_effects_next_chain_stops_at_origin() {
        let mut h = Harness::new();
        let mut first = option_item("#a|b|c", "x");
        first.flags |= ItemFlags::EFFECTS_NEXT;
        let mut second = option_item("#a|b|c", "y");
        second.flags |= ItemFlags::EFFECTS_NEXT;
        h.script.add_menu("MENU_OPT", vec![("X", first), ("Y", second)]);
        let mut menu = open(&mut h, "MENU_OPT");
        menu.execute(0, &mut h.services());

        assert_eq!(h.settings.get_int("GAME", "x"), 1);
        assert_eq!(h.settings.get_int("GAME", "y"), 1);
    }

    #[test]
    fn test_back_pops_and_close_wins() {
        let mut h = Harness::new();
        h.script.add_menu(
            "MENU_MAIN",
            vec![
                ("BACK", with_actions(selectable("back"), &[(SelectAction::Back, "")])),
                (
                    "BOTH",
                    with_actions(selectable("both"), &[(SelectAction::Back, ""), (SelectAction::Close, "")]),
                ),
            ],
        );
        let mut menu = open(&mut h, "MENU_MAIN");
        assert_eq!(menu.execute(0, &mut h.services()), vec![MenuRequest::Pop]);
        assert!(menu.exit_requested());

        assert_eq!(menu.execute(1, &mut h.services()), vec![MenuRequest::CloseAll]);
        assert!(menu.close_all_requested());
        assert_eq!(h.sound.played, vec![fx::MENU_ESC, fx::MENU_ESC, fx::MENU_ESC]);
    }

    #[test]
    fn test_start_menu_requires_symbol() {
        let mut h = Harness::new();
        h.script.add_menu(
            "MENU_MAIN",
            vec![
                ("OPT", with_actions(selectable("options"), &[(SelectAction::StartMenu, "MENU_OPTIONS")])),
                ("BAD", with_actions(selectable("broken"), &[(SelectAction::StartMenu, "MENU_MISSING")])),
            ],
        );
        h.script.add_menu("MENU_OPTIONS", vec![("A", selectable("a"))]);
        let mut menu = open(&mut h, "MENU_MAIN");

        assert_eq!(
            menu.execute(0, &mut h.services()),
            vec![MenuRequest::Push("MENU_OPTIONS".to_string())]
        );
        assert!(menu.execute(1, &mut h.services()).is_empty());
    }

    #[test]
    fn test_close_commands() {
        let mut h = Harness::new();
        let mut run = with_actions(
            selectable("new"),
            &[(SelectAction::Close, "NEW_GAME"), (SelectAction::PlaySound, "GAME_START")],
        );
        run.on_event_action[1] = 7;
        h.script.add_menu(
            "MENU_MAIN",
            vec![
                ("NEW", run),
                ("QUIT", with_actions(selectable("quit"), &[(SelectAction::Close, "LEAVE_GAME")])),
                (
                    "MENUITEM_SAVE_SLOT_3",
                    with_actions(selectable("slot"), &[(SelectAction::Close, "SAVEGAME_SAVE")]),
                ),
                (
                    "MENUITEM_LOAD_SLOT_12",
                    with_actions(selectable("slot"), &[(SelectAction::Close, "SAVEGAME_LOAD")]),
                ),
            ],
        );
        let mut menu = open(&mut h, "MENU_MAIN");
        for slot in 0..4 {
            assert_eq!(menu.execute(slot, &mut h.services()), vec![MenuRequest::CloseAll]);
        }

        assert_eq!(h.game.new_games, 1);
        assert!(h.game.exit_requested);
        assert_eq!(h.game.saved, vec!["save_slot_3.sav"]);
        assert_eq!(h.game.loaded, vec!["save_slot_12.sav"]);
        assert_eq!(h.script.calls, vec![7]);
        assert!(h.sound.played.contains(&"GAME_START".to_string()));
    }

    fn load_menu(h: &mut Harness) {
        let mut stale = label("stale");
        stale.back_pic = "old_thumb.tga".to_string();
        h.script.add_menu(
            "MENU_LOAD",
            vec![
                (
                    "MENUITEM_LOAD_SLOT_1",
                    with_actions(selectable("slot 1"), &[(SelectAction::Close, "SAVEGAME_LOAD")]),
                ),
                (save_slot::THUMB_PIC, stale),
                (save_slot::LEVEL_NAME, label("stale")),
                (save_slot::DATE_TIME, label("stale")),
                (save_slot::GAME_TIME, label("stale")),
                (save_slot::PLAY_TIME, label("stale")),
            ],
        );
    }

    #[test]
    fn test_missing_save_clears_preview() {
        let mut h = Harness::new();
        load_menu(&mut h);
        let menu = open(&mut h, "MENU_LOAD");

        assert_eq!(menu.item_by_name(save_slot::THUMB_PIC).and_then(|i| i.image), None);
        for name in [save_slot::LEVEL_NAME, save_slot::DATE_TIME, save_slot::GAME_TIME, save_slot::PLAY_TIME] {
            assert_eq!(menu.item_by_name(name).map(|i| i.label()), Some(""), "{name}");
        }
    }

    #[test]
    fn test_unreadable_save_clears_preview() {
        let mut h = Harness::new();
        load_menu(&mut h);
        h.saves.corrupt.insert("save_slot_1.sav".to_string());
        let menu = open(&mut h, "MENU_LOAD");
        assert_eq!(menu.item_by_name(save_slot::LEVEL_NAME).map(|i| i.label()), Some(""));
    }

    #[test]
    fn test_existing_save_fills_preview() {
        let mut h = Harness::new();
        load_menu(&mut h);
        h.saves.headers.insert(
            "save_slot_1.sav".to_string(),
            SaveGameHeader {
                preview: "thumb_1.tga".to_string(),
                world: "NEWWORLD.ZEN".to_string(),
                saved_at: WallClock { hour: 9, minute: 5 },
                world_time: GameTime { day: 2, hour: 13, minute: 7 },
            },
        );
        let menu = open(&mut h, "MENU_LOAD");

        assert!(menu.item_by_name(save_slot::THUMB_PIC).is_some_and(|i| i.image.is_some()));
        assert_eq!(h.textures.loaded.last().map(String::as_str), Some("thumb_1.tga"));
        let text = |name| menu.item_by_name(name).map(|i| i.label().to_string());
        assert_eq!(text(save_slot::LEVEL_NAME).as_deref(), Some("NEWWORLD.ZEN"));
        assert_eq!(text(save_slot::DATE_TIME).as_deref(), Some("9:05"));
        assert_eq!(text(save_slot::GAME_TIME).as_deref(), Some("2 - 13:07"));
        assert_eq!(text(save_slot::PLAY_TIME).as_deref(), Some(""));
    }

    #[test]
    fn test_moving_onto_slot_refreshes_preview() {
        let mut h = Harness::new();
        h.script.add_menu(
            "MENU_LOAD",
            vec![
                ("BACK", with_actions(selectable("back"), &[(SelectAction::Back, "")])),
                (
                    "MENUITEM_LOAD_SLOT_2",
                    with_actions(selectable("slot 2"), &[(SelectAction::Close, "SAVEGAME_LOAD")]),
                ),
                (save_slot::THUMB_PIC, label("")),
                (save_slot::LEVEL_NAME, label("stale")),
                (save_slot::DATE_TIME, label("stale")),
            ],
        );
        let mut menu = open(&mut h, "MENU_LOAD");
        assert_eq!(menu.selection(), Some(0));
        let text = |menu: &GameMenu, name| menu.item_by_name(name).map(|i| i.label().to_string());
        assert_eq!(text(&menu, save_slot::LEVEL_NAME).as_deref(), Some("stale"));

        menu.on_move(1, &mut h.services());
        assert_eq!(menu.selection(), Some(1));
        assert_eq!(text(&menu, save_slot::LEVEL_NAME).as_deref(), Some(""));
        assert_eq!(menu.item_by_name(save_slot::THUMB_PIC).and_then(|i| i.image), None);

        h.saves.headers.insert(
            "save_slot_2.sav".to_string(),
            SaveGameHeader {
                preview: "thumb_2.tga".to_string(),
                world: "OLDWORLD.ZEN".to_string(),
                saved_at: WallClock { hour: 21, minute: 40 },
                world_time: GameTime { day: 5, hour: 6, minute: 30 },
            },
        );
        menu.on_move(-1, &mut h.services());
        menu.on_move(1, &mut h.services());
        assert_eq!(menu.selection(), Some(1));
        assert_eq!(text(&menu, save_slot::LEVEL_NAME).as_deref(), Some("OLDWORLD.ZEN"));
        assert_eq!(text(&menu, save_slot::DATE_TIME).as_deref(), Some("21:40"));
        assert!(menu.item_by_name(save_slot::THUMB_PIC).is_some_and(|i| i.image.is_some()));
    }

    #[test]
    fn test_info_overlay_position() {
        let mut h = Harness::new();
        h.script.add_menu("MENU_STATUS", vec![("T", label("t"))]).flags = MenuFlags::SHOW_INFO;
        let menu = open(&mut h, "MENU_STATUS");
        assert_eq!(menu.geometry().position, IVec2::new(78, 439));

        h.script.ints.insert("MENU_INFO_X".to_string(), 4096);
        h.script.ints.insert("MENU_INFO_Y".to_string(), 0);
        let menu = open(&mut h, "MENU_STATUS");
        assert_eq!(menu.geometry().position, IVec2::new(320, 0));
    }

    #[test]
    fn test_tick_sets_menu_music() {
        let mut h = Harness::new();
        three_item_menu(&mut h);
        let mut menu = open(&mut h, "MENU_MAIN");

        menu.update(Duration::from_millis(50), IVec2::new(800, 600), &mut h.sound);
        assert!(h.sound.music.is_empty());

        menu.update(Duration::from_millis(60), IVec2::new(800, 600), &mut h.sound);
        assert_eq!(h.sound.music, vec![crate::audio::GameMusic::SysMenu]);
        assert_eq!(menu.geometry().size, IVec2::new(800, 600));
    }
}
