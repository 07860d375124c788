//! Menu stack
//!
//! Owns every open [`GameMenu`], forwards input to the top one and applies
//! the stack requests menus return.

use std::time::Duration;

use crate::core::config::MenuConfig;
use crate::foundation::math::IVec2;
use crate::ui::backend::{FontMetrics, MenuServices};
use crate::ui::rendering::{MenuPaintCommand, MenuRenderer};

use super::bindings::PlayerStats;
use super::controller::{GameMenu, MenuError, MenuRequest};

/// Stack of open menus, topmost last
///
/// Closing a menu needs the game services, so the owner must call
/// [`MenuRoot::shutdown`] (or [`MenuRoot::close_all`]) before dropping a
/// stack that still holds menus. Dropping an open stack leaves the game
/// paused and the script instances unreleased.
pub struct MenuRoot {
    stack: Vec<GameMenu>,
    config: MenuConfig,
    size: IVec2,
}

impl MenuRoot {
    /// Create an empty stack for an owner of `size` pixels
    pub fn new(config: MenuConfig, size: IVec2) -> Self {
        Self {
            stack: Vec::new(),
            config,
            size,
        }
    }

    /// Open `section` on top of the stack
    pub fn push_menu(&mut self, section: &str, services: &mut MenuServices<'_>) -> Result<(), MenuError> {
        let mut menu = GameMenu::open(section, services, &self.config, self.size)?;
        menu.on_resize(self.size, services.sound);
        self.stack.push(menu);
        Ok(())
    }

    /// Close the top menu
    pub fn pop_menu(&mut self, services: &mut MenuServices<'_>) {
        if let Some(menu) = self.stack.pop() {
            menu.close(services);
        }
    }

    /// Close every open menu, topmost first
    pub fn close_all(&mut self, services: &mut MenuServices<'_>) {
        while let Some(menu) = self.stack.pop() {
            menu.close(services);
        }
    }

    /// Close every open menu and consume the stack
    pub fn shutdown(mut self, services: &mut MenuServices<'_>) {
        self.close_all(services);
    }

    /// Topmost menu
    pub fn top(&self) -> Option<&GameMenu> {
        self.stack.last()
    }

    /// Mutable topmost menu
    pub fn top_mut(&mut self) -> Option<&mut GameMenu> {
        self.stack.last_mut()
    }

    /// Open menus, bottom first
    pub fn menus(&self) -> &[GameMenu] {
        &self.stack
    }

    /// Whether no menu is open
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of open menus
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Move the top menu's selection
    pub fn on_move(&mut self, delta: i32, services: &mut MenuServices<'_>) {
        if let Some(menu) = self.stack.last_mut() {
            menu.on_move(delta, services);
        }
    }

    /// Activate the top menu's selection and apply what it requests
    pub fn on_select(&mut self, services: &mut MenuServices<'_>) {
        let requests = match self.stack.last_mut() {
            Some(menu) => menu.on_select(services),
            None => return,
        };
        self.apply(requests, services);
    }

    /// Apply stack requests in order
    pub fn apply(&mut self, requests: Vec<MenuRequest>, services: &mut MenuServices<'_>) {
        for request in requests {
            match request {
                MenuRequest::Push(section) => {
                    if let Err(e) = self.push_menu(&section, services) {
                        log::warn!("Failed to open menu: {}", e);
                    }
                }
                MenuRequest::Pop => self.pop_menu(services),
                MenuRequest::CloseAll => self.close_all(services),
            }
        }
    }

    /// Forward character sheet values to the top menu
    pub fn set_player(&mut self, stats: &PlayerStats, services: &MenuServices<'_>) {
        if let Some(menu) = self.stack.last_mut() {
            menu.set_player(stats, services);
        }
    }

    /// Advance timers of every open menu
    pub fn update(&mut self, delta: Duration, services: &mut MenuServices<'_>) {
        for menu in &mut self.stack {
            menu.update(delta, self.size, services.sound);
        }
    }

    /// Paint the top menu, empty when no menu is open
    pub fn paint<'r>(
        &self,
        renderer: &'r mut MenuRenderer,
        fonts: &dyn FontMetrics,
        in_game: bool,
    ) -> &'r [MenuPaintCommand] {
        match self.stack.last() {
            Some(menu) => renderer.render(menu, fonts, in_game),
            None => {
                renderer.clear();
                renderer.commands()
            }
        }
    }

    /// Owner was resized
    pub fn resize(&mut self, size: IVec2, services: &mut MenuServices<'_>) {
        self.size = size;
        for menu in &mut self.stack {
            menu.on_resize(size, services.sound);
        }
    }
}

impl Drop for MenuRoot {
    fn drop(&mut self) {
        if !self.stack.is_empty() {
            let sections: Vec<&str> = self.stack.iter().map(GameMenu::section).collect();
            log::warn!(
                "Menu stack dropped with {} open menu(s) {:?}; game stays paused",
                sections.len(),
                sections
            );
        }
    }
}
