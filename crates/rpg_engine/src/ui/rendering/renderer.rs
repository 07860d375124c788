//! Menu renderer that converts menu state to paint commands

use super::commands::MenuPaintCommand;
use crate::foundation::math::{script_to_pixels, IVec2, PixelRect};
use crate::ui::backend::{FontMetrics, FontRef, FontStyle};
use crate::ui::menu::{GameMenu, ItemFlags, MenuItem};

/// Menu renderer that generates paint commands from a [`GameMenu`]
///
/// Item positions are stored in script units (0..8192) and scaled to the
/// menu's current pixel size every frame.
#[derive(Default)]
pub struct MenuRenderer {
    /// Paint commands generated for the current frame
    commands: Vec<MenuPaintCommand>,
}

impl MenuRenderer {
    /// Create a new menu renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all paint commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Paint commands of the last [`MenuRenderer::render`] call
    pub fn commands(&self) -> &[MenuPaintCommand] {
        &self.commands
    }

    /// Regenerate paint commands for `menu`
    pub fn render(&mut self, menu: &GameMenu, fonts: &dyn FontMetrics, in_game: bool) -> &[MenuPaintCommand] {
        self.clear();

        let size = menu.geometry().size;
        if let Some(background) = menu.background().filter(|img| !img.is_empty()) {
            self.commands.push(MenuPaintCommand::Image {
                image: background,
                rect: PixelRect::new(0, 0, size.x, size.y),
            });
        }

        for (slot, item) in menu.items().iter().enumerate() {
            let Some(item) = item else {
                continue;
            };
            if !item.visible {
                continue;
            }
            let style = if !item.is_enabled(in_game) {
                FontStyle::Disabled
            } else if menu.selection() == Some(slot) {
                FontStyle::Highlighted
            } else {
                FontStyle::Normal
            };
            self.paint_item(menu, item, FontRef::new(item.data.font_name.clone(), style), size, fonts);
        }

        if let Some(hint) = menu.selected_item().map(MenuItem::hint).filter(|h| !h.is_empty()) {
            let font = FontRef::default();
            let width = fonts.text_width(&font, hint);
            self.commands.push(MenuPaintCommand::Text {
                text: hint.to_string(),
                position: IVec2::new((size.x - width) / 2, size.y - menu.config().hint_bottom_margin),
                font,
            });
        }

        &self.commands
    }

    fn paint_item(&mut self, menu: &GameMenu, item: &MenuItem, font: FontRef, size: IVec2, fonts: &dyn FontMetrics) {
        let config = menu.config();
        let mut x = script_to_pixels(item.data.pos.x, size.x);
        let y = script_to_pixels(item.data.pos.y, size.y);

        let mut image_width = None;
        if let Some(image) = item.image.filter(|img| !img.is_empty()) {
            let w = script_to_pixels(item.data.dim_x.unwrap_or(config.default_item_width), size.x);
            let h = script_to_pixels(item.data.dim_y.unwrap_or(config.default_item_height), size.y);
            self.commands.push(MenuPaintCommand::Image {
                image,
                rect: PixelRect::new(x, y, w, h),
            });
            image_width = Some(w);
        }

        let text = item.display_text();
        if text.is_empty() {
            return;
        }

        if item.data.flags.contains(ItemFlags::TXT_CENTER) {
            let text_width = fonts.text_width(&font, text);
            x = match (image_width, item.data.dim_x) {
                (Some(w), _) => x + (w - text_width) / 2,
                (None, Some(dim_x)) => x + (script_to_pixels(dim_x, size.x) - text_width) / 2,
                (None, None) => (size.x - text_width) / 2,
            };
        }

        self.commands.push(MenuPaintCommand::Text {
            text: text.to_string(),
            position: IVec2::new(x, y + fonts.pixel_size(&font)),
            font,
        });
    }
}
