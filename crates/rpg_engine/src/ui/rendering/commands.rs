//! Menu paint commands

use crate::foundation::math::{IVec2, PixelRect};
use crate::ui::backend::{FontRef, ImageHandle};

/// Paint command for one menu element, in menu-local pixels
#[derive(Debug, Clone, PartialEq)]
pub enum MenuPaintCommand {
    /// Draw a whole image stretched over a rectangle
    Image {
        /// Image to draw
        image: ImageHandle,
        /// Destination rectangle
        rect: PixelRect,
    },
    /// Draw a line of text
    Text {
        /// Text to draw
        text: String,
        /// Baseline origin
        position: IVec2,
        /// Font variant
        font: FontRef,
    },
}
