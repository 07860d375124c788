//! Image loading for menu textures
//!
//! Menus only need to know that an image exists and how large it is; pixel
//! upload belongs to the renderer.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::assets::AssetError;
use crate::ui::backend::{ImageHandle, TextureLoader};

/// Read the pixel size of an image file
pub fn image_size<P: AsRef<Path>>(path: P) -> Result<(u32, u32), AssetError> {
    let path_ref = path.as_ref();
    image::image_dimensions(path_ref)
        .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {:?}: {}", path_ref, e)))
}

/// Texture loader resolving script paths below a root directory
///
/// Handles are cached by script path, so loading the same image twice
/// yields the same handle.
pub struct FileTextureLoader {
    root: PathBuf,
    cache: HashMap<String, ImageHandle>,
    next_id: u64,
}

impl FileTextureLoader {
    /// Create a loader for images below `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            next_id: 1,
        }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of distinct images loaded
    pub fn loaded_count(&self) -> usize {
        self.cache.len()
    }
}

impl TextureLoader for FileTextureLoader {
    fn load_texture(&mut self, path: &str) -> Option<ImageHandle> {
        if let Some(handle) = self.cache.get(path) {
            return Some(*handle);
        }

        let (width, height) = match image_size(self.root.join(path)) {
            Ok(size) => size,
            Err(e) => {
                log::debug!("{}", e);
                return None;
            }
        };

        let handle = ImageHandle {
            id: self.next_id,
            width,
            height,
        };
        self.next_id += 1;
        self.cache.insert(path.to_string(), handle);
        log::debug!("Loaded image {}x{} from {}", width, height, path);
        Some(handle)
    }
}
