//! Shader blob repositories

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::render::pipeline::ShaderRepository;
use crate::render::{RenderError, RenderResult};

/// Shader blobs held in memory
#[derive(Debug, Default)]
pub struct MemoryShaderRepository {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemoryShaderRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a blob
    pub fn insert(&mut self, name: impl Into<String>, code: Vec<u8>) {
        self.blobs.insert(name.into(), code);
    }

    /// Number of blobs
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether no blob is held
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl ShaderRepository for MemoryShaderRepository {
    fn get(&mut self, name: &str) -> RenderResult<Cow<'_, [u8]>> {
        self.blobs
            .get(name)
            .map(|code| Cow::Borrowed(code.as_slice()))
            .ok_or_else(|| RenderError::ShaderNotFound { name: name.to_string() })
    }
}

/// Shader blobs read from a directory, cached after the first read
#[derive(Debug)]
pub struct DirectoryShaderRepository {
    dir: PathBuf,
    cache: HashMap<String, Vec<u8>>,
}

impl DirectoryShaderRepository {
    /// Create a repository reading from `dir`
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }
}

impl ShaderRepository for DirectoryShaderRepository {
    fn get(&mut self, name: &str) -> RenderResult<Cow<'_, [u8]>> {
        let code = match self.cache.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let path = self.dir.join(name);
                let code = std::fs::read(&path).map_err(|e| {
                    log::debug!("Failed to read shader {:?}: {}", path, e);
                    RenderError::ShaderNotFound { name: name.to_string() }
                })?;
                entry.insert(code)
            }
        };
        Ok(Cow::Borrowed(code.as_slice()))
    }
}
