//! Font caching for loaded font reuse across a pass and across passes

use super::LoadedFont;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe cache of loaded fonts, keyed by identifier.
///
/// Populated lazily and never evicted; a pure performance optimization that
/// must not change rendering output. Load failures are not cached, so a
/// candidate that was missing can succeed on a later attempt if the
/// environment changes.
#[derive(Debug, Clone, Default)]
pub struct FontCache {
    fonts: Arc<RwLock<HashMap<String, LoadedFont>>>,
}

impl FontCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached font by identifier.
    pub fn get(&self, identifier: &str) -> Option<LoadedFont> {
        let fonts = self.fonts.read().unwrap();
        fonts.get(identifier).cloned()
    }

    /// Get a cached font, or load it with `load` and cache the result.
    pub fn get_or_load<F>(&self, identifier: &str, load: F) -> Result<LoadedFont>
    where
        F: FnOnce() -> Result<LoadedFont>,
    {
        if let Some(font) = self.get(identifier) {
            return Ok(font);
        }
        let font = load()?;
        let mut fonts = self.fonts.write().unwrap();
        Ok(fonts
            .entry(identifier.to_string())
            .or_insert(font)
            .clone())
    }

    /// Check whether an identifier is cached.
    pub fn contains(&self, identifier: &str) -> bool {
        let fonts = self.fonts.read().unwrap();
        fonts.contains_key(identifier)
    }

    /// Number of cached fonts.
    pub fn len(&self) -> usize {
        let fonts = self.fonts.read().unwrap();
        fonts.len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        let fonts = self.fonts.read().unwrap();
        fonts.is_empty()
    }

    /// Drop all cached fonts.
    pub fn clear(&self) {
        let mut fonts = self.fonts.write().unwrap();
        fonts.clear();
    }
}
