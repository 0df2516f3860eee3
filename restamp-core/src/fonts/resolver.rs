//! Script-based font resolution with ordered fallback

use super::{load_font, FontCache, FontCatalog, LoadedFont};
use crate::error::{RestampError, Result};
use crate::script::Script;
use tracing::debug;

/// Resolves a script label to a loaded font by walking the catalog's ordered
/// candidate list; the first loadable candidate wins.
///
/// Owns the [`FontCache`], so repeated resolutions across regions and passes
/// reuse already-loaded fonts.
#[derive(Debug, Clone)]
pub struct FontResolver {
    catalog: FontCatalog,
    cache: FontCache,
}

impl FontResolver {
    /// Create a resolver over a catalog, with a fresh cache.
    pub fn new(catalog: FontCatalog) -> Self {
        FontResolver {
            catalog,
            cache: FontCache::new(),
        }
    }

    /// Resolve the first loadable font for a script.
    ///
    /// Fails with [`RestampError::FontResolution`] only when every candidate
    /// in the list, including the shared fallback, is unloadable.
    pub fn resolve(&self, script: Script) -> Result<LoadedFont> {
        let candidates = self.catalog.candidates(script);
        let mut tried = Vec::with_capacity(candidates.len());

        for identifier in candidates {
            match self
                .cache
                .get_or_load(identifier, || load_font(&self.catalog, identifier))
            {
                Ok(font) => {
                    debug!(script = %script, font = identifier, "resolved font");
                    return Ok(font);
                }
                Err(err) => {
                    debug!(script = %script, font = identifier, %err, "font candidate unavailable");
                    tried.push(identifier.clone());
                }
            }
        }

        Err(RestampError::FontResolution { script, tried })
    }

    /// The catalog this resolver consults.
    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    /// The cache backing this resolver.
    pub fn cache(&self) -> &FontCache {
        &self.cache
    }
}
