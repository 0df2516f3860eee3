//! Font catalog, loading, caching, and script-based resolution
//!
//! Fonts are referred to by identifier (a file name such as
//! `NotoSansDevanagari-Regular.ttf`, or an absolute path). The catalog maps
//! each [`Script`](crate::script::Script) to an ordered candidate list ending
//! in a shared fallback, the loader turns an identifier into parsed font data,
//! the cache keeps loaded fonts for the life of the process, and the resolver
//! ties the three together: first loadable candidate wins.

pub mod cache;
pub mod catalog;
pub mod loader;
pub mod resolver;

pub use cache::FontCache;
pub use catalog::{FontCatalog, FALLBACK_FONT};
pub use loader::load_font;
pub use resolver::FontResolver;

use crate::error::{RestampError, Result};
use ab_glyph::FontVec;
use std::fmt;
use std::sync::Arc;

/// A parsed font ready for measurement and drawing.
///
/// Cheap to clone: the parsed font data is shared behind an `Arc`. The same
/// object serves every requested pixel size, since glyph outlines are scaled
/// at measurement/draw time.
#[derive(Clone)]
pub struct LoadedFont {
    identifier: String,
    font: Arc<FontVec>,
}

impl LoadedFont {
    /// Parse a font from raw TTF/OTF bytes.
    pub fn from_bytes(identifier: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let identifier = identifier.into();
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| RestampError::FontLoad(format!("{identifier}: {e}")))?;
        Ok(LoadedFont {
            identifier,
            font: Arc::new(font),
        })
    }

    /// The identifier this font was resolved under.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Access the parsed glyph outlines.
    pub fn glyphs(&self) -> &FontVec {
        &self.font
    }
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
