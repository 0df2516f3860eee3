//! # restamp
//!
//! A text-fit and placement engine for stamping replacement text onto
//! rectangular regions of a photograph.
//!
//! Given a region's pixel bounds, a string that may mix Latin and Devanagari
//! scripts, and a font catalog, the engine finds the largest font size that
//! fits the region (with a safety margin), selects a font appropriate for the
//! detected script with ordered fallback, and centers the rendered text within
//! the region on a caller-supplied canvas.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restamp::{FontCatalog, FontResolver, Region, RegionRenderer, Result};
//!
//! # fn main() -> Result<()> {
//! let mut canvas = image::RgbImage::new(400, 300);
//!
//! let regions = vec![Region::new(20, 20, 220, 120)?];
//! let texts = vec!["Mihir".to_string()];
//!
//! let resolver = FontResolver::new(FontCatalog::new());
//! let renderer = RegionRenderer::new(&resolver);
//! renderer.render_pass(&mut canvas, &regions, &texts)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Region rectangles and their validation
//! - [`script`] - Unicode normalization and script classification
//! - [`fonts`] - Font catalog, loading, caching, and script-based resolution
//! - [`fit`] - The fit predicate and the font-size binary search
//! - [`placement`] - Centered draw-origin computation
//! - [`render`] - The per-pass orchestrator that draws onto the canvas
//! - [`erase`] - Background fill that removes original region content

pub mod erase;
pub mod error;
pub mod fit;
pub mod fonts;
pub mod geometry;
pub mod placement;
pub mod render;
pub mod script;

pub use erase::erase_regions;
pub use error::{RestampError, Result};
pub use fit::{
    max_fitting_size, GlyphMeasurer, TextExtent, TextMeasurer, FIT_MARGIN, MAX_FONT_SIZE,
    MIN_FONT_SIZE,
};
pub use fonts::{FontCache, FontCatalog, FontResolver, LoadedFont};
pub use geometry::Region;
pub use placement::draw_origin;
pub use render::{RegionRenderer, STAMP_COLOR};
pub use script::{detect_script, normalize_text, Script};
