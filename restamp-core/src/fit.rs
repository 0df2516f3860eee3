//! The fit predicate and the font-size binary search
//!
//! The predicate decides whether text rendered at a candidate size stays
//! inside a region with a fixed safety margin; the search exploits its
//! monotonicity in size (a larger font never fits where a smaller one does
//! not, for the same text and region) to find the largest fitting size in
//! `[MIN_FONT_SIZE, MAX_FONT_SIZE]` with an upper-mid binary search.

use crate::error::Result;
use crate::fonts::LoadedFont;
use ab_glyph::PxScale;
use imageproc::drawing::text_size;
use tracing::warn;

/// Floor of the size domain; also the guaranteed-safe fallback when nothing
/// fits (overflow is accepted rather than refusing to render).
pub const MIN_FONT_SIZE: u32 = 5;

/// Ceiling of the size domain.
pub const MAX_FONT_SIZE: u32 = 500;

/// Safety margin applied to both axes: the region must exceed the measured
/// extent by this factor, reserving roughly 13% blank space per axis.
pub const FIT_MARGIN: f32 = 1.15;

/// Rendered bounding box of a text run, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// A text-measurement capability bound to one font.
///
/// The production implementation is [`GlyphMeasurer`]; tests substitute
/// synthetic measurers to exercise the predicate and search without font
/// files on disk.
pub trait TextMeasurer {
    /// Measure the rendered bounding box of `text` at pixel size `size`.
    fn measure(&self, size: u32, text: &str) -> Result<TextExtent>;
}

/// Measures text against a loaded font's actual glyph outlines.
#[derive(Debug, Clone)]
pub struct GlyphMeasurer {
    font: LoadedFont,
}

impl GlyphMeasurer {
    pub fn new(font: LoadedFont) -> Self {
        GlyphMeasurer { font }
    }

    /// The font this measurer is bound to.
    pub fn font(&self) -> &LoadedFont {
        &self.font
    }
}

impl TextMeasurer for GlyphMeasurer {
    fn measure(&self, size: u32, text: &str) -> Result<TextExtent> {
        let scale = PxScale::from(size as f32);
        let (width, height) = text_size(scale, self.font.glyphs(), text);
        Ok(TextExtent { width, height })
    }
}

/// Decide whether text at `size` fits a `region_width` x `region_height`
/// region with the safety margin.
///
/// A measurement failure is treated as "does not fit" and logged, never
/// propagated, so one unrenderable candidate size cannot abort the search.
pub fn fits(
    measurer: &dyn TextMeasurer,
    size: u32,
    region_width: u32,
    region_height: u32,
    text: &str,
) -> bool {
    let extent = match measurer.measure(size, text) {
        Ok(extent) => extent,
        Err(err) => {
            warn!(size, %err, "text measurement failed, treating size as non-fitting");
            return false;
        }
    };

    region_width as f32 > extent.width as f32 * FIT_MARGIN
        && region_height as f32 > extent.height as f32 * FIT_MARGIN
        && size >= MIN_FONT_SIZE
}

/// The largest size in `[MIN_FONT_SIZE, MAX_FONT_SIZE]` for which [`fits`]
/// holds, or `MIN_FONT_SIZE` when no size qualifies.
///
/// Upper-mid binary search: `mid` rounds up, `low` advances onto a fitting
/// `mid`, `high` retreats past a non-fitting one, so `low == high` terminates
/// without oscillation. The final candidate is re-verified because the loop
/// alone cannot distinguish "smallest size fits" from "nothing fits".
pub fn max_fitting_size(
    measurer: &dyn TextMeasurer,
    region_width: u32,
    region_height: u32,
    text: &str,
) -> u32 {
    let mut low = MIN_FONT_SIZE;
    let mut high = MAX_FONT_SIZE;

    while low < high {
        let mid = (low + high + 1) / 2;
        if fits(measurer, mid, region_width, region_height, text) {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    if fits(measurer, low, region_width, region_height, text) {
        low
    } else {
        MIN_FONT_SIZE
    }
}
