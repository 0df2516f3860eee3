//! Centered draw-origin computation

use crate::fit::TextExtent;
use crate::geometry::Region;

/// Top-left draw origin that centers a text bounding box within a region.
///
/// Uses floor division, so when the leftover space is odd the extra pixel
/// lands on the right/bottom. No clamping: when the text overflows the
/// region (the accepted floor-size fallback), the origin goes negative
/// relative to the region's interior, and possibly the image.
pub fn draw_origin(region: &Region, extent: TextExtent) -> (i32, i32) {
    let x = region.x1 as i64 + (region.width as i64 - extent.width as i64).div_euclid(2);
    let y = region.y1 as i64 + (region.height as i64 - extent.height as i64).div_euclid(2);
    (x as i32, y as i32)
}
