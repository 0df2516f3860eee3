//! Removing original region content before stamping
//!
//! The full pipeline erases each region with an inpainting operation supplied
//! by an external image-editing collaborator. The collaborator shipped here
//! is a simpler one: fill the region with the per-channel median of a ring of
//! pixels sampled just outside its border, which is indistinguishable from
//! inpainting on flat backgrounds.

use crate::geometry::Region;
use image::{Rgb, RgbImage};

/// Ring thickness sampled outside the region border, in pixels.
const BORDER_SAMPLE_OFFSET: u32 = 2;

/// Erase every region by filling it with its border-median color.
///
/// Regions are clamped to the image bounds; regions entirely outside the
/// image are left alone.
pub fn erase_regions(canvas: &mut RgbImage, regions: &[Region]) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    for region in regions {
        let fill = border_median(canvas, region);
        for y in region.y1..region.y2.min(height) {
            for x in region.x1..region.x2.min(width) {
                canvas.put_pixel(x, y, fill);
            }
        }
    }
}

/// Per-channel median of the pixels ringing the region at
/// [`BORDER_SAMPLE_OFFSET`], clamped to the image bounds.
fn border_median(canvas: &RgbImage, region: &Region) -> Rgb<u8> {
    let (width, height) = canvas.dimensions();
    let x_lo = region.x1.saturating_sub(BORDER_SAMPLE_OFFSET).min(width - 1);
    let x_hi = region
        .x2
        .saturating_add(BORDER_SAMPLE_OFFSET)
        .min(width - 1);
    let y_lo = region.y1.saturating_sub(BORDER_SAMPLE_OFFSET).min(height - 1);
    let y_hi = region
        .y2
        .saturating_add(BORDER_SAMPLE_OFFSET)
        .min(height - 1);

    let mut samples: Vec<[u8; 3]> = Vec::new();
    for x in x_lo..=x_hi {
        samples.push(canvas.get_pixel(x, y_lo).0);
        samples.push(canvas.get_pixel(x, y_hi).0);
    }
    for y in y_lo..=y_hi {
        samples.push(canvas.get_pixel(x_lo, y).0);
        samples.push(canvas.get_pixel(x_hi, y).0);
    }

    let mut median = [0u8; 3];
    for (channel, out) in median.iter_mut().enumerate() {
        let mut values: Vec<u8> = samples.iter().map(|p| p[channel]).collect();
        values.sort_unstable();
        *out = values[values.len() / 2];
    }
    Rgb(median)
}
