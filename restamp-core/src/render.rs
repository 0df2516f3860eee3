//! The per-pass orchestrator: normalize, classify, resolve, size, place, draw

use crate::error::{RestampError, Result};
use crate::fit::{max_fitting_size, GlyphMeasurer, TextMeasurer};
use crate::fonts::FontResolver;
use crate::geometry::Region;
use crate::placement::draw_origin;
use crate::script::{detect_script, normalize_text};
use ab_glyph::PxScale;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use tracing::debug;

/// Stamp color for replacement text.
pub const STAMP_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Renders one full pass of (region, text) pairs onto a mutable canvas.
///
/// Pairs are processed strictly in input order; overlapping regions overdraw
/// earlier ones. Region and text sequences must be parallel: a length
/// mismatch aborts before anything is drawn, and a font-resolution failure
/// for any pair aborts the whole pass, since silently omitting requested
/// text would break the output contract.
#[derive(Debug)]
pub struct RegionRenderer<'a> {
    resolver: &'a FontResolver,
}

impl<'a> RegionRenderer<'a> {
    pub fn new(resolver: &'a FontResolver) -> Self {
        RegionRenderer { resolver }
    }

    /// Render every (region, text) pair onto `canvas`.
    pub fn render_pass(
        &self,
        canvas: &mut RgbImage,
        regions: &[Region],
        texts: &[String],
    ) -> Result<()> {
        if regions.len() != texts.len() {
            return Err(RestampError::InputMismatch {
                regions: regions.len(),
                texts: texts.len(),
            });
        }

        for (region, raw) in regions.iter().zip(texts) {
            self.render_one(canvas, region, raw)?;
        }
        Ok(())
    }

    fn render_one(&self, canvas: &mut RgbImage, region: &Region, raw: &str) -> Result<()> {
        let text = normalize_text(raw);
        let script = detect_script(&text);
        let font = self.resolver.resolve(script)?;
        let measurer = GlyphMeasurer::new(font);

        let size = max_fitting_size(&measurer, region.width, region.height, &text);
        let extent = measurer.measure(size, &text)?;
        let (x, y) = draw_origin(region, extent);

        debug!(
            script = %script,
            font = measurer.font().identifier(),
            size,
            x,
            y,
            "stamping region"
        );
        draw_text_mut(
            canvas,
            STAMP_COLOR,
            x,
            y,
            PxScale::from(size as f32),
            measurer.font().glyphs(),
            &text,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::test_support::locate_test_font;
    use crate::fonts::FontCatalog;
    use crate::script::Script;

    fn unprovisioned_resolver() -> FontResolver {
        FontResolver::new(FontCatalog::new().with_search_dirs(vec![]))
    }

    fn white_canvas() -> RgbImage {
        RgbImage::from_pixel(300, 200, Rgb([255, 255, 255]))
    }

    #[test]
    fn test_length_mismatch_aborts_before_drawing() {
        let resolver = unprovisioned_resolver();
        let renderer = RegionRenderer::new(&resolver);
        let mut canvas = white_canvas();
        let before = canvas.clone();

        let regions = vec![
            Region::new(0, 0, 50, 30).unwrap(),
            Region::new(60, 0, 110, 30).unwrap(),
            Region::new(120, 0, 170, 30).unwrap(),
        ];
        let texts = vec!["one".to_string(), "two".to_string()];

        let err = renderer.render_pass(&mut canvas, &regions, &texts).unwrap_err();
        assert!(matches!(
            err,
            RestampError::InputMismatch {
                regions: 3,
                texts: 2
            }
        ));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_font_resolution_failure_is_fatal() {
        let resolver = unprovisioned_resolver();
        let renderer = RegionRenderer::new(&resolver);
        let mut canvas = white_canvas();
        let before = canvas.clone();

        let regions = vec![Region::new(0, 0, 200, 100).unwrap()];
        let texts = vec!["Mihir".to_string()];

        let err = renderer.render_pass(&mut canvas, &regions, &texts).unwrap_err();
        assert!(matches!(err, RestampError::FontResolution { .. }));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_pass_stamps_text_into_region() {
        let Some(path) = locate_test_font() else {
            eprintln!("skipping: no system font available");
            return;
        };
        let mut catalog = FontCatalog::new().with_search_dirs(vec![]);
        for script in [Script::Latin, Script::Devanagari, Script::Mixed] {
            catalog.set_candidates(script, vec![path.display().to_string()]);
        }
        let resolver = FontResolver::new(catalog);
        let renderer = RegionRenderer::new(&resolver);
        let mut canvas = white_canvas();

        let region = Region::new(20, 20, 220, 120).unwrap();
        renderer
            .render_pass(&mut canvas, &[region], &["Mihir".to_string()])
            .unwrap();

        // Some pixel inside the region is predominantly stamp-red
        let stamped = canvas
            .enumerate_pixels()
            .any(|(x, y, p)| {
                (region.x1..region.x2).contains(&x)
                    && (region.y1..region.y2).contains(&y)
                    && p.0[0] > 200
                    && p.0[1] < 100
                    && p.0[2] < 100
            });
        assert!(stamped);

        // Nothing was drawn outside the region
        let outside_touched = canvas
            .enumerate_pixels()
            .any(|(x, y, p)| {
                !((region.x1..region.x2).contains(&x) && (region.y1..region.y2).contains(&y))
                    && *p != Rgb([255, 255, 255])
            });
        assert!(!outside_touched);
    }
}
