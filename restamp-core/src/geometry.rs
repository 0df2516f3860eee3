//! Region rectangles in image pixel space

use crate::error::{RestampError, Result};

/// A rectangular area on the image where original content is erased and
/// replacement text is drawn.
///
/// Bounds are in pixels with the origin at the top-left corner of the image.
/// `width` and `height` are redundant with the corner coordinates; callers
/// that supply all six fields (e.g. deserialized UI output) must keep them
/// consistent, and [`Region::validate`] checks exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Left edge
    pub x1: u32,
    /// Top edge
    pub y1: u32,
    /// Right edge (exclusive)
    pub x2: u32,
    /// Bottom edge (exclusive)
    pub y2: u32,
    /// Horizontal span, must equal `x2 - x1`
    pub width: u32,
    /// Vertical span, must equal `y2 - y1`
    pub height: u32,
}

impl Region {
    /// Create a region from its corner coordinates, deriving the spans.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Result<Self> {
        let region = Region {
            x1,
            y1,
            x2,
            y2,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        };
        region.validate()?;
        Ok(region)
    }

    /// Create a region from all six fields as supplied by an external caller.
    pub fn from_parts(x1: u32, y1: u32, x2: u32, y2: u32, width: u32, height: u32) -> Result<Self> {
        let region = Region {
            x1,
            y1,
            x2,
            y2,
            width,
            height,
        };
        region.validate()?;
        Ok(region)
    }

    /// Check the geometric invariants: `x2 > x1`, `y2 > y1`, and the stored
    /// spans matching the derived ones.
    pub fn validate(&self) -> Result<()> {
        if self.x2 <= self.x1 || self.y2 <= self.y1 {
            return Err(RestampError::InvalidRegion(format!(
                "degenerate bounds ({}, {})-({}, {})",
                self.x1, self.y1, self.x2, self.y2
            )));
        }
        if self.width != self.x2 - self.x1 || self.height != self.y2 - self.y1 {
            return Err(RestampError::InvalidRegion(format!(
                "stored spans {}x{} disagree with bounds ({}, {})-({}, {})",
                self.width, self.height, self.x1, self.y1, self.x2, self.y2
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_spans() {
        let region = Region::new(10, 20, 110, 70).unwrap();
        assert_eq!(region.width, 100);
        assert_eq!(region.height, 50);
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        assert!(Region::new(10, 20, 10, 70).is_err());
        assert!(Region::new(10, 20, 110, 20).is_err());
        assert!(Region::new(50, 20, 10, 70).is_err());
    }

    #[test]
    fn test_from_parts_checks_consistency() {
        assert!(Region::from_parts(0, 0, 200, 100, 200, 100).is_ok());

        let err = Region::from_parts(0, 0, 200, 100, 199, 100).unwrap_err();
        match err {
            RestampError::InvalidRegion(msg) => assert!(msg.contains("disagree")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
