// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop operation domain model.

use serde::{Deserialize, Serialize};

/// A point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Crop region in image pixel coordinates.
///
/// Pure domain model - represents a rectangular region to crop.
/// No UI concerns, just data. Serializes to the `crop_data` object
/// expected by the save endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized rectangle spanned by two corners (top-left origin, positive extent).
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn as_tuple(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    /// True when both extents are strictly larger than `min_size`.
    pub fn exceeds(&self, min_size: f32) -> bool {
        self.width > min_size && self.height > min_size
    }

    /// Human readable size and origin, rounded to whole pixels.
    #[allow(clippy::cast_possible_truncation)]
    pub fn describe(&self) -> String {
        format!(
            "{} × {} pixels at ({}, {})",
            self.width.round() as i64,
            self.height.round() as i64,
            self.x.round() as i64,
            self.y.round() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case((10.0, 10.0), (60.0, 40.0))]
    #[case((60.0, 40.0), (10.0, 10.0))]
    #[case((60.0, 10.0), (10.0, 40.0))]
    #[case((10.0, 40.0), (60.0, 10.0))]
    fn from_corners_normalizes_any_drag_direction(
        #[case] a: (f32, f32),
        #[case] b: (f32, f32),
    ) {
        let region = CropRegion::from_corners(Point::new(a.0, a.1), Point::new(b.0, b.1));
        assert_eq!(region, CropRegion::new(10.0, 10.0, 50.0, 30.0));
    }

    #[rstest]
    #[case(11.0, 11.0, true)]
    #[case(10.0, 50.0, false)]
    #[case(50.0, 10.0, false)]
    #[case(0.0, 0.0, false)]
    fn exceeds_is_strict_in_both_axes(#[case] w: f32, #[case] h: f32, #[case] expected: bool) {
        assert_eq!(CropRegion::new(0.0, 0.0, w, h).exceeds(10.0), expected);
    }

    #[test]
    fn describe_rounds_every_component() {
        let region = CropRegion::new(22.4, 22.6, 199.5, 200.2);
        assert_eq!(region.describe(), "200 × 200 pixels at (22, 23)");
    }

    #[test]
    fn serializes_as_crop_data_object() {
        let json = serde_json::to_value(CropRegion::new(1.0, 2.0, 30.0, 40.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "x": 1.0, "y": 2.0, "width": 30.0, "height": 40.0 })
        );
    }
}
