// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Paint the image and the selection rectangle onto the drawing surface.

use image::RgbaImage;

use crate::constant::{SELECTION_COLOR, SELECTION_DASH, SELECTION_FILL, SELECTION_STROKE_WIDTH};
use crate::domain::CropRegion;
use crate::ui::{Canvas, StrokeStyle};

const SELECTION_STROKE: StrokeStyle = StrokeStyle {
    color: SELECTION_COLOR,
    width: SELECTION_STROKE_WIDTH,
    dash: SELECTION_DASH,
};

/// Repaint the bare image, then the selection if there is one.
pub fn repaint(canvas: &mut dyn Canvas, image: &RgbaImage, region: Option<&CropRegion>) {
    canvas.clear();
    canvas.draw_image(image);

    if let Some(region) = region {
        draw_selection(canvas, region);
    }
}

/// Dashed outline first, translucent fill on top.
pub fn draw_selection(canvas: &mut dyn Canvas, region: &CropRegion) {
    canvas.stroke_rect(region, &SELECTION_STROKE);
    canvas.fill_rect(region, SELECTION_FILL);
}
