// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/raster_canvas.rs
//
// Offscreen canvas backed by an RGBA buffer.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use image::{Pixel, Rgba, RgbaImage, imageops};

use crate::domain::{CropRegion, Result};
use crate::ui::{Canvas, ScreenRect, StrokeStyle};

/// A [`Canvas`] that paints into memory. Used by the console host for
/// previews and by tests to inspect what the selector drew.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    buffer: RgbaImage,
    display: Option<(f32, f32)>,
    origin: (f32, f32),
    container_width: f32,
}

impl RasterCanvas {
    pub fn new(container_width: f32) -> Self {
        Self {
            buffer: RgbaImage::new(0, 0),
            display: None,
            origin: (0.0, 0.0),
            container_width,
        }
    }

    /// Place the surface at `(left, top)` on screen.
    pub fn with_origin(mut self, left: f32, top: f32) -> Self {
        self.origin = (left, top);
        self
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Rendered size; the pixel size unless scaled down.
    pub fn display_size(&self) -> (f32, f32) {
        self.display.unwrap_or_else(|| {
            let (w, h) = self.buffer.dimensions();
            (w as f32, h as f32)
        })
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.buffer.save(path)?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn blend_at(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let (w, h) = self.buffer.dimensions();
        if x < 0 || y < 0 || x >= i64::from(w) || y >= i64::from(h) {
            return;
        }
        self.buffer.get_pixel_mut(x as u32, y as u32).blend(&color);
    }

    /// Square brush of `size` pixels centred on `(cx, cy)`.
    #[allow(clippy::cast_possible_truncation)]
    fn stamp(&mut self, cx: f32, cy: f32, size: f32, color: Rgba<u8>) {
        let half = size / 2.0;
        let span = size.ceil().max(1.0) as i64;
        let x0 = (cx - half).floor() as i64;
        let y0 = (cy - half).floor() as i64;

        for dy in 0..span {
            for dx in 0..span {
                self.blend_at(x0 + dx, y0 + dy, color);
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.buffer = RgbaImage::new(width, height);
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display = Some((width, height));
    }

    fn bounding_rect(&self) -> ScreenRect {
        let (width, height) = self.display_size();
        ScreenRect {
            left: self.origin.0,
            top: self.origin.1,
            width,
            height,
        }
    }

    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn clear(&mut self) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn draw_image(&mut self, image: &RgbaImage) {
        imageops::overlay(&mut self.buffer, image, 0, 0);
    }

    fn stroke_rect(&mut self, rect: &CropRegion, style: &StrokeStyle) {
        let (x, y, w, h) = rect.as_tuple();
        let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h), (x, y)];
        let [on, off] = style.dash;
        let period = on + off;
        let (bw, bh) = self.buffer.dimensions();
        let bounds = (
            (-style.width, bw as f32 + style.width),
            (-style.width, bh as f32 + style.width),
        );

        // The dash pattern runs continuously around the outline.
        let mut travelled = 0.0_f32;
        for edge in corners.windows(2) {
            let (x0, y0) = edge[0];
            let (x1, y1) = edge[1];
            let length = (x1 - x0).abs() + (y1 - y0).abs();
            if length <= 0.0 {
                continue;
            }
            let (dx, dy) = ((x1 - x0) / length, (y1 - y0) / length);

            // Only walk the part of the edge that can touch the buffer.
            let Some((from, to)) = visible_span(x0, dx, bounds.0, length)
                .zip(visible_span(y0, dy, bounds.1, length))
                .map(|((ax, bx), (ay, by))| (ax.max(ay).floor(), bx.min(by)))
            else {
                travelled += length;
                continue;
            };

            let mut t = from;
            while t < to {
                let visible = period <= 0.0 || (travelled + t) % period < on;
                if visible {
                    self.stamp(x0 + dx * t, y0 + dy * t, style.width, style.color);
                }
                t += 1.0;
            }
            travelled += length;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_rect(&mut self, rect: &CropRegion, color: Rgba<u8>) {
        let (w, h) = self.buffer.dimensions();
        let x0 = (rect.x.round() as i64).max(0);
        let y0 = (rect.y.round() as i64).max(0);
        let x1 = ((rect.x + rect.width).round() as i64).min(i64::from(w));
        let y1 = ((rect.y + rect.height).round() as i64).min(i64::from(h));

        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_at(x, y, color);
            }
        }
    }
}

/// Range of `t` in `0..length` for which `from + dir * t` lies within
/// `lo..=hi`, or `None` if the edge misses that band entirely.
fn visible_span(from: f32, dir: f32, (lo, hi): (f32, f32), length: f32) -> Option<(f32, f32)> {
    let (start, end) = if dir == 0.0 {
        if from < lo || from > hi {
            return None;
        }
        (0.0, length)
    } else {
        let a = (lo - from) / dir;
        let b = (hi - from) / dir;
        (a.min(b).max(0.0), a.max(b).min(length))
    };
    (start < end).then_some((start, end))
}

/// Shared handle, so the host can read the buffer back while the selector
/// owns the canvas.
impl Canvas for Rc<RefCell<RasterCanvas>> {
    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.borrow_mut().set_pixel_size(width, height);
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.borrow_mut().set_display_size(width, height);
    }

    fn bounding_rect(&self) -> ScreenRect {
        self.borrow().bounding_rect()
    }

    fn container_width(&self) -> f32 {
        self.borrow().container_width()
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }

    fn draw_image(&mut self, image: &RgbaImage) {
        self.borrow_mut().draw_image(image);
    }

    fn stroke_rect(&mut self, rect: &CropRegion, style: &StrokeStyle) {
        self.borrow_mut().stroke_rect(rect, style);
    }

    fn fill_rect(&mut self, rect: &CropRegion, color: Rgba<u8>) {
        self.borrow_mut().fill_rect(rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{SELECTION_COLOR, SELECTION_FILL};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn is_selection_red(p: &Rgba<u8>) -> bool {
        p[0] > 200 && p[1] < 80 && p[2] < 100
    }

    fn style() -> StrokeStyle {
        StrokeStyle {
            color: SELECTION_COLOR,
            width: 2.0,
            dash: [5.0, 5.0],
        }
    }

    fn white_canvas(w: u32, h: u32) -> RasterCanvas {
        let mut canvas = RasterCanvas::new(1000.0);
        canvas.set_pixel_size(w, h);
        canvas.draw_image(&RgbaImage::from_pixel(w, h, WHITE));
        canvas
    }

    #[test]
    fn display_defaults_to_pixel_size() {
        let canvas = white_canvas(40, 30);
        assert_eq!(canvas.display_size(), (40.0, 30.0));

        let mut scaled = canvas.with_origin(5.0, 6.0);
        scaled.set_display_size(20.0, 15.0);
        let rect = scaled.bounding_rect();
        assert_eq!((rect.left, rect.top, rect.width, rect.height), (5.0, 6.0, 20.0, 15.0));
        assert_eq!(scaled.buffer().dimensions(), (40, 30));
    }

    #[test]
    fn fill_tints_only_inside_rect() {
        let mut canvas = white_canvas(40, 40);
        canvas.fill_rect(&CropRegion::new(10.0, 10.0, 5.0, 5.0), SELECTION_FILL);

        let inside = canvas.buffer().get_pixel(12, 12);
        assert!(inside != &WHITE && inside[1] < inside[0]);
        assert_eq!(canvas.buffer().get_pixel(20, 20), &WHITE);
    }

    #[test]
    fn stroke_is_dashed() {
        let mut canvas = white_canvas(60, 60);
        let style = StrokeStyle {
            color: SELECTION_COLOR,
            width: 2.0,
            dash: [5.0, 5.0],
        };
        canvas.stroke_rect(&CropRegion::new(10.0, 10.0, 40.0, 40.0), &style);

        assert!(is_selection_red(canvas.buffer().get_pixel(12, 10)));
        assert_eq!(canvas.buffer().get_pixel(17, 10), &WHITE);
        assert_eq!(canvas.buffer().get_pixel(30, 30), &WHITE);
    }

    #[test]
    fn fill_far_larger_than_buffer_covers_it() {
        let mut canvas = white_canvas(10, 10);
        canvas.fill_rect(&CropRegion::new(-500.0, -500.0, 20000.0, 20000.0), SELECTION_FILL);

        assert!(canvas.buffer().pixels().all(|p| p != &WHITE));
    }

    #[test]
    fn stroke_outside_buffer_draws_nothing() {
        let mut canvas = white_canvas(20, 20);
        canvas.stroke_rect(&CropRegion::new(-5.0, -5.0, 20000.0, 20000.0), &style());

        assert!(canvas.buffer().pixels().all(|p| p == &WHITE));
    }

    #[test]
    fn clipped_stroke_keeps_dash_phase() {
        let mut canvas = white_canvas(20, 20);
        // Top edge enters the buffer 1000px along the outline, on a dash start.
        canvas.stroke_rect(&CropRegion::new(-1000.0, 5.0, 20000.0, 20000.0), &style());

        assert!(is_selection_red(canvas.buffer().get_pixel(0, 5)));
        assert_eq!(canvas.buffer().get_pixel(7, 5), &WHITE);
    }

    #[test]
    fn clear_then_draw_restores_image() {
        let mut canvas = white_canvas(8, 8);
        canvas.fill_rect(&CropRegion::new(0.0, 0.0, 8.0, 8.0), SELECTION_FILL);
        canvas.clear();
        assert_eq!(canvas.buffer().get_pixel(0, 0), &Rgba([0, 0, 0, 0]));

        canvas.draw_image(&RgbaImage::from_pixel(8, 8, WHITE));
        assert_eq!(canvas.buffer().get_pixel(7, 7), &WHITE);
    }
}
