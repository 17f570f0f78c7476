// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Display sizing of the drawing surface and screen-to-surface mapping.

use crate::domain::Point;
use crate::ui::ScreenRect;

/// Rendered size of the surface for an image of `pixel_width x pixel_height`.
///
/// The surface keeps the intrinsic size unless it is wider than the
/// container (minus padding), in which case it is scaled down to that width
/// with the aspect ratio preserved. Returns `None` when no scaling is needed.
pub fn fit_display_size(
    pixel_width: u32,
    pixel_height: u32,
    container_width: f32,
    padding: f32,
) -> Option<(f32, f32)> {
    let max_width = container_width - padding;
    let width = pixel_width as f32;

    if max_width <= 0.0 || width <= max_width {
        return None;
    }

    let scale = max_width / width;
    Some((max_width, pixel_height as f32 * scale))
}

/// Map a screen position into surface pixel space.
///
/// `rect` is where the surface currently sits on screen, `pixel_size` the
/// size of its pixel buffer. A surface that has not been laid out yet
/// (zero-sized rect) maps 1:1.
pub fn screen_to_surface(
    client_x: f32,
    client_y: f32,
    rect: ScreenRect,
    pixel_size: (u32, u32),
) -> Point {
    let scale_x = axis_scale(pixel_size.0, rect.width);
    let scale_y = axis_scale(pixel_size.1, rect.height);

    Point::new(
        (client_x - rect.left) * scale_x,
        (client_y - rect.top) * scale_y,
    )
}

fn axis_scale(pixels: u32, display: f32) -> f32 {
    if display > 0.0 {
        pixels as f32 / display
    } else {
        1.0
    }
}
