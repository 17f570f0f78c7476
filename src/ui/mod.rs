// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Host capabilities the selector draws on and talks to.
//
// The selector never looks up UI elements itself; a host (browser binding,
// native shell, the console host or a test) hands these in at construction.

pub mod widgets;

use image::{Rgba, RgbaImage};
use serde::Serialize;

use crate::domain::CropRegion;

/// On-screen placement of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Stroke parameters for outlining a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba<u8>,
    pub width: f32,
    /// Dash pattern (on, off). An all-zero pattern draws a solid line.
    pub dash: [f32; 2],
}

/// The drawing surface.
///
/// Its pixel buffer and its display size are separate: the buffer matches the
/// image, the display size may be scaled down to fit the container.
pub trait Canvas {
    /// Resize the pixel buffer. Contents are discarded.
    fn set_pixel_size(&mut self, width: u32, height: u32);

    /// Set the rendered (CSS) size without touching the pixel buffer.
    fn set_display_size(&mut self, width: f32, height: f32);

    /// Current placement of the surface on screen.
    fn bounding_rect(&self) -> ScreenRect;

    /// Width available to the surface in its container.
    fn container_width(&self) -> f32;

    fn clear(&mut self);

    /// Paint `image` with its top-left corner at the surface origin.
    fn draw_image(&mut self, image: &RgbaImage);

    fn stroke_rect(&mut self, rect: &CropRegion, style: &StrokeStyle);

    fn fill_rect(&mut self, rect: &CropRegion, color: Rgba<u8>);
}

/// Label states of the save control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveLabel {
    #[default]
    Idle,
    Busy,
    Saved,
}

impl SaveLabel {
    pub fn text(&self) -> &'static str {
        match self {
            SaveLabel::Idle => "Save Crop",
            SaveLabel::Busy => "Saving...",
            SaveLabel::Saved => "Saved!",
        }
    }
}

/// Buttons, readout and alerts around the surface.
pub trait Controls {
    fn set_reset_enabled(&mut self, enabled: bool);

    fn set_save_enabled(&mut self, enabled: bool);

    fn set_save_label(&mut self, label: SaveLabel);

    /// Show the dimension readout with `text`, or hide it with `None`.
    fn set_readout(&mut self, text: Option<&str>);

    /// Surface a message to the user.
    fn alert(&mut self, message: &str);
}

/// Message posted to the opener context once a crop is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropComplete {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub workbook_index: serde_json::Value,
    pub thumbnail_filename: String,
}

/// The context that opened this one, if any.
pub trait Opener {
    fn post_message(&mut self, message: &CropComplete);
}

pub trait Navigator {
    fn navigate(&mut self, location: &str);
}

/// Everything the selector needs from its host besides the async services.
pub struct UiHandles {
    pub canvas: Box<dyn Canvas>,
    pub controls: Box<dyn Controls>,
    pub opener: Option<Box<dyn Opener>>,
    pub navigator: Box<dyn Navigator>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn crop_complete_uses_opener_field_names() {
        let message = CropComplete {
            kind: crate::constant::CROP_COMPLETE_TYPE,
            workbook_index: serde_json::json!(4),
            thumbnail_filename: "thumb.png".into(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({
                "type": "cropComplete",
                "workbookIndex": 4,
                "thumbnailFilename": "thumb.png"
            })
        );
    }

    #[test]
    fn save_labels() {
        assert_eq!(SaveLabel::default(), SaveLabel::Idle);
        assert_eq!(SaveLabel::Busy.text(), "Saving...");
        assert_eq!(SaveLabel::Saved.text(), "Saved!");
    }
}
