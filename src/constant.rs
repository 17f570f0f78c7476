// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

use image::Rgba;

/// Selection stroke and fill base color (#dc3545).
pub const SELECTION_COLOR: Rgba<u8> = Rgba([0xdc, 0x35, 0x45, 0xff]);

/// Selection fill: the stroke color at 10% opacity.
pub const SELECTION_FILL: Rgba<u8> = Rgba([0xdc, 0x35, 0x45, 26]);

/// Selection stroke width in surface pixels.
pub const SELECTION_STROKE_WIDTH: f32 = 2.0;

/// Dash pattern for the selection stroke (on, off) in surface pixels.
pub const SELECTION_DASH: [f32; 2] = [5.0, 5.0];

/// Message shown when the image cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load image for cropping";

/// Prefix for save failures shown to the user.
pub const SAVE_FAILED_PREFIX: &str = "Error saving crop: ";

/// Path of the save endpoint, relative to the configured base URL.
pub const SAVE_CROP_PATH: &str = "/save_crop";

/// Opener message type announcing a finished crop.
pub const CROP_COMPLETE_TYPE: &str = "cropComplete";

/// Config directory name.
pub const CONFIG_DIR: &str = "cropsel";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";
