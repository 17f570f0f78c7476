// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Crop-region selector: drag a rectangle over an image and submit it.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod ui;

pub use app::endpoint::{CropEndpoint, SaveCropRequest, SaveCropResponse, SavedCrop};
#[cfg(feature = "http")]
pub use app::endpoint::HttpCropEndpoint;
pub use app::message::{AppMessage, Touch};
pub use app::update::UpdateResult;
pub use app::{CropSelector, Outcome};
pub use config::AppConfig;
pub use domain::{CropError, CropRegion, Point};
