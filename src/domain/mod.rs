// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: crop geometry and error types, free of UI concerns.

pub mod document;
pub mod error;

pub use document::operations::crop::{CropRegion, Point};
pub use error::{CropError, Result};
