// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::Path;

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::domain::Result;

/// Represents a decoded raster image (PNG, JPEG, WebP, ...).
#[derive(Debug, Clone)]
pub struct RasterDocument {
    /// The decoded image, converted to RGBA for painting.
    document: RgbaImage,
}

impl RasterDocument {
    /// Decode an image from raw bytes, guessing the format from its contents.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&decoded))
    }

    /// Load a raster document from disk.
    pub async fn open(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(&bytes)
    }

    pub fn from_image(image: &DynamicImage) -> Self {
        Self {
            document: image.to_rgba8(),
        }
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.document
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.document
    }
}
