// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Crate error type.

use std::fmt;

#[derive(Debug)]
pub enum CropError {
    /// The image could not be fetched or read.
    ImageLoad(String),
    /// The image bytes could not be decoded.
    Image(image::ImageError),
    Io(std::io::Error),
    /// The save request failed before a usable response arrived.
    Transport(String),
    /// The server answered with an `error` field.
    Rejected(String),
    Config(String),
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::ImageLoad(msg) => write!(f, "Failed to load image: {msg}"),
            CropError::Image(err) => write!(f, "Image decoding error: {err}"),
            CropError::Io(err) => write!(f, "IO error: {err}"),
            CropError::Transport(msg) => f.write_str(msg),
            CropError::Rejected(msg) => f.write_str(msg),
            CropError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for CropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CropError::Image(err) => Some(err),
            CropError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CropError {
    fn from(err: std::io::Error) -> Self {
        CropError::Io(err)
    }
}

impl From<image::ImageError> for CropError {
    fn from(err: image::ImageError) -> Self {
        CropError::Image(err)
    }
}

impl From<serde_json::Error> for CropError {
    fn from(err: serde_json::Error) -> Self {
        CropError::Transport(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for CropError {
    fn from(err: reqwest::Error) -> Self {
        CropError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CropError>;
