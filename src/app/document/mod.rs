// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Image loading: the async source the selector pulls its image from.

pub mod raster;

use std::future::Future;
use std::path::Path;

use self::raster::RasterDocument;
use crate::domain::Result;

/// Asynchronous image provider.
///
/// Loading is single-shot and not cancellable once started.
pub trait ImageSource {
    fn load(&self, url: &str) -> impl Future<Output = Result<RasterDocument>>;
}

/// Loads `http(s)://` URLs over the network and anything else from disk.
#[derive(Debug, Clone, Default)]
pub struct FetchImageSource {
    #[cfg(feature = "http")]
    client: reqwest::Client,
}

impl FetchImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "http")]
    async fn fetch(&self, url: &str) -> Result<RasterDocument> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        RasterDocument::from_bytes(&bytes)
    }

    #[cfg(not(feature = "http"))]
    async fn fetch(&self, url: &str) -> Result<RasterDocument> {
        Err(crate::domain::CropError::ImageLoad(format!(
            "{url}: built without http support"
        )))
    }
}

fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl ImageSource for FetchImageSource {
    async fn load(&self, url: &str) -> Result<RasterDocument> {
        log::debug!("Loading image {url}");
        if is_remote(url) {
            self.fetch(url).await
        } else {
            let path = url.strip_prefix("file://").unwrap_or(url);
            RasterDocument::open(Path::new(path)).await
        }
    }
}
