// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/endpoint.rs
//
// Save endpoint: wire types and the HTTP client for `POST /save_crop`.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::domain::{CropError, CropRegion, Result};

/// Request body of `POST /save_crop`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveCropRequest {
    /// Opaque index of the image on the server, passed through unchanged.
    pub workbook_index: serde_json::Value,
    pub crop_data: CropRegion,
}

/// Response body of `POST /save_crop`, in either of its shapes. Other fields
/// such as `success` are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SaveCropResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub cropped_filename: Option<String>,
    #[serde(default)]
    pub thumbnail_filename: Option<String>,
}

impl SaveCropResponse {
    /// Turn an `error` payload into [`CropError::Rejected`]. An empty
    /// message counts as no error.
    pub fn into_result(self) -> Result<SavedCrop> {
        match self.error.filter(|msg| !msg.is_empty()) {
            Some(message) => Err(CropError::Rejected(message)),
            None => Ok(SavedCrop {
                cropped_filename: self.cropped_filename,
                thumbnail_filename: self.thumbnail_filename,
            }),
        }
    }
}

/// A successful save.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SavedCrop {
    pub cropped_filename: Option<String>,
    pub thumbnail_filename: Option<String>,
}

/// Where crop results are sent.
pub trait CropEndpoint {
    fn save_crop(&self, request: &SaveCropRequest) -> impl Future<Output = Result<SavedCrop>>;
}

/// JSON over HTTP client for the save endpoint.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpCropEndpoint {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpCropEndpoint {
    /// `url` is the full URL of the save route.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[cfg(feature = "http")]
impl CropEndpoint for HttpCropEndpoint {
    async fn save_crop(&self, request: &SaveCropRequest) -> Result<SavedCrop> {
        log::debug!("POST {} {:?}", self.url, request);

        // Error payloads arrive with non-2xx statuses, so the body is read
        // regardless of status.
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        let body: SaveCropResponse = response.json().await.map_err(|e| {
            CropError::Transport(format!("unexpected response ({status}): {e}"))
        })?;

        body.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_matches_wire_format() {
        let request = SaveCropRequest {
            workbook_index: serde_json::json!(3),
            crop_data: CropRegion::new(10.0, 20.0, 300.0, 150.0),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "workbook_index": 3,
                "crop_data": { "x": 10.0, "y": 20.0, "width": 300.0, "height": 150.0 }
            })
        );
    }

    #[test]
    fn error_payload_is_rejected() {
        let body: SaveCropResponse = serde_json::from_str(r#"{"error":"disk full"}"#).unwrap();
        match body.into_result() {
            Err(CropError::Rejected(msg)) => assert_eq!(msg, "disk full"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn success_payload_keeps_filenames() {
        let body: SaveCropResponse = serde_json::from_str(
            r#"{"success":true,"cropped_filename":"c.png","thumbnail_filename":"t.png"}"#,
        )
        .unwrap();

        assert_eq!(
            body.into_result().unwrap(),
            SavedCrop {
                cropped_filename: Some("c.png".into()),
                thumbnail_filename: Some("t.png".into()),
            }
        );
    }

    #[test]
    fn empty_object_is_a_bare_success() {
        let body: SaveCropResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_result().unwrap(), SavedCrop::default());
    }
}
