// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// The crop selector widget: construction, control wiring and the event loop.

pub mod document;
pub mod endpoint;
pub mod message;
pub mod model;
pub mod update;
pub mod view;

use std::future::Future;
use std::pin::{Pin, pin};

use futures_util::future::OptionFuture;
use futures_util::{Stream, StreamExt};

use self::document::ImageSource;
use self::endpoint::{CropEndpoint, SavedCrop};
use self::message::AppMessage;
use self::model::AppModel;
use self::update::UpdateResult;
use self::view::canvas::fit_display_size;
use self::view::crop;
use crate::config::AppConfig;
use crate::constant::LOAD_FAILED_MESSAGE;
use crate::domain::{CropError, CropRegion, Result};
use crate::ui::{SaveLabel, UiHandles};

/// How [`CropSelector::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A crop was saved and the host was sent home.
    Navigated,
    /// The event stream ended with nothing left in flight.
    Closed,
}

/// One crop selector over one image. Owns its selection; nothing is shared
/// between instances.
pub struct CropSelector {
    pub(crate) model: AppModel,
    pub(crate) ui: UiHandles,
    pub(crate) config: AppConfig,
}

impl CropSelector {
    /// Load `image_url` and paint it onto the canvas.
    ///
    /// On failure the user is alerted and no selector is produced.
    pub async fn initialize<S: ImageSource>(
        source: &S,
        image_url: &str,
        workbook_index: serde_json::Value,
        mut ui: UiHandles,
        config: AppConfig,
    ) -> Result<Self> {
        let document = match source.load(image_url).await {
            Ok(document) => document,
            Err(e) => {
                log::error!("Failed to load image {image_url}: {e}");
                ui.controls.alert(LOAD_FAILED_MESSAGE);
                return Err(CropError::ImageLoad(format!("{image_url}: {e}")));
            }
        };

        let (width, height) = document.dimensions();
        ui.canvas.set_pixel_size(width, height);
        ui.canvas.draw_image(document.pixels());

        let container_width = ui.canvas.container_width();
        if let Some((display_width, display_height)) =
            fit_display_size(width, height, container_width, config.container_padding)
        {
            log::debug!(
                "Scaling {width}x{height} surface to {display_width:.1}x{display_height:.1}"
            );
            ui.canvas.set_display_size(display_width, display_height);
        }

        let mut selector = Self {
            model: AppModel::new(document.into_pixels(), workbook_index),
            ui,
            config,
        };
        selector.set_controls_enabled(false);
        selector.set_save_label(SaveLabel::Idle);
        selector.set_readout(None);

        Ok(selector)
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// The committed selection, in image pixels.
    pub fn selection(&self) -> Option<CropRegion> {
        self.model.crop_selection.region
    }

    /// Whether pointer, touch and reset input is currently honoured. The
    /// surface is inert while a save is in flight or redirecting.
    pub fn accepts_input(&self) -> bool {
        self.model.accepts_input()
    }

    /// Message of the last failed save, cleared when a new save starts.
    pub fn last_error(&self) -> Option<&str> {
        self.model.error.as_deref()
    }

    /// Handle one message.
    pub fn dispatch(&mut self, message: &AppMessage) -> UpdateResult {
        update::update(self, message)
    }

    /// Apply a save result; `true` means navigate home after the delay.
    pub fn finish_save(&mut self, result: Result<SavedCrop>) -> bool {
        update::finish_save(self, result)
    }

    pub fn navigate_home(&mut self) {
        log::info!("Navigating to {}", self.config.home_location);
        self.ui.navigator.navigate(&self.config.home_location);
    }

    /// Drive the selector from `events` until it navigates away or the
    /// stream ends with no save or redirect pending.
    ///
    /// Input keeps flowing while a save is in flight.
    pub async fn run<'e, E, S>(&mut self, endpoint: &'e E, events: S) -> Outcome
    where
        E: CropEndpoint,
        S: Stream<Item = AppMessage>,
    {
        let mut events = pin!(events);
        let mut events_done = false;
        let mut pending: Option<Pin<Box<dyn Future<Output = Result<SavedCrop>> + 'e>>> = None;
        let mut redirect: Option<Pin<Box<tokio::time::Sleep>>> = None;

        loop {
            if events_done && pending.is_none() && redirect.is_none() {
                return Outcome::Closed;
            }

            tokio::select! {
                Some(result) = OptionFuture::from(pending.as_mut()), if pending.is_some() => {
                    pending = None;
                    if self.finish_save(result) {
                        redirect = Some(Box::pin(tokio::time::sleep(self.config.redirect_delay())));
                    }
                }
                Some(()) = OptionFuture::from(redirect.as_mut()), if redirect.is_some() => {
                    self.navigate_home();
                    return Outcome::Navigated;
                }
                message = events.next(), if !events_done => {
                    let Some(message) = message else {
                        events_done = true;
                        continue;
                    };
                    if let UpdateResult::Submit(request) = self.dispatch(&message) {
                        pending = Some(Box::pin(async move { endpoint.save_crop(&request).await }));
                    }
                }
            }
        }
    }

    // =========================================================================
    // Control helpers
    // =========================================================================

    pub(crate) fn repaint(&mut self) {
        let region = self.model.crop_selection.visible_region();
        crop::repaint(self.ui.canvas.as_mut(), &self.model.image, region.as_ref());
    }

    /// Enable or disable both Reset and Save.
    pub(crate) fn set_controls_enabled(&mut self, enabled: bool) {
        self.model.reset_enabled = enabled;
        self.ui.controls.set_reset_enabled(enabled);
        self.set_save_enabled(enabled);
    }

    pub(crate) fn set_save_enabled(&mut self, enabled: bool) {
        self.model.save_enabled = enabled;
        self.ui.controls.set_save_enabled(enabled);
    }

    pub(crate) fn set_save_label(&mut self, label: SaveLabel) {
        self.model.save_label = label;
        self.ui.controls.set_save_label(label);
    }

    pub(crate) fn set_readout(&mut self, text: Option<String>) {
        self.ui.controls.set_readout(text.as_deref());
        self.model.readout = text;
    }
}
