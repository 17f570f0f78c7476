// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling for the selector.

use crate::app::CropSelector;
use crate::app::endpoint::{SaveCropRequest, SavedCrop};
use crate::app::message::{AppMessage, Touch};
use crate::app::model::SavePhase;
use crate::app::view::canvas::screen_to_surface;
use crate::constant::{CROP_COMPLETE_TYPE, SAVE_FAILED_PREFIX};
use crate::domain::{Point, Result};
use crate::ui::{CropComplete, SaveLabel};

/// What the host should do after a message was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    None,
    /// Handled; the host must suppress its default action (touch scrolling, zoom).
    Captured,
    /// Send this request to the save endpoint.
    Submit(SaveCropRequest),
}

pub fn update(app: &mut CropSelector, message: &AppMessage) -> UpdateResult {
    match message {
        AppMessage::CropDragStart { client_x, client_y } => {
            drag_start(app, *client_x, *client_y);
            UpdateResult::None
        }
        AppMessage::CropDragMove { client_x, client_y } => {
            drag_move(app, *client_x, *client_y);
            UpdateResult::None
        }
        AppMessage::CropDragEnd { client_x, client_y } => {
            let point = to_surface(app, *client_x, *client_y);
            drag_end(app, point);
            UpdateResult::None
        }

        AppMessage::TouchStart(touches) => {
            if let Some(touch) = first_touch(touches) {
                drag_start(app, touch.client_x, touch.client_y);
            }
            UpdateResult::Captured
        }
        AppMessage::TouchMove(touches) => {
            if let Some(touch) = first_touch(touches) {
                drag_move(app, touch.client_x, touch.client_y);
            }
            UpdateResult::Captured
        }
        AppMessage::TouchEnd => {
            if let Some(point) = app.model.last_point {
                drag_end(app, point);
            }
            UpdateResult::Captured
        }

        AppMessage::ResetSelection => {
            reset(app);
            UpdateResult::None
        }
        AppMessage::SaveCrop => match begin_save(app) {
            Some(request) => UpdateResult::Submit(request),
            None => UpdateResult::None,
        },
    }
}

fn first_touch(touches: &[Touch]) -> Option<&Touch> {
    touches.first()
}

fn to_surface(app: &CropSelector, client_x: f32, client_y: f32) -> Point {
    screen_to_surface(
        client_x,
        client_y,
        app.ui.canvas.bounding_rect(),
        app.model.pixel_size(),
    )
}

fn drag_start(app: &mut CropSelector, client_x: f32, client_y: f32) {
    if !app.model.accepts_input() {
        return;
    }

    let point = to_surface(app, client_x, client_y);
    log::debug!("Drag start at ({:.1}, {:.1})", point.x, point.y);

    app.model.crop_selection.start_new_selection(point);
    app.model.last_point = Some(point);
    app.set_controls_enabled(false);
    app.set_readout(None);
    app.repaint();
}

fn drag_move(app: &mut CropSelector, client_x: f32, client_y: f32) {
    if !app.model.crop_selection.is_dragging() {
        return;
    }

    let point = to_surface(app, client_x, client_y);
    app.model.crop_selection.update_drag(point);
    app.model.last_point = Some(point);
    app.repaint();

    let readout = app
        .model
        .crop_selection
        .readout_region(app.config.min_selection)
        .map(|region| region.describe());
    app.set_readout(readout);
}

fn drag_end(app: &mut CropSelector, point: Point) {
    if !app.model.crop_selection.is_dragging() {
        return;
    }

    app.model.last_point = None;
    let committed = app
        .model
        .crop_selection
        .end_drag(point, app.config.min_selection);

    match committed {
        Some(region) => {
            log::debug!("Selection committed: {region:?}");
            app.set_controls_enabled(true);
            app.set_readout(Some(region.describe()));
        }
        None => {
            log::debug!("Drag below threshold, selection cleared");
            app.set_controls_enabled(false);
            app.set_readout(None);
        }
    }
    app.repaint();
}

fn reset(app: &mut CropSelector) {
    if !app.model.accepts_input() {
        return;
    }

    app.model.crop_selection.reset();
    app.model.last_point = None;
    app.set_controls_enabled(false);
    app.set_readout(None);
    app.repaint();
}

fn begin_save(app: &mut CropSelector) -> Option<SaveCropRequest> {
    if !app.model.accepts_input() {
        return None;
    }
    let region = app.model.crop_selection.region?;

    app.model.save_phase = SavePhase::Saving;
    app.model.clear_error();
    // Input stays inert until the save settles.
    app.set_controls_enabled(false);
    app.set_save_label(SaveLabel::Busy);

    log::info!("Saving crop {region:?}");
    Some(SaveCropRequest {
        workbook_index: app.model.workbook_index.clone(),
        crop_data: region,
    })
}

/// Apply the outcome of a save request. Returns `true` when the selector
/// should navigate home after the redirect delay.
pub fn finish_save(app: &mut CropSelector, result: Result<SavedCrop>) -> bool {
    if app.model.save_phase != SavePhase::Saving {
        return false;
    }

    match result {
        Ok(saved) => {
            log::info!("Crop saved: {saved:?}");
            app.model.save_phase = SavePhase::Redirecting;
            app.set_save_label(SaveLabel::Saved);

            if let (Some(opener), Some(thumbnail)) =
                (app.ui.opener.as_mut(), saved.thumbnail_filename)
            {
                opener.post_message(&CropComplete {
                    kind: CROP_COMPLETE_TYPE,
                    workbook_index: app.model.workbook_index.clone(),
                    thumbnail_filename: thumbnail,
                });
            }
            true
        }
        Err(err) => {
            log::error!("Error saving crop: {err}");
            let message = err.to_string();
            app.ui.controls.alert(&format!("{SAVE_FAILED_PREFIX}{message}"));
            app.model.set_error(message);
            app.model.save_phase = SavePhase::Idle;
            app.set_save_label(SaveLabel::Idle);
            app.set_controls_enabled(app.model.crop_selection.has_selection());
            false
        }
    }
}
