// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Selector state.

use image::RgbaImage;

use crate::app::view::crop::CropSelection;
use crate::ui::SaveLabel;

// =============================================================================
// Enums
// =============================================================================

/// Progress of the save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePhase {
    #[default]
    Idle,
    /// A request is in flight.
    Saving,
    /// Stored; waiting to navigate home.
    Redirecting,
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Document.
    pub image: RgbaImage,
    pub workbook_index: serde_json::Value,

    // Tools.
    pub crop_selection: CropSelection,
    /// Last surface point seen during a drag, used when touch end carries none.
    pub last_point: Option<crate::domain::Point>,

    // Controls, as last pushed to the host.
    pub reset_enabled: bool,
    pub save_enabled: bool,
    pub save_label: SaveLabel,
    pub readout: Option<String>,
    pub save_phase: SavePhase,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new(image: RgbaImage, workbook_index: serde_json::Value) -> Self {
        Self {
            image,
            workbook_index,
            crop_selection: CropSelection::default(),
            last_point: None,
            reset_enabled: false,
            save_enabled: false,
            save_label: SaveLabel::Idle,
            readout: None,
            save_phase: SavePhase::Idle,
            error: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pointer and reset input is ignored while a save is running or done.
    pub fn accepts_input(&self) -> bool {
        self.save_phase == SavePhase::Idle
    }
}
