// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Selector messages: pointer and touch input plus control clicks.

/// A single touch contact in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub client_x: f32,
    pub client_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // Pointer input, screen coordinates.
    CropDragStart { client_x: f32, client_y: f32 },
    CropDragMove { client_x: f32, client_y: f32 },
    CropDragEnd { client_x: f32, client_y: f32 },

    // Touch input. Only the first contact is read.
    TouchStart(Vec<Touch>),
    TouchMove(Vec<Touch>),
    TouchEnd,

    // Controls.
    ResetSelection,
    SaveCrop,
}
