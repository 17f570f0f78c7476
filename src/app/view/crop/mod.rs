// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: selection state and its rendering.

mod overlay;
mod selection;

pub use overlay::{draw_selection, repaint};
pub use selection::{CropSelection, DragState};
