// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/mod.rs
//
// Host-side implementations of the UI capabilities.

pub mod console;
pub mod raster_canvas;

// Re-exports for convenience
pub use console::{LogControls, LogNavigator, StdoutOpener};
pub use raster_canvas::RasterCanvas;
