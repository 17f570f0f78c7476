// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Crop selection state: the committed region and the transient drag.

use crate::domain::{CropRegion, Point};

/// Transient state while the pointer button is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start: Point,
    pub current: Point,
}

impl DragState {
    pub fn region(&self) -> CropRegion {
        CropRegion::from_corners(self.start, self.current)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CropSelection {
    pub region: Option<CropRegion>,
    pub drag: Option<DragState>,
}

impl CropSelection {
    /// Begin a drag at `point`, discarding any committed region.
    pub fn start_new_selection(&mut self, point: Point) {
        self.region = None;
        self.drag = Some(DragState {
            start: point,
            current: point,
        });
    }

    pub fn update_drag(&mut self, point: Point) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = point;
        }
    }

    /// Finish the drag at `point`.
    ///
    /// Commits the normalized rectangle if both extents exceed `min_size`,
    /// otherwise clears the region. Returns the committed region.
    pub fn end_drag(&mut self, point: Point, min_size: f32) -> Option<CropRegion> {
        let drag = self.drag.take()?;
        let region = CropRegion::from_corners(drag.start, point);

        self.region = region.exceeds(min_size).then_some(region);
        self.region
    }

    pub fn reset(&mut self) {
        self.region = None;
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn has_selection(&self) -> bool {
        self.region.is_some()
    }

    /// Rectangle to draw: the drag in progress, else the committed region.
    pub fn visible_region(&self) -> Option<CropRegion> {
        match (&self.drag, &self.region) {
            (Some(drag), _) => Some(drag.region()),
            (None, region) => *region,
        }
    }

    /// Region the dimension readout should describe, if any.
    pub fn readout_region(&self, min_size: f32) -> Option<CropRegion> {
        match (&self.drag, &self.region) {
            (Some(drag), _) => Some(drag.region()).filter(|r| r.exceeds(min_size)),
            (None, region) => *region,
        }
    }
}
