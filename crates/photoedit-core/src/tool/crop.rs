//! The region-selection crop tool.
//!
//! State machine: `Idle -> Selecting -> Idle`. While selecting, the tool
//! exposes the normalized rubber-band rectangle as a preview for the UI to
//! overlay; the pixel buffer is only touched on release, and only when the
//! selection is large enough to be intentional.

use crate::buffer::PixelBuffer;
use crate::transform::crop;
use crate::{Point, Rect};

#[derive(Debug, Clone, Default)]
enum CropState {
    #[default]
    Idle,
    Selecting {
        origin: Point,
        current: Point,
    },
}

/// Pointer-event state machine for rectangle selection and crop.
#[derive(Debug, Clone, Default)]
pub struct CropTool {
    state: CropState,
}

impl CropTool {
    /// Create the tool in its idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a selection at `pt`.
    pub fn on_press(&mut self, pt: Point) {
        self.state = CropState::Selecting {
            origin: pt,
            current: pt,
        };
    }

    /// Extend the selection to `pt` and return the updated preview
    /// rectangle. Returns None when no selection is in progress.
    pub fn on_move(&mut self, pt: Point) -> Option<Rect> {
        match &mut self.state {
            CropState::Selecting { origin, current } => {
                *current = pt;
                Some(Rect::from_corners(*origin, pt))
            }
            CropState::Idle => None,
        }
    }

    /// Finish the selection at `pt` and commit the crop.
    ///
    /// Returns the cropped buffer for the session to install, or None when
    /// no selection was in progress or the selection was degenerate (too
    /// small to be intentional). The tool returns to idle either way.
    pub fn on_release(&mut self, pt: Point, image: &PixelBuffer) -> Option<PixelBuffer> {
        let state = std::mem::take(&mut self.state);
        match state {
            CropState::Selecting { origin, .. } => {
                let rect = Rect::from_corners(origin, pt);
                if rect.is_degenerate() {
                    return None;
                }
                Some(crop(image, rect))
            }
            CropState::Idle => None,
        }
    }

    /// The in-progress selection rectangle, for overlay rendering.
    pub fn selection(&self) -> Option<Rect> {
        match self.state {
            CropState::Selecting { origin, current } => Some(Rect::from_corners(origin, current)),
            CropState::Idle => None,
        }
    }

    /// Abandon any in-progress selection and return to idle.
    pub fn reset(&mut self) {
        self.state = CropState::Idle;
    }
}
