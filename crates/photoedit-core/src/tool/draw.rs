//! The freehand drawing tool.
//!
//! State machine: `Idle -> Drawing -> Idle`. Every move event rasterizes one
//! line segment from the previous point onto a working copy of the current
//! image and hands that copy back for immediate installation, so a stroke
//! becomes visible as it is drawn and partial strokes survive interruption.

use crate::buffer::PixelBuffer;
use crate::{Color, Point};

/// Stroke width in pixels.
pub const STROKE_WIDTH: u32 = 2;

#[derive(Debug, Clone, Default)]
enum DrawState {
    #[default]
    Idle,
    Drawing {
        last: Point,
    },
}

/// Pointer-event state machine for freehand strokes.
#[derive(Debug, Clone, Default)]
pub struct DrawTool {
    state: DrawState,
}

impl DrawTool {
    /// Create the tool in its idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a stroke at `pt`.
    pub fn on_press(&mut self, pt: Point) {
        self.state = DrawState::Drawing { last: pt };
    }

    /// Extend the stroke to `pt`.
    ///
    /// Returns a working copy of `image` with the segment from the previous
    /// point rasterized in `color`, to be installed as the new current
    /// image. Returns None when no stroke is in progress.
    pub fn on_move(&mut self, pt: Point, image: &PixelBuffer, color: Color) -> Option<PixelBuffer> {
        match &mut self.state {
            DrawState::Drawing { last } => {
                let mut working = image.clone();
                draw_segment(&mut working, *last, pt, color);
                *last = pt;
                Some(working)
            }
            DrawState::Idle => None,
        }
    }

    /// End the stroke. The increments committed on move events stay.
    pub fn on_release(&mut self) {
        self.state = DrawState::Idle;
    }

    /// Abandon the stroke in progress, keeping what was already committed.
    pub fn reset(&mut self) {
        self.state = DrawState::Idle;
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }
}

/// Rasterize a straight segment of `STROKE_WIDTH` thickness.
///
/// Bresenham line walk with a square stamp per step. Stamps falling partly
/// outside the canvas are clipped by the bounds-checked pixel write.
fn draw_segment(image: &mut PixelBuffer, from: Point, to: Point, color: Color) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut x = from.x;
    let mut y = from.y;
    let mut err = dx + dy;

    loop {
        stamp(image, x, y, color);
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Fill the STROKE_WIDTH x STROKE_WIDTH square anchored at (x, y).
fn stamp(image: &mut PixelBuffer, x: i32, y: i32, color: Color) {
    for oy in 0..STROKE_WIDTH as i32 {
        for ox in 0..STROKE_WIDTH as i32 {
            image.set_pixel(x + ox, y + oy, color);
        }
    }
}
