//! The editor session: one current image, one optional active tool, one
//! draw color.
//!
//! The UI layer forwards discrete commands (open, grayscale, save, ...) and
//! raw pointer events; the session either applies a transform directly or
//! routes the pointer traffic to the armed tool, and installs whatever new
//! buffer comes back. All state a tool or command can touch lives here,
//! with a defined lifecycle, instead of in free-floating globals.

use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_image, EncodeError, ImageFormat};
use crate::tool::{ActiveTool, ToolKind};
use crate::transform::{flip, grayscale, rotate, scale, FlipAxis, Rotation};
use crate::{Color, Point, Rect};

/// Factor applied by one zoom-in step; zoom-out uses the reciprocal.
pub const ZOOM_STEP: f64 = 1.25;

/// A discrete command from the UI layer.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create a blank white canvas of the given size.
    New { width: u32, height: u32 },
    /// Decode file bytes and install the result as the current image.
    Open(Vec<u8>),
    Grayscale,
    FlipHorizontal,
    FlipVertical,
    /// Quarter turn counter-clockwise.
    RotateLeft,
    /// Quarter turn clockwise.
    RotateRight,
    ZoomIn,
    ZoomOut,
    /// Set the draw color used by subsequent strokes.
    ChooseColor(Color),
    /// Encode the current image for export.
    Save(ImageFormat),
}

/// What a successfully handled command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect.
    Applied,
    /// There was no image to operate on; the command was skipped.
    Ignored,
    /// Save produced encoded file bytes for the UI to write out.
    Saved(Vec<u8>),
}

/// Errors surfaced to the user as dialogs.
///
/// Every failure is terminal for its one command and leaves the session
/// exactly as it was before.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The raster editing engine's top-level state.
#[derive(Debug)]
pub struct EditorSession {
    image: Option<PixelBuffer>,
    tool: Option<ActiveTool>,
    draw_color: Color,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a session with no image, no armed tool and the default red
    /// draw color.
    pub fn new() -> Self {
        Self {
            image: None,
            tool: None,
            draw_color: Color::RED,
        }
    }

    /// The current image, if one has been created or opened.
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    /// The color used for drawing strokes. Red until changed, then sticky
    /// across tool switches and image loads.
    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    /// The kind of the armed tool, if any.
    pub fn tool_kind(&self) -> Option<ToolKind> {
        self.tool.as_ref().map(ActiveTool::kind)
    }

    /// The crop selection in progress, for the UI's rubber-band overlay.
    pub fn selection(&self) -> Option<Rect> {
        match &self.tool {
            Some(ActiveTool::Crop(tool)) => tool.selection(),
            _ => None,
        }
    }

    /// Arm a tool, or disarm with None.
    ///
    /// The outgoing tool is dropped along with any uncommitted selection;
    /// increments a draw stroke already committed stay in the image.
    pub fn set_tool(&mut self, kind: Option<ToolKind>) {
        self.tool = kind.map(ActiveTool::new);
    }

    /// Handle a discrete command from the UI.
    ///
    /// Edit commands without a current image are skipped with
    /// `Outcome::Ignored` rather than treated as errors; pressing Grayscale
    /// on an empty editor is not a fault.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, EditorError> {
        match command {
            Command::New { width, height } => {
                self.install(PixelBuffer::blank(width.max(1), height.max(1), Color::WHITE));
                Ok(Outcome::Applied)
            }
            Command::Open(bytes) => {
                // Decode fully before touching any state
                let decoded = decode_image(&bytes)?;
                self.install(decoded);
                Ok(Outcome::Applied)
            }
            Command::ChooseColor(color) => {
                self.draw_color = color;
                Ok(Outcome::Applied)
            }
            Command::Save(format) => match &self.image {
                Some(image) => Ok(Outcome::Saved(encode_image(image, format)?)),
                None => Ok(Outcome::Ignored),
            },
            Command::Grayscale => self.replace(grayscale),
            Command::FlipHorizontal => self.replace(|img| flip(img, FlipAxis::Horizontal)),
            Command::FlipVertical => self.replace(|img| flip(img, FlipAxis::Vertical)),
            Command::RotateLeft => self.replace(|img| rotate(img, Rotation::Ccw90)),
            Command::RotateRight => self.replace(|img| rotate(img, Rotation::Cw90)),
            Command::ZoomIn => self.replace(|img| scale(img, ZOOM_STEP)),
            Command::ZoomOut => self.replace(|img| scale(img, 1.0 / ZOOM_STEP)),
        }
    }

    /// Route a pointer press to the armed tool.
    pub fn pointer_pressed(&mut self, pt: Point) {
        if self.image.is_none() {
            return;
        }
        match &mut self.tool {
            Some(ActiveTool::Crop(tool)) => tool.on_press(pt),
            Some(ActiveTool::Draw(tool)) => tool.on_press(pt),
            None => {}
        }
    }

    /// Route a pointer move to the armed tool.
    ///
    /// A drawing stroke commits a new buffer on every move; a crop drag
    /// only updates the preview rectangle.
    pub fn pointer_moved(&mut self, pt: Point) {
        let committed = match (&mut self.tool, &self.image) {
            (Some(ActiveTool::Draw(tool)), Some(image)) => {
                tool.on_move(pt, image, self.draw_color)
            }
            (Some(ActiveTool::Crop(tool)), Some(_)) => {
                tool.on_move(pt);
                None
            }
            _ => None,
        };
        if let Some(next) = committed {
            self.image = Some(next);
        }
    }

    /// Route a pointer release to the armed tool, committing a crop if the
    /// selection was large enough.
    pub fn pointer_released(&mut self, pt: Point) {
        let committed = match (&mut self.tool, &self.image) {
            (Some(ActiveTool::Crop(tool)), Some(image)) => tool.on_release(pt, image),
            (Some(ActiveTool::Draw(tool)), Some(_)) => {
                tool.on_release();
                None
            }
            _ => None,
        };
        if let Some(next) = committed {
            self.image = Some(next);
        }
    }

    /// Install a freshly created or opened image, disarming any tool.
    fn install(&mut self, image: PixelBuffer) {
        self.image = Some(image);
        self.tool = None;
    }

    /// Replace the current image with a transformed copy, or skip when
    /// there is none.
    fn replace(
        &mut self,
        op: impl FnOnce(&PixelBuffer) -> PixelBuffer,
    ) -> Result<Outcome, EditorError> {
        let Some(image) = &self.image else {
            return Ok(Outcome::Ignored);
        };
        let next = op(image);
        self.image = Some(next);
        Ok(Outcome::Applied)
    }
}
