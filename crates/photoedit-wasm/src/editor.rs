//! WASM bindings for the editor session.
//!
//! The `Editor` type wraps the engine session and exposes one method per
//! toolbar command plus the raw pointer-event entry points. The UI layer
//! owns the canvas, dialogs and file handling; it feeds events in and blits
//! the current image back out after every call that may have changed it.

use photoedit_core::encode::ImageFormat;
use photoedit_core::{Color, Command, EditorSession, Outcome, Point, ToolKind};
use wasm_bindgen::prelude::*;

use crate::types::JsPixelBuffer;

/// The interactive raster editor.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const editor = new Editor();
/// editor.new_image(800, 600);
/// editor.use_draw_tool();
/// editor.pointer_pressed(10, 10);
/// editor.pointer_moved(50, 10);
/// editor.pointer_released(50, 10);
/// const image = editor.image()!;
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(image.pixels()), image.width), 0, 0);
/// ```
#[wasm_bindgen]
pub struct Editor {
    session: EditorSession,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Editor {
    /// Create an editor with no image loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        Editor {
            session: EditorSession::new(),
        }
    }

    /// Create a blank white canvas of the given size.
    pub fn new_image(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.run(Command::New { width, height })
    }

    /// Decode PNG, JPEG or BMP bytes and install the result as the current
    /// image. On failure the current image is left untouched.
    pub fn open(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.run(Command::Open(bytes.to_vec()))
    }

    /// Convert the current image to grayscale.
    pub fn grayscale(&mut self) -> Result<(), JsValue> {
        self.run(Command::Grayscale)
    }

    /// Mirror the current image left-right.
    pub fn flip_horizontal(&mut self) -> Result<(), JsValue> {
        self.run(Command::FlipHorizontal)
    }

    /// Mirror the current image top-bottom.
    pub fn flip_vertical(&mut self) -> Result<(), JsValue> {
        self.run(Command::FlipVertical)
    }

    /// Rotate the current image a quarter turn counter-clockwise.
    pub fn rotate_left(&mut self) -> Result<(), JsValue> {
        self.run(Command::RotateLeft)
    }

    /// Rotate the current image a quarter turn clockwise.
    pub fn rotate_right(&mut self) -> Result<(), JsValue> {
        self.run(Command::RotateRight)
    }

    /// Enlarge the current image by one zoom step.
    pub fn zoom_in(&mut self) -> Result<(), JsValue> {
        self.run(Command::ZoomIn)
    }

    /// Shrink the current image by one zoom step.
    pub fn zoom_out(&mut self) -> Result<(), JsValue> {
        self.run(Command::ZoomOut)
    }

    /// Set the draw color used by subsequent strokes.
    pub fn choose_color(&mut self, r: u8, g: u8, b: u8, a: u8) -> Result<(), JsValue> {
        self.run(Command::ChooseColor(Color::rgba(r, g, b, a)))
    }

    /// Encode the current image in the given format ("png", "jpg"/"jpeg" or
    /// "bmp") and return the file bytes for the UI to download or write.
    pub fn save(&mut self, format: &str) -> Result<Vec<u8>, JsValue> {
        let format = parse_format(format)?;
        match self
            .session
            .apply(Command::Save(format))
            .map_err(|e| JsValue::from_str(&e.to_string()))?
        {
            Outcome::Saved(bytes) => Ok(bytes),
            _ => Err(JsValue::from_str("No image loaded")),
        }
    }

    /// Arm the crop tool.
    pub fn use_crop_tool(&mut self) {
        self.session.set_tool(Some(ToolKind::Crop));
    }

    /// Arm the draw tool.
    pub fn use_draw_tool(&mut self) {
        self.session.set_tool(Some(ToolKind::Draw));
    }

    /// Disarm the active tool, discarding any selection in progress.
    pub fn clear_tool(&mut self) {
        self.session.set_tool(None);
    }

    /// Forward a pointer press in buffer-local coordinates.
    pub fn pointer_pressed(&mut self, x: i32, y: i32) {
        self.session.pointer_pressed(Point::new(x, y));
    }

    /// Forward a pointer move in buffer-local coordinates.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.session.pointer_moved(Point::new(x, y));
    }

    /// Forward a pointer release in buffer-local coordinates.
    pub fn pointer_released(&mut self, x: i32, y: i32) {
        self.session.pointer_released(Point::new(x, y));
    }

    /// Whether an image is currently loaded.
    pub fn has_image(&self) -> bool {
        self.session.image().is_some()
    }

    /// A copy of the current image for display, or None before the first
    /// New/Open.
    pub fn image(&self) -> Option<JsPixelBuffer> {
        self.session.image().map(JsPixelBuffer::from_buffer)
    }

    /// The crop selection in progress as `{x, y, width, height}`, or
    /// undefined when there is none. Drawn by the UI as a rubber-band
    /// overlay; never part of the image itself.
    pub fn selection(&self) -> JsValue {
        match self.session.selection() {
            Some(rect) => serde_wasm_bindgen::to_value(&rect).unwrap_or(JsValue::UNDEFINED),
            None => JsValue::UNDEFINED,
        }
    }

    /// The current draw color as `{r, g, b, a}`.
    pub fn draw_color(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.session.draw_color()).unwrap_or(JsValue::UNDEFINED)
    }
}

impl Editor {
    /// Apply a command and map any failure to a JS error string.
    fn run(&mut self, command: Command) -> Result<(), JsValue> {
        self.session
            .apply(command)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Make a save-dialog file name agree with the chosen format by appending
/// the format's extension unless a matching one is already present.
#[wasm_bindgen]
pub fn export_file_name(name: &str, format: &str) -> Result<String, JsValue> {
    let format = parse_format(format)?;
    Ok(format.ensure_extension(name))
}

fn parse_format(format: &str) -> Result<ImageFormat, JsValue> {
    ImageFormat::from_extension(format)
        .ok_or_else(|| JsValue::from_str(&format!("Unsupported format: {format}")))
}
