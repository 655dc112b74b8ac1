//! PhotoEdit WASM - WebAssembly bindings for the PhotoEdit engine
//!
//! This crate exposes the photoedit-core editing engine to a
//! JavaScript/TypeScript front end. The UI layer builds the toolbar, file
//! dialogs and canvas; every button click and mouse event is forwarded to
//! the `Editor` here, and the current image is read back for display.
//!
//! # Module Structure
//!
//! - `editor` - The stateful `Editor` wrapping the engine session
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { Editor } from '@photoedit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new Editor();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! editor.open(bytes);
//! editor.grayscale();
//! const png = editor.save('png');
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod types;

// Re-export public types
pub use editor::{export_file_name, Editor};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
