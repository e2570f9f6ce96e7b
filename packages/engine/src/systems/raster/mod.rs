//! Text Rasterizer
//!
//! Turns a string into an RGBA bitmap sized to the canvas: greedy wrap, then
//! each line centered horizontally and the block centered vertically. The
//! pixel work is delegated to a `TextRasterizer` backend so the same layout
//! runs on the built-in bitmap font (every target) or the browser canvas
//! (wasm32).

use thiserror::Error;

use crate::domain::config::LayoutConfig;

mod bitmap;
mod bitmap_font;
#[cfg(target_arch = "wasm32")]
mod canvas_font;
mod glyphs;
mod wrap;

pub use bitmap::Bitmap;
pub use bitmap_font::BitmapFont;
#[cfg(target_arch = "wasm32")]
pub use canvas_font::CanvasFont;
pub use wrap::{wrap_words, PlacedLine, TextLayout, WrappedText};

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("canvas: {0}")]
    Canvas(String),
}

/// Pixel backend for the rasterizer
pub trait TextRasterizer {
    /// Advance width of `text` in pixels
    fn measure(&mut self, text: &str, layout: &LayoutConfig) -> f32;

    /// Draw every placed line into `target` (already cleared)
    fn render(
        &mut self,
        lines: &TextLayout,
        layout: &LayoutConfig,
        target: &mut Bitmap,
    ) -> Result<(), RasterError>;
}

/// Clear `target`, lay out `text` and draw it
pub fn rasterize(
    backend: &mut dyn TextRasterizer,
    text: &str,
    layout: &LayoutConfig,
    target: &mut Bitmap,
) -> Result<TextLayout, RasterError> {
    target.clear();

    let max_width = layout.max_text_width(target.width());
    let wrapped = wrap_words(text, max_width, |line| backend.measure(line, layout));
    let placed = TextLayout::place(&wrapped, target.width(), target.height(), layout.line_height);

    if !placed.is_empty() {
        backend.render(&placed, layout, target)?;
    }
    Ok(placed)
}
