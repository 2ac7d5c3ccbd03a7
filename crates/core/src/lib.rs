#![no_std]

//! `bitmap-text-core` provides core primitives for the `bitmap-text` crate.

extern crate alloc;

mod canvas;

pub use canvas::{Canvas, PixelGrid};

/// A single glyph (character) contained within a bitmap font.
///
/// Each entry of `rows` is one pixel row, read most-significant-bit first:
/// bit `0x80 >> col` is set when column `col` is ink.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Row patterns, top to bottom
    pub rows: &'static [u8],
}

impl Glyph {
    /// Row pattern at `row`, or an empty row past the end of the glyph.
    pub fn row(&self, row: usize) -> u8 {
        self.rows.get(row).copied().unwrap_or(0)
    }

    /// Is the pixel at (`row`, `col`) of this glyph ink?
    pub fn is_ink(&self, row: usize, col: usize) -> bool {
        col < 8 && self.row(row) & (0x80 >> col) != 0
    }
}

/// Errors raised at the rendering API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The integer scale factor was zero.
    #[error("font size must be a positive integer")]
    ZeroFontSize,
}

/// Placement, color and scale of rendered text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextStyle {
    /// Left edge of the first glyph cell, may lie outside the canvas
    pub x: i32,
    /// Top edge of the glyph cells, may lie outside the canvas
    pub y: i32,
    /// Value written at ink pixels
    pub color: u8,
    /// Integer scale factor, every glyph pixel becomes a
    /// `font_size × font_size` block
    pub font_size: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            color: 0,
            font_size: 1,
        }
    }
}

impl TextStyle {
    /// Move the top-left corner of the text to (`x`, `y`).
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn with_color(self, color: u8) -> Self {
        Self { color, ..self }
    }

    pub fn with_font_size(self, font_size: u32) -> Self {
        Self { font_size, ..self }
    }

    /// Fill value for a freshly allocated canvas: the opposite extreme of
    /// the ink color, so black ink lands on white and anything else on black.
    pub fn background(&self) -> u8 {
        if self.color == 0 { 255 } else { 0 }
    }

    /// Reject styles the rasterizer cannot scale.
    pub fn validate(&self) -> Result<(), Error> {
        if self.font_size == 0 {
            return Err(Error::ZeroFontSize);
        }
        Ok(())
    }
}

/// Allows rasterizing text into a grid of 8-bit pixels.
///
/// Implementors supply the glyph data and the per-pixel drawing; allocation
/// and measurement are shared so the two always agree.
pub trait Renderer {
    /// Width of an unscaled glyph cell, in pixels.
    const CELL_WIDTH: usize;
    /// Height of an unscaled glyph cell, in pixels.
    const CELL_HEIGHT: usize;

    /// Draw `text` into an existing grid, clipping at its edges.
    fn render_into<G: PixelGrid + ?Sized>(
        text: &str,
        grid: &mut G,
        style: &TextStyle,
    ) -> Result<(), Error>;

    /// Draw `text` into a new canvas sized exactly to fit it.
    ///
    /// The style's position is ignored; the text is placed at the origin.
    fn render_text(text: &str, style: &TextStyle) -> Result<Canvas, Error> {
        style.validate()?;

        let (width, height) = Self::measure_text(text, style.font_size);
        let mut canvas = Canvas::filled(width, height, style.background());

        Self::render_into(text, &mut canvas, &style.at(0, 0))?;

        Ok(canvas)
    }

    /// Size in pixels, as `(width, height)`, that `text` occupies at the
    /// given scale. Counts characters only; no canvas is involved.
    fn measure_text(text: &str, font_size: u32) -> (usize, usize) {
        let scale = font_size as usize;
        (
            text.chars().count() * Self::CELL_WIDTH * scale,
            Self::CELL_HEIGHT * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_rows_past_the_end_are_blank() {
        let glyph = Glyph {
            rows: &[0xFF, 0x80],
        };

        assert_eq!(glyph.row(1), 0x80);
        assert_eq!(glyph.row(7), 0);
        assert!(glyph.is_ink(1, 0));
        assert!(!glyph.is_ink(1, 1));
        assert!(!glyph.is_ink(5, 0));
        assert!(!glyph.is_ink(0, 8));
    }

    #[test]
    fn background_contrasts_with_ink() {
        let style = TextStyle::default();
        assert_eq!(style.background(), 255);
        assert_eq!(style.with_color(255).background(), 0);
        assert_eq!(style.with_color(17).background(), 0);
    }

    #[test]
    fn zero_font_size_is_rejected() {
        let style = TextStyle::default().with_font_size(0);
        assert_eq!(style.validate(), Err(Error::ZeroFontSize));
        assert_eq!(TextStyle::default().validate(), Ok(()));
    }

    #[test]
    fn builder_keeps_other_fields() {
        let style = TextStyle::default()
            .with_color(128)
            .with_font_size(3)
            .at(-4, 9);

        assert_eq!(
            style,
            TextStyle {
                x: -4,
                y: 9,
                color: 128,
                font_size: 3,
            }
        );
    }
}
