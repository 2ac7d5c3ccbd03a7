#![no_std]

//! `bitmap-text` is a library for drawing monospace text directly into an
//! 8-bit pixel buffer using a fixed bitmap font.
//!
//! It is meant for low-resolution targets such as e-paper panels, where text
//! is rasterized straight into the frame rather than through a platform font
//! stack. Glyphs are scaled by an integer factor and clipped at the canvas
//! edges; characters outside the font are drawn as blank cells.
//!
//! The library supports `no_std` environments but requires an allocator.
//!
//! Supported fonts include:
//! - A 6×8 pixel font covering `A`–`Z`, `0`–`9` and common punctuation, via [bitmap_text_font6x8]
//!
//! Long text can be split with [wrap_text] and drawn line by line with
//! [render_lines], e.g.:
//!
//! ```
//! use bitmap_text::{Canvas, TextStyle, measure_text, render_lines, render_text, wrap_text};
//!
//! let lines = wrap_text("HELLO WORLD", 36);
//! assert_eq!(lines, ["HELLO", "WORLD"]);
//!
//! let label = render_text("HELLO", &TextStyle::default())?;
//! assert_eq!((label.width(), label.height()), measure_text("HELLO", 1));
//!
//! let mut page = Canvas::filled(36, 16, 255);
//! render_lines(&lines, &mut page, &TextStyle::default())?;
//! # Ok::<(), bitmap_text::Error>(())
//! ```

extern crate alloc;

mod wrap;

pub use bitmap_text_core::{Canvas, Error, Glyph, PixelGrid, Renderer, TextStyle};
pub use bitmap_text_font6x8::{FONT_HEIGHT, FONT_WIDTH, Font6x8Renderer};
pub use wrap::wrap_text;

/// Render `text` into a new canvas sized exactly to fit it, using the 6×8
/// font. The background is white for black ink and black otherwise.
pub fn render_text(text: &str, style: &TextStyle) -> Result<Canvas, Error> {
    Font6x8Renderer::render_text(text, style)
}

/// Render `text` into an existing grid at the style's position, using the
/// 6×8 font.
pub fn render_text_into<G: PixelGrid + ?Sized>(
    text: &str,
    grid: &mut G,
    style: &TextStyle,
) -> Result<(), Error> {
    Font6x8Renderer::render_into(text, grid, style)
}

/// Size in pixels, as `(width, height)`, of `text` in the 6×8 font.
pub fn measure_text(text: &str, font_size: u32) -> (usize, usize) {
    Font6x8Renderer::measure_text(text, font_size)
}

/// Render each line one cell height below the previous, starting at the
/// style's position.
pub fn render_lines<G, I>(lines: I, grid: &mut G, style: &TextStyle) -> Result<(), Error>
where
    G: PixelGrid + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    style.validate()?;

    let line_height = FONT_HEIGHT as i64 * i64::from(style.font_size);

    for (i, line) in lines.into_iter().enumerate() {
        let y = i64::from(style.y) + i as i64 * line_height;
        // past i32::MAX the line is below any canvas
        let Ok(y) = i32::try_from(y) else {
            break;
        };
        Font6x8Renderer::render_into(line.as_ref(), grid, &style.at(style.x, y))?;
    }

    Ok(())
}
