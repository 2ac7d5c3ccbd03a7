#![no_std]

//! `bitmap-text-font6x8` is a backend for the `bitmap-text` crate that
//! rasterizes text in a fixed 6×8 pixel bitmap font.
//!
//! The font covers uppercase `A`–`Z`, digits, space and the punctuation
//! `. , ! ? : ; - _ ( ) / + =`. Any other character is drawn as a blank cell.

extern crate alloc;

use bitmap_text_core::{Error, Glyph, PixelGrid, Renderer, TextStyle};
use log::trace;

include!(concat!(env!("OUT_DIR"), "/font6x8.rs"));

/// Width of an unscaled glyph cell, in pixels.
pub const FONT_WIDTH: usize = 6;
/// Height of an unscaled glyph cell, in pixels.
pub const FONT_HEIGHT: usize = 8;

const BLANK: Glyph = Glyph {
    rows: &[0; FONT_HEIGHT],
};

fn lookup(character: char) -> Option<Glyph> {
    FONT_6X8.get(character as usize).copied().flatten()
}

/// A [Renderer] which draws text using the 6×8 bitmap font.
pub struct Font6x8Renderer;

impl Font6x8Renderer {
    /// Does the font define a glyph for `character`?
    pub fn has_glyph(character: char) -> bool {
        lookup(character).is_some()
    }

    /// The glyph drawn for `character`, falling back to the space glyph.
    pub fn glyph(character: char) -> Glyph {
        lookup(character).or(lookup(' ')).unwrap_or(BLANK)
    }
}

impl Renderer for Font6x8Renderer {
    const CELL_WIDTH: usize = FONT_WIDTH;
    const CELL_HEIGHT: usize = FONT_HEIGHT;

    fn render_into<G: PixelGrid + ?Sized>(
        text: &str,
        grid: &mut G,
        style: &TextStyle,
    ) -> Result<(), Error> {
        style.validate()?;

        let scale = i64::from(style.font_size);
        let cell_width = FONT_WIDTH as i64 * scale;
        let (width, height) = (grid.width() as i64, grid.height() as i64);
        let y = i64::from(style.y);

        trace!(
            "rendering {} chars at ({}, {}) x{} into {}x{}",
            text.chars().count(),
            style.x,
            style.y,
            style.font_size,
            width,
            height
        );

        for (i, character) in text.chars().enumerate() {
            if !Self::has_glyph(character) {
                trace!("no glyph for {character:?}, drawing a blank cell");
            }
            let glyph = Self::glyph(character);
            let char_x = i64::from(style.x) + i as i64 * cell_width;

            // Cells starting past the right or bottom edge are skipped whole.
            if char_x >= width || y >= height {
                continue;
            }

            draw_glyph(grid, glyph, char_x, y, scale, style.color);
        }

        Ok(())
    }
}

/// Paint the ink pixels of one glyph cell whose top-left corner is at
/// (`x`, `y`), each as a `scale × scale` block.
fn draw_glyph<G: PixelGrid + ?Sized>(
    grid: &mut G,
    glyph: Glyph,
    x: i64,
    y: i64,
    scale: i64,
    color: u8,
) {
    let (width, height) = (grid.width() as i64, grid.height() as i64);

    for row in 0..FONT_HEIGHT {
        let top = y + row as i64 * scale;
        if top >= height {
            break;
        }

        for col in 0..FONT_WIDTH {
            let left = x + col as i64 * scale;
            if left >= width {
                break;
            }

            if !glyph.is_ink(row, col) {
                continue;
            }

            for dy in 0..scale {
                for dx in 0..scale {
                    let (py, px) = (top + dy, left + dx);
                    if (0..height).contains(&py) && (0..width).contains(&px) {
                        grid.set_pixel(py as usize, px as usize, color);
                    }
                }
            }
        }
    }
}
