use alloc::{vec, vec::Vec};

/// A two-dimensional grid of 8-bit intensity values, addressed `[row][col]`.
///
/// Renderers only ever write through this trait, so any pixel buffer can be
/// drawn into by implementing it.
pub trait PixelGrid {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Value at (`row`, `col`), or `None` outside the grid.
    fn pixel(&self, row: usize, col: usize) -> Option<u8>;

    /// Write `value` at (`row`, `col`). Writes outside the grid are dropped.
    fn set_pixel(&mut self, row: usize, col: usize, value: u8);
}

/// An owned, row-major grid of 8-bit pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    /// A black (all zero) canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    /// A canvas with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.height).map(move |row| &self.pixels[row * self.width..(row + 1) * self.width])
    }

    /// The raw row-major pixel buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl PixelGrid for Canvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, row: usize, col: usize) -> Option<u8> {
        Canvas::pixel(self, row, col)
    }

    fn set_pixel(&mut self, row: usize, col: usize, value: u8) {
        if row < self.height && col < self.width {
            self.pixels[row * self.width + col] = value;
        }
    }
}

/// Nested rows, as produced by most bitmap rasterizers. The width is taken
/// from the first row; shorter rows are clipped individually.
impl PixelGrid for Vec<Vec<u8>> {
    fn width(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn height(&self) -> usize {
        self.len()
    }

    fn pixel(&self, row: usize, col: usize) -> Option<u8> {
        self.get(row).and_then(|r| r.get(col)).copied()
    }

    fn set_pixel(&mut self, row: usize, col: usize, value: u8) {
        if let Some(px) = self.get_mut(row).and_then(|r| r.get_mut(col)) {
            *px = value;
        }
    }
}
