// src/canvas.rs

//! An indexed-color raster: a grid of palette handles plus the palette they
//! index into. Drawing primitives clip to the canvas bounds.

use crate::color::Rgb;
use crate::palette::{Allocation, ColorHandle, Palette};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<ColorHandle>,
    palette: Palette,
}

impl Canvas {
    /// A canvas with every pixel at handle 0 and an empty palette.
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![ColorHandle::default(); width * height],
            palette: Palette::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Row-major pixel handles.
    pub fn pixels(&self) -> &[ColorHandle] {
        &self.pixels
    }

    /// Allocate `color` in this canvas's palette. See `Palette::allocate`.
    pub fn allocate(&mut self, color: Rgb) -> ColorHandle {
        self.allocate_reporting(color).0
    }

    pub fn allocate_reporting(&mut self, color: Rgb) -> (ColorHandle, Allocation) {
        self.palette.allocate(color)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<ColorHandle> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Resolved color of a pixel.
    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.get(x, y).and_then(|handle| self.palette.get(handle))
    }

    pub fn set(&mut self, x: usize, y: usize, handle: ColorHandle) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = handle;
        }
    }

    pub fn fill(&mut self, handle: ColorHandle) {
        self.pixels.fill(handle);
    }

    /// Full-height vertical line at column `x`.
    pub fn vertical_line(&mut self, x: usize, handle: ColorHandle) {
        if x >= self.width {
            return;
        }
        for y in 0..self.height {
            self.pixels[y * self.width + x] = handle;
        }
    }

    pub fn horizontal_line(&mut self, y: usize, handle: ColorHandle) {
        if y >= self.height {
            return;
        }
        let row = y * self.width;
        self.pixels[row..row + self.width].fill(handle);
    }

    /// One-pixel border around the whole canvas.
    pub fn outline(&mut self, handle: ColorHandle) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        self.horizontal_line(0, handle);
        self.horizontal_line(self.height - 1, handle);
        self.vertical_line(0, handle);
        self.vertical_line(self.width - 1, handle);
    }

    /// Pixel indices as raw bytes, one byte per pixel, row-major.
    pub fn index_bytes(&self) -> Vec<u8> {
        self.pixels.iter().map(|handle| handle.0).collect()
    }
}
