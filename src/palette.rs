// src/palette.rs

//! Bounded color table for indexed-color canvases.
//!
//! Colors are allocated lazily. Requesting a color already in the table returns
//! its existing handle; once all `PALETTE_CAPACITY` slots are taken, new requests
//! are answered with the closest existing entry instead of failing.

use crate::color::Rgb;
use log::{trace, warn};

/// Maximum number of distinct colors an 8-bit indexed image can hold.
pub const PALETTE_CAPACITY: usize = 256;

/// Index of a palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorHandle(pub u8);

impl ColorHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a color request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// The color was already in the palette.
    Exact,
    /// A new palette entry was created.
    New,
    /// The palette was full; the handle points at the closest existing color.
    Nearest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= PALETTE_CAPACITY
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    pub fn get(&self, handle: ColorHandle) -> Option<Rgb> {
        self.entries.get(handle.index()).copied()
    }

    /// Handle of an entry equal to `color`, if any.
    pub fn find_exact(&self, color: Rgb) -> Option<ColorHandle> {
        self.entries
            .iter()
            .position(|&entry| entry == color)
            .map(|idx| ColorHandle(idx as u8))
    }

    /// Return a handle for `color`, growing the palette if there is room.
    pub fn allocate(&mut self, color: Rgb) -> (ColorHandle, Allocation) {
        if let Some(handle) = self.find_exact(color) {
            return (handle, Allocation::Exact);
        }

        if !self.is_full() {
            let handle = ColorHandle(self.entries.len() as u8);
            self.entries.push(color);
            trace!("Palette: allocated {} as entry {}", color, handle.0);
            return (handle, Allocation::New);
        }

        // A full palette is never empty, so a closest entry always exists.
        let handle = nearest(&self.entries, color).unwrap_or_default();
        warn!(
            "Palette saturated ({} entries): approximating {} with entry {} ({:?})",
            self.entries.len(),
            color,
            handle.0,
            self.get(handle)
        );
        (handle, Allocation::Nearest)
    }

    /// Palette as packed RGB bytes, in handle order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.entries.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

/// Entry of `entries` closest to `target` by squared Euclidean distance.
///
/// Ties resolve to the lowest handle. Returns `None` for an empty slice.
pub fn nearest(entries: &[Rgb], target: Rgb) -> Option<ColorHandle> {
    entries
        .iter()
        .enumerate()
        .min_by_key(|(idx, entry)| (entry.distance_sq(&target), *idx))
        .map(|(idx, _)| ColorHandle(idx as u8))
}
