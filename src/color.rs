// src/color.rs

//! Defines the `Rgb` color triple, the named colors used by the built-in themes,
//! and the channel-space distance used for nearest-color matching.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit-per-channel color.
///
/// Serialized as a three element array (`[r, g, b]`) so theme tables in the
/// configuration file stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance between two colors in RGB channel space.
    ///
    /// The square root is never needed: only the ordering of distances matters
    /// when searching for the closest palette entry.
    pub fn distance_sq(&self, other: &Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Convert to a packed byte triple, as stored in a PNG `PLTE` chunk.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Named colors shared by the built-in themes and the renderer.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const LIGHT_GRAY: Rgb = Rgb::new(150, 150, 150);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const LIGHT_BLUE: Rgb = Rgb::new(30, 144, 255);

// Sleep-stage colors matching the Zeo hypnogram.
pub const ZEO_WAKE: Rgb = Rgb::new(208, 88, 39); // D05827
pub const ZEO_REM: Rgb = Rgb::new(41, 166, 57); // 29A639
pub const ZEO_LIGHT: Rgb = Rgb::new(153, 152, 155); // 99989B
pub const ZEO_DEEP: Rgb = Rgb::new(0, 85, 42); // 00552A

/// Color used for the outline and bit-division decorations.
pub const OUTLINE: Rgb = BLACK;
