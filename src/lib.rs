// src/lib.rs

//! Renders a time series of labeled samples as a fixed-width, indexed-color strip.
//!
//! ```text
//! samples ─► slices::aggregate ─► Renderer (ThemeRegistry + Palette) ─► Canvas ─► encoder
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod encoder;
pub mod error;
pub mod night;
pub mod palette;
pub mod renderer;
pub mod samples;
pub mod slices;
pub mod state;
pub mod theme;

pub use canvas::Canvas;
pub use color::Rgb;
pub use config::Config;
pub use error::{ConfigError, EncodeError, RenderError, SampleParseError};
pub use palette::{Allocation, ColorHandle, Palette};
pub use renderer::{Decorations, RenderRequest, Renderer};
pub use slices::{Mode, SliceBoundary, Slices};
pub use state::StateCode;
pub use theme::{Theme, ThemeRegistry};
