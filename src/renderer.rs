// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` turns a sample sequence into a painted `Canvas`. It aggregates
//! the samples into slices, resolves every slice state to a color through the
//! requested theme, and then draws in a fixed order so later layers are never
//! overwritten by earlier ones:
//!
//! 1. background fill in the theme's `UNINITIALIZED` color,
//! 2. one full-height line per column in that column's state color,
//! 3. the optional outline,
//! 4. the optional per-sample division lines.
//!
//! All configuration errors (unknown theme, a state the theme has no color for,
//! zero-sized canvas) are detected before the canvas is created.

use crate::canvas::Canvas;
use crate::color::{self, Rgb};
use crate::error::RenderError;
use crate::slices::{self, Mode, SliceBoundary, Slices};
use crate::state::StateCode;
use crate::theme::{Theme, ThemeRegistry};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Bit-division lines are only drawn when the threshold is above this value.
pub const MIN_BIT_DIVISION_THRESHOLD: u32 = 3;

/// Optional overlays drawn on top of the slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decorations {
    /// Draw a one-pixel border around the canvas.
    pub outline: bool,
    /// Minimum columns-per-sample before a line is drawn at every sample edge.
    /// Values of 3 or less disable division lines.
    pub bit_division_threshold: u32,
}

impl Default for Decorations {
    fn default() -> Self {
        Decorations {
            outline: true,
            bit_division_threshold: 0,
        }
    }
}

impl Decorations {
    /// Whether division lines apply at the given columns-per-sample ratio.
    pub fn draws_bit_divisions(&self, ratio: Option<f64>) -> bool {
        match ratio {
            Some(ratio) => {
                self.bit_division_threshold > MIN_BIT_DIVISION_THRESHOLD
                    && ratio >= self.bit_division_threshold as f64
            }
            None => false,
        }
    }
}

/// Everything needed to render one strip, apart from the samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
    pub theme: String,
    pub boundary: SliceBoundary,
    pub decorations: Decorations,
}

impl RenderRequest {
    pub fn new(width: u32, height: u32, mode: Mode, theme: impl Into<String>) -> Self {
        RenderRequest {
            width,
            height,
            mode,
            theme: theme.into(),
            boundary: SliceBoundary::default(),
            decorations: Decorations::default(),
        }
    }

    pub fn with_boundary(mut self, boundary: SliceBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Paints slice arrays onto canvases using themes from a shared registry.
///
/// The renderer holds no per-render state, so one instance can serve any number
/// of renders, including concurrent ones on separate threads.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    themes: &'a ThemeRegistry,
}

impl<'a> Renderer<'a> {
    pub fn new(themes: &'a ThemeRegistry) -> Self {
        Self { themes }
    }

    /// Aggregate `samples` and paint them according to `request`.
    pub fn render(&self, samples: &[StateCode], request: &RenderRequest) -> Result<Canvas, RenderError> {
        request.validate()?;
        let theme = self.themes.lookup(&request.theme)?;

        let slices = slices::aggregate(samples, request.width as usize, request.mode, request.boundary);
        debug!(
            "Renderer: {} samples onto {} columns (ratio {:?}), theme '{}'",
            samples.len(),
            slices.len(),
            slices.ratio(),
            theme.name
        );

        paint(&slices, theme, request)
    }

    /// Paint slices that were aggregated elsewhere.
    ///
    /// `slices.len()` is expected to equal `request.width`; extra columns are
    /// clipped and missing ones keep the background color.
    pub fn render_slices(&self, slices: &Slices, request: &RenderRequest) -> Result<Canvas, RenderError> {
        request.validate()?;
        let theme = self.themes.lookup(&request.theme)?;
        paint(slices, theme, request)
    }
}

fn paint(slices: &Slices, theme: &Theme, request: &RenderRequest) -> Result<Canvas, RenderError> {
    // Resolve every color up front so a bad theme aborts before any drawing.
    let background = theme.color_for(StateCode::UNINITIALIZED)?;
    let columns: Vec<Rgb> = slices
        .states()
        .iter()
        .map(|&state| theme.color_for(state))
        .collect::<Result<_, _>>()?;

    let mut canvas = Canvas::new(request.width as usize, request.height as usize);

    // Load the whole theme into the palette in state order so handle numbering
    // depends only on the theme.
    for &rgb in theme.colors.values() {
        canvas.allocate(rgb);
    }

    let background = canvas.allocate(background);
    canvas.fill(background);

    for (x, &rgb) in columns.iter().enumerate() {
        let handle = canvas.allocate(rgb);
        canvas.vertical_line(x, handle);
    }

    if request.decorations.outline {
        let outline = canvas.allocate(color::OUTLINE);
        canvas.outline(outline);
    }

    if request.decorations.draws_bit_divisions(slices.ratio()) {
        let outline = canvas.allocate(color::OUTLINE);
        for x in slices.sample_edges() {
            trace!("Renderer: division line at column {}", x);
            canvas.vertical_line(x, outline);
        }
    }

    Ok(canvas)
}
