//! Mandelbrot escape-time evaluation and coloring.
//!
//! Each coordinate is independent: [`FractalEngine::render`] is a pure
//! function of the coordinate, the frame's [`ViewTransform`] and the ramp, so
//! a frame can be split across threads freely (see `render_frame`).

use glam::DVec2;

use crate::color::{Color, ColorRamp};
use crate::config::FractalConfig;
use crate::error::{ConfigurationError, Result};
use crate::viewport::ViewTransform;

/// `|z|^2` at or above this value has escaped.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Floor for both logarithm inputs of the smooth correction.
const LOG_EPSILON: f64 = 1.0e-12;

/// Outcome of iterating one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalSample {
    /// Iteration count, smooth-corrected when the point escaped.
    pub iterations: f64,
    pub escaped: bool,
}

/// Iterate `z <- z^2 + c` from `z = 0`.
///
/// Stops once `|z|^2 >= 4` or after `max_iterations` steps. Escaped points
/// get the fractional correction `n - ln(ln(|z|^2))`; bounded points report
/// exactly `max_iterations`.
pub fn evaluate(c: DVec2, max_iterations: u32) -> FractalSample {
    let mut z = DVec2::ZERO;
    let mut mag2 = 0.0;
    let mut n = 0u32;

    while mag2 < ESCAPE_RADIUS_SQ && n < max_iterations {
        z = DVec2::new(z.x * z.x - z.y * z.y + c.x, 2.0 * z.x * z.y + c.y);
        mag2 = z.length_squared();
        n += 1;
    }

    if mag2 >= ESCAPE_RADIUS_SQ {
        let inner = mag2.max(LOG_EPSILON).ln().max(LOG_EPSILON);
        FractalSample {
            iterations: n as f64 - inner.ln(),
            escaped: true,
        }
    } else {
        FractalSample {
            iterations: max_iterations as f64,
            escaped: false,
        }
    }
}

/// Center of pixel `(col, row)` in clip space, `[-1, 1]` on both axes with
/// `+y` up.
#[inline]
pub fn pixel_coordinate(col: usize, row: usize, width: usize, height: usize) -> DVec2 {
    DVec2::new(
        2.0 * (col as f64 + 0.5) / width as f64 - 1.0,
        1.0 - 2.0 * (row as f64 + 0.5) / height as f64,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct FractalEngine {
    max_iterations: u32,
    contrast: f64,
}

impl FractalEngine {
    pub fn new(max_iterations: u32) -> Result<Self> {
        Self::from_config(&FractalConfig {
            max_iterations,
            ..FractalConfig::default()
        })
    }

    pub fn from_config(config: &FractalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_iterations: config.max_iterations,
            contrast: config.contrast,
        })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<()> {
        if max_iterations == 0 {
            return Err(ConfigurationError::InvalidMaxIterations(max_iterations));
        }
        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    pub fn evaluate(&self, c: DVec2) -> FractalSample {
        evaluate(c, self.max_iterations)
    }

    /// Ramp position for a sample: normalized iterations times contrast.
    #[inline]
    pub fn ramp_value(&self, sample: FractalSample) -> f64 {
        sample.iterations / self.max_iterations as f64 * self.contrast
    }

    /// Color of one normalized screen coordinate.
    pub fn render(&self, coordinate: DVec2, view: &ViewTransform, ramp: &ColorRamp) -> Color {
        let sample = self.evaluate(view.to_plane(coordinate));
        ramp.color_at(self.ramp_value(sample))
    }

    /// Render a `width x height` frame into `out`, row-major from the top.
    ///
    /// `out` is resized to fit. Rows are rendered in parallel with the
    /// `parallel` feature.
    pub fn render_frame(
        &self,
        width: usize,
        height: usize,
        view: &ViewTransform,
        ramp: &ColorRamp,
        out: &mut Vec<Color>,
    ) {
        out.resize(width * height, Color::BLACK);
        if width == 0 || height == 0 {
            return;
        }

        let render_row = |row: usize, pixels: &mut [Color]| {
            for (col, pixel) in pixels.iter_mut().enumerate() {
                *pixel = self.render(pixel_coordinate(col, row, width, height), view, ramp);
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, pixels)| render_row(row, pixels));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (row, pixels) in out.chunks_mut(width).enumerate() {
                render_row(row, pixels);
            }
        }
    }
}
