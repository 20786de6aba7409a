//! Computation layer for a gallery of small rendering demos: a Mandelbrot
//! viewer with pan/zoom, a gradient-noise terrain, and a kaleidoscope of
//! star rings.
//!
//! Nothing here draws. Callers feed coordinates and events in and read
//! colors and heights back out.
pub mod color;
pub mod config;
pub mod error;
pub mod fractal;
pub mod kaleidoscope;
pub mod math;
pub mod noise;
pub mod viewport;

pub use color::{Color, ColorRamp};
pub use error::{ConfigurationError, Result};
pub use fractal::{FractalEngine, FractalSample};
pub use viewport::{DragState, ViewTransform, Viewport, ViewportController};
