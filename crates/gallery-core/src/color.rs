//! Colors and the anchor ramp shared by the fractal and kaleidoscope views.

use crate::error::{ConfigurationError, Result};

/// Linear RGBA color, components in `[0, 1]`.
///
/// 16 bytes, `#[repr(C)]`, so a slice of colors can be handed to a texture
/// upload as raw floats.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Component-wise `mix(self, other, t)`.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let s = 1.0 - t;
        Color {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
            a: self.a * s + other.a * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Ordered list of user colors framed by two implicit black anchors.
///
/// Anchor `0` and anchor `len() + 1` are black; anchors `1..=len()` are the
/// user colors in order. At most [`ColorRamp::CAPACITY`] user colors are
/// accepted, which bounds the uniform array a shader backend has to declare.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    colors: Vec<Color>,
}

impl ColorRamp {
    pub const CAPACITY: usize = 8;

    pub fn new(colors: &[Color]) -> Result<Self> {
        if colors.is_empty() {
            return Err(ConfigurationError::EmptyRamp);
        }
        if colors.len() > Self::CAPACITY {
            return Err(ConfigurationError::RampOverCapacity {
                len: colors.len(),
                capacity: Self::CAPACITY,
            });
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Build from flat `[r, g, b, a, r, g, b, a, ...]` data.
    pub fn from_rgba_slice(data: &[f32]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(ConfigurationError::ColorDataLength(data.len()));
        }
        let colors: Vec<Color> = data
            .chunks_exact(4)
            .map(|c| Color::new(c[0], c[1], c[2], c[3]))
            .collect();
        Self::new(&colors)
    }

    /// Magenta, yellow, green, cyan, violet.
    pub fn mandelbrot_default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0.99, 0.0, 1.0),
                Color::rgb(0.99, 1.0, 0.0),
                Color::rgb(0.0, 1.0, 0.22),
                Color::rgb(0.0, 0.97, 1.0),
                Color::rgb(0.235, 0.0, 1.0),
            ],
        }
    }

    /// Sage, moss, sand, rust, lavender white.
    pub fn kaleidoscope_default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0.58824, 0.74902, 0.40392),
                Color::rgb(0.39216, 0.5098, 0.40392),
                Color::rgb(0.98431, 0.82353, 0.4),
                Color::rgb(0.81176, 0.45882, 0.16078),
                Color::rgb(0.94118, 0.94118, 1.0),
            ],
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of user colors (never zero).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of anchors including the two black ends.
    pub fn anchor_count(&self) -> usize {
        self.colors.len() + 2
    }

    /// Anchor by logical index; anything past the user colors is black.
    pub fn anchor(&self, index: usize) -> Color {
        match index {
            0 => Color::BLACK,
            i if i <= self.colors.len() => self.colors[i - 1],
            _ => Color::BLACK,
        }
    }

    /// Interpolate a value into the anchor ramp.
    ///
    /// `value <= 0` (and NaN) returns the leading anchor. The value is scaled
    /// by the anchor count and linearly blended between the two surrounding
    /// anchors. Anything that lands on or past the last anchor returns it.
    pub fn color_at(&self, value: f64) -> Color {
        if !(value > 0.0) {
            return self.anchor(0);
        }
        let last = self.anchor_count() - 1;
        let scaled = value * self.anchor_count() as f64;
        let index = scaled.floor();
        if index >= last as f64 {
            return self.anchor(last);
        }
        let index = index as usize;
        let frac = (scaled - index as f64) as f32;
        self.anchor(index).mix(self.anchor(index + 1), frac)
    }

    /// User color at `index` wrapped modulo `len()`, negatives included.
    pub fn wrapped(&self, index: i64) -> Color {
        let n = self.colors.len() as i64;
        self.colors[index.rem_euclid(n) as usize]
    }
}
