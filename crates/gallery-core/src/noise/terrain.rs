//! Height post-processing and shading for the noise terrain.

use glam::{Vec2, Vec3};

use crate::color::Color;
use crate::math::sigmoid;
use crate::noise::grid::NoiseGrid;
use crate::noise::sampler::sample;

/// Floor for the inner logarithm in [`compress_height`].
const LOG_EPSILON: f32 = 1.0e-6;

/// Log-log compression of a raw noise sample into a display height.
///
/// `(ln(ln(|raw| + 1)) + 2) / 2`. A zero sample would hit `ln(0)`, so the
/// inner value is floored at a small epsilon and the result stays finite.
pub fn compress_height(raw: f32) -> f32 {
    let inner = (raw.abs() + 1.0).ln().max(LOG_EPSILON);
    (inner.ln() + 2.0) / 2.0
}

/// Push a vertex inward along its normal by `height * scale`.
#[inline]
pub fn displace(position: Vec3, normal: Vec3, height: f32, scale: f32) -> Vec3 {
    position - normal * height * scale
}

/// Water-to-land blend driven by a sigmoid of the height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainShade {
    pub low: Color,
    pub high: Color,
    pub steepness: f32,
}

impl Default for TerrainShade {
    fn default() -> Self {
        Self {
            low: Color::rgb(0.0, 0.1, 0.5),
            high: Color::rgb(0.0, 0.5, 0.1),
            steepness: 25.0,
        }
    }
}

impl TerrainShade {
    pub fn shade(&self, height: f32) -> Color {
        self.low.mix(self.high, sigmoid(height, self.steepness))
    }
}

/// Compressed heights over a `columns x rows` UV lattice, row-major.
///
/// Lattice point `(row, col)` samples `uv = (col / columns, row / rows)`, so
/// every `uv` stays in `[0, 1)`.
pub fn sample_heights(grid: &NoiseGrid, columns: usize, rows: usize) -> Vec<f32> {
    let mut heights = vec![0.0; columns * rows];
    if columns == 0 || rows == 0 {
        return heights;
    }

    let fill_row = |row: usize, out: &mut [f32]| {
        let v = row as f32 / rows as f32;
        for (col, h) in out.iter_mut().enumerate() {
            let uv = Vec2::new(col as f32 / columns as f32, v);
            *h = compress_height(sample(grid, uv));
        }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        heights
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(row, out)| fill_row(row, out));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (row, out) in heights.chunks_mut(columns).enumerate() {
            fill_row(row, out);
        }
    }

    heights
}
