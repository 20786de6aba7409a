use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::error::{ConfigurationError, Result};

/// Unit-length lattice gradient.
pub type GradientVector = Vec2;

/// Row-major `width x height` table of unit gradients.
///
/// The last row and the last column all hold the same border vector, so a
/// sampler that wraps indices sees matching edges when the grid is tiled.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseGrid {
    width: usize,
    height: usize,
    vectors: Vec<GradientVector>,
}

/// Generate a seamless gradient grid.
///
/// Draws one border vector first, then one independent vector per interior
/// cell in row-major order. The same seeded `rng` always yields the same grid.
pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<NoiseGrid> {
    if width < 2 || height < 2 {
        return Err(ConfigurationError::GridTooSmall { width, height });
    }

    let border = random_unit_vector(rng);
    let mut vectors = Vec::with_capacity(width * height);
    for i in 0..height {
        for j in 0..width {
            if i == height - 1 || j == width - 1 {
                vectors.push(border);
            } else {
                vectors.push(random_unit_vector(rng));
            }
        }
    }

    log::debug!("generated {}x{} noise grid", width, height);
    Ok(NoiseGrid {
        width,
        height,
        vectors,
    })
}

/// Uniform direction on the unit circle.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> GradientVector {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

impl NoiseGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Gradient at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<GradientVector> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.vectors[row * self.width + col])
    }

    /// Gradient at any integer lattice point, wrapped into the grid.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64) -> GradientVector {
        let col = x.rem_euclid(self.width as i64) as usize;
        let row = y.rem_euclid(self.height as i64) as usize;
        self.vectors[row * self.width + col]
    }

    /// The vector shared by the last row and the last column.
    pub fn border_vector(&self) -> GradientVector {
        self.vectors[self.vectors.len() - 1]
    }

    pub fn vectors(&self) -> &[GradientVector] {
        &self.vectors
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GradientVector]> {
        self.vectors.chunks_exact(self.width)
    }

    /// Dense row-major `(x, y)` float pairs, `width * height * 2` long.
    ///
    /// Matches a two-channel float texture upload.
    pub fn texture_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vectors)
    }
}
