//! Tileable gradient noise used to height-shade the terrain sphere.
//!
//! A [`NoiseGrid`] of unit gradients is generated once, published through a
//! [`SharedNoiseGrid`], and sampled per vertex with [`sample`]. The `terrain`
//! module turns raw samples into displacement and color.
pub mod grid;
pub mod sampler;
pub mod shared;
pub mod terrain;

pub use grid::{generate, GradientVector, NoiseGrid};
pub use sampler::sample;
pub use shared::SharedNoiseGrid;
