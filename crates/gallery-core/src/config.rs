use glam::DVec2;

use crate::error::{ConfigurationError, Result};

/// Escape-time fractal settings.
#[derive(Clone, Debug, PartialEq)]
pub struct FractalConfig {
    pub max_iterations: u32,
    /// Multiplier applied to the normalized smooth iteration count before
    /// it is looked up in the color ramp.
    pub contrast: f64,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            contrast: 10.0,
        }
    }
}

impl FractalConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ConfigurationError::InvalidMaxIterations(self.max_iterations));
        }
        if !(self.contrast.is_finite() && self.contrast > 0.0) {
            return Err(ConfigurationError::InvalidContrast(self.contrast));
        }
        Ok(())
    }
}

/// Initial pan/zoom state and wheel step for the fractal view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    pub offset: DVec2,
    pub zoom: f64,
    /// Applied per wheel notch; must be in `(0, 1)`.
    pub zoom_factor: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            offset: DVec2::new(-0.5, 0.0),
            zoom: 2.0,
            zoom_factor: 0.95,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigurationError::InvalidZoom(self.zoom));
        }
        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(ConfigurationError::InvalidZoomFactor(self.zoom_factor));
        }
        Ok(())
    }
}

/// Terrain sphere settings.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Vertex displacement per unit of compressed height.
    pub displacement: f32,
    /// Sigmoid steepness of the water/land blend.
    pub shade_steepness: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            displacement: 0.05,
            shade_steepness: 25.0,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(ConfigurationError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }
}

/// Kaleidoscope ("groovy") star-ring settings.
#[derive(Clone, Debug, PartialEq)]
pub struct KaleidoscopeConfig {
    /// Rings per second pushed outward from the star.
    pub wave_speed: f32,
    pub star_size: f32,
    pub star_points: u32,
    /// Inner angle divisor, between 2 and `star_points`.
    pub star_sharpness: f32,
}

impl Default for KaleidoscopeConfig {
    fn default() -> Self {
        Self {
            wave_speed: 1.5,
            star_size: 0.5,
            star_points: 5,
            star_sharpness: 3.4,
        }
    }
}

impl KaleidoscopeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.star_points < 2 {
            return Err(ConfigurationError::InvalidStarPoints(self.star_points));
        }
        Ok(())
    }
}
