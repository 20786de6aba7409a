//! Concentric star rings cycling through a color list ("groovy" view).

use std::f32::consts::PI;

use glam::Vec2;

use crate::color::{Color, ColorRamp};
use crate::config::KaleidoscopeConfig;
use crate::error::Result;
use crate::fractal::pixel_coordinate;
use crate::math::{glsl_mod, sign};

/// Signed distance from `p` to an `n`-pointed star of radius `r`.
///
/// `m` sets how deep the notches between points are: `m == n` degenerates
/// to a regular polygon, `m == 2` gives the sharpest star. Negative inside.
pub fn star_dist(p: Vec2, r: f32, n: u32, m: f32) -> f32 {
    let an = PI / n as f32;
    let en = PI / m;
    let acs = Vec2::new(an.cos(), an.sin());
    let ecs = Vec2::new(en.cos(), en.sin());

    // Fold into a single wedge; angle measured from +y.
    let bn = glsl_mod(p.x.atan2(p.y), 2.0 * an) - an;
    let mut q = p.length() * Vec2::new(bn.cos(), bn.sin().abs());
    q -= r * acs;
    q += ecs * (-q.dot(ecs)).clamp(0.0, r * acs.y / ecs.y);
    q.length() * sign(q.x)
}

/// Ring color index for a point at signed distance `dist`.
///
/// Rings are `1 / num_colors^2` wide and drift outward at `wave_speed`.
/// Callers wrap the result modulo `num_colors`.
pub fn ring_index(dist: f32, time: f32, wave_speed: f32, num_colors: usize) -> i64 {
    let n = num_colors as f32;
    let threshold = glsl_mod(time * wave_speed, n);
    if dist < 0.0 {
        // Inside the star the ring is pinned to the phase offset by
        // num_colors - 1. Possibly off by one against the outer rings.
        threshold as i64 + num_colors as i64 - 1
    } else {
        (dist * n * n + threshold) as i64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KaleidoscopeEngine {
    config: KaleidoscopeConfig,
}

impl KaleidoscopeEngine {
    pub fn new(config: KaleidoscopeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &KaleidoscopeConfig {
        &self.config
    }

    pub fn set_wave_speed(&mut self, wave_speed: f32) {
        self.config.wave_speed = wave_speed;
    }

    pub fn set_star_size(&mut self, star_size: f32) {
        self.config.star_size = star_size;
    }

    /// Color at a clip-space coordinate and time in seconds.
    pub fn render(&self, coordinate: Vec2, time: f32, ramp: &ColorRamp) -> Color {
        let dist = star_dist(
            coordinate,
            self.config.star_size,
            self.config.star_points,
            self.config.star_sharpness,
        );
        ramp.wrapped(ring_index(dist, time, self.config.wave_speed, ramp.len()))
    }

    /// Render a `width x height` frame into `out`, row-major from the top.
    pub fn render_frame(
        &self,
        width: usize,
        height: usize,
        time: f32,
        ramp: &ColorRamp,
        out: &mut Vec<Color>,
    ) {
        out.resize(width * height, Color::BLACK);
        if width == 0 || height == 0 {
            return;
        }

        let render_row = |row: usize, pixels: &mut [Color]| {
            for (col, pixel) in pixels.iter_mut().enumerate() {
                let xy = pixel_coordinate(col, row, width, height).as_vec2();
                *pixel = self.render(xy, time, ramp);
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
