use glam::Vec2;

use crate::math::{mix, smoothstep};
use crate::noise::grid::NoiseGrid;

/// Gradient noise at `uv`, bilinearly blended with a smoothstep weight.
///
/// `uv` is expected in `[0, 1)`. Values outside still sample (lattice indices
/// wrap), but the caller owns wrapping if it wants a repeating pattern with
/// continuous offsets. The result is not normalized.
pub fn sample(grid: &NoiseGrid, uv: Vec2) -> f32 {
    let gxy = uv * Vec2::new(grid.width() as f32, grid.height() as f32);

    let left = gxy.x.floor();
    let right = gxy.x.ceil();
    let lower = gxy.y.floor();
    let upper = gxy.y.ceil();

    let dot_lu = corner_dot(grid, gxy, left, upper);
    let dot_ll = corner_dot(grid, gxy, left, lower);
    let dot_ru = corner_dot(grid, gxy, right, upper);
    let dot_rl = corner_dot(grid, gxy, right, lower);

    let tx = smoothstep(0.0, 1.0, gxy.x - left);
    let ty = smoothstep(0.0, 1.0, gxy.y - lower);

    let dot_upper = mix(dot_lu, dot_ru, tx);
    let dot_lower = mix(dot_ll, dot_rl, tx);
    mix(dot_lower, dot_upper, ty)
}

/// Dot of the corner gradient with the offset from that corner to `gxy`.
#[inline]
fn corner_dot(grid: &NoiseGrid, gxy: Vec2, cx: f32, cy: f32) -> f32 {
    let gradient = grid.get_wrapped(cx as i64, cy as i64);
    gradient.dot(gxy - Vec2::new(cx, cy))
}
