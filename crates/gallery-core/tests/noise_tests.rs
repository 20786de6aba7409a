use std::sync::Arc;

use gallery_core::error::ConfigurationError;
use gallery_core::math::{mix, smoothstep};
use gallery_core::noise::{generate, sample, NoiseGrid, SharedNoiseGrid};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_grid(width: usize, height: usize, seed: u64) -> NoiseGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(width, height, &mut rng).expect("valid grid size")
}

fn assert_border_invariant(grid: &NoiseGrid) {
    let border = grid.border_vector();
    let (w, h) = (grid.width(), grid.height());
    for j in 0..w {
        assert_eq!(grid.get(h - 1, j).unwrap(), border, "last row, column {} is not the border vector", j);
    }
    for i in 0..h {
        assert_eq!(grid.get(i, w - 1).unwrap(), border, "last column, row {} is not the border vector", i);
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn test_generate_rejects_small_grids() {
    let mut rng = StdRng::seed_from_u64(1);
    for (w, h) in [(0, 0), (1, 5), (5, 1), (1, 1)] {
        let err = generate(w, h, &mut rng).unwrap_err();
        assert_eq!(err, ConfigurationError::GridTooSmall { width: w, height: h });
    }
}

#[test]
fn test_generate_shape() {
    let grid = seeded_grid(7, 3, 42);
    assert_eq!(grid.width(), 7);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.vectors().len(), 21);
    assert_eq!(grid.rows().count(), 3);
    assert!(grid.rows().all(|row| row.len() == 7));
}

#[test]
fn test_border_row_and_column_share_one_vector() {
    for (w, h) in [(2, 2), (2, 9), (9, 2), (20, 20), (13, 5)] {
        let grid = seeded_grid(w, h, (w * 31 + h) as u64);
        assert_border_invariant(&grid);
    }
}

#[test]
fn test_all_vectors_unit_length() {
    let grid = seeded_grid(16, 12, 7);
    for (k, v) in grid.vectors().iter().enumerate() {
        assert!(
            (v.length() - 1.0).abs() < 1e-5,
            "vector {} has length {}",
            k,
            v.length()
        );
    }
}

#[test]
fn test_smallest_grid_has_one_interior_cell() {
    let grid = seeded_grid(2, 2, 3);
    let border = grid.border_vector();
    assert_eq!(grid.get(0, 1).unwrap(), border);
    assert_eq!(grid.get(1, 0).unwrap(), border);
    assert_eq!(grid.get(1, 1).unwrap(), border);
}

#[test]
fn test_same_seed_same_grid() {
    assert_eq!(seeded_grid(10, 10, 99), seeded_grid(10, 10, 99));
}

#[test]
fn test_different_seed_different_grid() {
    assert_ne!(seeded_grid(10, 10, 1), seeded_grid(10, 10, 2));
}

#[test]
fn test_interior_vectors_vary() {
    let grid = seeded_grid(8, 8, 5);
    let first = grid.get(0, 0).unwrap();
    let distinct = (0..7)
        .flat_map(|i| (0..7).map(move |j| (i, j)))
        .filter(|&(i, j)| grid.get(i, j).unwrap() != first)
        .count();
    assert!(distinct > 40, "interior vectors should be independent, only {} differ", distinct);
}

#[test]
fn test_texture_data_layout() {
    let grid = seeded_grid(5, 4, 11);
    let data = grid.texture_data();
    assert_eq!(data.len(), 5 * 4 * 2);
    for i in 0..4 {
        for j in 0..5 {
            let k = (i * 5 + j) * 2;
            let v = grid.get(i, j).unwrap();
            assert_eq!(data[k], v.x);
            assert_eq!(data[k + 1], v.y);
        }
    }
}

#[test]
fn test_get_wrapped() {
    let grid = seeded_grid(6, 4, 8);
    assert_eq!(grid.get_wrapped(-1, -1), grid.get(3, 5).unwrap());
    assert_eq!(grid.get_wrapped(6, 4), grid.get(0, 0).unwrap());
    assert_eq!(grid.get_wrapped(8, 1), grid.get(1, 2).unwrap());
    assert_eq!(grid.get_wrapped(-13, -5), grid.get(3, 5).unwrap());
}

#[test]
fn test_get_out_of_range_is_none() {
    let grid = seeded_grid(6, 4, 8);
    assert!(grid.get(3, 5).is_some());
    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.get(0, 6), None);
    // Row-major overflow must not alias into the next row
    assert_eq!(grid.get(0, 7), None);
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

#[test]
fn test_sample_at_lattice_point_is_zero() {
    let grid = seeded_grid(4, 4, 21);
    // uv * 4 lands exactly on integer lattice coordinates
    for uv in [Vec2::new(0.0, 0.0), Vec2::new(0.25, 0.5), Vec2::new(0.75, 0.25)] {
        let v = sample(&grid, uv);
        assert_eq!(v, 0.0, "sample at lattice point {:?} should be 0, got {}", uv, v);
    }
}

#[test]
fn test_sample_on_vertical_lattice_line() {
    let grid = seeded_grid(4, 4, 17);
    // gx = 1 exactly; only the y blend remains.
    let uv = Vec2::new(0.25, 0.3);
    let gy = 0.3_f32 * 4.0;
    let lower = gy.floor();
    let upper = gy.ceil();
    let dot_lower = grid.get_wrapped(1, lower as i64).dot(Vec2::new(0.0, gy - lower));
    let dot_upper = grid.get_wrapped(1, upper as i64).dot(Vec2::new(0.0, gy - upper));
    let expected = mix(dot_lower, dot_upper, smoothstep(0.0, 1.0, gy - lower));

    let v = sample(&grid, uv);
    assert!((v - expected).abs() < 1e-5, "expected {}, got {}", expected, v);
}

#[test]
fn test_sample_bounded() {
    let grid = seeded_grid(20, 20, 4);
    let limit = std::f32::consts::SQRT_2 + 1e-4;
    for i in 0..50 {
        for j in 0..50 {
            let uv = Vec2::new(j as f32 / 50.0 + 0.003, i as f32 / 50.0 + 0.007);
            let v = sample(&grid, uv);
            assert!(v.is_finite(), "sample({:?}) not finite", uv);
            assert!(v.abs() <= limit, "sample({:?}) = {} exceeds sqrt(2)", uv, v);
        }
    }
}

#[test]
fn test_sample_continuity() {
    let grid = seeded_grid(20, 20, 13);
    let a = sample(&grid, Vec2::new(0.31, 0.47));
    let b = sample(&grid, Vec2::new(0.31005, 0.47));
    assert!((a - b).abs() < 0.01, "noise not continuous: {} vs {}", a, b);
}

#[test]
fn test_sample_wraps_seamlessly_in_u() {
    let grid = seeded_grid(8, 8, 29);
    for v in [0.1_f32, 0.37, 0.8] {
        let left_edge = sample(&grid, Vec2::new(0.0, v));
        let right_edge = sample(&grid, Vec2::new(1.0 - 1e-4, v));
        assert!(
            (left_edge - right_edge).abs() < 1e-2,
            "seam at v={}: {} vs {}",
            v,
            left_edge,
            right_edge
        );
    }
}

#[test]
fn test_sample_not_constant() {
    let grid = seeded_grid(10, 10, 31);
    let values: Vec<f32> = (0..20)
        .map(|i| sample(&grid, Vec2::new(0.05 + i as f32 * 0.043, 0.52)))
        .collect();
    let spread = values.iter().cloned().fold(f32::MIN, f32::max)
        - values.iter().cloned().fold(f32::MAX, f32::min);
    assert!(spread > 0.01, "noise looks constant, spread {}", spread);
}

// ---------------------------------------------------------------------------
// Shared grid publication
// ---------------------------------------------------------------------------

#[test]
fn test_shared_load_returns_initial() {
    let grid = seeded_grid(6, 6, 1);
    let shared = SharedNoiseGrid::new(grid.clone());
    assert_eq!(*shared.load(), grid);
}

#[test]
fn test_shared_regenerate_replaces_grid() {
    let shared = SharedNoiseGrid::new(seeded_grid(6, 6, 1));
    let before = shared.load();
    let mut rng = StdRng::seed_from_u64(2);
    let published = shared.regenerate(8, 5, &mut rng).unwrap();

    let after = shared.load();
    assert!(Arc::ptr_eq(&published, &after));
    assert_eq!(after.width(), 8);
    assert_eq!(after.height(), 5);
    // An old snapshot is untouched by the swap
    assert_eq!(before.width(), 6);
    assert_border_invariant(&before);
}

#[test]
fn test_shared_regenerate_error_keeps_current() {
    let shared = SharedNoiseGrid::new(seeded_grid(6, 6, 1));
    let before = shared.load();
    let mut rng = StdRng::seed_from_u64(2);
    assert!(shared.regenerate(1, 6, &mut rng).is_err());
    assert!(Arc::ptr_eq(&before, &shared.load()));
}

#[test]
fn test_shared_store_returns_previous() {
    let first = seeded_grid(4, 4, 1);
    let shared = SharedNoiseGrid::new(first.clone());
    let prev = shared.store(seeded_grid(5, 5, 2));
    assert_eq!(*prev, first);
    assert_eq!(shared.load().width(), 5);
}

#[test]
fn test_shared_readers_never_see_torn_grid() {
    let shared = SharedNoiseGrid::new(seeded_grid(4, 4, 0));
    std::thread::scope(|s| {
        s.spawn(|| {
            let mut rng = StdRng::seed_from_u64(77);
            for k in 0..50 {
                let size = 2 + k % 9;
                shared.regenerate(size, size + 1, &mut rng).unwrap();
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..200 {
                    let grid = shared.load();
                    assert_eq!(grid.vectors().len(), grid.width() * grid.height());
                    assert_border_invariant(&grid);
                }
            });
        }
    });
}
