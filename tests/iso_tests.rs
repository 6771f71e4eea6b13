//! Coordinate mapper tests.

use tui_isocity::core::{to_grid, to_pixel};
use tui_isocity::types::{GridPos, TILE_HEIGHT, TILE_WIDTH};

#[test]
fn round_trip_is_exact_on_integer_cells() {
    for col in 0..=20 {
        for row in 0..=20 {
            let pos = GridPos::new(col, row);
            let px = to_pixel(pos);
            assert_eq!(
                to_grid(px),
                pos,
                "round trip failed for ({}, {})",
                col,
                row
            );
        }
    }
}

#[test]
fn projection_matches_affine_definition() {
    let px = to_pixel(GridPos::new(4, 2));
    assert_eq!(px.x, (4 - 2) as f32 * TILE_WIDTH / 2.0);
    assert_eq!(px.y, (4 + 2) as f32 * TILE_HEIGHT / 2.0);
}

#[test]
fn snap_picks_the_nearest_cell_center() {
    // Pixels inside a cell's diamond all map to that cell.
    let center = to_pixel(GridPos::new(3, 5));
    for (dx, dy) in [(0.0, 0.0), (25.0, 0.0), (-25.0, 0.0), (0.0, 14.0), (0.0, -14.0)] {
        assert_eq!(to_grid(center.offset(dx, dy)), GridPos::new(3, 5));
    }
}

#[test]
fn out_of_range_results_are_valid_integers() {
    // The mapper itself never fails; callers range-check.
    let far = to_pixel(GridPos::new(100, -40));
    assert_eq!(to_grid(far), GridPos::new(100, -40));
}
