//! Isometric coordinate mapper.
//!
//! Pure affine transform between integer grid cells and world-pixel
//! positions. `to_grid` is a nearest-cell-center snap, not an exact
//! inverse: any pixel inside a cell's iso diamond maps to that cell.
//! Results can land outside the grid; callers range-check.

use crate::types::{GridPos, PixelPos, TILE_HEIGHT, TILE_WIDTH};

/// Pixel center of a grid cell.
#[inline]
pub fn to_pixel(pos: GridPos) -> PixelPos {
    let half_w = TILE_WIDTH / 2.0;
    let half_h = TILE_HEIGHT / 2.0;
    PixelPos::new(
        (pos.col - pos.row) as f32 * half_w,
        (pos.col + pos.row) as f32 * half_h,
    )
}

/// Nearest grid cell for a pixel position.
#[inline]
pub fn to_grid(px: PixelPos) -> GridPos {
    let half_w = TILE_WIDTH / 2.0;
    let half_h = TILE_HEIGHT / 2.0;
    let row = (px.y / half_h - px.x / half_w) / 2.0;
    let col = (px.y / half_h + px.x / half_w) / 2.0;
    GridPos::new(col.round() as i32, row.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_projection_values() {
        assert_eq!(to_pixel(GridPos::new(0, 0)), PixelPos::new(0.0, 0.0));
        assert_eq!(to_pixel(GridPos::new(1, 0)), PixelPos::new(109.0, 60.0));
        assert_eq!(to_pixel(GridPos::new(0, 1)), PixelPos::new(-109.0, 60.0));
        assert_eq!(to_pixel(GridPos::new(1, 1)), PixelPos::new(0.0, 120.0));
    }

    #[test]
    fn snap_tolerates_intra_cell_jitter() {
        // A point well inside (2, 3)'s diamond snaps to (2, 3).
        let center = to_pixel(GridPos::new(2, 3));
        let jittered = center.offset(20.0, -10.0);
        assert_eq!(to_grid(jittered), GridPos::new(2, 3));
    }

    #[test]
    fn negative_cells_are_representable() {
        let p = to_pixel(GridPos::new(-2, 4));
        assert_eq!(to_grid(p), GridPos::new(-2, 4));
    }
}
