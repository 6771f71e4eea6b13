//! Tile view: one grid cell and its hover highlight.

use crate::core::{to_grid, to_pixel};
use crate::input::drag::DragState;
use crate::types::{GridPos, PixelPos, TILE_HEIGHT, TILE_WIDTH};

/// One cell of the visible tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub pos: GridPos,
}

impl TileView {
    pub fn new(pos: GridPos) -> Self {
        Self { pos }
    }

    /// World-pixel center of the tile diamond.
    pub fn center(&self) -> PixelPos {
        to_pixel(self.pos)
    }

    /// Diamond corners in world pixels: top, right, bottom, left.
    pub fn corners(&self) -> [PixelPos; 4] {
        let c = self.center();
        let (hw, hh) = (TILE_WIDTH / 2.0, TILE_HEIGHT / 2.0);
        [
            c.offset(0.0, -hh),
            c.offset(hw, 0.0),
            c.offset(0.0, hh),
            c.offset(-hw, 0.0),
        ]
    }

    /// Whether a world-pixel point falls inside this tile's diamond.
    pub fn contains(&self, px: PixelPos) -> bool {
        to_grid(px) == self.pos
    }

    /// Highlighted while a drag hovers over this cell.
    pub fn is_hovered(&self, drag: &DragState) -> bool {
        drag.is_dragging() && drag.hovered_tile() == Some(self.pos)
    }
}
