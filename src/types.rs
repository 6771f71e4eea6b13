//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Tile diamond top dimensions in world pixels (2:1 pixel-art projection).
pub const TILE_WIDTH: f32 = 218.0;
pub const TILE_HEIGHT: f32 = 120.0;

/// Vertical anchor offset between a structure's visual base point and the
/// center of its grid cell, in world pixels.
pub const STRUCTURE_Y_OFFSET: f32 = 30.0;

/// Sprite sheet layout: structures sheet (iso-stone-assets).
pub const STRUCTURE_SIZE: f32 = 256.0;
pub const SHEET_SPRITES_PER_ROW: u16 = 10;

/// Sprite sheet layout: houses sheet (iso-house-assets).
pub const HOUSE_SIZE: f32 = 1280.0;
pub const HOUSE_SCALE: f32 = 0.35;

/// Sprite scale applied to structure quads inside the scene.
pub const STRUCTURE_SPRITE_SCALE: f32 = 0.5;

/// Scale factor applied to the whole scene container.
pub const SCENE_SCALE: f32 = 0.5;

/// Grid dimensions per viewport tier (square grids).
pub const FULL_GRID: usize = 7;
pub const COMPACT_GRID: usize = 3;

/// Toolbar item counts per viewport tier.
pub const FULL_TOOLBAR_KINDS: u16 = 12;
pub const COMPACT_TOOLBAR_KINDS: u16 = 4;

/// Terminal width below which the compact tier is used.
pub const COMPACT_WIDTH_COLS: u16 = 100;

/// Event loop tick (milliseconds).
pub const TICK_MS: u32 = 16;

/// Frame duration of the decorative animated sprite, in milliseconds.
/// The observed design animates at roughly 3 fps.
pub const ANIM_FRAME_MS: u32 = 333;

/// Which sprite an occupant draws; no behavior attached.
pub type OccupantId = u16;

/// One placement-grid cell (None = empty).
pub type Cell = Option<OccupantId>;

/// An integer (column, row) address on the placement grid.
///
/// Coordinates may be negative or past the grid extent; the grid store
/// range-checks where its contract requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// A position in world pixels (scene space, before the container scale).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::ops::Sub for PixelPos {
    type Output = PixelPos;

    fn sub(self, rhs: PixelPos) -> PixelPos {
        PixelPos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for PixelPos {
    type Output = PixelPos;

    fn add(self, rhs: PixelPos) -> PixelPos {
        PixelPos::new(self.x + rhs.x, self.y + rhs.y)
    }
}
