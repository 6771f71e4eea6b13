//! Structure view: one placed occupant, draggable.

use crate::core::{to_pixel, PlacementGrid};
use crate::input::drag::{DragOutcome, DragSession, DragState};
use crate::types::{
    GridPos, OccupantId, PixelPos, SCENE_SCALE, STRUCTURE_SIZE, STRUCTURE_SPRITE_SCALE,
    STRUCTURE_Y_OFFSET,
};

/// Axis-aligned hit region in world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl HitRect {
    pub fn contains(&self, px: PixelPos) -> bool {
        px.x >= self.x && px.x <= self.x + self.w && px.y >= self.y && px.y <= self.y + self.h
    }
}

/// A placed occupant: sprite id, home tile, live pixel position, and its
/// drag machine. The visual anchor is bottom-center (the sprite's base
/// sits `STRUCTURE_Y_OFFSET` above the tile center).
#[derive(Debug, Clone)]
pub struct StructureView {
    pub tile: GridPos,
    pub id: OccupantId,
    session: DragSession,
}

impl StructureView {
    pub fn new(tile: GridPos, id: OccupantId) -> Self {
        let mut session = DragSession::new(SCENE_SCALE);
        session.reset_to(Self::home_pixel(tile));
        Self { tile, id, session }
    }

    /// Resting pixel position for a tile (anchor point).
    pub fn home_pixel(tile: GridPos) -> PixelPos {
        to_pixel(tile).offset(0.0, -STRUCTURE_Y_OFFSET)
    }

    /// Current anchor position in world pixels.
    pub fn pos(&self) -> PixelPos {
        self.session.pos()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Clickable/draggable region around the sprite quad.
    pub fn hit_rect(&self) -> HitRect {
        let side = STRUCTURE_SIZE * STRUCTURE_SPRITE_SCALE;
        let anchor = self.pos();
        HitRect {
            x: anchor.x - side / 2.0,
            y: anchor.y - side,
            w: side,
            h: side,
        }
    }

    /// Pointer-down on the sprite: begin dragging.
    pub fn on_pointer_down(&mut self, pointer: PixelPos, shared: &mut DragState) {
        let origin = self.pos();
        self.session.start(pointer, origin, shared);
    }

    /// Pointer-move while dragging.
    pub fn on_pointer_move(&mut self, pointer: PixelPos, shared: &mut DragState) {
        self.session.drag_to(pointer, shared);
    }

    /// Pointer-up: settle through the grid store. Updates the home tile
    /// when the move was accepted.
    pub fn on_pointer_up(&mut self, grid: &mut PlacementGrid, shared: &mut DragState) -> DragOutcome {
        let outcome = self.session.settle(grid, self.tile, shared);
        if let DragOutcome::Moved { tile, .. } = outcome {
            self.tile = tile;
        }
        outcome
    }
}
