//! Drag/hover interaction state.
//!
//! Two pieces: [`DragState`], the transient UI state shared between a
//! dragged structure and the tile grid, and [`DragSession`], the
//! per-entity Idle/Dragging machine that tracks the pointer and settles
//! a drop through the placement grid.
//!
//! Neither ever mutates the grid outside of [`DragSession::settle`]; the
//! shared state only drives the hover highlight.

use crate::core::{to_grid, to_pixel, PlacementGrid};
use crate::types::{GridPos, PixelPos, STRUCTURE_Y_OFFSET};

/// Shared transient UI state. Reset at interaction boundaries only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    dragging: bool,
    hovered_tile: Option<GridPos>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn hovered_tile(&self) -> Option<GridPos> {
        self.hovered_tile
    }

    pub fn begin(&mut self) {
        self.dragging = true;
    }

    pub fn hover(&mut self, tile: GridPos) {
        self.hovered_tile = Some(tile);
    }

    /// Clears both flags unconditionally, regardless of drop outcome.
    pub fn clear(&mut self) {
        self.dragging = false;
        self.hovered_tile = None;
    }
}

/// How a drag settled on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Move accepted; the entity snaps to the destination cell center
    /// (minus the anchor offset) instead of the raw drop pixel.
    Moved { tile: GridPos, pos: PixelPos },
    /// Move rejected; the entity reverts exactly to its pre-drag pixel.
    Reverted { pos: PixelPos },
}

impl DragOutcome {
    pub fn pos(&self) -> PixelPos {
        match *self {
            DragOutcome::Moved { pos, .. } | DragOutcome::Reverted { pos } => pos,
        }
    }
}

/// Per-entity drag machine.
///
/// Pointer positions are screen pixels (post-scale); the captured offset
/// keeps the entity tracking relative pointer motion rather than jumping
/// to the absolute pointer position.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    dragging: bool,
    scale: f32,
    offset: PixelPos,
    origin_px: PixelPos,
    pos: PixelPos,
}

impl DragSession {
    pub fn new(scale: f32) -> Self {
        Self {
            dragging: false,
            scale,
            offset: PixelPos::default(),
            origin_px: PixelPos::default(),
            pos: PixelPos::default(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current entity position in world pixels.
    pub fn pos(&self) -> PixelPos {
        self.pos
    }

    /// Place an idle entity at a pixel position (initial layout).
    pub fn reset_to(&mut self, pos: PixelPos) {
        debug_assert!(!self.dragging);
        self.origin_px = pos;
        self.pos = pos;
    }

    /// Pointer-down on the entity: capture the pointer-to-entity offset
    /// in screen space and flag the shared state.
    pub fn start(&mut self, pointer: PixelPos, origin_px: PixelPos, shared: &mut DragState) {
        self.dragging = true;
        self.origin_px = origin_px;
        self.pos = origin_px;
        self.offset = PixelPos::new(
            pointer.x - origin_px.x * self.scale,
            pointer.y - origin_px.y * self.scale,
        );
        shared.begin();
    }

    /// Pointer-move: recompute the world position from the pointer and
    /// publish the hovered tile. Never touches the grid.
    pub fn drag_to(&mut self, pointer: PixelPos, shared: &mut DragState) -> PixelPos {
        if !self.dragging {
            return self.pos;
        }
        self.pos = PixelPos::new(
            (pointer.x - self.offset.x) / self.scale,
            (pointer.y - self.offset.y) / self.scale,
        );
        shared.hover(to_grid(self.pos.offset(0.0, STRUCTURE_Y_OFFSET)));
        self.pos
    }

    /// Pointer-up (inside or outside the surface alike): request the
    /// move and settle the visual position. Shared state is cleared on
    /// both paths.
    pub fn settle(
        &mut self,
        grid: &mut PlacementGrid,
        origin_tile: GridPos,
        shared: &mut DragState,
    ) -> DragOutcome {
        self.dragging = false;
        shared.clear();

        let target = to_grid(self.pos.offset(0.0, STRUCTURE_Y_OFFSET));
        let outcome = if grid.try_move(origin_tile, target) {
            DragOutcome::Moved {
                tile: target,
                pos: to_pixel(target).offset(0.0, -STRUCTURE_Y_OFFSET),
            }
        } else {
            DragOutcome::Reverted {
                pos: self.origin_px,
            }
        };
        self.pos = outcome.pos();
        outcome
    }
}
