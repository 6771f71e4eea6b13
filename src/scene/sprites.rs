//! Sprite-sheet slicing and the looping animated decoration.
//!
//! Sheets are addressed by a flat integer id laid out in a fixed-size
//! grid: column `id % per_row`, row `id / per_row`. The host surface
//! decides how a frame becomes drawable; this module only produces the
//! source rectangle.

use arrayvec::ArrayVec;

use crate::types::{OccupantId, ANIM_FRAME_MS, HOUSE_SIZE, SHEET_SPRITES_PER_ROW, STRUCTURE_SIZE};

/// Source rectangle inside a sheet, in sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// A square-frame sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    pub frame_size: f32,
    pub per_row: u16,
}

impl SpriteSheet {
    pub const fn new(frame_size: f32, per_row: u16) -> Self {
        Self {
            frame_size,
            per_row,
        }
    }

    pub fn frame(&self, id: OccupantId) -> SpriteFrame {
        SpriteFrame {
            x: (id % self.per_row) as f32 * self.frame_size,
            y: (id / self.per_row) as f32 * self.frame_size,
            size: self.frame_size,
        }
    }
}

/// iso-stone-assets: structures and terrain tiles share the layout.
pub const STRUCTURES: SpriteSheet = SpriteSheet::new(STRUCTURE_SIZE, SHEET_SPRITES_PER_ROW);
/// iso-house-assets.
pub const HOUSES: SpriteSheet = SpriteSheet::new(HOUSE_SIZE, SHEET_SPRITES_PER_ROW);

/// Maximum frames in one animation cycle.
pub const MAX_ANIM_FRAMES: usize = 8;

/// A looping frame cycle over sheet ids, advanced by wall-clock delta.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    frames: ArrayVec<OccupantId, MAX_ANIM_FRAMES>,
    frame_ms: u32,
    elapsed_ms: u32,
    index: usize,
}

impl AnimatedSprite {
    pub fn new(frames: &[OccupantId]) -> Self {
        Self::with_frame_ms(frames, ANIM_FRAME_MS)
    }

    pub fn with_frame_ms(frames: &[OccupantId], frame_ms: u32) -> Self {
        let mut v = ArrayVec::new();
        for &f in frames.iter().take(MAX_ANIM_FRAMES) {
            v.push(f);
        }
        Self {
            frames: v,
            frame_ms: frame_ms.max(1),
            elapsed_ms: 0,
            index: 0,
        }
    }

    /// Sheet id of the current frame.
    pub fn current(&self) -> OccupantId {
        self.frames[self.index]
    }

    /// Advance by `dt_ms`, wrapping at the end of the cycle.
    pub fn tick(&mut self, dt_ms: u32) {
        if self.frames.len() < 2 {
            return;
        }
        self.elapsed_ms += dt_ms;
        while self.elapsed_ms >= self.frame_ms {
            self.elapsed_ms -= self.frame_ms;
            self.index = (self.index + 1) % self.frames.len();
        }
    }
}
