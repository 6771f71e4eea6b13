//! Scene composer: wires the placement grid, drag state, toolbar and
//! views together and dispatches pointer events.
//!
//! Dispatch order on pointer-down is toolbar strip, then structures
//! (topmost first), then tiles. All mutation happens here on the event
//! loop thread; the grid and drag state have no other writers.

use crate::core::{to_grid, PlacementGrid};
use crate::input::drag::DragState;
use crate::input::pointer::{PointerEvent, PointerKind};
use crate::scene::sprites::AnimatedSprite;
use crate::scene::structure::StructureView;
use crate::scene::toolbar::Toolbar;
use crate::types::{GridPos, PixelPos, COMPACT_GRID, FULL_GRID, SCENE_SCALE};

/// Frame cycle of the decorative animated structure.
const DECO_FRAMES: [u16; 3] = [2, 1, 0];
/// House seeded at the origin tile on a fresh grid.
const SEED_HOUSE_ID: u16 = 1;

pub struct Scene {
    compact: bool,
    grid: PlacementGrid,
    houses: PlacementGrid,
    drag: DragState,
    toolbar: Toolbar,
    structures: Vec<StructureView>,
    deco: AnimatedSprite,
    deco_tile: GridPos,
    active_drag: Option<usize>,
}

impl Scene {
    pub fn new(compact: bool) -> Self {
        let size = Self::tier_size(compact);
        let mut houses = PlacementGrid::new(size, size);
        houses.place(GridPos::new(0, 0), SEED_HOUSE_ID);
        Self {
            compact,
            grid: PlacementGrid::new(size, size),
            houses,
            drag: DragState::new(),
            toolbar: Toolbar::new(compact),
            structures: Vec::new(),
            deco: AnimatedSprite::new(&DECO_FRAMES),
            deco_tile: GridPos::new(size as i32 - 1, 0),
            active_drag: None,
        }
    }

    fn tier_size(compact: bool) -> usize {
        if compact {
            COMPACT_GRID
        } else {
            FULL_GRID
        }
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn grid(&self) -> &PlacementGrid {
        &self.grid
    }

    pub fn houses(&self) -> &PlacementGrid {
        &self.houses
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn structures(&self) -> &[StructureView] {
        &self.structures
    }

    pub fn deco_tile(&self) -> GridPos {
        self.deco_tile
    }

    /// Sheet id of the decoration's current animation frame.
    pub fn deco_frame(&self) -> u16 {
        self.deco.current()
    }

    /// Re-evaluate the viewport tier. A tier change re-creates both
    /// grids at the new dimensions; placements are not migrated.
    pub fn set_tier(&mut self, compact: bool) {
        if compact == self.compact {
            return;
        }
        self.compact = compact;
        let size = Self::tier_size(compact);
        self.grid.reset(size, size);
        self.houses.reset(size, size);
        self.houses.place(GridPos::new(0, 0), SEED_HOUSE_ID);
        self.deco_tile = GridPos::new(size as i32 - 1, 0);
        self.structures.clear();
        self.drag.clear();
        self.toolbar = Toolbar::new(compact);
        self.active_drag = None;
    }

    /// Advance time-driven visuals.
    pub fn tick(&mut self, dt_ms: u32) {
        self.deco.tick(dt_ms);
    }

    /// Dispatch one pointer event. `viewport_cols` sizes the toolbar
    /// strip, which is screen-fixed rather than scene-positioned.
    pub fn handle_pointer(&mut self, ev: PointerEvent, viewport_cols: u16) {
        match ev.kind {
            PointerKind::Down => self.on_down(ev, viewport_cols),
            PointerKind::Move => self.on_move(ev, viewport_cols),
            PointerKind::Up => self.on_up(),
        }
    }

    fn on_down(&mut self, ev: PointerEvent, viewport_cols: u16) {
        let (col, row) = ev.cell;
        if let Some(id) = self.toolbar.hit(col, row, viewport_cols) {
            self.toolbar.select(id);
            return;
        }

        let world = Self::world_of_screen(ev.at);

        // Topmost structure under the pointer wins.
        if let Some(i) = self
            .structures
            .iter()
            .rposition(|s| s.hit_rect().contains(world))
        {
            self.structures[i].on_pointer_down(ev.at, &mut self.drag);
            self.active_drag = Some(i);
            return;
        }

        // Tile click: place the pending selection, then drop it.
        let tile = to_grid(world);
        if self.in_grid(tile) {
            if let Some(id) = self.toolbar.selected() {
                self.grid.place(tile, id);
                self.toolbar.clear_selection();
                self.rebuild_structures();
            }
        }
    }

    fn on_move(&mut self, ev: PointerEvent, viewport_cols: u16) {
        if let Some(i) = self.active_drag {
            self.structures[i].on_pointer_move(ev.at, &mut self.drag);
            return;
        }
        let (col, row) = ev.cell;
        self.toolbar.set_hovered(self.toolbar.hit(col, row, viewport_cols));
    }

    fn on_up(&mut self) {
        if let Some(i) = self.active_drag.take() {
            // The view updates its own tile/pixel state from the outcome;
            // the grid was already mutated (or left alone) by the settle.
            let _ = self.structures[i].on_pointer_up(&mut self.grid, &mut self.drag);
        }
    }

    fn in_grid(&self, pos: GridPos) -> bool {
        self.grid.get(pos).is_some()
    }

    fn world_of_screen(at: PixelPos) -> PixelPos {
        PixelPos::new(at.x / SCENE_SCALE, at.y / SCENE_SCALE)
    }

    fn rebuild_structures(&mut self) {
        debug_assert!(self.active_drag.is_none());
        self.structures = self
            .grid
            .occupants()
            .map(|(pos, id)| StructureView::new(pos, id))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_switch_resets_and_reseeds() {
        let mut scene = Scene::new(false);
        scene.grid.place(GridPos::new(2, 2), 5);
        scene.rebuild_structures();
        assert_eq!(scene.structures().len(), 1);

        scene.set_tier(true);
        assert_eq!(scene.grid().rows(), COMPACT_GRID);
        assert!(scene.structures().is_empty());
        assert_eq!(scene.houses().get(GridPos::new(0, 0)), Some(Some(1)));
    }

    #[test]
    fn same_tier_is_a_no_op() {
        let mut scene = Scene::new(false);
        scene.grid.place(GridPos::new(1, 1), 9);
        scene.set_tier(false);
        assert_eq!(scene.grid().get(GridPos::new(1, 1)), Some(Some(9)));
    }
}
