//! Toolbar view: selectable occupant kinds.
//!
//! Hover state is local to the toolbar; the selected kind is
//! select-then-place-once, cleared by the composer after one successful
//! placement.

use crate::types::{OccupantId, COMPACT_TOOLBAR_KINDS, FULL_TOOLBAR_KINDS};

/// Terminal rows occupied by the toolbar strip.
pub const TOOLBAR_ROWS: u16 = 3;
/// Terminal columns per toolbar item.
pub const TOOLBAR_ITEM_COLS: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    kinds: u16,
    hovered: Option<OccupantId>,
    selected: Option<OccupantId>,
}

impl Toolbar {
    pub fn new(compact: bool) -> Self {
        Self {
            kinds: if compact {
                COMPACT_TOOLBAR_KINDS
            } else {
                FULL_TOOLBAR_KINDS
            },
            hovered: None,
            selected: None,
        }
    }

    pub fn kinds(&self) -> u16 {
        self.kinds
    }

    pub fn hovered(&self) -> Option<OccupantId> {
        self.hovered
    }

    pub fn selected(&self) -> Option<OccupantId> {
        self.selected
    }

    pub fn select(&mut self, id: OccupantId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn set_hovered(&mut self, id: Option<OccupantId>) {
        self.hovered = id;
    }

    /// First terminal column of the strip for a given viewport width.
    pub fn strip_start(&self, viewport_cols: u16) -> u16 {
        let total = self.kinds * TOOLBAR_ITEM_COLS;
        viewport_cols.saturating_sub(total) / 2
    }

    /// Item under a terminal cell, if the cell lies inside the strip.
    pub fn hit(&self, col: u16, row: u16, viewport_cols: u16) -> Option<OccupantId> {
        if row >= TOOLBAR_ROWS {
            return None;
        }
        let start = self.strip_start(viewport_cols);
        if col < start {
            return None;
        }
        let item = (col - start) / TOOLBAR_ITEM_COLS;
        (item < self.kinds).then_some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_controls_item_count() {
        assert_eq!(Toolbar::new(false).kinds(), FULL_TOOLBAR_KINDS);
        assert_eq!(Toolbar::new(true).kinds(), COMPACT_TOOLBAR_KINDS);
    }

    #[test]
    fn hit_maps_cells_to_items() {
        let bar = Toolbar::new(true); // 4 items, 24 cols wide
        let start = bar.strip_start(80);
        assert_eq!(start, 28);
        assert_eq!(bar.hit(28, 0, 80), Some(0));
        assert_eq!(bar.hit(34, 1, 80), Some(1));
        assert_eq!(bar.hit(51, 2, 80), Some(3));
        assert_eq!(bar.hit(52, 0, 80), None); // past the strip
        assert_eq!(bar.hit(10, 0, 80), None); // before the strip
        assert_eq!(bar.hit(30, TOOLBAR_ROWS, 80), None); // below the strip
    }
}
