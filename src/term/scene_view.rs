//! SceneView: maps the scene into a terminal framebuffer.
//!
//! This module is pure (no I/O). The same `ViewTransform` that places
//! scene geometry on terminal cells also maps mouse cells back into
//! screen pixels, so drawing and hit-testing can never disagree.

use crate::scene::map::Scene;
use crate::scene::tile::TileView;
use crate::scene::toolbar::{TOOLBAR_ITEM_COLS, TOOLBAR_ROWS};
use crate::term::fb::{FrameBuffer, Rgb, Style, TermCell};
use crate::types::{
    GridPos, OccupantId, PixelPos, SCENE_SCALE, STRUCTURE_SIZE, STRUCTURE_SPRITE_SCALE,
    TILE_HEIGHT, TILE_WIDTH,
};

/// Screen pixels represented by one terminal column / row. The 1:2 ratio
/// compensates for typical terminal glyph aspect.
pub const PX_PER_COL: f32 = 8.0;
pub const PX_PER_ROW: f32 = 16.0;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Bidirectional mapping between terminal cells and screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub origin_col: f32,
    pub origin_row: f32,
}

impl ViewTransform {
    pub fn new(origin_col: f32, origin_row: f32) -> Self {
        Self {
            origin_col,
            origin_row,
        }
    }

    /// Scene origin centered horizontally, a third of the way down
    /// (leaves the toolbar strip clear).
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(
            viewport.width as f32 / 2.0,
            (viewport.height as f32 / 3.0).max(TOOLBAR_ROWS as f32 + 1.0),
        )
    }

    /// Screen pixels of a (fractional) terminal cell.
    pub fn screen_of_cell(&self, col: f32, row: f32) -> PixelPos {
        PixelPos::new(
            (col - self.origin_col) * PX_PER_COL,
            (row - self.origin_row) * PX_PER_ROW,
        )
    }

    /// Fractional terminal cell of a screen-pixel position.
    pub fn cell_of_screen(&self, px: PixelPos) -> (f32, f32) {
        (
            px.x / PX_PER_COL + self.origin_col,
            px.y / PX_PER_ROW + self.origin_row,
        )
    }

    /// Fractional terminal cell of a world-pixel position.
    pub fn cell_of_world(&self, world: PixelPos) -> (f32, f32) {
        self.cell_of_screen(PixelPos::new(world.x * SCENE_SCALE, world.y * SCENE_SCALE))
    }
}

const BACKDROP: Rgb = Rgb::new(12, 12, 16);
const TILE_TOP: Rgb = Rgb::new(52, 66, 48);
const TILE_EDGE: Rgb = Rgb::new(110, 126, 98);
const HOVER_OK: Rgb = Rgb::new(120, 120, 40);
const HOUSE_BODY: Rgb = Rgb::new(140, 96, 60);
const DECO_BODY: Rgb = Rgb::new(90, 120, 160);
const CHROME_BG: Rgb = Rgb::new(24, 24, 30);
const CHROME_HOVER: Rgb = Rgb::new(52, 52, 66);
const CHROME_FG: Rgb = Rgb::new(200, 200, 210);
const ACCENT: Rgb = Rgb::new(240, 220, 120);

/// Palette for structure blocks, cycled by occupant id.
const STRUCTURE_COLORS: [Rgb; 6] = [
    Rgb::new(176, 112, 80),
    Rgb::new(96, 144, 168),
    Rgb::new(136, 160, 88),
    Rgb::new(168, 120, 168),
    Rgb::new(192, 160, 96),
    Rgb::new(120, 120, 136),
];

fn structure_color(id: OccupantId) -> Rgb {
    STRUCTURE_COLORS[id as usize % STRUCTURE_COLORS.len()]
}

/// Renders the scene into a framebuffer. Stateless; one instance can be
/// reused across frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneView;

impl SceneView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, scene: &Scene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(TermCell {
            ch: ' ',
            style: Style::new(CHROME_FG, BACKDROP),
        });

        let t = ViewTransform::for_viewport(viewport);

        self.draw_tiles(&mut fb, scene, &t);
        self.draw_houses(&mut fb, scene, &t);
        self.draw_deco(&mut fb, scene, &t);
        self.draw_structures(&mut fb, scene, &t);
        self.draw_toolbar(&mut fb, scene, viewport);
        self.draw_status(&mut fb, scene, viewport);

        fb
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, scene: &Scene, t: &ViewTransform) {
        let half_w_cols = TILE_WIDTH / 2.0 * SCENE_SCALE / PX_PER_COL;
        let half_h_rows = TILE_HEIGHT / 2.0 * SCENE_SCALE / PX_PER_ROW;

        for row in 0..scene.grid().rows() as i32 {
            for col in 0..scene.grid().cols() as i32 {
                let tile = TileView::new(GridPos::new(col, row));
                let hovered = tile.is_hovered(scene.drag());
                let top = if hovered { HOVER_OK } else { TILE_TOP };
                let (cx, cy) = t.cell_of_world(tile.center());

                // Scanline fill of the iso diamond.
                let r0 = (cy - half_h_rows).ceil() as i32;
                let r1 = (cy + half_h_rows).floor() as i32;
                for r in r0..=r1 {
                    let rel = (r as f32 - cy).abs() / half_h_rows;
                    let span = half_w_cols * (1.0 - rel).max(0.0);
                    if span < 0.5 {
                        continue;
                    }
                    let x0 = (cx - span).round() as i32;
                    let x1 = (cx + span).round() as i32;
                    fb.fill_rect(x0, r, x1 - x0 + 1, 1, ' ', Style::new(TILE_EDGE, top));
                    if r >= 0 {
                        if x0 >= 0 {
                            fb.put_char(x0 as u16, r as u16, '·', Style::new(TILE_EDGE, top));
                        }
                        if x1 >= 0 {
                            fb.put_char(x1 as u16, r as u16, '·', Style::new(TILE_EDGE, top));
                        }
                    }
                }
            }
        }
    }

    fn draw_houses(&self, fb: &mut FrameBuffer, scene: &Scene, t: &ViewTransform) {
        for (pos, id) in scene.houses().occupants() {
            let anchor = crate::core::to_pixel(pos);
            self.draw_block(fb, t, anchor, 10, 4, HOUSE_BODY, &format!("h{id}"));
        }
    }

    fn draw_deco(&self, fb: &mut FrameBuffer, scene: &Scene, t: &ViewTransform) {
        let anchor = crate::core::to_pixel(scene.deco_tile());
        let label = format!("~{}", scene.deco_frame());
        self.draw_block(fb, t, anchor, 4, 2, DECO_BODY, &label);
    }

    fn draw_structures(&self, fb: &mut FrameBuffer, scene: &Scene, t: &ViewTransform) {
        let side = STRUCTURE_SIZE * STRUCTURE_SPRITE_SCALE;
        let w_cols = (side * SCENE_SCALE / PX_PER_COL).round() as i32;
        let h_rows = (side * SCENE_SCALE / 2.0 / PX_PER_ROW).round() as i32;

        // Dragged structure draws last so it stays on top.
        let mut dragged = None;
        for view in scene.structures() {
            if view.is_dragging() {
                dragged = Some(view);
                continue;
            }
            let label = format!("s{}", view.id);
            self.draw_block(
                fb,
                t,
                view.pos(),
                w_cols,
                h_rows,
                structure_color(view.id),
                &label,
            );
        }
        if let Some(view) = dragged {
            let label = format!("s{}", view.id);
            self.draw_block(
                fb,
                t,
                view.pos(),
                w_cols,
                h_rows,
                structure_color(view.id),
                &label,
            );
        }
    }

    /// A bottom-center anchored block of `w` x `h` cells with a label.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        t: &ViewTransform,
        anchor: PixelPos,
        w: i32,
        h: i32,
        body: Rgb,
        label: &str,
    ) {
        let (cx, cy) = t.cell_of_world(anchor);
        let x0 = (cx - w as f32 / 2.0).round() as i32;
        let y0 = cy.round() as i32 - h;
        fb.fill_rect(x0, y0, w, h, ' ', Style::new(body.darken(120), body));
        let lx = x0 + (w - label.chars().count() as i32) / 2;
        if lx >= 0 && y0 + h / 2 >= 0 {
            fb.put_str(
                lx as u16,
                (y0 + h / 2) as u16,
                label,
                Style::new(Rgb::new(16, 16, 16), body).bold(),
            );
        }
    }

    fn draw_toolbar(&self, fb: &mut FrameBuffer, scene: &Scene, viewport: Viewport) {
        let bar = scene.toolbar();
        let start = bar.strip_start(viewport.width);

        for item in 0..bar.kinds() {
            let x = start + item * TOOLBAR_ITEM_COLS;
            let hovered = bar.hovered() == Some(item);
            let selected = bar.selected() == Some(item);
            let bg = if selected {
                ACCENT
            } else if hovered {
                CHROME_HOVER
            } else {
                CHROME_BG
            };
            let fg = if selected { Rgb::new(20, 20, 20) } else { CHROME_FG };
            let style = if hovered || selected {
                Style::new(fg, bg).bold()
            } else {
                Style::new(fg, bg)
            };

            fb.fill_rect(x as i32, 0, TOOLBAR_ITEM_COLS as i32, TOOLBAR_ROWS as i32, ' ', style);
            let label = format!("{item:2}");
            fb.put_str(x + 2, 1, &label, style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, scene: &Scene, viewport: Viewport) {
        let y = viewport.height.saturating_sub(1);
        let style = Style::new(CHROME_FG, BACKDROP);
        let hint = match scene.toolbar().selected() {
            Some(id) => format!(" {id} selected - click a tile to place | q quit"),
            None => String::from(" click toolbar to pick, drag structures to move | q quit"),
        };
        fb.put_str(0, y, &hint, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_round_trips() {
        let t = ViewTransform::for_viewport(Viewport::new(120, 36));
        let px = t.screen_of_cell(70.0, 20.0);
        let (c, r) = t.cell_of_screen(px);
        assert!((c - 70.0).abs() < 1e-4);
        assert!((r - 20.0).abs() < 1e-4);
    }

    #[test]
    fn origin_cell_is_scene_origin() {
        let t = ViewTransform::new(40.0, 10.0);
        assert_eq!(t.screen_of_cell(40.0, 10.0), PixelPos::new(0.0, 0.0));
        assert_eq!(t.cell_of_world(PixelPos::new(0.0, 0.0)), (40.0, 10.0));
    }
}
