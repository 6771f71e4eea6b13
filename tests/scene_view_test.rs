//! Scene view tests: pure rendering into a framebuffer.

use tui_isocity::core::to_pixel;
use tui_isocity::input::{PointerEvent, PointerKind};
use tui_isocity::scene::Scene;
use tui_isocity::term::{SceneView, ViewTransform, Viewport};
use tui_isocity::types::{GridPos, PixelPos, SCENE_SCALE, STRUCTURE_Y_OFFSET};

const VIEWPORT: Viewport = Viewport {
    width: 120,
    height: 36,
};

fn render_text(scene: &Scene) -> Vec<String> {
    let fb = SceneView::new().render(scene, VIEWPORT);
    (0..fb.height())
        .map(|y| {
            (0..fb.width())
                .map(|x| fb.get(x, y).unwrap().ch)
                .collect::<String>()
        })
        .collect()
}

fn place(scene: &mut Scene, item: u16, tile: GridPos) {
    // 12-item strip starts at column 24 for a 120-col viewport.
    scene.handle_pointer(
        PointerEvent::new(PointerKind::Down, PixelPos::default(), (24 + item * 6, 0)),
        VIEWPORT.width,
    );
    let world = to_pixel(tile);
    scene.handle_pointer(
        PointerEvent::new(
            PointerKind::Down,
            PixelPos::new(world.x * SCENE_SCALE, world.y * SCENE_SCALE),
            (0, 10),
        ),
        VIEWPORT.width,
    );
}

#[test]
fn render_matches_viewport_dimensions() {
    let scene = Scene::new(false);
    let fb = SceneView::new().render(&scene, VIEWPORT);
    assert_eq!(fb.width(), VIEWPORT.width);
    assert_eq!(fb.height(), VIEWPORT.height);
}

#[test]
fn placed_structure_label_appears() {
    let mut scene = Scene::new(false);
    place(&mut scene, 3, GridPos::new(2, 2));

    let text = render_text(&scene);
    assert!(
        text.iter().any(|line| line.contains("s3")),
        "expected structure label in rendered frame"
    );
}

#[test]
fn seeded_house_and_decoration_render() {
    let scene = Scene::new(false);
    let text = render_text(&scene);
    assert!(text.iter().any(|line| line.contains("h1")));
    // Decoration cycles frames 2 -> 1 -> 0 and starts at 2.
    assert!(text.iter().any(|line| line.contains("~2")));
}

#[test]
fn decoration_frame_advances_in_render() {
    let mut scene = Scene::new(false);
    scene.tick(400); // past one 333ms frame
    let text = render_text(&scene);
    assert!(text.iter().any(|line| line.contains("~1")));
}

#[test]
fn hover_highlight_changes_the_frame() {
    let mut scene = Scene::new(false);
    place(&mut scene, 0, GridPos::new(2, 2));
    let before = SceneView::new().render(&scene, VIEWPORT);

    // Start dragging and hover a neighboring tile.
    let anchor = to_pixel(GridPos::new(2, 2)).offset(0.0, -STRUCTURE_Y_OFFSET);
    scene.handle_pointer(
        PointerEvent::new(
            PointerKind::Down,
            PixelPos::new(anchor.x * SCENE_SCALE, anchor.y * SCENE_SCALE),
            (0, 10),
        ),
        VIEWPORT.width,
    );
    let target = to_pixel(GridPos::new(4, 2)).offset(0.0, -STRUCTURE_Y_OFFSET);
    scene.handle_pointer(
        PointerEvent::new(
            PointerKind::Move,
            PixelPos::new(target.x * SCENE_SCALE, target.y * SCENE_SCALE),
            (0, 10),
        ),
        VIEWPORT.width,
    );

    let after = SceneView::new().render(&scene, VIEWPORT);
    assert_ne!(before, after, "hover highlight should alter the frame");
}

#[test]
fn toolbar_strip_renders_item_labels() {
    let scene = Scene::new(false);
    let text = render_text(&scene);
    // Items 0 and 11 bracket the full-tier strip.
    assert!(text[1].contains(" 0"));
    assert!(text[1].contains("11"));
}

#[test]
fn view_transform_agrees_with_scene_origin() {
    let t = ViewTransform::for_viewport(VIEWPORT);
    let (col, row) = t.cell_of_world(PixelPos::new(0.0, 0.0));
    assert_eq!((col, row), (t.origin_col, t.origin_row));

    // One grid step east moves right and down on screen.
    let (c1, r1) = t.cell_of_world(to_pixel(GridPos::new(1, 0)));
    assert!(c1 > col && r1 > row);
}
