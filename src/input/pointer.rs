//! Pointer events for the scene.
//!
//! Terminal mouse reports arrive in character cells; the scene's drag
//! protocol works in screen pixels (scaled world space). This module
//! translates one into the other through the active view transform and
//! keeps both coordinates on the event: the pixel position drives the
//! scene, the raw cell drives screen-fixed chrome like the toolbar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::term::scene_view::ViewTransform;
use crate::types::PixelPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    /// Release, inside or outside the render surface alike.
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Screen pixels relative to the scene origin.
    pub at: PixelPos,
    /// Raw terminal cell (column, row).
    pub cell: (u16, u16),
}

impl PointerEvent {
    pub fn new(kind: PointerKind, at: PixelPos, cell: (u16, u16)) -> Self {
        Self { kind, at, cell }
    }
}

/// Translate a crossterm mouse event. Non-left buttons and scroll are
/// ignored; plain motion still produces `Move` so hover chrome updates.
pub fn from_mouse(ev: MouseEvent, transform: &ViewTransform) -> Option<PointerEvent> {
    let kind = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerKind::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        _ => return None,
    };
    let at = transform.screen_of_cell(ev.column as f32, ev.row as f32);
    Some(PointerEvent::new(kind, at, (ev.column, ev.row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_button_lifecycle_maps() {
        let t = ViewTransform::new(10.0, 5.0);
        let down = from_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), &t).unwrap();
        assert_eq!(down.kind, PointerKind::Down);
        assert_eq!(down.at, PixelPos::new(0.0, 0.0));

        let drag = from_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5), &t).unwrap();
        assert_eq!(drag.kind, PointerKind::Move);

        let up = from_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 12, 5), &t).unwrap();
        assert_eq!(up.kind, PointerKind::Up);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let t = ViewTransform::new(0.0, 0.0);
        assert!(from_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), &t).is_none());
        assert!(from_mouse(mouse(MouseEventKind::ScrollUp, 1, 1), &t).is_none());
    }
}
