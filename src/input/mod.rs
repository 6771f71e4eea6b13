//! Input module: pointer events and the drag/hover protocol.

pub mod drag;
pub mod pointer;

pub use drag::{DragOutcome, DragSession, DragState};
pub use pointer::{from_mouse, PointerEvent, PointerKind};
