//! Terminal "game renderer" module.
//!
//! Renders the scene into a simple framebuffer that is flushed to a
//! terminal backend with diff-based redraws. The scene projection is
//! pure and unit-testable; only `renderer` touches the terminal.

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use fb::{FrameBuffer, Rgb, Style, TermCell};
pub use renderer::TerminalRenderer;
pub use scene_view::{SceneView, ViewTransform, Viewport};
