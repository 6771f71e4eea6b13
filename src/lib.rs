//! tui-isocity: a mouse-driven isometric city builder for the terminal.
//!
//! `core` holds the pure placement logic (coordinate mapper + grid
//! store), `input` the pointer/drag protocol, `scene` the views and
//! composer, and `term` the framebuffer renderer.

pub mod core;
pub mod input;
pub mod scene;
pub mod term;
pub mod types;
