//! Scene module: views and the composer.
//!
//! Views hold read snapshots of grid state and issue mutation requests;
//! the composer owns the authoritative stores and wires everything up.

pub mod map;
pub mod sprites;
pub mod structure;
pub mod tile;
pub mod toolbar;

pub use map::Scene;
pub use sprites::{AnimatedSprite, SpriteFrame, SpriteSheet};
pub use structure::StructureView;
pub use tile::TileView;
pub use toolbar::Toolbar;
