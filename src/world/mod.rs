//! World data
//!
//! The static tile-map resource the game is played on. Loaded once from
//! JSON, validated, then consumed read-only by the engine.

mod map;

pub use map::{MapError, NeighborLinks, TileData, TileId, TileMap};
