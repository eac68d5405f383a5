//! Game loop and entities
//!
//! A thin entity-list engine: every frame the engine updates all entities
//! in insertion order, draws them, prunes the ones that asked to be
//! removed, and clears the input snapshot. Entities get the frame context
//! passed in explicitly - there are no globals here.
//!
//! Key pieces:
//! - Entity: the update/draw capability every participant implements
//! - GameEngine/Context: list owner and per-frame shared state
//! - Animation: sprite-sheet playback
//! - Hero, Tile, Menu/PlayGame/Battle: the game's cast

// Allow unused code - some accessors exist for entities and tests to share
#![allow(dead_code)]

pub mod animation;
pub mod collision;
pub mod engine;
pub mod entity;
pub mod hero;
pub mod overlay;
pub mod tile;
pub mod timer;

pub use animation::Animation;
pub use collision::BoundingBox;
pub use engine::{Context, GameEngine};
pub use entity::Entity;
pub use hero::Hero;
pub use overlay::{Battle, Menu, PlayGame};
pub use tile::Tile;
pub use timer::Timer;
