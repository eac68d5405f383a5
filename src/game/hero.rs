//! The player entity
//!
//! A state machine over four facing directions. Each update consumes the
//! frame's single movement direction (if any), gates the step against the
//! tile platform, and advances the matching walk cycle. Drawing only reads
//! the current facing and position.

use macroquad::prelude::{draw_text, vec2, Vec2, WHITE};

use crate::input::Direction;

use super::animation::Animation;
use super::collision::BoundingBox;
use super::engine::Context;
use super::entity::Entity;

/// Pixels moved per accepted step.
pub const STEP: f32 = 32.2;

/// Sprite-sheet cell size for the hero.
const FRAME_SIZE: f32 = 64.0;
/// Frames in one walk cycle.
const WALK_FRAMES: usize = 4;
/// Seconds per walk frame.
const FRAME_DURATION: f32 = 0.15;

/// The player character.
pub struct Hero {
    position: Vec2,
    facing: Direction,
    /// Walk cycles indexed by facing; the one matching `facing` is the
    /// currently playing animation (and doubles as the idle pose).
    walks: [Animation; 4],
    class_label: String,
}

impl Hero {
    /// Build a hero from a sheet that packs one walk cycle per row, in
    /// north/east/south/west row order.
    pub fn new(position: Vec2, sheet: &str, class_label: impl Into<String>) -> Self {
        let walk = |row| {
            Animation::new(sheet, FRAME_SIZE, FRAME_SIZE, FRAME_DURATION, WALK_FRAMES, true)
                .with_sheet_offset(row, 0)
        };
        Self {
            position,
            facing: Direction::South,
            walks: [walk(0), walk(1), walk(2), walk(3)],
            class_label: class_label.into(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box_at(self.position)
    }

    fn bounding_box_at(&self, position: Vec2) -> BoundingBox {
        BoundingBox::new(position.x, position.y, FRAME_SIZE, FRAME_SIZE)
    }

    fn walk_index(direction: Direction) -> usize {
        match direction {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// A step is allowed while the hero's new center stays on the tile it
    /// is standing on, or crosses onto that tile's neighbor in the move
    /// direction. An absent neighbor cancels the move.
    fn move_allowed(&self, ctx: &Context, direction: Direction, proposed: Vec2) -> bool {
        let (cx, cy) = self.bounding_box().center();
        let Some(current) = ctx.map.tile_at(cx, cy) else {
            return false;
        };
        let (nx, ny) = self.bounding_box_at(proposed).center();
        if current.bounds.contains_point(nx, ny) {
            return true;
        }
        current
            .neighbors
            .in_direction(direction)
            .and_then(|id| ctx.map.tile(id))
            .is_some_and(|neighbor| neighbor.bounds.contains_point(nx, ny))
    }
}

impl Entity for Hero {
    fn update(&mut self, ctx: &mut Context) {
        if !ctx.running || ctx.battle_running {
            return;
        }
        match ctx.input.take_direction() {
            Some(direction) => {
                self.facing = direction;
                let proposed = self.position + direction.delta() * STEP;
                if self.move_allowed(ctx, direction, proposed) {
                    self.position = proposed;
                }
                self.walks[Self::walk_index(direction)].advance(ctx.clock_tick);
            }
            None => {
                // Idle: the last facing's cycle keeps playing.
                self.walks[Self::walk_index(self.facing)].advance(ctx.clock_tick);
            }
        }
    }

    fn draw(&self, ctx: &Context) {
        if !ctx.running || ctx.battle_running {
            return;
        }
        self.walks[Self::walk_index(self.facing)].draw(ctx, self.position.x, self.position.y, 1.0);
        draw_text(
            &self.class_label,
            self.position.x,
            self.position.y - 6.0,
            16.0,
            WHITE,
        );
    }

    fn debug_outline(&self) -> Option<(Vec2, f32)> {
        let (cx, cy) = self.bounding_box().center();
        Some((vec2(cx, cy), FRAME_SIZE * 0.5))
    }
}
