//! Engine loop
//!
//! The engine owns an ordered entity list and the frame context, and runs
//! exactly one update+draw pass per host frame callback. List order is the
//! only ordering contract: entities that read another entity's
//! current-frame state must be inserted after it.

use macroquad::prelude::{draw_circle_lines, WHITE};

use crate::asset::AssetStore;
use crate::input::InputFrame;
use crate::world::TileMap;

use super::entity::Entity;
use super::timer::Timer;

/// Per-frame engine state handed to every entity.
///
/// Entities mutate the shared flags through `update`; nothing here is
/// global and nothing outlives the engine.
pub struct Context {
    /// This frame's input snapshot. Cleared at end of pass.
    pub input: InputFrame,
    /// Preloaded textures, keyed by asset path.
    pub assets: AssetStore,
    /// The static tile grid.
    pub map: TileMap,
    /// Gameplay is active (set by the start screen).
    pub running: bool,
    /// A battle overlay currently covers the scene.
    pub battle_running: bool,
    /// Draw debug outlines for entities that offer one.
    pub show_outlines: bool,
    /// Clamped elapsed seconds for this frame.
    pub clock_tick: f32,
}

impl Context {
    pub fn new(assets: AssetStore, map: TileMap) -> Self {
        Self {
            input: InputFrame::new(),
            assets,
            map,
            running: false,
            battle_running: false,
            show_outlines: false,
            clock_tick: 0.0,
        }
    }
}

/// Owns the entity list and drives the per-frame pass.
pub struct GameEngine {
    pub ctx: Context,
    entities: Vec<Box<dyn Entity>>,
    timer: Timer,
}

impl GameEngine {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            entities: Vec::new(),
            timer: Timer::new(),
        }
    }

    /// Append an entity. Insertion order is update and draw order.
    pub fn add_entity(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Run one frame: clock, update all, draw all, prune, clear input.
    pub fn tick(&mut self) {
        self.ctx.clock_tick = self.timer.tick();
        self.run_pass();
    }

    fn run_pass(&mut self) {
        // Update phase. Entities already flagged for removal sit out the
        // rest of the pass.
        for entity in self.entities.iter_mut() {
            if !entity.removal_requested() {
                entity.update(&mut self.ctx);
            }
        }

        // Draw phase. An entity flagged during update is never drawn in
        // its removal frame.
        for entity in self.entities.iter() {
            if entity.removal_requested() {
                continue;
            }
            entity.draw(&self.ctx);
            if self.ctx.show_outlines {
                if let Some((center, radius)) = entity.debug_outline() {
                    draw_circle_lines(center.x, center.y, radius, 1.0, WHITE);
                }
            }
        }

        // Prune in reverse so earlier indices stay valid while removing.
        for i in (0..self.entities.len()).rev() {
            if self.entities[i].removal_requested() {
                self.entities.remove(i);
            }
        }

        // The input snapshot lives exactly one pass.
        self.ctx.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Test entity that flags itself for removal after N updates and
    /// records how often it was updated and drawn.
    struct Fuse {
        updates_left: u32,
        updated: Rc<Cell<u32>>,
        drawn: Rc<Cell<u32>>,
    }

    impl Fuse {
        fn new(updates_left: u32, updated: &Rc<Cell<u32>>, drawn: &Rc<Cell<u32>>) -> Self {
            Self {
                updates_left,
                updated: Rc::clone(updated),
                drawn: Rc::clone(drawn),
            }
        }
    }

    impl Entity for Fuse {
        fn update(&mut self, _ctx: &mut Context) {
            self.updated.set(self.updated.get() + 1);
            self.updates_left = self.updates_left.saturating_sub(1);
        }

        fn draw(&self, _ctx: &Context) {
            self.drawn.set(self.drawn.get() + 1);
        }

        fn removal_requested(&self) -> bool {
            self.updates_left == 0
        }
    }

    fn engine() -> GameEngine {
        GameEngine::new(Context::new(
            crate::asset::AssetStore::default(),
            crate::world::TileMap::default_glade(),
        ))
    }

    #[test]
    fn test_removed_entity_is_not_drawn_in_its_removal_frame() {
        let updated = Rc::new(Cell::new(0));
        let drawn = Rc::new(Cell::new(0));
        let mut engine = engine();
        engine.add_entity(Box::new(Fuse::new(1, &updated, &drawn)));

        engine.run_pass();

        // Flagged during its only update: skipped by the draw phase and
        // gone before the next frame.
        assert_eq!(updated.get(), 1);
        assert_eq!(drawn.get(), 0);
        assert_eq!(engine.entity_count(), 0);
    }

    #[test]
    fn test_surviving_entity_updates_and_draws_each_pass() {
        let updated = Rc::new(Cell::new(0));
        let drawn = Rc::new(Cell::new(0));
        let mut engine = engine();
        engine.add_entity(Box::new(Fuse::new(10, &updated, &drawn)));

        engine.run_pass();
        engine.run_pass();

        assert_eq!(updated.get(), 2);
        assert_eq!(drawn.get(), 2);
        assert_eq!(engine.entity_count(), 1);
    }

    #[test]
    fn test_prune_keeps_list_order_for_survivors() {
        let u1 = Rc::new(Cell::new(0));
        let d1 = Rc::new(Cell::new(0));
        let u2 = Rc::new(Cell::new(0));
        let d2 = Rc::new(Cell::new(0));
        let mut engine = engine();
        engine.add_entity(Box::new(Fuse::new(1, &u1, &d1)));
        engine.add_entity(Box::new(Fuse::new(10, &u2, &d2)));

        engine.run_pass();

        assert_eq!(engine.entity_count(), 1);
        assert_eq!(d1.get(), 0);
        assert_eq!(d2.get(), 1);

        engine.run_pass();
        // The removed entity never comes back.
        assert_eq!(u1.get(), 1);
        assert_eq!(u2.get(), 2);
    }

    #[test]
    fn test_input_snapshot_cleared_after_pass() {
        let mut engine = engine();
        engine.ctx.input.set_direction(Direction::North);
        engine.ctx.input.start_requested = true;

        engine.run_pass();

        assert_eq!(engine.ctx.input.direction(), None);
        assert!(!engine.ctx.input.start_requested);
    }
}
