//! Entity capability
//!
//! Anything that participates in the update/draw loop implements
//! [`Entity`]. The engine hands the frame context in explicitly - there is
//! no global engine singleton and entities never reach into each other's
//! fields directly.

use macroquad::prelude::Vec2;

use super::engine::Context;

/// A participant in the engine's update/draw loop.
///
/// `update` runs first over the whole list, then `draw`; both complete
/// synchronously within one pass. `draw` must not change game state -
/// all simulation happens in `update`.
pub trait Entity {
    /// Advance one simulation step. Default: static entity, nothing to do.
    fn update(&mut self, _ctx: &mut Context) {}

    /// Render the entity's current state.
    fn draw(&self, ctx: &Context);

    /// Entities returning true are skipped for the rest of the pass and
    /// pruned from the list before the next frame.
    fn removal_requested(&self) -> bool {
        false
    }

    /// Center and radius for the debug-outline overlay, if this entity
    /// wants one. Only drawn while `ctx.show_outlines` is set.
    fn debug_outline(&self) -> Option<(Vec2, f32)> {
        None
    }
}
