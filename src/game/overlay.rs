//! Overlay entities
//!
//! Full-screen entities that gate the global run state: the title menu,
//! the click-to-start screen, and the timed battle overlay. They sit at
//! the end of the entity list so they paint over the scene.

use macroquad::prelude::{
    draw_texture_ex, screen_height, screen_width, vec2, DrawTextureParams, WHITE,
};

use super::engine::Context;
use super::entity::Entity;

/// Stretch an image over the whole screen. Missing assets skip the draw.
fn draw_fullscreen(ctx: &Context, image: &str) {
    let Some(texture) = ctx.assets.texture(image) else {
        return;
    };
    draw_texture_ex(
        texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(screen_width(), screen_height())),
            ..Default::default()
        },
    );
}

/// Title background shown while the game is not running. Display only.
pub struct Menu {
    image: String,
}

impl Menu {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into() }
    }
}

impl Entity for Menu {
    fn draw(&self, ctx: &Context) {
        if !ctx.running {
            draw_fullscreen(ctx, &self.image);
        }
    }
}

/// Interactive start screen layered over [`Menu`]: a click (or Enter)
/// flips the engine into the running state, Escape drops back out.
pub struct PlayGame {
    image: String,
}

impl PlayGame {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into() }
    }
}

impl Entity for PlayGame {
    fn update(&mut self, ctx: &mut Context) {
        if !ctx.running && (ctx.input.click.is_some() || ctx.input.start_requested) {
            ctx.running = true;
        } else if ctx.running && ctx.input.stop_requested {
            ctx.running = false;
        }
    }

    fn draw(&self, ctx: &Context) {
        if !ctx.running {
            draw_fullscreen(ctx, &self.image);
        }
    }
}

/// Timed battle overlay: a two-threshold state machine
/// {idle -> engaged (t > 5s) -> reset (t > 10s) -> idle} that toggles
/// `battle_running` and paints a battle background while engaged.
pub struct Battle {
    image: String,
    battle_time: f32,
}

impl Battle {
    /// Simulated seconds of run time before a battle engages.
    pub const ENGAGE_AT: f32 = 5.0;
    /// Simulated seconds before the battle resolves and the timer resets.
    pub const RESOLVE_AT: f32 = 10.0;

    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            battle_time: 0.0,
        }
    }

    pub fn battle_time(&self) -> f32 {
        self.battle_time
    }
}

impl Entity for Battle {
    fn update(&mut self, ctx: &mut Context) {
        if !ctx.running {
            return;
        }
        self.battle_time += ctx.clock_tick;
        if self.battle_time > Self::RESOLVE_AT {
            self.battle_time = 0.0;
            ctx.battle_running = false;
        } else if self.battle_time > Self::ENGAGE_AT {
            ctx.battle_running = true;
        }
    }

    fn draw(&self, ctx: &Context) {
        if ctx.battle_running {
            draw_fullscreen(ctx, &self.image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetStore;
    use crate::world::TileMap;

    fn ctx() -> Context {
        Context::new(AssetStore::default(), TileMap::default_glade())
    }

    #[test]
    fn test_click_starts_the_game() {
        let mut ctx = ctx();
        let mut screen = PlayGame::new("menu.png");

        screen.update(&mut ctx);
        assert!(!ctx.running);

        ctx.input.click = Some(vec2(100.0, 100.0));
        screen.update(&mut ctx);
        assert!(ctx.running);
    }

    #[test]
    fn test_enter_starts_escape_stops() {
        let mut ctx = ctx();
        let mut screen = PlayGame::new("menu.png");

        ctx.input.start_requested = true;
        screen.update(&mut ctx);
        assert!(ctx.running);

        ctx.input.clear();
        ctx.input.stop_requested = true;
        screen.update(&mut ctx);
        assert!(!ctx.running);
    }

    #[test]
    fn test_battle_engages_and_resets_at_thresholds() {
        let mut ctx = ctx();
        ctx.running = true;
        ctx.clock_tick = 3.0;
        let mut battle = Battle::new("battleground.png");

        battle.update(&mut ctx); // t = 3
        assert!(!ctx.battle_running);

        battle.update(&mut ctx); // t = 6 > 5: engaged
        assert!(ctx.battle_running);

        battle.update(&mut ctx); // t = 9: still engaged
        assert!(ctx.battle_running);

        battle.update(&mut ctx); // t = 12 > 10: resolved, timer resets
        assert!(!ctx.battle_running);
        assert_eq!(battle.battle_time(), 0.0);
    }

    #[test]
    fn test_battle_timer_frozen_while_not_running() {
        let mut ctx = ctx();
        ctx.clock_tick = 3.0;
        let mut battle = Battle::new("battleground.png");

        battle.update(&mut ctx);
        battle.update(&mut ctx);
        assert_eq!(battle.battle_time(), 0.0);
        assert!(!ctx.battle_running);
    }
}
