//! MOSSVALE: a small browser tile RPG
//!
//! A 3x3 grass glade, a wandering hero, and a battle that finds you on a
//! timer. One update+draw pass per display frame, everything preloaded
//! before the loop starts.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod game;
mod input;
mod world;

use macroquad::prelude::*;

use asset::AssetManager;
use game::{Battle, Context, GameEngine, Hero, Menu, PlayGame};
use world::TileMap;

/// Where build.rs drops the image manifest.
const IMAGES_DIR: &str = "assets/images";
/// The shipped map resource.
const MAP_PATH: &str = "assets/maps/glade.json";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("MOSSVALE v{}", VERSION),
        window_width: 800,
        window_height: 640,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Preload every image before the loop starts. The join completes even
    // when individual downloads fail - those assets just stay absent.
    let mut assets = AssetManager::new();
    match assets.queue_from_manifest(IMAGES_DIR).await {
        Ok(n) => println!("Queued {} images from manifest", n),
        Err(e) => eprintln!("No image manifest ({}), starting with empty store", e),
    }
    let store = assets.download_all().await;

    let map = match load_string(MAP_PATH).await {
        Ok(source) => match TileMap::from_json(&source) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("Bad map {}: {}, using built-in glade", MAP_PATH, e);
                TileMap::default_glade()
            }
        },
        Err(e) => {
            eprintln!("Failed to load {}: {}, using built-in glade", MAP_PATH, e);
            TileMap::default_glade()
        }
    };

    let hero_spawn = map.center() - vec2(32.0, 32.0);
    let mut engine = GameEngine::new(Context::new(store, map));

    // Insertion order is the ordering contract: tiles first so the hero
    // reads up-to-date platform state, overlays last so they paint on top.
    let tiles = engine.ctx.map.spawn_tiles();
    for tile in tiles {
        engine.add_entity(Box::new(tile));
    }
    engine.add_entity(Box::new(Hero::new(
        hero_spawn,
        "assets/images/hero.png",
        "ranger",
    )));
    engine.add_entity(Box::new(Battle::new("assets/images/battleground.png")));
    engine.add_entity(Box::new(Menu::new("assets/images/menu.png")));
    engine.add_entity(Box::new(PlayGame::new("assets/images/click_to_start.png")));

    println!("=== MOSSVALE v{} ===", VERSION);

    loop {
        engine.ctx.input.poll();
        if is_key_pressed(KeyCode::O) {
            engine.ctx.show_outlines = !engine.ctx.show_outlines;
        }

        clear_background(BLACK);
        engine.tick();

        next_frame().await;
    }
}
