//! Background tiles
//!
//! One data-driven tile entity covers every tile kind - the background
//! image key is the only thing that varies, so there is no per-kind type.
//! Tiles never move and never request removal; they exist so the draw pass
//! paints the ground before everything layered above it.

use macroquad::prelude::{draw_texture_ex, DrawTextureParams, Vec2, WHITE};

use crate::world::{NeighborLinks, TileData, TileId};

use super::collision::BoundingBox;
use super::engine::Context;
use super::entity::Entity;

/// A static background tile.
pub struct Tile {
    id: TileId,
    position: Vec2,
    size: Vec2,
    /// Asset key of the background image.
    image: String,
    bounds: BoundingBox,
    /// Links to grid neighbors - carried as data, not traversed.
    neighbors: NeighborLinks,
}

impl Tile {
    pub fn new(data: &TileData, size: Vec2) -> Self {
        Self {
            id: data.id,
            position: data.position,
            size,
            image: data.image.clone(),
            bounds: data.bounds,
            neighbors: data.neighbors,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn neighbors(&self) -> NeighborLinks {
        self.neighbors
    }
}

impl Entity for Tile {
    fn draw(&self, ctx: &Context) {
        let Some(texture) = ctx.assets.texture(&self.image) else {
            return;
        };
        draw_texture_ex(
            texture,
            self.position.x,
            self.position.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.size),
                ..Default::default()
            },
        );
    }

    fn debug_outline(&self) -> Option<(Vec2, f32)> {
        let (cx, cy) = self.bounds.center();
        Some((Vec2::new(cx, cy), self.size.x.min(self.size.y) * 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TileMap;

    #[test]
    fn test_tiles_never_request_removal() {
        let map = TileMap::default_glade();
        let tiles = map.spawn_tiles();
        assert!(tiles.iter().all(|t| !t.removal_requested()));
    }

    #[test]
    fn test_tile_carries_map_data() {
        let map = TileMap::default_glade();
        let tile = &map.spawn_tiles()[4];
        assert_eq!(tile.id(), 4);
        assert_eq!(tile.neighbors().count(), 4);
        assert_eq!(tile.bounds(), map.tile(4).unwrap().bounds);
    }
}
