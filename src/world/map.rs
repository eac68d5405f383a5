//! Tile-map resource
//!
//! A map is a small JSON document: grid dimensions, tile pixel size, an
//! image table, and one image index per cell. Parsing derives everything
//! else - per-cell positions, bounding boxes, and neighbor links from grid
//! adjacency. The map never mutates after load.
//!
//! Neighbor links are plain optional indices. They are carried as data for
//! the hero's one-hop collision lookup; nothing walks the graph.

use macroquad::prelude::{vec2, Vec2};
use serde::Deserialize;

use crate::game::collision::BoundingBox;
use crate::game::tile::Tile;
use crate::input::Direction;

/// Index of a tile in the map grid. Tiles are never removed, so ids stay
/// valid for the life of the map.
pub type TileId = usize;

/// Error raised for malformed map data.
#[derive(Debug)]
pub enum MapError {
    /// The JSON itself did not parse.
    Parse(String),
    /// The data parsed but is inconsistent.
    Validate(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Parse(msg) => write!(f, "map parse error: {}", msg),
            MapError::Validate(msg) => write!(f, "map validation error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

/// On-disk shape of a map document.
#[derive(Debug, Deserialize)]
struct MapFile {
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
    /// Cell size in pixels.
    tile_width: f32,
    tile_height: f32,
    /// Pixel position of the top-left cell.
    #[serde(default)]
    origin: [f32; 2],
    /// Image asset keys referenced by `cells`.
    images: Vec<String>,
    /// Row-major image index per cell.
    cells: Vec<usize>,
}

/// Optional links to the four grid neighbors of a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborLinks {
    pub north: Option<TileId>,
    pub east: Option<TileId>,
    pub south: Option<TileId>,
    pub west: Option<TileId>,
}

impl NeighborLinks {
    /// The neighbor in a movement direction, if the grid has one there.
    pub fn in_direction(&self, direction: Direction) -> Option<TileId> {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Number of present links.
    pub fn count(&self) -> usize {
        [self.north, self.east, self.south, self.west]
            .iter()
            .filter(|n| n.is_some())
            .count()
    }
}

/// One cell of the map, fully derived at load time.
#[derive(Debug, Clone)]
pub struct TileData {
    pub id: TileId,
    /// Top-left pixel position.
    pub position: Vec2,
    /// Asset key of the background image this cell draws.
    pub image: String,
    pub bounds: BoundingBox,
    pub neighbors: NeighborLinks,
}

/// The playable tile grid.
#[derive(Debug)]
pub struct TileMap {
    width: usize,
    height: usize,
    tile_width: f32,
    tile_height: f32,
    origin: Vec2,
    tiles: Vec<TileData>,
}

impl TileMap {
    /// Parse and validate a JSON map document.
    pub fn from_json(source: &str) -> Result<Self, MapError> {
        let file: MapFile =
            serde_json::from_str(source).map_err(|e| MapError::Parse(e.to_string()))?;
        Self::from_file(file)
    }

    fn from_file(file: MapFile) -> Result<Self, MapError> {
        if file.width == 0 || file.height == 0 {
            return Err(MapError::Validate("grid dimensions must be non-zero".into()));
        }
        if file.tile_width <= 0.0 || file.tile_height <= 0.0 {
            return Err(MapError::Validate("tile size must be positive".into()));
        }
        let expected = file.width * file.height;
        if file.cells.len() != expected {
            return Err(MapError::Validate(format!(
                "expected {} cells for a {}x{} grid, got {}",
                expected,
                file.width,
                file.height,
                file.cells.len()
            )));
        }
        if let Some(bad) = file.cells.iter().find(|&&i| i >= file.images.len()) {
            return Err(MapError::Validate(format!(
                "cell image index {} out of range ({} images)",
                bad,
                file.images.len()
            )));
        }

        let origin = vec2(file.origin[0], file.origin[1]);
        let mut tiles = Vec::with_capacity(expected);
        for (id, &image_index) in file.cells.iter().enumerate() {
            let col = id % file.width;
            let row = id / file.width;
            let position = origin
                + vec2(col as f32 * file.tile_width, row as f32 * file.tile_height);
            let neighbors = NeighborLinks {
                north: (row > 0).then(|| id - file.width),
                south: (row + 1 < file.height).then(|| id + file.width),
                west: (col > 0).then(|| id - 1),
                east: (col + 1 < file.width).then(|| id + 1),
            };
            tiles.push(TileData {
                id,
                position,
                image: file.images[image_index].clone(),
                bounds: BoundingBox::new(
                    position.x,
                    position.y,
                    file.tile_width,
                    file.tile_height,
                ),
                neighbors,
            });
        }

        Ok(Self {
            width: file.width,
            height: file.height,
            tile_width: file.tile_width,
            tile_height: file.tile_height,
            origin,
            tiles,
        })
    }

    /// The built-in 3x3 glade used when no map resource is available.
    pub fn default_glade() -> Self {
        let file = MapFile {
            width: 3,
            height: 3,
            tile_width: 192.0,
            tile_height: 192.0,
            origin: [32.0, 32.0],
            images: vec![
                "assets/images/tiles/grass.png".into(),
                "assets/images/tiles/grass_flowers.png".into(),
                "assets/images/tiles/grass_rocks.png".into(),
            ],
            cells: vec![0, 1, 0, 2, 0, 1, 0, 2, 0],
        };
        // Static data, kept valid by test_default_glade_is_valid.
        Self::from_file(file).expect("built-in map is valid")
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> Vec2 {
        vec2(self.tile_width, self.tile_height)
    }

    /// All cells in row-major order.
    pub fn tiles(&self) -> &[TileData] {
        &self.tiles
    }

    /// Resolve a tile id (e.g. a neighbor link).
    pub fn tile(&self, id: TileId) -> Option<&TileData> {
        self.tiles.get(id)
    }

    /// The cell containing a pixel point, if the point is on the map.
    pub fn tile_at(&self, x: f32, y: f32) -> Option<&TileData> {
        self.tiles.iter().find(|t| t.bounds.contains_point(x, y))
    }

    /// Pixel bounds of the whole grid.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.origin.x,
            self.origin.y,
            self.width as f32 * self.tile_width,
            self.height as f32 * self.tile_height,
        )
    }

    /// Pixel center of the grid - the hero's spawn point.
    pub fn center(&self) -> Vec2 {
        let (cx, cy) = self.bounds().center();
        vec2(cx, cy)
    }

    /// Materialize one [`Tile`] entity per cell for the engine list.
    pub fn spawn_tiles(&self) -> Vec<Tile> {
        self.tiles
            .iter()
            .map(|data| Tile::new(data, self.tile_size()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLADE: &str = r#"{
        "width": 3,
        "height": 3,
        "tile_width": 192.0,
        "tile_height": 192.0,
        "origin": [32.0, 32.0],
        "images": ["grass.png", "flowers.png"],
        "cells": [0, 1, 0, 0, 0, 1, 0, 0, 0]
    }"#;

    #[test]
    fn test_parse_valid_map() {
        let map = TileMap::from_json(GLADE).unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 3);
        assert_eq!(map.tiles().len(), 9);
        assert_eq!(map.tiles()[1].image, "flowers.png");
    }

    #[test]
    fn test_reject_wrong_cell_count() {
        let bad = GLADE.replace("[0, 1, 0, 0, 0, 1, 0, 0, 0]", "[0, 1, 0]");
        let err = TileMap::from_json(&bad).unwrap_err();
        assert!(matches!(err, MapError::Validate(_)));
    }

    #[test]
    fn test_reject_out_of_range_image_index() {
        let bad = GLADE.replace("[0, 1, 0, 0, 0, 1, 0, 0, 0]", "[0, 1, 0, 0, 7, 1, 0, 0, 0]");
        let err = TileMap::from_json(&bad).unwrap_err();
        assert!(matches!(err, MapError::Validate(_)));
    }

    #[test]
    fn test_reject_garbage_json() {
        let err = TileMap::from_json("not a map").unwrap_err();
        assert!(matches!(err, MapError::Parse(_)));
    }

    #[test]
    fn test_neighbor_links_from_adjacency() {
        let map = TileMap::from_json(GLADE).unwrap();
        // Corner cell: two links.
        let corner = map.tile(0).unwrap();
        assert_eq!(corner.neighbors.count(), 2);
        assert_eq!(corner.neighbors.east, Some(1));
        assert_eq!(corner.neighbors.south, Some(3));
        assert_eq!(corner.neighbors.north, None);
        // Interior cell: four links.
        let center = map.tile(4).unwrap();
        assert_eq!(center.neighbors.count(), 4);
        assert_eq!(center.neighbors.in_direction(Direction::North), Some(1));
        assert_eq!(center.neighbors.in_direction(Direction::West), Some(3));
    }

    #[test]
    fn test_tile_at_point_lookup() {
        let map = TileMap::from_json(GLADE).unwrap();
        assert_eq!(map.tile_at(33.0, 33.0).unwrap().id, 0);
        assert_eq!(map.tile_at(300.0, 300.0).unwrap().id, 4);
        assert!(map.tile_at(0.0, 0.0).is_none());
        assert!(map.tile_at(10_000.0, 10.0).is_none());
    }

    #[test]
    fn test_positions_follow_grid() {
        let map = TileMap::from_json(GLADE).unwrap();
        assert_eq!(map.tile(0).unwrap().position, vec2(32.0, 32.0));
        assert_eq!(map.tile(4).unwrap().position, vec2(224.0, 224.0));
        assert_eq!(map.bounds().right(), 32.0 + 3.0 * 192.0);
    }

    #[test]
    fn test_default_glade_is_valid() {
        let map = TileMap::default_glade();
        assert_eq!(map.tiles().len(), 9);
        assert_eq!(map.spawn_tiles().len(), 9);
    }
}
