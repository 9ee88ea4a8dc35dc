use crate::resources::board_layout::BoardConfig;
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Board position customization options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BoardPosition {
    /// Centered board
    Centered { offset: Vec3 },
    /// Custom position
    Custom(Vec3),
}

/// Board generation options. Must be used as a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardOptions {
    /// Tile count along one side of the ring, corners included
    pub tiles_per_side: u16,
    /// World size of a tile
    pub tile_size: f32,
    /// Height of the tile box mesh
    pub tile_height: f32,
    /// Board world position
    pub position: BoardPosition,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            tiles_per_side: 11,
            tile_size: 1.,
            tile_height: 0.1,
            position: BoardPosition::Centered { offset: Vec3::ZERO },
        }
    }
}

impl BoardOptions {
    /// The geometry subset handed to the layout generator
    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            tiles_per_side: self.tiles_per_side,
            tile_size: self.tile_size,
        }
    }
}
