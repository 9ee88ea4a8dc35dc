use crate::resources::board_layout::BoardLayout;
use bevy::prelude::Entity;
use bevy::utils::HashMap;

/// Retained board state inserted as a resource once the tiles are
/// spawned
#[derive(Debug)]
pub struct Board {
    pub layout: BoardLayout,
    pub tile_size: f32,
    pub tile_entities: HashMap<String, Entity>,
}

impl Board {
    /// Looks up the spawned entity for a tile id
    pub fn tile_entity(&self, id: &str) -> Option<Entity> {
        self.tile_entities.get(id).copied()
    }
}
