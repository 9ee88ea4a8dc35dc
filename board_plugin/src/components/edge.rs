use crate::resources::tile::Side;
use bevy::prelude::Component;
#[cfg(feature = "debug")]
use bevy_inspector_egui::Inspectable;
use serde::{Deserialize, Serialize};

/// Marks an edge tile with the board side it lies on
#[cfg_attr(feature = "debug", derive(Inspectable))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Component)]
pub struct Edge {
    pub side: Side,
}
