use bevy::prelude::Component;
#[cfg(feature = "debug")]
use bevy_inspector_egui::Inspectable;
use serde::{Deserialize, Serialize};

/// Stable tile identifier matching the generated placement id
#[cfg_attr(feature = "debug", derive(Inspectable))]
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Component)]
pub struct TileId(pub String);
