use bevy::prelude::Component;
#[cfg(feature = "debug")]
use bevy_inspector_egui::Inspectable;
use serde::{Deserialize, Serialize};

/// Marker for the four fixed white corner tiles
#[cfg_attr(feature = "debug", derive(Inspectable))]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Component)]
pub struct Corner;
