use bevy::math::Vec3;
#[cfg(feature = "debug")]
use bevy_inspector_egui::Inspectable;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Which side of the ring an edge tile lies on
#[cfg_attr(feature = "debug", derive(Inspectable))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Side::Top => "Top",
            Side::Bottom => "Bottom",
            Side::Left => "Left",
            Side::Right => "Right",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TileKind {
    /// One of the four fixed tiles at the board extents
    Corner,
    /// A tile between two corners
    Edge(Side),
}

/// How the renderer should pick the tile color. The color value itself
/// is never part of a layout, only the policy
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ColorPolicy {
    FixedWhite,
    RandomPerTile,
}

/// A single tile of a generated board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePlacement {
    /// Stable identifier, unique within a board
    pub id: String,
    pub kind: TileKind,
    /// World position, y is always 0
    pub position: Vec3,
    /// Rotation around the vertical axis
    pub yaw_radians: f32,
    pub color_policy: ColorPolicy,
}
