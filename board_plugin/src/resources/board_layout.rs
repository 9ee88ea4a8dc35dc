use crate::resources::tile::{ColorPolicy, Side, TileKind, TilePlacement};
use bevy::math::Vec3;
#[cfg(feature = "debug")]
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use thiserror::Error;

/// Geometry parameters for a square ring board
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Tile count along one side, corners included. A square needs at
    /// least its 4 corners, so 2 is the minimum
    pub tiles_per_side: u16,
    /// World size of a tile
    pub tile_size: f32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfig {
    #[error("a square ring needs at least 2 tiles per side, got {0}")]
    NotEnoughTiles(u16),
    #[error("tile size must be positive, got {0}")]
    NonPositiveTileSize(f32),
}

/// Ordered tile placements forming a square ring: the 4 corners first,
/// then for each index along a side its Top, Bottom, Left and Right
/// edge tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    config: BoardConfig,
    placements: Vec<TilePlacement>,
}

impl Deref for BoardLayout {
    type Target = [TilePlacement];

    fn deref(&self) -> &Self::Target {
        &self.placements
    }
}

impl BoardLayout {
    /// Generates the full layout for `config`.
    ///
    /// The result is deterministic: the same config always yields the
    /// same ids, kinds and positions. Edge tiles only carry the
    /// `RandomPerTile` policy, no color is drawn here
    pub fn generate(config: &BoardConfig) -> Result<Self, InvalidConfig> {
        if config.tiles_per_side < 2 {
            return Err(InvalidConfig::NotEnoughTiles(config.tiles_per_side));
        }
        if config.tile_size <= 0. {
            return Err(InvalidConfig::NonPositiveTileSize(config.tile_size));
        }

        // Distance from the board center to a corner tile center
        let extent = config.tile_size / 2. * (config.tiles_per_side - 1) as f32;
        let mut placements = Vec::with_capacity(Self::placement_count(config.tiles_per_side));

        // Corners: top left, top right, bottom left, bottom right
        let corners = [
            Vec3::new(-extent, 0., extent),
            Vec3::new(extent, 0., extent),
            Vec3::new(-extent, 0., -extent),
            Vec3::new(extent, 0., -extent),
        ];
        for (index, position) in corners.into_iter().enumerate() {
            placements.push(TilePlacement {
                id: format!("cornerTile{}", index + 1),
                kind: TileKind::Corner,
                position,
                yaw_radians: 0.,
                color_policy: ColorPolicy::FixedWhite,
            });
        }

        // Edge tiles walk each side between two corners
        for i in 1..config.tiles_per_side - 1 {
            let offset = extent - config.tile_size * i as f32;
            let sides = [
                (Side::Top, Vec3::new(-offset, 0., extent)),
                (Side::Bottom, Vec3::new(offset, 0., -extent)),
                (Side::Left, Vec3::new(-extent, 0., offset)),
                (Side::Right, Vec3::new(extent, 0., -offset)),
            ];
            for (side, position) in sides {
                placements.push(TilePlacement {
                    id: format!("edgeTile{}{}", side, i),
                    kind: TileKind::Edge(side),
                    position,
                    yaw_radians: 0.,
                    color_policy: ColorPolicy::RandomPerTile,
                });
            }
        }

        Ok(Self {
            config: *config,
            placements,
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Total placement count for a side length: 4 corners plus the
    /// open tiles on each of the 4 sides
    pub fn placement_count(tiles_per_side: u16) -> usize {
        4 + 4 * (tiles_per_side as usize).saturating_sub(2)
    }

    /// Full world side length of the board
    pub fn board_size(&self) -> f32 {
        self.config.tile_size * self.config.tiles_per_side as f32
    }

    #[cfg(feature = "debug")]
    pub fn console_output(&self) -> String {
        let n = self.config.tiles_per_side as usize;
        let mut buffer = format!("Board ({}x{} ring, {} tiles):\n", n, n, self.placements.len());
        for row in 0..n {
            for col in 0..n {
                let on_rim = row == 0 || row == n - 1;
                let on_flank = col == 0 || col == n - 1;
                if on_rim && on_flank {
                    buffer.push_str(&"C".bright_white().to_string());
                } else if on_rim || on_flank {
                    buffer.push_str(&"E".cyan().to_string());
                } else {
                    buffer.push(' ');
                }
            }
            buffer.push('\n');
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(tiles_per_side: u16, tile_size: f32) -> BoardLayout {
        BoardLayout::generate(&BoardConfig {
            tiles_per_side,
            tile_size,
        })
        .unwrap()
    }

    #[test]
    fn placement_count_matches_ring_size() {
        for n in 2..=16 {
            assert_eq!(layout(n, 1.).len(), 4 + 4 * (n as usize - 2));
        }
    }

    #[test]
    fn corners_sit_at_the_four_extents() {
        let layout = layout(11, 1.);
        let corners: Vec<_> = layout
            .iter()
            .filter(|p| p.kind == TileKind::Corner)
            .collect();
        assert_eq!(corners.len(), 4);
        let expected = [
            Vec3::new(-5., 0., 5.),
            Vec3::new(5., 0., 5.),
            Vec3::new(-5., 0., -5.),
            Vec3::new(5., 0., -5.),
        ];
        for (corner, position) in corners.iter().zip(expected) {
            assert_eq!(corner.position, position);
            assert_eq!(corner.color_policy, ColorPolicy::FixedWhite);
        }
    }

    #[test]
    fn layout_is_point_symmetric() {
        let layout = layout(7, 2.);
        for placement in layout.iter() {
            let mirrored = Vec3::new(-placement.position.x, 0., -placement.position.z);
            assert!(
                layout
                    .iter()
                    .any(|p| (p.position - mirrored).length() < 1e-5),
                "no mirror tile for {}",
                placement.id
            );
        }
    }

    #[test]
    fn two_tiles_per_side_degenerates_to_corners() {
        let layout = layout(2, 1.);
        assert_eq!(layout.len(), 4);
        for placement in layout.iter() {
            assert_eq!(placement.kind, TileKind::Corner);
            assert_eq!(placement.position.x.abs(), 0.5);
            assert_eq!(placement.position.y, 0.);
            assert_eq!(placement.position.z.abs(), 0.5);
        }
    }

    #[test]
    fn reference_board_has_40_tiles() {
        let layout = layout(11, 1.);
        assert_eq!(layout.len(), 40);
        for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            let edges: Vec<_> = layout
                .iter()
                .filter(|p| p.kind == TileKind::Edge(side))
                .collect();
            assert_eq!(edges.len(), 9);
            assert!(edges
                .iter()
                .all(|p| p.color_policy == ColorPolicy::RandomPerTile));
        }
        let top_first = layout.iter().find(|p| p.id == "edgeTileTop1").unwrap();
        assert_eq!(top_first.position, Vec3::new(-4., 0., 5.));
        assert_eq!(top_first.yaw_radians, 0.);
    }

    #[test]
    fn regeneration_is_stable() {
        let config = BoardConfig {
            tiles_per_side: 9,
            tile_size: 1.5,
        };
        let first = BoardLayout::generate(&config).unwrap();
        let second = BoardLayout::generate(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn tile_ids_are_unique() {
        let layout = layout(11, 1.);
        let mut ids: Vec<_> = layout.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), layout.len());
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert_eq!(
            BoardLayout::generate(&BoardConfig {
                tiles_per_side: 1,
                tile_size: 1.,
            }),
            Err(InvalidConfig::NotEnoughTiles(1))
        );
        assert_eq!(
            BoardLayout::generate(&BoardConfig {
                tiles_per_side: 11,
                tile_size: 0.,
            }),
            Err(InvalidConfig::NonPositiveTileSize(0.))
        );
        assert!(BoardLayout::generate(&BoardConfig {
            tiles_per_side: 4,
            tile_size: -1.,
        })
        .is_err());
    }
}
