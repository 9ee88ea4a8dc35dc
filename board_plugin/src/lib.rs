pub mod components;
pub mod resources;

use crate::{
    components::{Corner, Edge, TileId},
    resources::{
        board_layout::BoardLayout,
        tile::{ColorPolicy, TileKind, TilePlacement},
        Board, BoardOptions, BoardPosition,
    },
};
use bevy::prelude::*;
use bevy::utils::HashMap;
#[cfg(feature = "debug")]
use bevy_inspector_egui::RegisterInspectable;
use rand::Rng;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(Self::create_board);
        info!("Loaded Board Plugin");

        // registering custom components to be able to edit it in inspector
        #[cfg(feature = "debug")]
        {
            app.register_inspectable::<Corner>();
            app.register_inspectable::<Edge>();
            app.register_inspectable::<TileId>();
        }
    }
}

impl BoardPlugin {
    /// System to generate the complete board
    pub fn create_board(
        mut commands: Commands,
        board_options: Option<Res<BoardOptions>>,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) {
        let options = match board_options {
            None => BoardOptions::default(), // If no options is set we use the default one
            Some(o) => o.clone(),
        };

        let layout = match BoardLayout::generate(&options.config()) {
            Ok(layout) => layout,
            Err(e) => {
                error!("Invalid board options: {}", e);
                return;
            }
        };
        #[cfg(feature = "debug")]
        info!("{}", layout.console_output());

        let board_position = Self::build_board_position(&options);
        // One box mesh shared by every tile
        let tile_mesh = meshes.add(Mesh::from(shape::Box::new(
            options.tile_size,
            options.tile_height,
            options.tile_size,
        )));
        let mut tile_entities = HashMap::with_capacity(layout.len());

        commands
            .spawn()
            .insert(Name::new("Board"))
            .insert(Transform::from_translation(board_position))
            .insert(GlobalTransform::default())
            .with_children(|parent| {
                Self::spawn_tiles(parent, &layout, tile_mesh, &mut materials, &mut tile_entities);
            });
        commands.insert_resource(Board {
            layout,
            tile_size: options.tile_size,
            tile_entities,
        });
    }

    /// Board anchor position (the layout itself is centered on its
    /// own origin)
    fn build_board_position(options: &BoardOptions) -> Vec3 {
        match options.position {
            BoardPosition::Centered { offset } => offset,
            BoardPosition::Custom(p) => p,
        }
    }

    fn spawn_tiles(
        parent: &mut ChildBuilder,
        layout: &BoardLayout,
        tile_mesh: Handle<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        tile_entities: &mut HashMap<String, Entity>,
    ) {
        // Corners share one white material, edges each draw a random color
        let white_material = materials.add(Color::WHITE.into());
        let mut rng = rand::thread_rng();

        for placement in layout.iter() {
            let material = match placement.color_policy {
                ColorPolicy::FixedWhite => white_material.clone(),
                ColorPolicy::RandomPerTile => {
                    materials.add(Self::random_tile_color(&mut rng).into())
                }
            };
            let entity = Self::insert_tile(parent, placement, tile_mesh.clone(), material);
            tile_entities.insert(placement.id.clone(), entity);
        }
    }

    fn insert_tile(
        parent: &mut ChildBuilder,
        placement: &TilePlacement,
        mesh: Handle<Mesh>,
        material: Handle<StandardMaterial>,
    ) -> Entity {
        let mut tile_entity = parent.spawn_bundle(PbrBundle {
            mesh,
            material,
            transform: Transform::from_translation(placement.position)
                .with_rotation(Quat::from_rotation_y(placement.yaw_radians)),
            ..Default::default()
        });
        tile_entity
            .insert(Name::new(placement.id.clone()))
            .insert(TileId(placement.id.clone()));
        match placement.kind {
            TileKind::Corner => {
                tile_entity.insert(Corner);
            }
            TileKind::Edge(side) => {
                tile_entity.insert(Edge { side });
            }
        }
        tile_entity.id()
    }

    fn random_tile_color(rng: &mut impl Rng) -> Color {
        Color::rgb(rng.gen(), rng.gen(), rng.gen())
    }
}
