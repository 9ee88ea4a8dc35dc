use bevy::prelude::*;

#[cfg(feature = "debug")]
use bevy_inspector_egui::WorldInspectorPlugin;
use board_plugin::resources::BoardOptions;
use board_plugin::BoardPlugin;

/// Camera distance from the board center
const CAMERA_RADIUS: f32 = 20.;

fn main() {
    let mut app = App::new();

    app.insert_resource(WindowDescriptor {
        title: "Metropoly".to_string(),
        width: 1280.,
        height: 720.,
        ..Default::default()
    })
    .insert_resource(BoardOptions::default())
    .add_plugins(DefaultPlugins)
    .add_plugin(BoardPlugin);

    #[cfg(feature = "debug")]
    app.add_plugin(WorldInspectorPlugin::new());

    app.add_startup_system(camera_setup);
    app.add_startup_system(light_setup);
    app.run();
}

/// Fixed isometric view: 45 degrees around the vertical axis, elevated
/// so that all three axes foreshorten equally
fn camera_setup(mut commands: Commands) {
    let eye = Vec3::new(1., 1., -1.).normalize() * CAMERA_RADIUS;
    commands.spawn_bundle(PerspectiveCameraBundle {
        transform: Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });
}

fn light_setup(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
    });
    commands.spawn_bundle(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 15_000.,
            ..Default::default()
        },
        transform: Transform::from_xyz(10., 10., 0.).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });
}
