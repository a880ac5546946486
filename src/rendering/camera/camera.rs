use bevy::prelude::*;

/// Marker for the single gameplay camera (labels project through it).
#[derive(Component)]
pub struct MainCamera;

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 400.0);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            ..default()
        })
        .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 90f32.to_radians(),
            far: 10_000.0,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(2.5, 50.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    info!(target: "board", "Camera at {CAMERA_POSITION:?} looking at origin");
}
