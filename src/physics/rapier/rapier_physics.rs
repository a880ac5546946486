use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::GameConfig;
use crate::physics::gravity::gravity::GravityPlugin;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & slider gravity

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let debug_render = app
            .world()
            .get_resource::<GameConfig>()
            .is_some_and(|cfg| cfg.rapier_debug);
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::default(),
            RapierDebugRenderPlugin {
                enabled: debug_render,
                ..default()
            },
            GravityPlugin,
        ));
    }
}
