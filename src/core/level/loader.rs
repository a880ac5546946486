use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy_rapier3d::prelude::{ActiveEvents, Collider, Restitution, RigidBody};

use crate::core::components::{BoardPiece, Floor, Peg, Wall};
use crate::core::config::GameConfig;
use crate::core::rng::PlinkoRng;

use super::layout::{floor_spec, generate_pegs, wall_specs, FloorSpec, PegSpec, WallSpec};

/// Resource: the generated board in board-local coordinates plus its world offset.
#[derive(Debug, Resource, Clone, Default)]
pub struct BoardLayout {
    pub origin: Vec3,
    pub pegs: Vec<PegSpec>,
    pub walls: Vec<WallSpec>,
    pub floor: Option<FloorSpec>,
}

impl BoardLayout {
    pub fn generate(cfg: &GameConfig, rng: &mut PlinkoRng) -> Self {
        Self {
            origin: cfg.board.origin.into(),
            pegs: generate_pegs(&cfg.board, &mut rng.0),
            walls: wall_specs(&cfg.walls),
            floor: Some(floor_spec(&cfg.floor)),
        }
    }
}

/// Builds the peg field, side walls and floor once at startup.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        // Tests often run with only MinimalPlugins; ensure required asset storages exist.
        if app.world().get_resource::<Assets<Mesh>>().is_none() {
            app.init_resource::<Assets<Mesh>>();
        }
        if app
            .world()
            .get_resource::<Assets<StandardMaterial>>()
            .is_none()
        {
            app.init_resource::<Assets<StandardMaterial>>();
        }
        app.init_resource::<BoardLayout>()
            .add_systems(Startup, build_board);
    }
}

pub fn build_board(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut rng: ResMut<PlinkoRng>,
    mut layout: ResMut<BoardLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    *layout = BoardLayout::generate(&cfg, &mut rng);
    let origin = layout.origin;

    let peg_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });
    // Pegs share meshes per (top, bottom) radius pair; the choice list is short.
    let mut peg_meshes: HashMap<(u32, u32), Handle<Mesh>> = HashMap::new();
    for peg in &layout.pegs {
        let mesh = peg_meshes
            .entry((peg.radius_top.to_bits(), peg.radius_bottom.to_bits()))
            .or_insert_with(|| {
                meshes.add(ConicalFrustum {
                    radius_top: peg.radius_top,
                    radius_bottom: peg.radius_bottom,
                    height: peg.length,
                })
            })
            .clone();
        commands.spawn((
            Peg,
            BoardPiece,
            Mesh3d(mesh),
            MeshMaterial3d(peg_material.clone()),
            // Frustum & cylinder axes are Y; lay the peg along the depth axis.
            Transform::from_translation(origin + peg.position)
                .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            RigidBody::Fixed,
            Collider::cylinder(peg.length * 0.5, peg.collider_radius()),
            Restitution::coefficient(cfg.board.peg_restitution),
        ));
    }

    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.55, 0.95),
        perceptual_roughness: 0.6,
        ..default()
    });
    for wall in &layout.walls {
        let half = wall.size * 0.5;
        commands.spawn((
            Wall,
            BoardPiece,
            Mesh3d(meshes.add(Cuboid::from_size(wall.size))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(origin + wall.position)
                .with_rotation(Quat::from_rotation_z(wall.tilt)),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y, half.z),
        ));
    }

    if let Some(floor) = &layout.floor {
        let half = floor.size * 0.5;
        commands.spawn((
            Floor,
            BoardPiece,
            Name::new("floor"),
            Mesh3d(meshes.add(Cuboid::from_size(floor.size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.55, 0.85, 0.6),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(origin + floor.position),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y, half.z),
            ActiveEvents::COLLISION_EVENTS,
        ));
    }

    info!(
        target: "board",
        "Board built: pegs={} ({} meshes) walls={} floor={}",
        layout.pegs.len(),
        peg_meshes.len(),
        layout.walls.len(),
        layout.floor.is_some()
    );
}
