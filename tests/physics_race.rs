//! Full physics run: marbles fall through the real peg field until Rapier
//! reports one of them touching the floor collider.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::render::mesh::MeshPlugin;
use bevy::scene::ScenePlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;

use marble_plinko::core::config::GameConfig;
use marble_plinko::core::level::BoardPlugin;
use marble_plinko::core::rng::PlinkoRng;
use marble_plinko::core::system::system_order::{InputSet, PresentationSet, ResultsSet, RoundSet};
use marble_plinko::gameplay::round::RoundPlugin;
use marble_plinko::gameplay::winner::WinnerPlugin;
use marble_plinko::physics::gravity::gravity::GravityPlugin;
use marble_plinko::{RaceResult, Roster};

/// Generous upper bound on simulated frames (60 Hz) before giving up.
const MAX_FRAMES: usize = 60 * 60;

fn physics_app(players: &[&str]) -> App {
    let mut cfg = GameConfig {
        players: players.iter().map(|s| s.to_string()).collect(),
        seed: Some(5),
        ..Default::default()
    };
    cfg.gravity.initial = 100.0;

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        AssetPlugin::default(),
        MeshPlugin,
        ScenePlugin,
    ))
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        1.0 / 60.0,
    )))
    .insert_resource(cfg)
    .insert_resource(PlinkoRng::new(Some(5)))
    .configure_sets(
        Update,
        (InputSet, RoundSet, ResultsSet, PresentationSet).chain(),
    )
    .add_plugins((
        RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
        GravityPlugin,
        BoardPlugin,
        RoundPlugin,
        WinnerPlugin,
    ));
    app
}

#[test]
fn floor_contact_latches_a_registered_winner() {
    let players = ["Mikl", "Victor", "aioli", "Emma"];
    let mut app = physics_app(&players);

    let mut frames = 0;
    while app.world().resource::<RaceResult>().winner().is_none() && frames < MAX_FRAMES {
        app.update();
        frames += 1;
    }

    let result = app.world().resource::<RaceResult>();
    let winner = result
        .winner()
        .unwrap_or_else(|| panic!("no marble reached the floor in {frames} frames"));
    assert!(players.contains(&winner), "unexpected winner {winner}");
    assert!(app.world().resource::<Roster>().contains(winner));

    let world = app.world_mut();
    let gravity = world
        .query::<&RapierConfiguration>()
        .single(world)
        .expect("one rapier context")
        .gravity;
    assert_eq!(gravity, Vect::new(0.0, -100.0, 0.0));
}
