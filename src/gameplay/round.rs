use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{Marble, PlayerName};
use crate::core::config::{GameConfig, MarbleConfig};
use crate::core::rng::PlinkoRng;
use crate::core::system::system_order::RoundSet;
use crate::gameplay::events::{AddPlayer, PlayerAddOutcome, ResetRound, StartRound};
use crate::gameplay::roster::Roster;
use crate::gameplay::winner::RaceResult;
use crate::rendering::materials::materials::{MarbleMaterials, MarbleMesh};
use crate::rendering::palette::palette::{random_marble_color, MARBLE_COLORS};

/// Bookkeeping for the round in play.
#[derive(Resource, Debug, Clone, Default)]
pub struct Round {
    /// 0 until the first round starts.
    pub number: u32,
    /// Players left to right along the drop line.
    pub spawn_order: Vec<String>,
}

pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Roster>()
            .init_resource::<RaceResult>()
            .init_resource::<Round>()
            .add_event::<AddPlayer>()
            .add_event::<ResetRound>()
            .add_event::<StartRound>()
            .add_event::<PlayerAddOutcome>()
            .add_systems(Startup, register_initial_players)
            .add_systems(
                Update,
                (handle_add_player, handle_reset, start_round)
                    .chain()
                    .in_set(RoundSet),
            );
    }
}

/// Board-local drop positions: marble `i` of `count` sits at `i * spacing - count * spacing / 2`.
pub fn spawn_positions(count: usize, cfg: &MarbleConfig) -> Vec<Vec3> {
    let offset = count as f32 * cfg.spacing / 2.0;
    (0..count)
        .map(|i| Vec3::new(i as f32 * cfg.spacing - offset, cfg.drop_height, 0.0))
        .collect()
}

fn register_initial_players(
    cfg: Res<GameConfig>,
    mut roster: ResMut<Roster>,
    mut starts: EventWriter<StartRound>,
) {
    *roster = Roster::new(cfg.max_name_len);
    for name in &cfg.players {
        if let Err(e) = roster.add(name) {
            warn!(target: "round", "Skipping configured player '{name}': {e}");
        }
    }
    info!(target: "round", "Roster initialised with {} players", roster.len());
    if !roster.is_empty() {
        starts.write(StartRound);
    }
}

fn handle_add_player(
    mut requests: EventReader<AddPlayer>,
    mut roster: ResMut<Roster>,
    mut outcomes: EventWriter<PlayerAddOutcome>,
    mut starts: EventWriter<StartRound>,
) {
    let mut added = false;
    for AddPlayer(name) in requests.read() {
        match roster.add(name) {
            Ok(stored) => {
                info!(target: "round", "Player added: {stored}");
                outcomes.write(PlayerAddOutcome::Added(stored.to_string()));
                added = true;
            }
            Err(e) => {
                warn!(target: "round", "Player rejected: {e}");
                outcomes.write(PlayerAddOutcome::Rejected(e.to_string()));
            }
        }
    }
    if added {
        starts.write(StartRound);
    }
}

fn handle_reset(
    mut requests: EventReader<ResetRound>,
    mut roster: ResMut<Roster>,
    result: Res<RaceResult>,
    mut starts: EventWriter<StartRound>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    if let Some(winner) = result.winner() {
        if roster.remove(winner) {
            info!(target: "round", "Reset: retired winner '{winner}' ({} players left)", roster.len());
        }
    } else {
        info!(target: "round", "Reset without a winner; replaying round");
    }
    starts.write(StartRound);
}

#[allow(clippy::too_many_arguments)]
fn start_round(
    mut commands: Commands,
    mut requests: EventReader<StartRound>,
    cfg: Res<GameConfig>,
    roster: Res<Roster>,
    mut rng: ResMut<PlinkoRng>,
    mut round: ResMut<Round>,
    mut result: ResMut<RaceResult>,
    marbles: Query<Entity, With<Marble>>,
    mesh: Option<Res<MarbleMesh>>,
    materials: Option<Res<MarbleMaterials>>,
) {
    // Several triggers in one frame (e.g. add + reset) collapse into one round.
    if requests.is_empty() {
        return;
    }
    requests.clear();

    for e in &marbles {
        commands.entity(e).despawn();
    }
    result.clear();

    let order = roster.shuffled(&mut rng.0);
    let origin: Vec3 = cfg.board.origin.into();
    let m = &cfg.marbles;
    for (name, pos) in order.iter().zip(spawn_positions(order.len(), m)) {
        let color_idx = random_marble_color(&mut rng.0);
        let mut marble = commands.spawn((
            Marble,
            PlayerName(name.clone()),
            Name::new(format!("marble:{name}")),
            Transform::from_translation(origin + pos),
            RigidBody::Dynamic,
            Collider::ball(m.radius),
            ColliderMassProperties::Mass(m.mass),
            Restitution::coefficient(m.restitution),
            Friction::coefficient(m.friction),
            Velocity::zero(),
            // Gravity starts at zero; sleeping marbles would ignore the slider.
            Sleeping::disabled(),
        ));
        if let (Some(mesh), Some(materials)) = (mesh.as_deref(), materials.as_deref()) {
            marble.insert((
                Mesh3d(mesh.0.clone()),
                MeshMaterial3d(materials.0[color_idx].clone()),
            ));
        }
        debug!(target: "round", "Spawned {name} at {:?} ({})", origin + pos, MARBLE_COLORS[color_idx].0);
    }

    round.number += 1;
    round.spawn_order = order;
    info!(
        target: "round",
        "Round {} started with {} marbles: {:?}",
        round.number,
        round.spawn_order.len(),
        round.spawn_order
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_line_is_centred_on_count() {
        let cfg = MarbleConfig::default();
        let pos = spawn_positions(4, &cfg);
        let xs: Vec<f32> = pos.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-20.0, -10.0, 0.0, 10.0]);
        assert!(pos.iter().all(|p| p.y == 200.0 && p.z == 0.0));
    }

    #[test]
    fn no_players_no_positions() {
        assert!(spawn_positions(0, &MarbleConfig::default()).is_empty());
    }
}
