use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

use crate::core::components::{Floor, Marble, PlayerName};
use crate::core::system::system_order::ResultsSet;
use crate::gameplay::events::WinnerDeclared;
use crate::gameplay::roster::Roster;

/// Finishing order of the current round. The first entry is the winner and never changes
/// until the result is cleared.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceResult {
    finish_order: Vec<String>,
}

impl RaceResult {
    /// Record a marble reaching the floor. Returns `true` when this name became the winner.
    /// Repeat contacts of a name already recorded are ignored.
    pub fn record(&mut self, name: &str) -> bool {
        if self.finish_order.iter().any(|n| n == name) {
            return false;
        }
        self.finish_order.push(name.to_string());
        self.finish_order.len() == 1
    }

    pub fn winner(&self) -> Option<&str> {
        self.finish_order.first().map(String::as_str)
    }

    pub fn finish_order(&self) -> &[String] {
        &self.finish_order
    }

    pub fn clear(&mut self) {
        self.finish_order.clear();
    }
}

pub struct WinnerPlugin;

impl Plugin for WinnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RaceResult>()
            .add_event::<WinnerDeclared>()
            .add_systems(Update, detect_floor_contacts.in_set(ResultsSet));
    }
}

/// Latch floor contacts from Rapier collision events into the `RaceResult`.
pub fn detect_floor_contacts(
    mut collisions: EventReader<CollisionEvent>,
    floors: Query<(), With<Floor>>,
    marbles: Query<&PlayerName, With<Marble>>,
    roster: Res<Roster>,
    mut result: ResMut<RaceResult>,
    mut declared: EventWriter<WinnerDeclared>,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _flags) = ev else {
            continue;
        };
        let marble = if floors.contains(*a) {
            *b
        } else if floors.contains(*b) {
            *a
        } else {
            continue;
        };
        let Ok(name) = marbles.get(marble) else {
            continue;
        };
        // Marbles of a retired player may still be rolling; they cannot place.
        if !roster.contains(name) {
            debug!(target: "winner", "ignoring floor contact from unregistered '{}'", name.0);
            continue;
        }
        let placed_before = result.finish_order().len();
        if result.record(name) {
            info!(target: "winner", "Winner: {}", name.0);
            declared.write(WinnerDeclared(name.0.clone()));
        } else if result.finish_order().len() > placed_before {
            info!(
                target: "winner",
                "Finished #{}: {}",
                result.finish_order().len(),
                name.0
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_wins() {
        let mut r = RaceResult::default();
        assert_eq!(r.winner(), None);
        assert!(r.record("aioli"));
        assert!(!r.record("NIls"));
        assert!(!r.record("aioli"));
        assert!(!r.record("MOa"));
        assert_eq!(r.winner(), Some("aioli"));
        assert_eq!(r.finish_order(), &["aioli", "NIls", "MOa"]);
    }

    #[test]
    fn clear_reopens_latch() {
        let mut r = RaceResult::default();
        r.record("Victor");
        r.clear();
        assert_eq!(r.winner(), None);
        assert!(r.record("Emma"));
        assert_eq!(r.winner(), Some("Emma"));
    }
}
