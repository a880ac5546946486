use bevy::prelude::*;

use crate::rendering::stage::Stage;

/// Register a new player; a fresh round starts when accepted.
#[derive(Event, Debug, Clone)]
pub struct AddPlayer(pub String);

/// Retire the current winner from the roster and start over.
#[derive(Event, Debug, Clone, Default)]
pub struct ResetRound;

/// Despawn marbles, reshuffle the roster and drop a new set.
#[derive(Event, Debug, Clone, Default)]
pub struct StartRound;

/// Set downward gravity magnitude (clamped to the slider range).
#[derive(Event, Debug, Clone, Copy)]
pub struct SetGravity(pub f32);

#[derive(Event, Debug, Clone, Copy)]
pub struct SelectStage(pub Stage);

/// Emitted once per round when the first marble touches the floor.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WinnerDeclared(pub String);

/// Outcome of an `AddPlayer` request, for UI feedback.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum PlayerAddOutcome {
    Added(String),
    Rejected(String),
}
