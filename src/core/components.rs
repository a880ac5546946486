use bevy::prelude::*;

/// Marker component identifying a marble entity (holds physics body & collider).
#[derive(Component)]
pub struct Marble;

/// Player a marble races for. Names are the identity used by the winner latch.
#[derive(Component, Debug, Clone, PartialEq, Eq, Deref)]
pub struct PlayerName(pub String);

/// Fixed peg in the board field.
#[derive(Component)]
pub struct Peg;

/// Angled side wall. Touching a wall never counts as finishing.
#[derive(Component)]
pub struct Wall;

/// The finishing surface; first marble to touch it wins.
#[derive(Component)]
pub struct Floor;

/// Tag for every static board entity (pegs, walls, floor).
#[derive(Component)]
pub struct BoardPiece;
