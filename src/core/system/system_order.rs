//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Input (UI / keyboard turn into events)
//! 2. Round (events mutate roster, gravity, stage; rounds restart)
//! 3. Rapier (handled by plugin in PostUpdate)
//! 4. Results (collision events latch the winner)
//! 5. Presentation (labels, banner, stage decorations)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RoundSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ResultsSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet;
