use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Shared random source for peg sizes, spawn order and marble colours.
/// Seeded from `GameConfig::seed` when set so boards and rounds can be replayed.
#[derive(Resource, Deref, DerefMut)]
pub struct PlinkoRng(pub StdRng);

impl PlinkoRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for PlinkoRng {
    fn default() -> Self {
        Self::new(None)
    }
}
