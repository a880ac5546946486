pub mod gravity;
pub mod rapier;
