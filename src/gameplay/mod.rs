pub mod events;
pub mod roster;
pub mod round;
pub mod winner;
