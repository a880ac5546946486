pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::gameplay::events::{AddPlayer, ResetRound, SelectStage, SetGravity, WinnerDeclared};
pub use crate::gameplay::roster::{Roster, RosterError};
pub use crate::gameplay::winner::RaceResult;
pub use crate::rendering::stage::{Stage, StageParseError};
