pub mod layout;
pub mod loader;

// Re-export primary plugin & resources for convenience
pub use layout::{FloorSpec, PegSpec, WallSpec};
pub use loader::{BoardLayout, BoardPlugin};
