pub mod config;

pub use config::{
    BoardConfig, FloorConfig, GameConfig, GravityConfig, MarbleConfig, Vec3Def, WallConfig,
    WindowConfig,
};
