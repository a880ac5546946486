pub mod components;
pub mod config;
pub mod level;
pub mod rng;
pub mod system;
