pub mod camera;
pub mod labels;
pub mod materials;
pub mod palette;
pub mod stage;
