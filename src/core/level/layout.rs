use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::config::{BoardConfig, FloorConfig, WallConfig};

/// Radius used when `thickness_choices` is empty.
const FALLBACK_PEG_RADIUS: f32 = 1.0;

/// One peg of the field. Board-local position; the cylinder axis runs along Z.
#[derive(Debug, Clone, PartialEq)]
pub struct PegSpec {
    pub position: Vec3,
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub length: f32,
}

impl PegSpec {
    /// Collider radius; the physics shape is a straight cylinder so the wider end wins.
    pub fn collider_radius(&self) -> f32 {
        self.radius_top.max(self.radius_bottom)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec {
    pub position: Vec3,
    /// Rotation about Z in radians.
    pub tilt: f32,
    /// Full box extents.
    pub size: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloorSpec {
    pub position: Vec3,
    pub size: Vec3,
}

/// Generate the staggered peg field, row by row, bottom row first.
///
/// Every peg draws a random index into `thickness_choices`; the top radius comes from the
/// list itself and the bottom radius from one shuffled copy taken per call, so pegs taper
/// by a random amount while both radii stay within the configured choices.
pub fn generate_pegs(cfg: &BoardConfig, rng: &mut impl Rng) -> Vec<PegSpec> {
    let choices = &cfg.thickness_choices;
    let mut shuffled = choices.clone();
    shuffled.shuffle(rng);

    let half_width = cfg.pegs_per_row as f32 * cfg.centering_step / 2.0;
    let mut pegs = Vec::with_capacity(cfg.rows * cfg.pegs_per_row);
    for row in 0..cfg.rows {
        let stagger = if row % 2 == 0 {
            cfg.row_stagger
        } else {
            -cfg.row_stagger
        };
        for col in 0..cfg.pegs_per_row {
            let (radius_top, radius_bottom) = if choices.is_empty() {
                (FALLBACK_PEG_RADIUS, FALLBACK_PEG_RADIUS)
            } else {
                let idx = rng.gen_range(0..choices.len());
                (choices[idx], shuffled[idx])
            };
            pegs.push(PegSpec {
                position: Vec3::new(
                    col as f32 * cfg.spacing + stagger - half_width,
                    row as f32 * cfg.spacing,
                    0.0,
                ),
                radius_top,
                radius_bottom,
                length: cfg.peg_length,
            });
        }
    }
    pegs
}

/// Side walls: right column first (bottom to top), then the mirrored left column.
pub fn wall_specs(cfg: &WallConfig) -> Vec<WallSpec> {
    let tilt = cfg.tilt_degrees.to_radians();
    let size: Vec3 = cfg.size.into();
    let mut walls = Vec::with_capacity(cfg.count_per_side * 2);
    for side in [1.0_f32, -1.0] {
        for k in 0..cfg.count_per_side {
            walls.push(WallSpec {
                position: Vec3::new(side * cfg.offset_x, k as f32 * cfg.spacing_y, 0.0),
                tilt: side * tilt,
                size,
            });
        }
    }
    walls
}

pub fn floor_spec(cfg: &FloorConfig) -> FloorSpec {
    FloorSpec {
        position: Vec3::new(0.0, cfg.y, 0.0),
        size: cfg.size.into(),
    }
}
