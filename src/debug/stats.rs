#[cfg(feature = "debug")]
use crate::core::components::Marble;
#[cfg(feature = "debug")]
use crate::gameplay::round::Round;
#[cfg(feature = "debug")]
use crate::gameplay::winner::RaceResult;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub marble_count: usize,
    pub finished: usize,
    pub round: u32,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    q_marbles: Query<(), With<Marble>>,
    round: Option<Res<Round>>,
    result: Option<Res<RaceResult>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    // exponential smoothing, seeded by the first sample
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };
    let inst_ms = dt * 1000.0;
    stats.frame_time_ms = if stats.frame_time_ms == 0.0 {
        inst_ms
    } else {
        stats.frame_time_ms * 0.9 + inst_ms * 0.1
    };
    stats.marble_count = q_marbles.iter().count();
    stats.round = round.map(|r| r.number).unwrap_or_default();
    stats.finished = result.map(|r| r.finish_order().len()).unwrap_or_default();
}
