//! Debug module: feature gated Rapier wireframe toggle & periodic stats logging.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::system::system_order::PresentationSet;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::toggle_rapier_debug_render;
        use logging::debug_logging_system;
        use stats::{debug_stats_collect_system, DebugState, DebugStats};

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(
                Update,
                (
                    toggle_rapier_debug_render,
                    debug_stats_collect_system,
                    debug_logging_system,
                )
                    .chain()
                    .in_set(PresentationSet),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
