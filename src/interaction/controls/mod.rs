//! On-screen controls. Every widget only emits gameplay events
//! (`AddPlayer`, `ResetRound`, `SetGravity`, `SelectStage`); state lives elsewhere.

pub mod panel;
pub mod systems;
pub mod types;

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{InputSet, PresentationSet};
use systems::*;
use types::NameDraft;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_event::<bevy::input::keyboard::KeyboardInput>()
            .add_systems(Startup, (init_name_draft, panel::spawn_control_panel))
            .add_systems(
                Update,
                (
                    name_field_input,
                    gravity_keys,
                    gravity_slider_drag,
                    control_buttons,
                )
                    .in_set(InputSet),
            )
            .add_systems(
                Update,
                (
                    record_add_feedback,
                    button_colors,
                    refresh_name_field,
                    refresh_gravity_widgets,
                    refresh_roster_text,
                    refresh_winner_banner,
                )
                    .chain()
                    .in_set(PresentationSet),
            );
    }
}

fn init_name_draft(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(NameDraft::new(cfg.max_name_len));
}
