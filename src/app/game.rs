// This file is part of Marble Plinko.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::level::BoardPlugin;
use crate::core::rng::PlinkoRng;
use crate::core::system::system_order::{InputSet, PresentationSet, ResultsSet, RoundSet};
use crate::debug::DebugPlugin;
use crate::gameplay::round::RoundPlugin;
use crate::gameplay::winner::WinnerPlugin;
use crate::interaction::controls::ControlsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::labels::MarbleLabelPlugin;
use crate::rendering::materials::materials::MaterialsPlugin;
use crate::rendering::stage::StagePlugin;

/// Everything except the window/render backend. Expects a `GameConfig` resource.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.init_resource::<GameConfig>();
        }
        if !app.world().contains_resource::<PlinkoRng>() {
            let seed = app.world().resource::<GameConfig>().seed;
            if let Some(s) = seed {
                info!(target: "config", "Using fixed RNG seed {s}");
            }
            app.insert_resource(PlinkoRng::new(seed));
        }
        app.configure_sets(
            Update,
            (InputSet, RoundSet, ResultsSet, PresentationSet).chain(),
        )
        .add_plugins((
            CameraPlugin,
            MaterialsPlugin,
            PhysicsSetupPlugin,
            BoardPlugin,
            RoundPlugin,
            WinnerPlugin,
            StagePlugin,
            MarbleLabelPlugin,
            ControlsPlugin,
            DebugPlugin,
            AutoClosePlugin,
        ));
    }
}
