use bevy::prelude::*;
use bevy_rapier3d::prelude::{RapierConfiguration, Vect};

use crate::core::config::GameConfig;
use crate::core::system::system_order::RoundSet;
use crate::gameplay::events::SetGravity;

/// Slider-driven downward gravity. `magnitude` is always within `0..=max`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GravitySetting {
    magnitude: f32,
    max: f32,
}

impl GravitySetting {
    pub fn new(initial: f32, max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            magnitude: initial.clamp(0.0, max),
            max,
        }
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Position of the slider handle in `0..=1`.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.magnitude / self.max
        }
    }

    /// Returns `true` when the stored value changed.
    pub fn set(&mut self, magnitude: f32) -> bool {
        let clamped = if magnitude.is_finite() {
            magnitude.clamp(0.0, self.max)
        } else {
            self.magnitude
        };
        let changed = clamped != self.magnitude;
        self.magnitude = clamped;
        changed
    }

    /// Gravity vector handed to Rapier (Y-up world, so it points down).
    pub fn vector(&self) -> Vect {
        Vect::new(0.0, -self.magnitude, 0.0)
    }
}

impl Default for GravitySetting {
    fn default() -> Self {
        let g = GameConfig::default().gravity;
        Self::new(g.initial, g.max)
    }
}

pub struct GravityPlugin;

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GravitySetting>()
            .add_event::<SetGravity>()
            .add_systems(Startup, init_gravity_setting)
            .add_systems(
                Update,
                (apply_gravity_requests, sync_rapier_gravity)
                    .chain()
                    .in_set(RoundSet),
            );
    }
}

fn init_gravity_setting(cfg: Res<GameConfig>, mut setting: ResMut<GravitySetting>) {
    *setting = GravitySetting::new(cfg.gravity.initial, cfg.gravity.max);
    info!(target: "gravity", "Gravity {} (slider max {})", setting.magnitude(), setting.max());
}

fn apply_gravity_requests(
    mut requests: EventReader<SetGravity>,
    mut setting: ResMut<GravitySetting>,
) {
    // Only the latest slider position matters.
    let Some(SetGravity(value)) = requests.read().last().copied() else {
        return;
    };
    // Avoid tripping change detection when the value is unchanged.
    let mut probe = *setting;
    if probe.set(value) {
        *setting = probe;
        debug!(target: "gravity", "Gravity -> {:.1}", setting.magnitude());
    }
}

/// Push the setting into every Rapier context that disagrees with it. Contexts created after
/// startup pick the value up on their first frame.
fn sync_rapier_gravity(
    setting: Res<GravitySetting>,
    mut rapier: Query<&mut RapierConfiguration>,
) {
    let target = setting.vector();
    for mut cfg in &mut rapier {
        if cfg.gravity != target {
            cfg.gravity = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_slider_range() {
        let mut g = GravitySetting::new(150.0, 100.0);
        assert_eq!(g.magnitude(), 100.0);
        assert!(g.set(-5.0));
        assert_eq!(g.magnitude(), 0.0);
        assert!(!g.set(0.0));
        assert!(!g.set(f32::NAN));
        assert!(g.set(42.0));
        assert_eq!(g.vector(), Vect::new(0.0, -42.0, 0.0));
        assert!((g.fraction() - 0.42).abs() < 1e-6);
    }

    #[test]
    fn zero_range_is_safe() {
        let g = GravitySetting::new(10.0, 0.0);
        assert_eq!(g.magnitude(), 0.0);
        assert_eq!(g.fraction(), 0.0);
    }

    #[test]
    fn latest_request_wins() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.add_plugins(GravityPlugin);
        app.update();
        app.world_mut().send_event(SetGravity(30.0));
        app.world_mut().send_event(SetGravity(70.0));
        app.update();
        assert_eq!(app.world().resource::<GravitySetting>().magnitude(), 70.0);
    }

    #[test]
    fn slider_value_reaches_rapier() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.add_plugins(GravityPlugin);
        let ctx = app.world_mut().spawn(RapierConfiguration::new(1.0)).id();
        app.update();
        // initial slider value is zero
        let cfg = app.world().get::<RapierConfiguration>(ctx).unwrap();
        assert_eq!(cfg.gravity, Vect::ZERO);

        app.world_mut().send_event(SetGravity(64.0));
        app.update();
        let cfg = app.world().get::<RapierConfiguration>(ctx).unwrap();
        assert_eq!(cfg.gravity, Vect::new(0.0, -64.0, 0.0));
    }
}

