#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier3d::render::DebugRenderContext;

#[cfg(feature = "debug")]
pub const TOGGLE_RAPIER_KEY: KeyCode = KeyCode::F1;

/// F1 flips the Rapier collider wireframes. No-op when the debug renderer is absent.
#[cfg(feature = "debug")]
pub fn toggle_rapier_debug_render(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if !keys.just_pressed(TOGGLE_RAPIER_KEY) {
        return;
    }
    if let Some(mut c) = ctx {
        c.enabled = !c.enabled;
        info!("RAPIER_DEBUG enabled={}", c.enabled);
    }
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;

    #[test]
    fn f1_toggles_context() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(DebugRenderContext { enabled: false, ..default() })
            .add_systems(Update, toggle_rapier_debug_render);

        app.update();
        assert!(!app.world().resource::<DebugRenderContext>().enabled);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(TOGGLE_RAPIER_KEY);
        app.update();
        assert!(app.world().resource::<DebugRenderContext>().enabled);
    }
}
