use crate::core::config::GameConfig;
use crate::rendering::palette::palette::{marble_color, MARBLE_COLORS};
use bevy::prelude::*;

/// One material per palette entry, indexed like `MARBLE_COLORS`.
#[derive(Resource)]
pub struct MarbleMaterials(pub Vec<Handle<StandardMaterial>>);

/// Shared sphere mesh at the configured marble radius.
#[derive(Resource)]
pub struct MarbleMesh(pub Handle<Mesh>);

pub struct MaterialsPlugin;
impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        if app.world().get_resource::<Assets<Mesh>>().is_none() {
            app.init_resource::<Assets<Mesh>>();
        }
        if app
            .world()
            .get_resource::<Assets<StandardMaterial>>()
            .is_none()
        {
            app.init_resource::<Assets<StandardMaterial>>();
        }
        app.add_systems(Startup, setup_marble_materials);
    }
}

fn setup_marble_materials(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let handles = (0..MARBLE_COLORS.len())
        .map(|i| {
            materials.add(StandardMaterial {
                base_color: marble_color(i),
                perceptual_roughness: 0.35,
                metallic: 0.1,
                ..default()
            })
        })
        .collect();
    commands.insert_resource(MarbleMaterials(handles));
    commands.insert_resource(MarbleMesh(meshes.add(Sphere::new(cfg.marbles.radius))));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_material_per_palette_colour() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig::default())
            .add_plugins(MaterialsPlugin);
        app.update();
        let mats = app.world().resource::<MarbleMaterials>();
        assert_eq!(mats.0.len(), MARBLE_COLORS.len());
        let mesh = app.world().resource::<MarbleMesh>().0.clone();
        assert!(app.world().resource::<Assets<Mesh>>().contains(&mesh));
    }
}
