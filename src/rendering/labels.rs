//! Floating player names that follow each marble on screen.

use bevy::prelude::*;

use crate::core::components::{Marble, PlayerName};
use crate::core::system::system_order::PresentationSet;
use crate::rendering::camera::camera::MainCamera;

/// UI text node tracking a marble entity.
#[derive(Component, Debug)]
pub struct MarbleLabel {
    pub target: Entity,
}

/// Screen-space offset above the marble centre, in logical pixels.
const LABEL_LIFT: f32 = 22.0;
const LABEL_FONT_SIZE: f32 = 14.0;

pub struct MarbleLabelPlugin;

impl Plugin for MarbleLabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_marble_labels, despawn_orphan_labels, position_marble_labels)
                .chain()
                .in_set(PresentationSet),
        );
    }
}

pub fn spawn_marble_labels(
    mut commands: Commands,
    added: Query<(Entity, &PlayerName), Added<Marble>>,
) {
    for (entity, name) in &added {
        commands.spawn((
            MarbleLabel { target: entity },
            Text::new(name.0.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            // hidden until the first projection succeeds
            Visibility::Hidden,
        ));
    }
}

pub fn despawn_orphan_labels(
    mut commands: Commands,
    labels: Query<(Entity, &MarbleLabel)>,
    marbles: Query<(), With<Marble>>,
) {
    for (e, label) in &labels {
        if !marbles.contains(label.target) {
            commands.entity(e).despawn();
        }
    }
}

fn position_marble_labels(
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    marbles: Query<&GlobalTransform, With<Marble>>,
    mut labels: Query<(&MarbleLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, cam_tf)) = camera.single() else {
        return;
    };
    for (label, mut node, mut vis) in &mut labels {
        let projected = marbles
            .get(label.target)
            .ok()
            .and_then(|tf| camera.world_to_viewport(cam_tf, tf.translation()).ok());
        match projected {
            Some(p) => {
                node.left = Val::Px(p.x);
                node.top = Val::Px(p.y - LABEL_LIFT);
                vis.set_if_neq(Visibility::Inherited);
            }
            None => {
                vis.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_marble_lifetime() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(MarbleLabelPlugin);
        let a = app
            .world_mut()
            .spawn((Marble, PlayerName("Mikl".into()), Transform::default()))
            .id();
        app.world_mut()
            .spawn((Marble, PlayerName("Emma".into()), Transform::default()));
        app.update();

        let mut q = app.world_mut().query::<(&MarbleLabel, &Text)>();
        let mut names: Vec<String> = q.iter(app.world()).map(|(_, t)| t.0.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["Emma".to_string(), "Mikl".to_string()]);

        app.world_mut().entity_mut(a).despawn();
        app.update();
        let mut q = app.world_mut().query::<&MarbleLabel>();
        assert_eq!(q.iter(app.world()).count(), 1);
    }
}
