//! Stage themes: purely decorative backdrops picked from the stage buttons.
//! Everything is built from primitive meshes; no textures or models are loaded.

use std::fmt;
use std::str::FromStr;

use bevy::color::palettes::css;
use bevy::prelude::*;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{PresentationSet, RoundSet};
use crate::gameplay::events::SelectStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    #[default]
    Starfield,
    Boston,
    UnderTheSea,
    Infernalis,
    Lunaris,
    Bathroom,
    TopOfTheWorld,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Starfield,
        Stage::Boston,
        Stage::UnderTheSea,
        Stage::Infernalis,
        Stage::Lunaris,
        Stage::Bathroom,
        Stage::TopOfTheWorld,
    ];

    /// Button label.
    pub fn display_name(self) -> &'static str {
        match self {
            Stage::Starfield => "Deep space",
            Stage::Boston => "Boston",
            Stage::UnderTheSea => "A world under the sea",
            Stage::Infernalis => "Infernalis XII",
            Stage::Lunaris => "Lunaris",
            Stage::Bathroom => "In the bathroom",
            Stage::TopOfTheWorld => "Top of the world",
        }
    }

    /// Short id used in config files and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Stage::Starfield => "starfield",
            Stage::Boston => "boston",
            Stage::UnderTheSea => "under-the-sea",
            Stage::Infernalis => "infernalis",
            Stage::Lunaris => "lunaris",
            Stage::Bathroom => "bathroom",
            Stage::TopOfTheWorld => "top-of-the-world",
        }
    }

    fn clear_color(self) -> Color {
        match self {
            Stage::Starfield => Color::srgb(0.01, 0.01, 0.03),
            Stage::Boston | Stage::TopOfTheWorld => Color::srgb(0.53, 0.75, 0.95),
            Stage::UnderTheSea => Color::srgb(0.02, 0.18, 0.30),
            Stage::Infernalis => Color::srgb(0.12, 0.01, 0.01),
            Stage::Lunaris => Color::srgb(0.0, 0.0, 0.01),
            Stage::Bathroom => Color::WHITE,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageParseError(pub String);

impl fmt::Display for StageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = Stage::ALL.iter().map(|s| s.id()).collect();
        write!(f, "unknown stage '{}' (expected one of {})", self.0, ids.join(", "))
    }
}

impl std::error::Error for StageParseError {}

impl FromStr for Stage {
    type Err = StageParseError;

    /// Accepts the id, the button label, or the short label, case-insensitively.
    /// An empty string selects the default stage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Ok(Stage::default());
        }
        let alias = |stage: Stage| -> &'static str {
            match stage {
                Stage::Infernalis => "Infernalis",
                Stage::Bathroom => "Bathroom",
                Stage::Starfield => "Deep space",
                other => other.display_name(),
            }
        };
        Stage::ALL
            .into_iter()
            .find(|st| {
                [st.id(), st.display_name(), alias(*st)]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| StageParseError(wanted.to_string()))
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Deref)]
pub struct CurrentStage(pub Stage);

/// Tag for every entity belonging to the active stage backdrop.
#[derive(Component)]
pub struct StageDecor;

/// Floating particle in the underwater stage.
#[derive(Component)]
pub struct Sparkle {
    anchor: Vec3,
    phase: f32,
}

const STAR_COUNT: usize = 400;
const SPARKLE_COUNT: usize = 250;

pub struct StagePlugin;

impl Plugin for StagePlugin {
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
        app.init_resource::<CurrentStage>()
            .add_event::<SelectStage>()
            .add_systems(Startup, init_stage_from_config)
            .add_systems(Update, apply_stage_requests.in_set(RoundSet))
            .add_systems(
                Update,
                (rebuild_stage_decor, drift_sparkles)
                    .chain()
                    .in_set(PresentationSet),
            );
    }
}

fn init_stage_from_config(cfg: Res<GameConfig>, mut current: ResMut<CurrentStage>) {
    match cfg.stage.parse::<Stage>() {
        Ok(stage) => current.0 = stage,
        Err(e) => warn!(target: "stage", "{e}; using {}", Stage::default()),
    }
}

fn apply_stage_requests(mut requests: EventReader<SelectStage>, mut current: ResMut<CurrentStage>) {
    if let Some(SelectStage(stage)) = requests.read().last().copied() {
        if current.set_if_neq(CurrentStage(stage)) {
            info!(target: "stage", "Stage -> {}", stage);
        }
    }
}

fn rebuild_stage_decor(
    mut commands: Commands,
    current: Res<CurrentStage>,
    decor: Query<Entity, With<StageDecor>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !current.is_changed() {
        return;
    }
    for e in &decor {
        commands.entity(e).despawn();
    }
    let stage = current.0;
    commands.insert_resource(ClearColor(stage.clear_color()));

    let mut kit = DecorKit {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: &mut materials,
    };
    // own RNG: decor must not advance the seeded PlinkoRng
    let rng = &mut rand::thread_rng();
    match stage {
        Stage::Starfield => kit.stars(rng, Color::WHITE),
        Stage::Infernalis => kit.stars(rng, Color::Srgba(css::ORANGE_RED)),
        Stage::Boston => kit.clouds(rng),
        Stage::Lunaris => {
            kit.stars(rng, Color::WHITE);
            kit.solid(
                Sphere::new(500.0),
                Color::srgb(0.75, 0.75, 0.72),
                Vec3::new(-500.0, 300.0, -400.0),
            );
        }
        Stage::UnderTheSea => kit.under_the_sea(rng),
        Stage::Bathroom => kit.room(),
        Stage::TopOfTheWorld => kit.mountains(),
    }
    debug!(target: "stage", "Decor rebuilt for {stage}");
}

fn drift_sparkles(time: Res<Time>, mut q: Query<(&Sparkle, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (s, mut tf) in &mut q {
        let w = t * 0.8 + s.phase;
        tf.translation = s.anchor + Vec3::new(w.cos() * 3.0, (w * 1.3).sin() * 6.0, w.sin() * 3.0);
    }
}

/// Borrowed spawning context so each theme stays a short method.
struct DecorKit<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
}

impl DecorKit<'_, '_, '_> {
    fn glow(&mut self, color: Color) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: color,
            unlit: true,
            ..default()
        })
    }

    fn solid(&mut self, shape: impl Into<Mesh>, color: Color, at: Vec3) {
        let mesh = self.meshes.add(shape);
        let material = self.materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..default()
        });
        self.commands.spawn((
            StageDecor,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(at),
        ));
    }

    /// Points on a shell behind the board (never between camera and pegs).
    fn stars(&mut self, rng: &mut impl Rng, color: Color) {
        let mesh = self.meshes.add(Sphere::new(0.8));
        let material = self.glow(color);
        for _ in 0..STAR_COUNT {
            let dir = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                -rng.gen_range(0.05..1.0),
            )
            .normalize_or(Vec3::NEG_Z);
            let dist: f32 = rng.gen_range(300.0..450.0);
            self.commands.spawn((
                StageDecor,
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(dir * dist),
            ));
        }
    }

    fn clouds(&mut self, rng: &mut impl Rng) {
        let mesh = self.meshes.add(Sphere::new(1.0));
        let material = self.materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, 0.5),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        for _ in 0..40 {
            let at = Vec3::new(
                rng.gen_range(-250.0..250.0),
                rng.gen_range(190.0..230.0),
                rng.gen_range(-150.0..-60.0),
            );
            let scale = Vec3::new(
                rng.gen_range(25.0..60.0),
                rng.gen_range(8.0..16.0),
                rng.gen_range(15.0..30.0),
            );
            self.commands.spawn((
                StageDecor,
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(at).with_scale(scale),
            ));
        }
    }

    fn under_the_sea(&mut self, rng: &mut impl Rng) {
        // Water surface seen from below.
        let surface = self.meshes.add(Plane3d::new(Vec3::NEG_Y, Vec2::splat(2500.0)));
        let water = self.materials.add(StandardMaterial {
            base_color: Color::srgba(0.1, 0.45, 0.65, 0.8),
            alpha_mode: AlphaMode::Blend,
            cull_mode: None,
            ..default()
        });
        self.commands.spawn((
            StageDecor,
            Mesh3d(surface),
            MeshMaterial3d(water),
            Transform::from_xyz(0.0, 1000.0, 0.0),
        ));
        self.commands.spawn((
            StageDecor,
            DirectionalLight {
                illuminance: 3_000.0,
                color: Color::srgb(0.6, 0.9, 1.0),
                ..default()
            },
            Transform::from_xyz(2.5, -200.0, 5.0).looking_at(Vec3::ZERO, Vec3::Z),
        ));
        let mesh = self.meshes.add(Sphere::new(0.5));
        let material = self.glow(Color::srgb(0.7, 1.0, 1.0));
        for _ in 0..SPARKLE_COUNT {
            let anchor = Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            self.commands.spawn((
                StageDecor,
                Sparkle {
                    anchor,
                    phase: rng.gen_range(0.0..std::f32::consts::TAU),
                },
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(anchor),
            ));
        }
    }

    fn room(&mut self) {
        let mesh = self.meshes.add(Cuboid::from_length(1000.0));
        let material = self.materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            cull_mode: None,
            ..default()
        });
        self.commands.spawn((
            StageDecor,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::IDENTITY,
        ));
    }

    fn mountains(&mut self) {
        let snow = Color::srgb(0.92, 0.94, 0.97);
        let rock = Color::srgb(0.45, 0.42, 0.40);
        self.solid(
            Cone {
                radius: 700.0,
                height: 900.0,
            },
            snow,
            Vec3::new(0.0, -600.0 + 450.0, -600.0),
        );
        self.solid(
            Cone {
                radius: 500.0,
                height: 550.0,
            },
            rock,
            Vec3::new(-650.0, -600.0 + 275.0, -700.0),
        );
        self.solid(
            Cone {
                radius: 450.0,
                height: 600.0,
            },
            rock,
            Vec3::new(700.0, -600.0 + 300.0, -750.0),
        );
    }
}
