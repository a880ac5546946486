use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            title: "Marble Plinko".into(),
            auto_close: 0.0,
        }
    }
}

/// Downward gravity driven by the slider. `initial` is the value at startup, `max` the slider end.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub initial: f32,
    pub max: f32,
    /// Step applied by the Up/Down arrow keys.
    pub key_step: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            initial: 0.0,
            max: 100.0,
            key_step: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Vec3Def {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl From<Vec3Def> for Vec3 {
    fn from(v: Vec3Def) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Peg field layout. Pegs are cylinders lying along the depth (Z) axis.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Offset of the whole board (pegs, walls, floor, drop line) in world space.
    pub origin: Vec3Def,
    pub rows: usize,
    pub pegs_per_row: usize,
    /// Distance between neighbouring pegs, both across a row and between rows.
    pub spacing: f32,
    /// Horizontal shift applied to even rows (+) and odd rows (-).
    pub row_stagger: f32,
    /// Per-peg width used to centre a row: half width = centering_step * pegs_per_row / 2.
    pub centering_step: f32,
    pub peg_length: f32,
    pub thickness_choices: Vec<f32>,
    pub peg_restitution: f32,
}
impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            origin: Vec3Def { x: 0.0, y: -100.0, z: 0.0 },
            rows: 20,
            pegs_per_row: 11,
            spacing: 10.0,
            row_stagger: 2.5,
            centering_step: 9.0,
            peg_length: 10.0,
            thickness_choices: vec![0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5],
            peg_restitution: 0.1,
        }
    }
}

/// Angled side walls, mirrored across the vertical axis.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WallConfig {
    pub count_per_side: usize,
    pub offset_x: f32,
    pub spacing_y: f32,
    /// Full box extents (width, thickness, depth).
    pub size: Vec3Def,
    /// Tilt about Z in degrees; right walls use +tilt, left walls -tilt.
    pub tilt_degrees: f32,
}
impl Default for WallConfig {
    fn default() -> Self {
        Self {
            count_per_side: 6,
            offset_x: 95.0,
            spacing_y: 40.0,
            size: Vec3Def { x: 80.0, y: 4.0, z: 60.0 },
            tilt_degrees: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FloorConfig {
    pub y: f32,
    /// Full box extents.
    pub size: Vec3Def,
}
impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            y: -50.0,
            size: Vec3Def { x: 130.0, y: 5.0, z: 100.0 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarbleConfig {
    pub radius: f32,
    pub mass: f32,
    /// Horizontal gap between neighbouring marbles on the drop line.
    pub spacing: f32,
    /// Board-local height of the drop line.
    pub drop_height: f32,
    pub restitution: f32,
    pub friction: f32,
}
impl Default for MarbleConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            mass: 1.0,
            spacing: 10.0,
            drop_height: 200.0,
            restitution: 0.3,
            friction: 0.3,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub board: BoardConfig,
    pub walls: WallConfig,
    pub floor: FloorConfig,
    pub marbles: MarbleConfig,
    /// Names registered at startup.
    pub players: Vec<String>,
    pub max_name_len: usize,
    /// Stage id or display name; empty selects the default star field.
    pub stage: String,
    /// Fixed RNG seed for reproducible boards and spawn orders.
    pub seed: Option<u64>,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            board: Default::default(),
            walls: Default::default(),
            floor: Default::default(),
            marbles: Default::default(),
            players: Vec::new(),
            max_name_len: 24,
            stage: "starfield".into(),
            seed: None,
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge on maps).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious values but are not hard errors; log each with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.max <= 0.0 {
            w.push(format!("gravity.max {} must be > 0 (slider range)", self.gravity.max));
        }
        if !(0.0..=self.gravity.max.max(0.0)).contains(&self.gravity.initial) {
            w.push(format!(
                "gravity.initial {} outside slider range 0..{}; will be clamped",
                self.gravity.initial, self.gravity.max
            ));
        }
        if self.gravity.key_step <= 0.0 {
            w.push("gravity.key_step must be > 0".into());
        }
        let b = &self.board;
        if b.rows == 0 || b.pegs_per_row == 0 {
            w.push("board.rows and board.pegs_per_row must be > 0; board will be empty".into());
        }
        if b.spacing <= 0.0 {
            w.push("board.spacing must be > 0".into());
        }
        if b.thickness_choices.is_empty() {
            w.push("board.thickness_choices empty; pegs fall back to radius 1.0".into());
        }
        if b.thickness_choices.iter().any(|t| *t <= 0.0) {
            w.push("board.thickness_choices contains non-positive radius".into());
        }
        if b.peg_length <= 0.0 {
            w.push("board.peg_length must be > 0".into());
        }
        if self.walls.size.x <= 0.0 || self.walls.size.y <= 0.0 || self.walls.size.z <= 0.0 {
            w.push("walls.size extents must be > 0".into());
        }
        if self.floor.size.x <= 0.0 || self.floor.size.y <= 0.0 || self.floor.size.z <= 0.0 {
            w.push("floor.size extents must be > 0".into());
        }
        let m = &self.marbles;
        if m.radius <= 0.0 {
            w.push("marbles.radius must be > 0".into());
        }
        if m.mass <= 0.0 {
            w.push("marbles.mass must be > 0".into());
        }
        if m.spacing < m.radius * 2.0 {
            w.push(format!(
                "marbles.spacing {} smaller than marble diameter {}; marbles start overlapping",
                m.spacing,
                m.radius * 2.0
            ));
        }
        if m.drop_height <= self.floor.y {
            w.push("marbles.drop_height below floor; marbles spawn under the board".into());
        }
        if !(0.0..=1.5).contains(&m.restitution) {
            w.push(format!("marbles.restitution {} outside recommended 0..1.5", m.restitution));
        }
        if self.max_name_len == 0 {
            w.push("max_name_len is 0; no player can be added".into());
        }
        w
    }
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                match existing {
                    Some(ev) => merge_value(ev, v),
                    None => {
                        bm.insert(k, v);
                    }
                }
            }
        }
        (b, o) => *b = o,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            gravity: (initial: 20.0, max: 80.0),
            board: (rows: 4, pegs_per_row: 5, thickness_choices: [0.5, 1.0]),
            marbles: (radius: 1.5, spacing: 8.0),
            players: ["Ada", "Grace"],
            stage: "Lunaris",
            seed: Some(7),
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.gravity.max, 80.0);
        assert_eq!(cfg.board.rows, 4);
        assert_eq!(cfg.board.thickness_choices, vec![0.5, 1.0]);
        assert_eq!(cfg.players, vec!["Ada".to_string(), "Grace".to_string()]);
        assert_eq!(cfg.seed, Some(7));
        // untouched sections keep defaults
        assert_eq!(cfg.walls, WallConfig::default());
        assert!(cfg.validate().is_empty(), "unexpected warnings: {:?}", cfg.validate());
    }

    #[test]
    fn defaults_validate_clean() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn validate_detects_warnings() {
        let mut bad = GameConfig::default();
        bad.window.width = -1.0;
        bad.gravity.max = 0.0;
        bad.gravity.initial = 50.0;
        bad.board.rows = 0;
        bad.board.thickness_choices.clear();
        bad.marbles.radius = 0.0;
        bad.marbles.spacing = -1.0;
        bad.max_name_len = 0;
        let joined = bad.validate().join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("gravity.max"));
        assert!(joined.contains("gravity.initial 50"));
        assert!(joined.contains("board will be empty"));
        assert!(joined.contains("thickness_choices empty"));
        assert!(joined.contains("marbles.radius must be > 0"));
        assert!(joined.contains("max_name_len is 0"));
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r#"(
            window: (width: 900.0),
            board: (rows: 10, spacing: 12.0),
            players: ["Mikl", "Victor"],
        )"#;
        let overlay = r#"(
            window: (title: "Local"),
            board: (rows: 6),
            players: ["Emma"],
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(overlay.as_bytes()).unwrap();
        let (cfg, used, errors) = GameConfig::load_layered([f1.path(), f2.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0);
        assert_eq!(cfg.window.title, "Local");
        assert_eq!(cfg.board.rows, 6);
        assert_eq!(cfg.board.spacing, 12.0);
        // sequences are replaced, not concatenated
        assert_eq!(cfg.players, vec!["Emma".to_string()]);
        assert_eq!(cfg.window.height, WindowConfig::default().height);
    }

    #[test]
    fn layered_skips_missing_and_reports() {
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(b"(max_name_len: 8)").unwrap();
        let (cfg, used, errors) =
            GameConfig::load_layered([f1.path(), Path::new("no/such/game.local.ron")]);
        assert_eq!(used.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("read error"));
        assert_eq!(cfg.max_name_len, 8);
    }
}
