use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use clap::Parser;

use marble_plinko::core::config::GameConfig;
use marble_plinko::rendering::stage::Stage;
use marble_plinko::GamePlugin;

const DEFAULT_CONFIG_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

/// Marble plinko race: register players, drop their marbles, first to the floor wins.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config layer (RON); repeat to stack. Replaces the default layers when given.
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<String>,
    /// Register a player at startup; repeatable.
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,
    /// Initial stage (id such as `lunaris`, or its button label).
    #[arg(long)]
    stage: Option<String>,
    /// Initial downward gravity.
    #[arg(long)]
    gravity: Option<f32>,
    /// Fixed RNG seed for reproducible boards and spawn orders.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn apply(self, cfg: &mut GameConfig) -> Result<()> {
        cfg.players.extend(self.players);
        if let Some(stage) = self.stage {
            stage
                .parse::<Stage>()
                .with_context(|| format!("--stage {stage}"))?;
            cfg.stage = stage;
        }
        if let Some(g) = self.gravity {
            if !g.is_finite() {
                bail!("--gravity must be a finite number, got {g}");
            }
            cfg.gravity.initial = g;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let args = Args::parse();
    let layers: Vec<String> = if args.configs.is_empty() {
        // the local override layer is optional
        DEFAULT_CONFIG_LAYERS
            .iter()
            .filter(|p| std::path::Path::new(p).exists())
            .map(|s| s.to_string())
            .collect()
    } else {
        args.configs.clone()
    };
    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    args.apply(&mut cfg)?;

    let window = cfg.window.clone();
    let warnings = cfg.validate();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window.title,
            resolution: (window.width, window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));
    // Logging is only live once LogPlugin is in, so config diagnostics are reported here.
    for path in &used {
        info!(target: "config", "Loaded config layer {path}");
    }
    for e in &errors {
        warn!(target: "config", "{e}");
    }
    for w in &warnings {
        warn!(target: "config", "{w}");
    }
    app.insert_resource(cfg).add_plugins(GamePlugin).run();
    Ok(())
}
