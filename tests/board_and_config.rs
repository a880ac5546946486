//! Seeded board generation and the shipped config file.

use std::io::Write;

use bevy::prelude::*;

use marble_plinko::core::components::{Floor, Peg, Wall};
use marble_plinko::core::config::GameConfig;
use marble_plinko::core::level::{BoardLayout, BoardPlugin};
use marble_plinko::core::rng::PlinkoRng;
use marble_plinko::Stage;

#[test]
fn same_seed_same_board() {
    let cfg = GameConfig::default();
    let a = BoardLayout::generate(&cfg, &mut PlinkoRng::new(Some(9)));
    let b = BoardLayout::generate(&cfg, &mut PlinkoRng::new(Some(9)));
    assert_eq!(a.pegs, b.pegs);
    assert_eq!(a.walls, b.walls);
    assert_eq!(a.floor, b.floor);
}

#[test]
fn shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");
    let cfg = GameConfig::load_from_file(path).expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
    assert_eq!(cfg.stage.parse::<Stage>(), Ok(Stage::Starfield));
}

#[test]
fn local_layer_overrides_base() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let base = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");
    let local = dir.path().join("game.local.ron");
    let mut f = std::fs::File::create(&local).expect("create local layer");
    writeln!(
        f,
        r#"(board: (rows: 3, pegs_per_row: 4), players: ["Mikl", "Emma"], stage: "bathroom")"#
    )
    .expect("write local layer");

    let (cfg, used, errors) = GameConfig::load_layered([base.into(), local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.board.rows, 3);
    assert_eq!(cfg.board.pegs_per_row, 4);
    // sibling keys in the overridden section survive the merge
    assert_eq!(cfg.board.spacing, 10.0);
    assert_eq!(cfg.players.len(), 2);
    assert_eq!(cfg.stage.parse::<Stage>(), Ok(Stage::Bathroom));
}

#[test]
fn small_board_spawns_matching_pieces() {
    let mut cfg = GameConfig::default();
    cfg.board.rows = 3;
    cfg.board.pegs_per_row = 4;
    cfg.walls.count_per_side = 2;
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(cfg)
        .insert_resource(PlinkoRng::new(Some(3)))
        .add_plugins(BoardPlugin);
    app.update();

    let world = app.world_mut();
    assert_eq!(world.query::<&Peg>().iter(world).count(), 12);
    assert_eq!(world.query::<&Wall>().iter(world).count(), 4);
    assert_eq!(world.query::<&Floor>().iter(world).count(), 1);
}
