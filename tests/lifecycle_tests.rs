//! Piece lifecycle tests against the public engine API

use rand::rngs::StdRng;
use rand::SeedableRng;

use blockfall::core::{landing_y, Board, GameConfig, GameState, Phase, PieceProto, Shape};
use blockfall::types::GameAction;

fn proto(kind: u8, rows: &[&[u8]]) -> PieceProto {
    PieceProto::new(kind, Shape::from_rows(rows).expect("square shape"))
}

fn protos() -> Vec<PieceProto> {
    vec![
        proto(1, &[&[1, 1], &[1, 1]]),
        proto(2, &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
        proto(3, &[&[1, 0, 0], &[1, 0, 0], &[1, 1, 0]]),
    ]
}

fn config() -> GameConfig {
    GameConfig {
        cols: 8,
        rows: 12,
        lines_per_level: 5,
        ..GameConfig::default()
    }
}

fn game(seed: u64) -> GameState {
    let mut game = GameState::new(config(), seed);
    game.reset_with(protos(), Board::new(12, 8));
    game
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(GameConfig::default(), 12345);
    assert_eq!(game.phase(), Phase::Active);
    assert!(game.active().is_some());
    assert!(game.next_piece().is_some());
    assert!(game.held().is_none());

    game.apply_action(GameAction::HardDrop);
    assert!(!game.board().is_empty());
    assert_eq!(game.score(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(GameConfig::default(), 77);
    let mut b = GameState::new(GameConfig::default(), 77);
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];
    for action in script.iter().cycle().take(40) {
        a.apply_action(*action);
        b.apply_action(*action);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_hold_with_empty_slot_uses_queued_piece() {
    for seed in 0..20 {
        let mut game = game(seed);
        let board = game.board().clone();
        let queued = game.next_piece().map(|p| p.kind);
        let active = game.active().map(|p| p.kind);

        assert!(game.hold());
        assert_eq!(game.board(), &board);
        assert_eq!(game.active().map(|p| p.kind), queued);
        assert_eq!(game.held().map(|p| p.kind), active);
    }
}

#[test]
fn test_hold_swap_respawns_at_top() {
    let mut game = game(3);
    game.hold();
    game.soft_drop();
    game.soft_drop();
    game.move_left();

    let held = game.held().cloned().unwrap();
    assert!(game.hold());
    let active = game.active().unwrap();
    assert_eq!(active.kind, held.kind);
    assert_eq!(active.y, 0);
    assert_eq!(active.shape, held.shape);
}

#[test]
fn test_hard_drop_lands_at_probe_position() {
    for seed in 0..20 {
        let mut game = game(seed);
        let mut board = Board::new(12, 8);
        for x in 0..8 {
            if x % 3 != 0 {
                board.set(x, 9, 7);
            }
        }
        board.set(4, 6, 7);
        game.reset_with(protos(), board);

        let before = game.active().cloned().unwrap();
        let expected_y = landing_y(game.board(), &before);
        let expected = game.board().lock(&blockfall::core::Piece {
            y: expected_y,
            ..before.clone()
        });
        game.hard_drop();
        let (cleared, _) = blockfall::core::clear_lines(&expected);
        assert_eq!(game.board(), &cleared, "seed {}", seed);
    }
}

#[test]
fn test_prefilled_top_rows_end_game_at_start() {
    let mut board = Board::new(12, 8);
    for y in 0..2 {
        for x in 0..8 {
            board.set(x, y, 1);
        }
    }
    let mut game = GameState::new(config(), 1);
    game.reset_with(protos(), board);

    assert!(game.game_over());
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.active().is_none());
    assert!(game.next_piece().is_none());
    assert!(!game.apply_action(GameAction::MoveLeft));
}

#[test]
fn test_level_changes_exactly_at_fifth_line() {
    // A single-column piece; each drop into the gap completes one row
    let bar = proto(1, &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
    let mut board = Board::new(12, 8);
    for y in 7..12 {
        for x in 0..8 {
            if x != 4 {
                board.set(x, y, 9);
            }
        }
    }
    let mut game = GameState::new(config(), 5);
    game.reset_with(vec![bar], board);

    let mut levels = Vec::new();
    // First drop fills rows 9..=11, second fills 7..=8
    while game.lines() < 5 {
        assert!(game.hard_drop());
        levels.push((game.lines(), game.level()));
        assert!(levels.len() < 5);
    }
    assert_eq!(levels, vec![(3, 1), (5, 2)]);
    // Scored at the level before each clear: 500 x1, then 300 x1
    assert_eq!(game.score(), 800);
}

#[test]
fn test_restart_keeps_config() {
    let mut game = GameState::new(config(), 9);
    game.apply_action(GameAction::HardDrop);
    game.apply_action(GameAction::Restart);
    assert_eq!(game.board().cols(), 8);
    assert!(game.board().is_empty());
    assert_eq!(game.prototypes().len(), config().shape_type_count);
}

#[test]
fn test_tick_interval_tracks_level() {
    let game = GameState::new(GameConfig::default(), 1);
    assert_eq!(game.tick_interval_ms(), 800);
}

#[test]
fn test_custom_rng_drives_session() {
    let mut a = GameState::with_rng(config(), StdRng::seed_from_u64(42));
    let mut b = GameState::with_rng(config(), StdRng::seed_from_u64(42));
    assert_eq!(a.prototypes(), b.prototypes());
    assert_eq!(a.prototypes().len(), config().shape_type_count);

    for _ in 0..5 {
        a.hard_drop();
        b.hard_drop();
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.active(), b.active());
    assert_eq!(a.score(), b.score());
}
