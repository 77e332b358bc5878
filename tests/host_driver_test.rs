//! Host driver and input mapping tests

use crossterm::event::{KeyCode, KeyEvent};

use blockfall::core::{
    seeded_rng, Board, GameConfig, GameState, KeyBindings, PieceProto, Shape, SpeedEntry,
};
use blockfall::host::Driver;
use blockfall::input::KeyMap;
use blockfall::types::{GameAction, FRAME_MS, LEVEL_NOTICE_MS};

#[test]
fn test_frames_drive_gravity() {
    let mut driver = Driver::new(GameConfig::default(), Some(4));
    let start_y = driver.game().active().map(|p| p.y).unwrap();

    // 50 frames of 16ms is exactly one 800ms interval
    let ticks: u32 = (0..50).map(|_| driver.advance(FRAME_MS)).sum();
    assert_eq!(ticks, 1);
    assert_eq!(driver.game().active().map(|p| p.y), Some(start_y + 1));
}

#[test]
fn test_key_events_reach_engine() {
    let mut driver = Driver::new(GameConfig::default(), Some(4));
    let keys = KeyMap::new(&driver.game().config().keys);
    let start_x = driver.game().active().map(|p| p.x).unwrap();

    let action = keys.handle_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
    assert!(driver.handle(action));
    assert_eq!(driver.game().active().map(|p| p.x), Some(start_x - 1));

    let pause = keys.handle_key_event(KeyEvent::from(KeyCode::Esc)).unwrap();
    assert_eq!(pause, GameAction::TogglePause);
    driver.handle(pause);
    assert!(!driver.handle(action));
}

#[test]
fn test_custom_keys_from_config() {
    let config = GameConfig {
        keys: KeyBindings {
            hard_drop: "Enter".to_string(),
            ..KeyBindings::default()
        },
        ..GameConfig::default()
    };
    let keys = KeyMap::new(&config.keys);
    assert_eq!(
        keys.handle_key_event(KeyEvent::from(KeyCode::Enter)),
        Some(GameAction::HardDrop)
    );
    assert_eq!(keys.handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
}

#[test]
fn test_line_clear_shows_notice_until_expiry() {
    // Vertical bar dropped into a one-column gap clears the bottom three rows
    let bar = PieceProto::new(
        1,
        Shape::from_rows(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]).unwrap(),
    );
    let mut board = Board::new(20, 14);
    for y in 17..20 {
        for x in 0..14 {
            if x != 7 {
                board.set(x, y, 2);
            }
        }
    }
    let mut game = GameState::new(GameConfig::default(), 1);
    game.reset_with(vec![bar], board);
    let mut driver = Driver::from_game(game, seeded_rng(2));

    assert_eq!(driver.notice_level(), None);
    assert!(driver.handle(GameAction::HardDrop));
    assert_eq!(driver.game().lines(), 3);
    assert_eq!(driver.notice_level(), Some(1));

    driver.advance(LEVEL_NOTICE_MS - 1);
    assert_eq!(driver.notice_level(), Some(1));
    driver.advance(1);
    assert_eq!(driver.notice_level(), None);
}

#[test]
fn test_level_up_speeds_up_remaining_ticks_in_frame() {
    let config = GameConfig {
        lines_per_level: 1,
        speed_table: vec![
            SpeedEntry { level: 1, speed: 800 },
            SpeedEntry { level: 2, speed: 100 },
        ],
        ..GameConfig::default()
    };
    let dot = PieceProto::new(1, Shape::from_rows(&[&[1]]).unwrap());
    let mut board = Board::new(20, 14);
    for x in 0..14 {
        if x != 7 {
            board.set(x, 19, 2);
        }
    }
    let mut game = GameState::new(config, 1);
    game.reset_with(vec![dot], board);
    let mut driver = Driver::from_game(game, seeded_rng(2));

    // Rest the dot in the gap so the next gravity tick locks it
    while driver.game().active().map(|p| p.y) != driver.game().ghost().map(|g| g.y) {
        driver.handle(GameAction::SoftDrop);
    }

    // One 800ms tick clears the row and reaches level 2, then 700ms at 100ms each
    assert_eq!(driver.advance(1_500), 8);
    assert_eq!(driver.game().level(), 2);
    assert_eq!(driver.game().active().map(|p| p.y), Some(7));
}
