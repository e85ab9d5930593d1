//! Board tests - public engine API

use tui_cascade::core::{Block, Board, RepeatSource, Shape};
use tui_cascade::types::{BlockColor, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn board_of(kind: PieceKind, width: u8, height: u8) -> Board<RepeatSource> {
    Board::new(width, height, RepeatSource::of_kind(kind, BlockColor::Cyan))
}

#[test]
fn test_board_new_empty() {
    let board = Board::with_seed(1);
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.score(), 0);
    assert!(!board.is_game_over());
    assert!(board.falling().is_none());

    // All cells should be empty
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "Cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::with_seed(1);

    // Negative coordinates
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);

    // Beyond bounds
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.is_occupied(-1, -1));
}

#[test]
fn test_board_dimensions_are_clamped() {
    let board = board_of(PieceKind::O, 0, 200);
    assert_eq!(board.width(), 1);
    assert_eq!(board.height(), 127);
}

#[test]
fn test_first_step_spawns_centered() {
    let mut board = board_of(PieceKind::T, 10, 20);
    assert!(board.step());

    let falling = board.falling().unwrap();
    assert_eq!(falling.origin, (3, 0));
    let id = board.falling_id().unwrap();
    for (x, y) in falling.occupied_cells() {
        assert_eq!(board.get(x, y), Some(Some(id)));
    }
    assert_eq!(board.block_count(), 1);
}

#[test]
fn test_spawn_uses_previewed_block() {
    let mut board = Board::with_seed(2024);
    let preview = board.next_block().cloned().unwrap();
    board.step();

    let falling = board.falling().unwrap();
    assert_eq!(falling.shape(), preview.shape());
    assert_eq!(falling.color, preview.color);
}

#[test]
fn test_step_drops_one_row() {
    let mut board = board_of(PieceKind::O, 10, 20);
    board.step();
    assert_eq!(board.falling().unwrap().y(), 0);
    board.step();
    assert_eq!(board.falling().unwrap().y(), 1);
    assert!(board.is_occupied(4, 2));
    assert!(!board.is_occupied(4, 0));
}

#[test]
fn test_horizontal_moves_stop_at_walls() {
    let mut board = board_of(PieceKind::O, 10, 20);
    board.step();

    let mut moves = 0;
    while board.move_left() {
        moves += 1;
    }
    assert_eq!(moves, 4);
    assert_eq!(board.falling().unwrap().x(), 0);

    let mut moves = 0;
    while board.move_right() {
        moves += 1;
    }
    assert_eq!(moves, 8);
    assert_eq!(board.falling().unwrap().x(), 8);
}

#[test]
fn test_hard_drop_keeps_block_active_until_step() {
    let mut board = board_of(PieceKind::I, 10, 20);
    board.step();

    assert_eq!(board.move_down(), 19);
    assert!(board.falling().is_some());
    assert_eq!(board.move_down(), 0);

    // Still movable on the floor
    assert!(board.move_left());

    assert!(board.step());
    assert!(board.falling().is_none());
    assert!(!board.move_left());
}

#[test]
fn test_rotate_in_place() {
    let mut board = board_of(PieceKind::I, 10, 20);
    board.step();
    board.step();

    assert!(board.rotate(true));
    let falling = board.falling().unwrap();
    assert_eq!(falling.origin, (3, 1));
    assert_eq!((falling.width(), falling.height()), (1, 4));

    assert!(board.rotate(false));
    let falling = board.falling().unwrap();
    assert_eq!((falling.width(), falling.height()), (4, 1));
}

#[test]
fn test_rotate_rejected_near_floor() {
    let mut board = board_of(PieceKind::I, 10, 20);
    board.step();
    board.move_down();

    // A vertical bar anchored on the last row would leave the board.
    assert!(!board.rotate(true));
    let falling = board.falling().unwrap();
    assert_eq!(falling.origin, (3, 19));
    assert_eq!((falling.width(), falling.height()), (4, 1));
}

#[test]
fn test_rotate_rolled_back_on_overlap() {
    let mut board = board_of(PieceKind::I, 10, 20);

    // Upright bar resting in column 4.
    board.step();
    assert!(board.rotate(true));
    assert!(board.move_right());
    board.move_down();
    board.step();

    // Second upright bar dropped next to it in column 3.
    board.step();
    assert!(board.rotate(true));
    assert_eq!(board.move_down(), 16);
    let id = board.falling_id().unwrap();
    let before: Vec<_> = board.grid().to_vec();
    let shape = board.falling().unwrap().shape().clone();

    // Lying flat from (3, 16) would cover column 4.
    assert!(!board.rotate(true));
    assert!(!board.rotate(false));

    assert_eq!(board.grid(), before.as_slice());
    let falling = board.falling().unwrap();
    assert_eq!(board.falling_id(), Some(id));
    assert_eq!(falling.shape(), &shape);
    assert_eq!(falling.origin, (3, 16));
}

#[test]
fn test_apply_action_routes_commands() {
    let mut board = board_of(PieceKind::O, 10, 20);
    board.step();

    assert!(board.apply_action(GameAction::MoveLeft));
    assert_eq!(board.falling().unwrap().x(), 3);
    assert!(board.apply_action(GameAction::MoveRight));
    assert_eq!(board.falling().unwrap().x(), 4);
    assert!(board.apply_action(GameAction::RotateCw));
    assert!(board.apply_action(GameAction::HardDrop));
    assert_eq!(board.falling().unwrap().y(), 18);

    // Loop-level actions are not board commands
    assert!(!board.apply_action(GameAction::Pause));
    assert!(!board.apply_action(GameAction::Restart));
}

#[test]
fn test_commands_without_falling_block_are_noops() {
    let mut board = board_of(PieceKind::O, 10, 20);
    assert!(!board.move_left());
    assert!(!board.move_right());
    assert!(!board.rotate(true));
    assert_eq!(board.move_down(), 0);
}

#[test]
fn test_custom_block_source() {
    let hook = Shape::from_rows(&[[true, true], [true, false]]).unwrap();
    let source = RepeatSource::new(Block::new(hook, BlockColor::Magenta));
    let mut board = Board::new(6, 8, source);
    board.step();

    assert_eq!(board.falling().unwrap().origin, (2, 0));
    assert_eq!(board.color_at(2, 1), Some(BlockColor::Magenta));
    assert_eq!(board.color_at(3, 1), None);
}

#[test]
fn test_snapshot_reflects_board() {
    let mut board = board_of(PieceKind::O, 10, 20);
    board.step();

    let snap = board.snapshot();
    assert_eq!((snap.width, snap.height), (10, 20));
    assert_eq!(snap.cells.len(), 200);
    assert_eq!(snap.cell(4, 0), Some(BlockColor::Cyan));
    assert_eq!(snap.cell(3, 0), None);
    assert_eq!(snap.score, 0);
    assert!(!snap.game_over);
    assert!(!snap.paused);

    let next = snap.next.unwrap();
    assert_eq!((next.width, next.height), (2, 2));
    assert_eq!(next.color, BlockColor::Cyan);
}
