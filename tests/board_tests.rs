//! Board tests - grid access, collision and row clearing

use arcade::core::{Board, Piece};
use arcade::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_board_get_set() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.get(-1, 0), None);
}

#[test]
fn test_board_blocks_walls_floor_and_cells() {
    let mut board = Board::new();
    board.set(4, 12, Some(PieceKind::S));

    assert!(board.blocks(-1, 5));
    assert!(board.blocks(BOARD_WIDTH as i8, 5));
    assert!(board.blocks(3, BOARD_HEIGHT as i8));
    assert!(board.blocks(4, 12));
    assert!(!board.blocks(5, 12));
}

#[test]
fn test_board_rows_above_top_are_open() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::Z);

    // Above the grid only the walls count.
    assert!(!board.blocks(4, -1));
    assert!(!board.blocks(4, -3));
    assert!(board.blocks(-1, -1));
}

#[test]
fn test_board_collides_with_offsets() {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::O); // columns 4-5, rows 1-2

    assert!(!board.collides(&piece, 0, 0));
    assert!(!board.collides(&piece, -4, 0));
    assert!(board.collides(&piece, -5, 0));
    assert!(!board.collides(&piece, 4, 0));
    assert!(board.collides(&piece, 5, 0));
    assert!(!board.collides(&piece, 0, 17));
    assert!(board.collides(&piece, 0, 18));
}

#[test]
fn test_board_merge_writes_piece_cells() {
    let mut board = Board::new();
    let piece = Piece::spawn(PieceKind::O).shifted(0, 17);

    assert_eq!(board.merge(&piece), 4);
    assert!(board.is_occupied(4, 18));
    assert!(board.is_occupied(5, 18));
    assert!(board.is_occupied(4, 19));
    assert!(board.is_occupied(5, 19));
    assert_eq!(board.row_fill(19), 2);
}

#[test]
fn test_board_merge_drops_cells_above_board() {
    let mut board = Board::new();
    // I sits on its row 1; shifted up two it hangs at y = -1.
    let piece = Piece::spawn(PieceKind::I).shifted(0, -2);

    assert_eq!(board.merge(&piece), 0);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_board_clear_full_rows() {
    let mut board = Board::new();

    fill_row(&mut board, 18, PieceKind::I);
    fill_row(&mut board, 19, PieceKind::O);
    board.set(0, 17, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18]);

    // Row 17 content fell two rows.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 17), Some(None));
    assert_eq!(board.row_fill(18), 0);
}

#[test]
fn test_board_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::new();

    fill_row(&mut board, 19, PieceKind::I);
    board.set(3, 18, Some(PieceKind::J));
    fill_row(&mut board, 17, PieceKind::L);
    board.set(7, 16, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    assert_eq!(board.get(3, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(7, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.row_fill(19), 1);
    assert_eq!(board.row_fill(18), 1);
    assert_eq!(board.row_fill(17), 0);
}

#[test]
fn test_board_clear_none_is_noop() {
    let mut board = Board::new();
    board.set(2, 19, Some(PieceKind::Z));
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_board_write_grid_matches_cells() {
    let mut board = Board::new();
    board.set(9, 0, Some(PieceKind::L));
    board.set(0, 19, Some(PieceKind::J));

    let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_grid(&mut grid);

    assert_eq!(grid[0][9], Some(PieceKind::L));
    assert_eq!(grid[19][0], Some(PieceKind::J));
    assert_eq!(grid[10][5], None);
}
