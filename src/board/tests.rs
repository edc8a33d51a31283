use super::*;

#[test]
fn test_player_other() {
    assert_eq!(Player::One.other(), Player::Two);
    assert_eq!(Player::Two.other(), Player::One);
    assert_eq!(Player::One.index(), 0);
    assert_eq!(Player::Two.index(), 1);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(10), 34);
    assert_eq!(pos.to_index(6), 22);

    let pos2 = Pos::from_index(22, 6);
    assert_eq!(pos2, Pos::new(3, 4));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 6));
    assert!(Pos::is_valid(5, 5, 6));
    assert!(!Pos::is_valid(6, 0, 6));
    assert!(!Pos::is_valid(-1, 0, 6));
    assert!(Pos::is_valid(9, 9, 10));
}

#[test]
fn test_board_size_conversion() {
    assert_eq!(BoardSize::try_from(6), Ok(BoardSize::Six));
    assert_eq!(BoardSize::try_from(8), Ok(BoardSize::Eight));
    assert_eq!(BoardSize::try_from(10), Ok(BoardSize::Ten));
    assert_eq!(
        BoardSize::try_from(7),
        Err(crate::FreedomError::UnsupportedBoardSize(7))
    );
    assert_eq!(BoardSize::Ten.cells(), MAX_CELLS);
}

#[test]
fn test_new_board_is_empty() {
    for size in BoardSize::ALL {
        let board = Board::new(size);
        assert_eq!(board.empty_count(), size.cells());
        assert_eq!(board.empty_cells().count(), size.cells());
        assert!(!board.is_full());
    }
}

#[test]
fn test_place_and_unplace() {
    let mut board = Board::new(BoardSize::Six);
    let pos = Pos::new(2, 3);

    board.place(Player::One, pos);
    assert!(!board.is_empty(pos));
    assert_eq!(board.get(pos), Some(Player::One));
    assert_eq!(board.empty_count(), 35);
    assert_eq!(board.stone_count(Player::One), 1);

    board.unplace(Player::One, pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.empty_count(), 36);
}

#[test]
fn test_balanced_place_unplace_restores_board() {
    let mut board = Board::new(BoardSize::Eight);
    board.place(Player::One, Pos::new(0, 0));
    board.place(Player::Two, Pos::new(7, 7));
    let before = board.clone();

    let moves = [
        (Player::One, Pos::new(3, 3)),
        (Player::Two, Pos::new(3, 4)),
        (Player::One, Pos::new(4, 4)),
        (Player::Two, Pos::new(0, 7)),
    ];
    for &(player, pos) in &moves {
        board.place(player, pos);
    }
    for &(player, pos) in moves.iter().rev() {
        board.unplace(player, pos);
    }

    assert_eq!(board, before);
}

#[test]
fn test_empty_count_matches_planes() {
    let mut board = Board::new(BoardSize::Ten);
    for idx in (0..100).step_by(3) {
        let player = if idx % 2 == 0 { Player::One } else { Player::Two };
        board.place(player, Pos::from_index(idx, 10));
    }
    let occupied = board.stone_count(Player::One) + board.stone_count(Player::Two);
    assert_eq!(board.empty_count(), 100 - occupied as usize);
    assert_eq!(board.empty_cells().count(), board.empty_count());
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(BoardSize::Six);
    for idx in 0..36 {
        if idx != 5 && idx != 6 && idx != 30 {
            board.place(Player::Two, Pos::from_index(idx, 6));
        }
    }
    let empties: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(empties, vec![Pos::new(0, 5), Pos::new(1, 0), Pos::new(5, 0)]);

    let mut visited = Vec::new();
    board.for_each_empty_cell(|pos| visited.push(pos));
    assert_eq!(visited, empties);
}

#[test]
fn test_empty_cells_allows_mutation() {
    let mut board = Board::new(BoardSize::Six);
    for pos in board.empty_cells() {
        board.place(Player::One, pos);
    }
    assert!(board.is_full());
}

#[test]
fn test_try_place_rejects_occupied() {
    let mut board = Board::new(BoardSize::Six);
    let pos = Pos::new(1, 1);
    assert!(board.try_place(Player::One, pos).is_ok());
    assert_eq!(
        board.try_place(Player::Two, pos),
        Err(crate::FreedomError::CellOccupied(pos))
    );
    assert_eq!(board.get(pos), Some(Player::One));
    assert_eq!(board.empty_count(), 35);
}

#[test]
fn test_try_place_rejects_out_of_bounds() {
    let mut board = Board::new(BoardSize::Six);
    assert!(matches!(
        board.try_place(Player::One, Pos::new(6, 0)),
        Err(crate::FreedomError::OutOfBounds { .. })
    ));
}

#[test]
fn test_try_unplace_wrong_owner() {
    let mut board = Board::new(BoardSize::Six);
    let pos = Pos::new(0, 0);
    board.place(Player::One, pos);
    assert!(board.try_unplace(Player::Two, pos).is_err());
    assert!(board.try_unplace(Player::One, pos).is_ok());
}

#[test]
#[should_panic(expected = "occupied")]
fn test_place_on_occupied_panics() {
    let mut board = Board::new(BoardSize::Six);
    board.place(Player::One, Pos::new(0, 0));
    board.place(Player::Two, Pos::new(0, 0));
}

#[test]
#[should_panic(expected = "does not hold")]
fn test_unplace_wrong_player_panics() {
    let mut board = Board::new(BoardSize::Six);
    board.place(Player::One, Pos::new(0, 0));
    board.unplace(Player::Two, Pos::new(0, 0));
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::new(BoardSize::Six);
    board.place(Player::One, Pos::new(0, 0));
    board.place(Player::Two, Pos::new(0, 1));
    let text = board.to_string();
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.contains("O X . . . ."), "got {first_row:?}");
}
