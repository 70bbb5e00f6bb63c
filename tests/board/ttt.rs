use ttt_console::board::{Mark, Outcome, PlayError};
use ttt_console::games::ttt::{Coord, TTTBoard};

use crate::board::{board_test_main, board_test_queries};
use crate::util::{all_grids, board};

#[test]
fn empty() {
    let board = TTTBoard::default();
    board_test_main(&board);

    assert!(!board.is_full());
    assert_eq!(None, board.outcome());
    assert_eq!(".../.../...", board.to_compact());
}

#[test]
fn one_move() {
    let mut board = TTTBoard::default();
    assert!(board.make_move(1, 0, Mark::A));

    board_test_main(&board);
    assert_eq!(Some(Mark::A), board.tile(Coord::new(1, 0)));
    assert_eq!(".../a../...", board.to_compact());
}

#[test]
fn done() {
    let moves = [(0, 0, Mark::A), (1, 2, Mark::B), (0, 1, Mark::A), (1, 1, Mark::B), (0, 2, Mark::A)];

    let mut board = TTTBoard::default();
    for &(row, col, mark) in &moves {
        assert!(board.make_move(row, col, mark));
    }

    board_test_main(&board);
    assert!(board.is_victory(Mark::A));
    assert!(!board.is_victory(Mark::B));
    assert_eq!(Some(Outcome::WonBy(Mark::A)), board.outcome());
}

#[test]
fn every_line_wins() {
    let lines = [
        "aaa/.../...",
        ".../aaa/...",
        ".../.../aaa",
        "a../a../a..",
        ".a./.a./.a.",
        "..a/..a/..a",
        "a../.a./..a",
        "..a/.a./a..",
    ];
    for line in lines {
        let board = board(line);
        assert!(board.is_victory(Mark::A), "{}", line);
        assert!(!board.is_victory(Mark::B), "{}", line);
    }

    // two in a row is not enough, neither is a bent line
    for compact in ["aa./.../...", "a../.a./.a.", "ab./a../b.."] {
        assert!(!board(compact).is_victory(Mark::A), "{}", compact);
    }
}

#[test]
fn draw() {
    let board = board("aba/aba/bab");
    board_test_main(&board);

    assert!(board.is_full());
    assert_eq!(Some(Outcome::Draw), board.outcome());
}

#[test]
fn win_on_full_board() {
    let board = board("aab/bba/aaa");
    assert!(board.is_full());
    assert_eq!(Some(Outcome::WonBy(Mark::A)), board.outcome());
}

#[test]
fn rejected_moves_leave_board_unchanged() {
    let mut board = board("a../.b./...");
    let before = board;

    for &(row, col) in &[(-1, 0), (0, -1), (3, 0), (0, 3), (3, 3), (i64::MIN, 1), (1, i64::MAX)] {
        assert!(!board.make_move(row, col, Mark::A), "({}, {})", row, col);
        assert_eq!(Err(PlayError::OutOfRange), board.try_move(row, col, Mark::B));
        assert_eq!(before, board);
    }

    for &(row, col) in &[(0, 0), (1, 1)] {
        for &mark in &Mark::BOTH {
            assert!(!board.make_move(row, col, mark));
            assert_eq!(Err(PlayError::Occupied), board.try_move(row, col, mark));
            assert_eq!(before, board);
        }
    }
}

#[test]
fn accepted_move_changes_exactly_one_cell() {
    let before = board("a../.b./...");

    for coord in Coord::all().filter(|&c| before.tile(c).is_none()) {
        let mut board = before;
        assert_eq!(Ok(coord), board.try_move(coord.row() as i64, coord.col() as i64, Mark::B));

        let changed: Vec<Coord> = Coord::all().filter(|&c| board.tile(c) != before.tile(c)).collect();
        assert_eq!(vec![coord], changed);
        assert_eq!(Some(Mark::B), board.tile(coord));
    }
}

#[test]
fn would_win_does_not_modify() {
    let board = board("aa./bb./...");
    let before = board;

    assert!(board.would_win(Coord::new(0, 2), Mark::A));
    assert!(!board.would_win(Coord::new(0, 2), Mark::B));
    assert!(board.would_win(Coord::new(1, 2), Mark::B));
    assert!(!board.would_win(Coord::new(2, 2), Mark::A));

    // occupied cells never win, even if the line would be complete
    assert!(!board.would_win(Coord::new(0, 0), Mark::A));

    assert_eq!(before, board);
}

#[test]
fn coord() {
    assert_eq!(Coord::CENTER, Coord::new(1, 1));
    assert_eq!(
        vec![Coord::new(0, 0), Coord::new(0, 2), Coord::new(2, 0), Coord::new(2, 2)],
        Coord::CORNERS.to_vec()
    );

    for (i, coord) in Coord::all().enumerate() {
        assert_eq!(i, coord.index());
        assert_eq!(coord, Coord::new(i / 3, i % 3));
        assert_eq!(Some(coord), Coord::try_new((i / 3) as i64, (i % 3) as i64));
    }

    assert_eq!(None, Coord::try_new(-1, 1));
    assert_eq!(None, Coord::try_new(1, 3));
    assert_eq!("(2, 1)", Coord::new(2, 1).to_string());
}

#[test]
fn compact_notation() {
    let parsed = board("ab./..b/a..");
    assert_eq!(parsed, board("ab...ba.."));
    assert_eq!("ab./..b/a..", parsed.to_compact());

    for invalid in ["", "ab", "ab./..b", "abc/.../...", "ab../.b/a..", "a.../.../..", "xo./.../..."] {
        assert!(TTTBoard::from_compact(invalid).is_err(), "{:?}", invalid);
    }
}

#[test]
fn all_grids_consistent() {
    let mut count = 0;
    for board in all_grids() {
        board_test_queries(&board);
        count += 1;
    }
    assert_eq!(19683, count);
}
