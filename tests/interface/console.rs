use ttt_console::board::{Mark, Outcome};
use ttt_console::games::ttt::TTTBoard;
use ttt_console::interface::console::{verdict, ConsoleGame};
use ttt_console::interface::render::Glyphs;
use ttt_console::util::tiny::consistent_rng;

use crate::util::board;

const INVALID_INPUT: &str = "Invalid input! Please enter a valid number.";
const OUT_OF_RANGE: &str = "Invalid move! Row and column must be between 0 and 2.";
const OCCUPIED: &str = "Invalid move! That cell is already taken.";

/// Run a console game on the scripted `input`, optionally starting from `start`.
fn run_script(start: Option<&str>, glyphs: Glyphs, input: impl AsRef<[u8]>) -> (Option<Outcome>, TTTBoard, String) {
    let mut output = vec![];

    let mut game = ConsoleGame::new(input.as_ref(), &mut output, glyphs, consistent_rng());
    if let Some(start) = start {
        game = game.with_board(board(start));
    }

    let outcome = game.run().unwrap();
    let end = *game.board();
    drop(game);

    (outcome, end, String::from_utf8(output).unwrap())
}

#[test]
fn computer_victory_with_bad_input() {
    // column then row for each move, with some invalid lines mixed in
    let input = [
        "abc", // not a number
        "5", "0", // out of range
        "0", "0", // (0, 0), computer takes the center
        "1", "1", // occupied by the computer
        "0", "xyz", // row is not a number
        "1", "0", // (0, 1), computer blocks at (0, 2)
        "0", "2", // (2, 0), computer blocks at (1, 0)
        "2", "2", // (2, 2), computer completes the middle row
    ]
    .join("\n");

    let (outcome, end, output) = run_script(None, Glyphs::default(), &input);
    println!("{}", output);

    assert_eq!(Some(Outcome::WonBy(Mark::B)), outcome);
    assert_eq!(board("aab/bbb/a.a"), end);

    assert!(output.starts_with("You are 'X', the computer is: 'O'\n\n"));
    assert_eq!(2, output.matches(INVALID_INPUT).count());
    assert_eq!(1, output.matches(OUT_OF_RANGE).count());
    assert_eq!(1, output.matches(OCCUPIED).count());

    let expected_end = "-------------------\n | X |  | X |  | O | \n | O |  | O |  | O | \n | X |  |   |  | X | \n-------------------\n\nComputer Victory\n";
    assert!(output.ends_with(expected_end), "Unexpected end of output:\n{}", output);
    assert!(!output.contains("Human Victory"));
    assert!(!output.contains("It's a Tie"));
}

#[test]
fn human_victory() {
    let (outcome, end, output) = run_script(Some("aa./bb./..."), Glyphs::default(), "2\n0\n");

    assert_eq!(Some(Outcome::WonBy(Mark::A)), outcome);
    assert_eq!(board("aaa/bb./..."), end);
    assert!(output.ends_with("\nHuman Victory\n"));
    assert_eq!(1, output.matches("Victory").count());
}

#[test]
fn tie() {
    let (outcome, end, output) = run_script(Some("aba/abb/ba."), Glyphs::default(), "2\n2\n");

    assert_eq!(Some(Outcome::Draw), outcome);
    assert!(end.is_full());
    assert!(output.ends_with("\nIt's a Tie\n"));
    assert!(!output.contains("Victory"));
}

#[test]
fn tie_after_computer_move() {
    // the human takes (2, 1), the computer blocks the bottom row at (2, 2) and fills the board
    let (outcome, end, output) = run_script(Some("abb/bba/a.."), Glyphs::default(), "1\n2\n");

    assert_eq!(Some(Outcome::Draw), outcome);
    assert_eq!(board("abb/bba/aab"), end);
    assert!(output.ends_with("\nIt's a Tie\n"));
}

#[test]
fn already_done() {
    let (outcome, _, output) = run_script(Some("aaa/bb./..."), Glyphs::default(), "");

    assert_eq!(Some(Outcome::WonBy(Mark::A)), outcome);
    assert!(!output.contains("Enter column number"));
    assert!(output.ends_with("\nHuman Victory\n"));
}

#[test]
fn input_closed() {
    for input in ["", "1\n", "abc\n", "1\n1"] {
        let (outcome, _, output) = run_script(None, Glyphs::default(), input);

        assert_eq!(None, outcome, "input {:?}", input);
        assert!(output.contains("Enter column number (0-2): "));
        for verdict in ["Human Victory", "Computer Victory", "It's a Tie"] {
            assert!(!output.contains(verdict));
        }
    }
}

#[test]
fn non_utf8_input() {
    let (outcome, end, output) = run_script(None, Glyphs::default(), b"\xff\xfe\n0\n0\n");

    assert_eq!(None, outcome);
    assert_eq!(1, output.matches(INVALID_INPUT).count());
    // the game went on: the human's move and the computer's answer in the center
    assert_eq!(board("a../.b./..."), end);
}

#[test]
fn overlong_line() {
    let mut input = vec![b'1'; 10_000];
    input.extend_from_slice(b"\n0\n0\n");

    let (outcome, end, output) = run_script(None, Glyphs::default(), &input);

    assert_eq!(None, outcome);
    assert_eq!(1, output.matches(INVALID_INPUT).count());
    assert_eq!(board("a../.b./..."), end);
}

#[test]
fn custom_glyphs() {
    let glyphs = Glyphs::new('#', '@').unwrap();
    let (_, end, output) = run_script(None, glyphs, "0\n0\n");

    assert!(output.starts_with("You are '#', the computer is: '@'\n\n"));
    // the human's first move and the computer's answer in the center
    assert_eq!(board("a../.b./..."), end);
    assert!(output.contains(" | # |  |   |  |   | \n |   |  | @ |  |   | \n"));
}

#[test]
fn verdicts() {
    assert_eq!("Human Victory", verdict(Outcome::WonBy(Mark::A)));
    assert_eq!("Computer Victory", verdict(Outcome::WonBy(Mark::B)));
    assert_eq!("It's a Tie", verdict(Outcome::Draw));
}
