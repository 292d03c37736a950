//! Tests for the minimax move selector.

use tictac_engine::{Board, Outcome, Player, apply_move, evaluate, select_move};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Plays O with `select_move` against every legal X continuation and
/// returns how many finished games were reached.
fn play_out_against_all_x_replies(board: Board, to_move: Player) -> usize {
    let outcome = evaluate(&board).outcome;
    if outcome.is_terminal() {
        assert_ne!(outcome, Outcome::XWins, "O lost on {board}");
        return 1;
    }

    match to_move {
        Player::O => {
            let result = select_move(&board, Player::O);
            let index = result.index.expect("in-progress board has a move");
            let next = apply_move(&board, index, Player::O).unwrap();
            play_out_against_all_x_replies(next, Player::X)
        }
        Player::X => board
            .empty_indices()
            .map(|index| {
                let next = apply_move(&board, index, Player::X).unwrap();
                play_out_against_all_x_replies(next, Player::O)
            })
            .sum(),
    }
}

#[test]
fn test_computer_never_loses_when_x_opens() {
    let games = play_out_against_all_x_replies(Board::new(), Player::X);
    assert!(games > 0);
}

#[test]
fn test_computer_never_loses_when_o_opens() {
    let games = play_out_against_all_x_replies(Board::new(), Player::O);
    assert!(games > 0);
}

#[test]
fn test_empty_board_is_a_draw_with_perfect_play() {
    let result = select_move(&Board::new(), Player::O);
    assert_eq!(result.score, 0);
    assert!(result.index.is_some());
}

#[test]
fn test_x_to_move_forces_a_win() {
    // O X . / . X . / . . O
    // X can win at 7 directly, and 2 forks the center column and anti-diagonal.
    let result = select_move(&board("OX..X...O"), Player::X);
    assert_eq!(result.score, -1);
    assert_eq!(result.index, Some(2));

    let next = apply_move(&board("OX..X...O"), 2, Player::X).unwrap();
    assert_eq!(select_move(&next, Player::O).score, -1);
}

#[test]
fn test_o_blocks_the_top_row() {
    // X X . / . O . / . . .  with O to move.
    let result = select_move(&board("XX..O...."), Player::O);
    assert_eq!(result.index, Some(2));
    assert_eq!(result.score, 0);
}

#[test]
fn test_x_completes_its_own_line() {
    // X X . / O O . / . . .  with X to move.
    let result = select_move(&board("XX.OO...."), Player::X);
    assert_eq!(result.index, Some(2));
    assert_eq!(result.score, -1);
}

#[test]
fn test_lowest_index_wins_ties() {
    // Corner replies to a center opening draw; index 0 is the first of them.
    let result = select_move(&board("....X...."), Player::O);
    assert_eq!(result.score, 0);
    assert_eq!(result.index, Some(0));
}

#[test]
fn test_full_board_yields_no_move() {
    let result = select_move(&board("XOXXOOOXX"), Player::O);
    assert_eq!(result.index, None);
    assert_eq!(result.score, 0);
}
