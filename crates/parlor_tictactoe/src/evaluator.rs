//! Move selection for the computer player.
//!
//! [`best_move`] runs an exhaustive minimax search with alpha-beta pruning.
//! The tree has depth at most 9 so no depth limit or heuristic evaluation
//! is needed: every leaf is a terminal position. [`choose_move`] blends
//! that search with uniformly random legal moves according to a
//! [`Difficulty`].
//!
//! All functions are pure. The board is copied once per call and the copy
//! is mutated in place (make/unmake) while searching.

use crate::rules::outcome::classify;
use crate::{Board, Difficulty, Outcome, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Score of an immediate win. Deeper wins score less, deeper losses more.
pub const WIN_SCORE: i32 = 10;

/// Minimax value of a position from `side`'s point of view.
///
/// `depth` counts plies after the root move, starting at 0.
fn minimax(
    board: &mut Board,
    side: Player,
    to_move: Player,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match classify(board) {
        Outcome::Won(winner) if winner == side => return WIN_SCORE - depth,
        Outcome::Won(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let maximizing = to_move == side;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(to_move));
        let eval = minimax(board, side, to_move.opponent(), depth + 1, alpha, beta);
        board.set(pos, Square::Empty);

        if maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Returns the search-optimal move for `side`.
///
/// Candidates are tried in index order and only a strictly better score
/// replaces the incumbent, so equal-valued moves resolve to the lowest
/// index and repeated calls agree. Returns `None` only when the board has
/// no empty square.
///
/// The board must be in progress; asking for a move on a won board is a
/// caller bug and trips a debug assertion.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side: Player) -> Option<Position> {
    debug_assert!(
        !classify(board).is_terminal() || board.is_full(),
        "best_move called on a finished board"
    );

    let mut work = *board;
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::valid_moves(board) {
        // Anything not better than the incumbent is irrelevant, so the
        // incumbent score is a valid lower bound for the next candidate.
        let alpha = best.map_or(i32::MIN, |(_, score)| score);

        work.set(pos, Square::Occupied(side));
        let score = minimax(&mut work, side, side.opponent(), 0, alpha, i32::MAX);
        work.set(pos, Square::Empty);

        if best.is_none_or(|(_, incumbent)| score > incumbent) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Best move found");
    }
    best.map(|(pos, _)| pos)
}

/// Exact minimax score of every legal move for `side`, in index order.
///
/// Slower than [`best_move`] because each candidate is searched with a
/// full window. Used for hints and analysis.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board, side: Player) -> Vec<(Position, i32)> {
    let mut work = *board;
    Position::valid_moves(board)
        .into_iter()
        .map(|pos| {
            work.set(pos, Square::Occupied(side));
            let score = minimax(&mut work, side, side.opponent(), 0, i32::MIN, i32::MAX);
            work.set(pos, Square::Empty);
            (pos, score)
        })
        .collect()
}

/// Picks a move for `side` at the given difficulty.
///
/// With probability [`Difficulty::optimal_probability`] this is
/// [`best_move`]; otherwise a uniformly random empty square. `rng` is the
/// only source of randomness, so a seeded generator makes the choice
/// reproducible. Hard difficulty never draws from `rng`.
///
/// Like [`best_move`], the board must be in progress; a won board trips
/// a debug assertion before any random draw.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    debug_assert!(
        !classify(board).is_terminal() || board.is_full(),
        "choose_move called on a finished board"
    );

    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    let probability = difficulty.optimal_probability();
    let optimal = probability >= 1.0 || rng.gen_bool(probability);

    if optimal {
        debug!("Playing optimal move");
        best_move(board, side)
    } else {
        let pos = empty.choose(rng).copied();
        debug!(position = ?pos, "Playing random move");
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Generator that always fails `gen_bool` and picks the first candidate.
    struct NeverOptimal;

    impl RngCore for NeverOptimal {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn board(snapshot: &str) -> Board {
        snapshot.parse().unwrap()
    }

    #[test]
    fn test_immediate_win_scores_highest() {
        let scores = score_moves(&board("XX./OO./..."), Player::O);
        let (pos, score) = scores.iter().max_by_key(|(_, s)| *s).copied().unwrap();
        assert_eq!(pos, Position::MiddleRight);
        assert_eq!(score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // X threatens the top row; O has nothing of its own.
        let b = board("XX./.O./...");
        assert_eq!(best_move(&b, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_x_side_uses_its_own_perspective() {
        let b = board("XX./OO./...");
        assert_eq!(best_move(&b, Player::X), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(best_move(&board("XOX/XOO/OXX"), Player::O), None);
    }

    #[test]
    fn test_fork_loses_on_next_ply() {
        // X threatens the top row and the left column; every O reply
        // leaves one threat open.
        let scores = score_moves(&board("XX./XO./..O"), Player::O);
        assert_eq!(scores.len(), 4);
        assert!(scores.iter().all(|(_, s)| *s == 1 - WIN_SCORE));
    }

    #[test]
    fn test_score_moves_agrees_with_best_move() {
        let b = board("X../.O./..X");
        let scores = score_moves(&b, Player::O);
        let top = scores.iter().map(|(_, s)| *s).max().unwrap();
        let best = best_move(&b, Player::O).unwrap();
        let best_score = scores.iter().find(|(p, _)| *p == best).unwrap().1;
        assert_eq!(best_score, top);
    }

    #[test]
    #[should_panic(expected = "choose_move called on a finished board")]
    #[cfg(debug_assertions)]
    fn test_choose_move_on_won_board_panics_on_random_branch() {
        let _ = choose_move(
            &board("XXX/OO./..."),
            Player::O,
            Difficulty::Easy,
            &mut NeverOptimal,
        );
    }

    #[test]
    #[should_panic(expected = "finished board")]
    #[cfg(debug_assertions)]
    fn test_choose_move_on_won_board_panics_on_hard() {
        let _ = choose_move(
            &board("XXX/OO./..."),
            Player::O,
            Difficulty::Hard,
            &mut NeverOptimal,
        );
    }
}
