//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// The eight winning triples, in scan order: rows, columns, diagonals.
///
/// When a malformed board completes more than one triple, the first one in
/// this order decides the winner.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed triple and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of the line.
    pub player: Player,
    /// The three cells, in line order.
    pub cells: [Position; 3],
}

fn owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

/// Returns the first completed line in scan order.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|cells| {
        owner(board, cells).map(|player| WinningLine { player, cells })
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|cells| owner(board, cells))
}

/// Checks whether `player` owns any completed line, regardless of scan order.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .into_iter()
        .any(|cells| owner(board, cells) == Some(player))
}
