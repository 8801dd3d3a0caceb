use super::board::Board;
use super::types::{Cell, Outcome, Player, WinningLine};

/// Every line of three, in check order: rows, then columns, then diagonals.
const LINES: [[Cell; 3]; 8] = [
    [Cell::from_index(0), Cell::from_index(1), Cell::from_index(2)],
    [Cell::from_index(3), Cell::from_index(4), Cell::from_index(5)],
    [Cell::from_index(6), Cell::from_index(7), Cell::from_index(8)],
    [Cell::from_index(0), Cell::from_index(3), Cell::from_index(6)],
    [Cell::from_index(1), Cell::from_index(4), Cell::from_index(7)],
    [Cell::from_index(2), Cell::from_index(5), Cell::from_index(8)],
    [Cell::from_index(0), Cell::from_index(4), Cell::from_index(8)],
    [Cell::from_index(2), Cell::from_index(4), Cell::from_index(6)],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        if board.get(b) == board.get(a) && board.get(c) == board.get(a) {
            Some(WinningLine::new(player, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// A completed line wins even on a full board.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::won_by(winner);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
