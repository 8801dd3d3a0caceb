use crate::log;
use super::board::Board;
use super::types::{Cell, Player, Score};
use super::win_detector::evaluate_outcome;

/// Counters gathered over one top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub max_depth: usize,
}

/// Exhaustive minimax value of `board` with `maximizing` choosing whether the
/// computer (true) or the human (false) moves next. The board is restored
/// before returning.
pub fn minimax(board: &mut Board, maximizing: bool) -> Score {
    let mut stats = SearchStats::default();
    search(board, 0, maximizing, &mut stats)
}

fn search(board: &mut Board, depth: usize, maximizing: bool, stats: &mut SearchStats) -> Score {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if let Some(score) = evaluate_outcome(board).score() {
        return score;
    }

    let (player, mut best_score) = if maximizing {
        (Player::Computer, Score::MIN)
    } else {
        (Player::Human, Score::MAX)
    };

    let moves: Vec<Cell> = board.empty_cells().collect();
    for cell in moves {
        board.place(cell, player);
        let score = search(board, depth + 1, !maximizing, stats);
        board.undo_move(cell);

        best_score = if maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

/// Scores every computer move on `board`, ascending by cell.
pub fn score_moves(board: &mut Board) -> Vec<(Cell, Score)> {
    let mut stats = SearchStats::default();
    score_moves_with_stats(board, &mut stats)
}

fn score_moves_with_stats(board: &mut Board, stats: &mut SearchStats) -> Vec<(Cell, Score)> {
    let moves: Vec<Cell> = board.empty_cells().collect();
    let mut scores = Vec::with_capacity(moves.len());

    for cell in moves {
        board.place(cell, Player::Computer);
        let score = search(board, 0, false, stats);
        board.undo_move(cell);
        scores.push((cell, score));
    }

    scores
}

/// Picks the first cell with the strictly greatest score and plays it for the
/// computer. Returns `None` when no cell is empty.
pub fn find_best_move(board: &mut Board) -> Option<Cell> {
    let mut stats = SearchStats::default();
    let scores = score_moves_with_stats(board, &mut stats);

    let mut best_move = None;
    let mut best_score = Score::MIN;
    for (cell, score) in scores {
        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    let cell = best_move?;
    board.place(cell, Player::Computer);

    log!(
        "Computer chose cell {} (score {}, {} nodes, depth {})",
        cell,
        best_score,
        stats.nodes,
        stats.max_depth
    );

    Some(cell)
}
