mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{find_best_move, minimax, score_moves};
pub use error::{GameError, InvalidMoveError};
pub use game_state::TicTacToeGameState;
pub use types::{
    BOARD_CELLS, COMPUTER_WIN, Cell, DRAW, FirstPlayerMode, HUMAN_WIN, Mark, Outcome, Player,
    Score, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate_outcome};
