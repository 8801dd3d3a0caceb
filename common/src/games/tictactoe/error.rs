use thiserror::Error;

use super::types::{Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("cell {0} is out of range, expected 1-9")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(Cell),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    #[error("game is already over")]
    GameOver,

    #[error("it is not the {0}'s turn")]
    NotYourTurn(Player),
}
