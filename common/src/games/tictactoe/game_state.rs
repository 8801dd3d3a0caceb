use super::board::Board;
use super::bot_controller::find_best_move;
use super::error::GameError;
use super::types::{Cell, Outcome, Player};
use super::win_detector::evaluate_outcome;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: Outcome,
    last_move: Option<Cell>,
}

impl TicTacToeGameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: Outcome::Ongoing,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<Cell> {
        self.last_move
    }

    pub fn place_mark(&mut self, player: Player, cell: usize) -> Result<Outcome, GameError> {
        self.check_turn(player)?;

        let cell = self.board.apply_move(cell, player)?;
        self.finish_turn(cell);

        Ok(self.status)
    }

    pub fn play_computer_turn(&mut self) -> Result<Cell, GameError> {
        self.check_turn(Player::Computer)?;

        let cell = find_best_move(&mut self.board).ok_or(GameError::GameOver)?;
        self.finish_turn(cell);

        Ok(cell)
    }

    fn check_turn(&self, player: Player) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    fn finish_turn(&mut self, cell: Cell) {
        self.last_move = Some(cell);
        self.status = evaluate_outcome(&self.board);

        if !self.status.is_terminal() {
            self.current_player = self.current_player.opponent();
        }
    }
}
