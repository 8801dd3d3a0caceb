use common::games::tictactoe::Player;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Range and occupancy are checked by the board.
pub fn parse_move(line: &str) -> Result<usize, InputError> {
    let trimmed = line.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Answer to "First to start?": `y` means the human moves first.
pub fn parse_first_player(line: &str) -> Option<Player> {
    match line.trim().to_uppercase().as_str() {
        "Y" => Some(Player::Human),
        "N" => Some(Player::Computer),
        _ => None,
    }
}
