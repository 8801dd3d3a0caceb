use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::InvalidMoveError;
use crate::games::SessionRng;

pub const BOARD_CELLS: usize = 9;

/// Game-theoretic value from the computer's point of view.
pub type Score = i32;

pub const COMPUTER_WIN: Score = 1;
pub const HUMAN_WIN: Score = -1;
pub const DRAW: Score = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Computer => Some(Player::Computer),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }
}

/// A cell label in `1..=9`, numbered row by row from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    pub const ALL: [Cell; BOARD_CELLS] = [
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
        Cell(8),
        Cell(9),
    ];

    pub fn new(number: usize) -> Result<Self, InvalidMoveError> {
        if (1..=BOARD_CELLS).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(InvalidMoveError::OutOfRange(number))
        }
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    pub fn number(&self) -> usize {
        self.0 as usize
    }

    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            Outcome::HumanWins => Some(HUMAN_WIN),
            Outcome::ComputerWins => Some(COMPUTER_WIN),
            Outcome::Draw => Some(DRAW),
            Outcome::Ongoing => None,
        }
    }

    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => Outcome::HumanWins,
            Player::Computer => Outcome::ComputerWins,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Cell; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [Cell; 3]) -> Self {
        Self { player, cells }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    #[default]
    Ask,
    Human,
    Computer,
    Random,
}

impl FirstPlayerMode {
    /// `None` means the player has to be asked.
    pub fn resolve(&self, rng: &mut SessionRng) -> Option<Player> {
        match self {
            FirstPlayerMode::Ask => None,
            FirstPlayerMode::Human => Some(Player::Human),
            FirstPlayerMode::Computer => Some(Player::Computer),
            FirstPlayerMode::Random => Some(rng.random_player()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_accepts_labels_one_to_nine() {
        for number in 1..=9 {
            let cell = Cell::new(number).unwrap();
            assert_eq!(cell.number(), number);
            assert_eq!(cell.index(), number - 1);
        }
    }

    #[test]
    fn test_cell_rejects_out_of_range_labels() {
        assert_eq!(Cell::new(0), Err(InvalidMoveError::OutOfRange(0)));
        assert_eq!(Cell::new(10), Err(InvalidMoveError::OutOfRange(10)));
    }

    #[test]
    fn test_all_cells_are_ascending() {
        let numbers: Vec<usize> = Cell::ALL.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_outcome_scores_follow_computer_perspective() {
        assert_eq!(Outcome::ComputerWins.score(), Some(1));
        assert_eq!(Outcome::HumanWins.score(), Some(-1));
        assert_eq!(Outcome::Draw.score(), Some(0));
        assert_eq!(Outcome::Ongoing.score(), None);
    }

    #[test]
    fn test_first_player_mode_resolves_fixed_sides() {
        let mut rng = SessionRng::new(1);
        assert_eq!(FirstPlayerMode::Ask.resolve(&mut rng), None);
        assert_eq!(FirstPlayerMode::Human.resolve(&mut rng), Some(Player::Human));
        assert_eq!(FirstPlayerMode::Computer.resolve(&mut rng), Some(Player::Computer));
        assert!(FirstPlayerMode::Random.resolve(&mut rng).is_some());
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent(), Player::Human);
    }
}
