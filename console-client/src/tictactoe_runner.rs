use std::io::{self, BufRead, Write};

use common::games::tictactoe::{Board, GameError, Outcome, Player, TicTacToeGameState};
use common::log;
use thiserror::Error;

use crate::config::DisplayConfig;
use crate::input::{parse_first_player, parse_move};
use crate::render::{CLEAR_SCREEN, render_board, render_move_guide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    Quit,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

pub struct ConsoleRunner<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> ConsoleRunner<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            input,
            output,
            display,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks until the answer is y or n. `None` when input ends first.
    pub fn ask_first_player(&mut self) -> Result<Option<Player>, RunnerError> {
        self.clear()?;
        loop {
            write!(self.output, "First to start?[y/n]: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                writeln!(self.output, "Bye")?;
                return Ok(None);
            };

            if let Some(player) = parse_first_player(&line) {
                return Ok(Some(player));
            }
        }
    }

    pub fn run(&mut self, first_player: Player) -> Result<SessionEnd, RunnerError> {
        let mut state = TicTacToeGameState::new(first_player);
        let mut notice = None;

        while !state.status().is_terminal() {
            match state.current_player() {
                Player::Human => {
                    if !self.human_turn(&mut state, notice.take())? {
                        return Ok(SessionEnd::Quit);
                    }
                }
                Player::Computer => {
                    let cell = state.play_computer_turn()?;
                    notice = Some(format!("Computer played {}", cell));
                }
            }
        }

        self.announce(&state)?;
        Ok(SessionEnd::Finished(state.status()))
    }

    /// Returns `false` when the player leaves.
    fn human_turn(
        &mut self,
        state: &mut TicTacToeGameState,
        mut notice: Option<String>,
    ) -> Result<bool, RunnerError> {
        loop {
            self.clear()?;
            if let Some(message) = notice.take() {
                writeln!(self.output, "{}", message)?;
            }
            self.show_board(state.board())?;
            write!(self.output, "Enter an input from 1-9: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                self.clear()?;
                writeln!(self.output)?;
                writeln!(self.output, "Thank you for playing!")?;
                return Ok(false);
            };

            let cell = match parse_move(&line) {
                Ok(cell) => cell,
                Err(err) => {
                    log!("Rejected input: {}", err);
                    notice = Some("Bad choice".to_string());
                    continue;
                }
            };

            match state.place_mark(Player::Human, cell) {
                Ok(_) => return Ok(true),
                Err(GameError::InvalidMove(err)) => {
                    notice = Some(format!("Invalid move: {}", err));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn announce(&mut self, state: &TicTacToeGameState) -> Result<(), RunnerError> {
        self.clear()?;
        let board = render_board(state.board(), &self.display);
        write!(self.output, "{}", board)?;

        let message = match state.status() {
            Outcome::ComputerWins => "Sorry, the computer won!",
            Outcome::HumanWins => "Congratulations! You beat the computer!",
            Outcome::Draw => "DRAW!",
            Outcome::Ongoing => return Ok(()),
        };
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        if self.display.show_move_guide {
            write!(self.output, "{}", render_move_guide())?;
            writeln!(self.output)?;
        }
        write!(self.output, "{}", render_board(board, &self.display))
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.display.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(script: &str) -> ConsoleRunner<Cursor<Vec<u8>>, Vec<u8>> {
        let display = DisplayConfig {
            clear_screen: false,
            ..DisplayConfig::default()
        };
        ConsoleRunner::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), display)
    }

    fn output_of(runner: ConsoleRunner<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(runner.into_output()).unwrap()
    }

    /// Cycles through 1..9 so every human turn finds a free cell.
    fn scanning_script() -> String {
        (0..5)
            .flat_map(|_| 1..=9)
            .map(|cell| format!("{}\n", cell))
            .collect()
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut runner = scripted("");
        let end = runner.run(Player::Human).unwrap();

        assert_eq!(end, SessionEnd::Quit);
        assert!(output_of(runner).contains("Thank you for playing!"));
    }

    #[test]
    fn test_computer_first_never_loses() {
        let mut runner = scripted(&scanning_script());
        let end = runner.run(Player::Computer).unwrap();

        assert!(matches!(end, SessionEnd::Finished(outcome) if outcome != Outcome::HumanWins));
        let output = output_of(runner);
        assert!(output.contains("Computer played 1"));
        assert!(output.contains("Sorry, the computer won!") || output.contains("DRAW!"));
    }

    #[test]
    fn test_human_first_never_wins() {
        let mut runner = scripted(&scanning_script());
        let end = runner.run(Player::Human).unwrap();

        assert!(matches!(end, SessionEnd::Finished(outcome) if outcome != Outcome::HumanWins));
    }

    #[test]
    fn test_text_input_is_a_bad_choice() {
        let mut runner = scripted("abc\n");
        let end = runner.run(Player::Human).unwrap();

        assert_eq!(end, SessionEnd::Quit);
        let output = output_of(runner);
        assert!(output.contains("Bad choice"));
        assert_eq!(output.matches("Enter an input from 1-9: ").count(), 2);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut runner = scripted("1\n");
        let end = runner.run(Player::Computer).unwrap();

        assert_eq!(end, SessionEnd::Quit);
        let output = output_of(runner);
        assert!(output.contains("Invalid move: cell 1 is already occupied"));
    }

    #[test]
    fn test_out_of_range_cell_is_rejected() {
        let mut runner = scripted("10\n");
        runner.run(Player::Human).unwrap();

        assert!(output_of(runner).contains("Invalid move: cell 10 is out of range"));
    }

    #[test]
    fn test_board_and_guide_are_shown() {
        let mut runner = scripted("");
        runner.run(Player::Human).unwrap();

        let output = output_of(runner);
        assert!(output.contains("1 | 2 | 3"));
        assert!(output.contains("- | - | -"));
        assert!(output.contains("--+---+--"));
    }

    #[test]
    fn test_clear_screen_writes_escape_sequence() {
        let display = DisplayConfig::default();
        let mut runner = ConsoleRunner::new(Cursor::new(Vec::new()), Vec::new(), display);
        runner.run(Player::Human).unwrap();

        assert!(output_of(runner).contains(CLEAR_SCREEN));
    }

    #[test]
    fn test_ask_first_player_repeats_until_answered() {
        let mut runner = scripted("maybe\ny\n");
        assert_eq!(runner.ask_first_player().unwrap(), Some(Player::Human));
        assert_eq!(output_of(runner).matches("First to start?[y/n]: ").count(), 2);

        let mut runner = scripted("N\n");
        assert_eq!(runner.ask_first_player().unwrap(), Some(Player::Computer));
    }

    #[test]
    fn test_ask_first_player_end_of_input_says_bye() {
        let mut runner = scripted("");
        assert_eq!(runner.ask_first_player().unwrap(), None);
        assert!(output_of(runner).contains("Bye"));
    }
}
