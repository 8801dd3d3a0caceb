use common::games::tictactoe::{Board, Mark};

use crate::config::DisplayConfig;

pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

const ROW_SEPARATOR: &str = "--+---+--";

fn render_grid(symbols: [char; 9]) -> String {
    let rows: Vec<String> = symbols
        .chunks(3)
        .map(|row| format!("{} | {} | {}", row[0], row[1], row[2]))
        .collect();
    let mut grid = rows.join(&format!("\n{}\n", ROW_SEPARATOR));
    grid.push('\n');
    grid
}

pub fn symbol_for(mark: Mark, display: &DisplayConfig) -> char {
    match mark {
        Mark::Empty => display.empty_symbol,
        Mark::Human => display.human_symbol,
        Mark::Computer => display.computer_symbol,
    }
}

pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let marks = *board.cells();
    render_grid(marks.map(|mark| symbol_for(mark, display)))
}

/// The 1-9 labels laid out like the board.
pub fn render_move_guide() -> String {
    render_grid(['1', '2', '3', '4', '5', '6', '7', '8', '9'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Player;

    #[test]
    fn test_move_guide_layout() {
        assert_eq!(
            render_move_guide(),
            "1 | 2 | 3\n--+---+--\n4 | 5 | 6\n--+---+--\n7 | 8 | 9\n"
        );
    }

    #[test]
    fn test_board_uses_configured_symbols() {
        let mut board = Board::new();
        board.apply_move(1, Player::Human).unwrap();
        board.apply_move(5, Player::Computer).unwrap();

        let display = DisplayConfig::default();
        assert_eq!(
            render_board(&board, &display),
            "X | - | -\n--+---+--\n- | O | -\n--+---+--\n- | - | -\n"
        );

        let display = DisplayConfig {
            human_symbol: 'H',
            computer_symbol: 'C',
            empty_symbol: '.',
            ..DisplayConfig::default()
        };
        assert!(render_board(&board, &display).starts_with("H | . | ."));
    }
}
