use super::error::InvalidMoveError;
use super::types::{BOARD_CELLS, Cell, Mark, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw marks without checking that the position is
    /// reachable by alternating play.
    pub fn from_marks(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.index()]
    }

    pub fn is_legal_move(&self, cell: usize) -> bool {
        match Cell::new(cell) {
            Ok(cell) => self.get(cell).is_empty(),
            Err(_) => false,
        }
    }

    pub fn apply_move(&mut self, cell: usize, player: Player) -> Result<Cell, InvalidMoveError> {
        let cell = Cell::new(cell)?;
        if !self.get(cell).is_empty() {
            return Err(InvalidMoveError::Occupied(cell));
        }
        self.cells[cell.index()] = player.into();
        Ok(cell)
    }

    pub fn undo_move(&mut self, cell: Cell) {
        self.cells[cell.index()] = Mark::Empty;
    }

    /// Search-side placement; callers only pass cells taken from `empty_cells`.
    pub(crate) fn place(&mut self, cell: Cell, player: Player) {
        debug_assert!(self.get(cell).is_empty());
        self.cells[cell.index()] = player.into();
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL
            .into_iter()
            .filter(move |cell| self.get(*cell).is_empty())
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.mark_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_is_legal_move_checks_range_and_occupancy() {
        let mut board = Board::new();
        assert!(!board.is_legal_move(0));
        assert!(!board.is_legal_move(10));
        assert!(board.is_legal_move(5));

        board.apply_move(5, Player::Human).unwrap();
        assert!(!board.is_legal_move(5));
    }

    #[test]
    fn test_apply_move_sets_only_the_target_cell() {
        let mut board = Board::new();
        let cell = board.apply_move(3, Player::Computer).unwrap();

        assert_eq!(cell.number(), 3);
        for other in Cell::ALL {
            let expected = if other == cell { Mark::Computer } else { Mark::Empty };
            assert_eq!(board.get(other), expected);
        }
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply_move(7, Player::Human).unwrap();

        let result = board.apply_move(7, Player::Computer);
        assert_eq!(result, Err(InvalidMoveError::Occupied(Cell::new(7).unwrap())));
        assert_eq!(board.get(Cell::new(7).unwrap()), Mark::Human);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range_cell() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move(12, Player::Human),
            Err(InvalidMoveError::OutOfRange(12))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_undo_move_restores_empty() {
        let mut board = Board::new();
        let cell = board.apply_move(1, Player::Human).unwrap();
        board.undo_move(cell);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_are_ascending_and_skip_marks() {
        let mut board = Board::new();
        board.apply_move(2, Player::Human).unwrap();
        board.apply_move(8, Player::Computer).unwrap();

        let empty: Vec<usize> = board.empty_cells().map(|c| c.number()).collect();
        assert_eq!(empty, vec![1, 3, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn test_is_full() {
        let board = Board::from_marks([Mark::Human; BOARD_CELLS]);
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }
}
