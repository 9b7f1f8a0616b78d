use super::types::{BOARD_SIZE, Board, CellIndex, Mark};

/// Every line that wins when held by one player: rows, then columns, then
/// the two diagonals. Search order elsewhere depends on this order.
pub const LINES: [[CellIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_SIZE]
}

/// Empty cells in ascending index order.
pub fn get_available_moves(board: &Board) -> Vec<CellIndex> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

/// Builds a board from a string of `X`, `O` and `_`; whitespace is ignored.
#[cfg(test)]
pub(crate) fn board_from(cells: &str) -> Board {
    let mut board = empty_board();
    for (index, ch) in cells.chars().filter(|c| !c.is_whitespace()).enumerate() {
        board[index] = match ch {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    board
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn count_marks(board: &Board, mark: Mark) -> usize {
    board.iter().filter(|&&cell| cell == mark).count()
}
