use super::board::{LINES, is_board_full};
use super::types::{Board, CellIndex, GameStatus, Mark};

pub fn evaluate_line(board: &Board, player: Mark) -> bool {
    if player == Mark::Empty {
        return false;
    }
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| board[index] == player))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// Returns the first completed line in `LINES` order along with its owner.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, [CellIndex; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            Some((mark, line))
        } else {
            None
        }
    })
}

/// Status after `last_mover` has just played. Only the mover can have
/// completed a line with that move.
pub fn evaluate_status(board: &Board, last_mover: Mark) -> GameStatus {
    if evaluate_line(board, last_mover) {
        return GameStatus::Won(last_mover);
    }
    if is_board_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
