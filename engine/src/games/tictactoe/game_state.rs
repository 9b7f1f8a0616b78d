use super::board::{count_marks, empty_board};
use super::types::{BOARD_SIZE, Board, CellIndex, GameStatus, Mark};
use super::win_detector::evaluate_status;

const STARTING_MARK: Mark = Mark::X;

/// Live state of one game. Illegal moves never mutate it: `apply_move`
/// returns the unchanged status instead of an error.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<CellIndex>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: STARTING_MARK,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        BOARD_SIZE - count_marks(&self.board, Mark::Empty)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn validate_move(&self, index: CellIndex, player: Mark) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if player != self.current_mark {
            return Err(format!("Not {}'s turn", player));
        }

        if index >= BOARD_SIZE {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if self.board[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }

        Ok(())
    }

    pub fn is_valid_move(&self, index: CellIndex, player: Mark) -> bool {
        self.validate_move(index, player).is_ok()
    }

    pub fn apply_move(&mut self, index: CellIndex, player: Mark) -> GameStatus {
        if !self.is_valid_move(index, player) {
            return self.status;
        }

        self.board[index] = player;
        self.last_move = Some(index);
        self.status = evaluate_status(&self.board, player);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        self.status
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[CellIndex]) -> GameStatus {
        let mut status = state.status();
        for &index in moves {
            let mark = state.current_mark();
            status = state.apply_move(index, mark);
        }
        status
    }

    #[test]
    fn test_new_game() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.board(), empty_board());
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.apply_move(4, Mark::X), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.apply_move(0, Mark::O), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board()[4], Mark::X);
        assert_eq!(state.board()[0], Mark::O);
        assert_eq!(state.last_move(), Some(0));
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut state = TicTacToeGameState::new();
        state.apply_move(4, Mark::X);
        let before = state.board();

        assert_eq!(state.apply_move(4, Mark::O), GameStatus::InProgress);
        assert_eq!(state.board(), before);
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(
            state.validate_move(4, Mark::O),
            Err("Cell 4 is already marked".to_string())
        );
    }

    #[test]
    fn test_wrong_player_is_noop() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.apply_move(0, Mark::O), GameStatus::InProgress);
        assert_eq!(state.board(), empty_board());
        assert!(!state.is_valid_move(0, Mark::O));
        assert!(!state.is_valid_move(0, Mark::Empty));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.apply_move(9, Mark::X), GameStatus::InProgress);
        assert_eq!(state.board(), empty_board());
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_top_row_win() {
        let mut state = TicTacToeGameState::new();
        let status = play(&mut state, &[0, 4, 1, 8, 2]);
        assert_eq!(status, GameStatus::Won(Mark::X));
        assert_eq!(state.winner(), Some(Mark::X));
        // the winner stays recorded as the mover
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 4, 1, 8, 2]);
        let before = state.board();

        assert_eq!(state.apply_move(3, Mark::O), GameStatus::Won(Mark::X));
        assert_eq!(state.apply_move(3, Mark::X), GameStatus::Won(Mark::X));
        assert_eq!(state.board(), before);
        assert_eq!(state.move_count(), 5);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new();
        // X O X / X O O / O X X
        let status = play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
        assert_eq!(state.move_count(), 9);
    }

    #[test]
    fn test_never_more_than_nine_marks() {
        let mut state = TicTacToeGameState::new();
        for _ in 0..5 {
            for index in 0..12 {
                state.apply_move(index, Mark::X);
                state.apply_move(index, Mark::O);
            }
        }
        assert!(state.move_count() <= BOARD_SIZE);
        assert!(state.status().is_over());
    }

    #[test]
    fn test_set_cells_never_change() {
        let mut state = TicTacToeGameState::new();
        let mut seen: Board = empty_board();
        for index in [4, 0, 8, 2, 6, 3, 5, 1, 7] {
            state.apply_move(index, state.current_mark());
            for (i, &cell) in state.board().iter().enumerate() {
                if seen[i] != Mark::Empty {
                    assert_eq!(cell, seen[i]);
                }
            }
            seen = state.board();
            if state.status().is_over() {
                break;
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 4, 1]);
        state.reset();

        assert_eq!(state.board(), empty_board());
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.last_move(), None);
    }
}
