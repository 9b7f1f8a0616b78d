mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{LINES, count_marks, empty_board, get_available_moves, is_board_full};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, WIN_SCORE, calculate_blocking_move, calculate_minimax_move,
    calculate_move, calculate_random_move, choose_computer_move, find_blocking_move,
};
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use settings::{GameMode, TicTacToeSessionSettings};
pub use types::{BOARD_SIZE, Board, CellIndex, Difficulty, GameStatus, Mark};
pub use win_detector::{check_win, check_win_with_line, evaluate_line, evaluate_status};
