use super::board::{LINES, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Board, CellIndex, Difficulty, Mark};
use super::win_detector::evaluate_line;
use crate::games::SessionRng;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark, opponent_mark: Mark) -> Self {
        Self {
            board,
            bot_mark,
            opponent_mark,
        }
    }

    /// The bot plays whoever is to move in `state`.
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        let bot_mark = state.current_mark();
        Self {
            board: state.board(),
            bot_mark,
            opponent_mark: bot_mark.opponent().unwrap_or(Mark::Empty),
        }
    }

    fn has_valid_marks(&self) -> bool {
        self.bot_mark.is_player()
            && self.opponent_mark.is_player()
            && self.bot_mark != self.opponent_mark
    }
}

#[derive(Clone, Copy, Debug)]
struct MoveCandidate {
    index: CellIndex,
    score: i32,
}

pub fn choose_computer_move(
    board: &Board,
    computer_mark: Mark,
    opponent_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<CellIndex> {
    let input = BotInput::new(*board, computer_mark, opponent_mark);
    calculate_move(difficulty, &input, rng)
}

/// `None` means there is no move to make: the board is full or the markers
/// are not two distinct players.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<CellIndex> {
    if !input.has_valid_marks() {
        return None;
    }
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => calculate_blocking_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<CellIndex> {
    let available_moves = get_available_moves(&input.board);
    rng.choose(&available_moves).copied()
}

/// Blocks the opponent's first open line, otherwise plays randomly. It does
/// not look for its own winning move first.
pub fn calculate_blocking_move(input: &BotInput, rng: &mut SessionRng) -> Option<CellIndex> {
    find_blocking_move(&input.board, input.opponent_mark)
        .or_else(|| calculate_random_move(input, rng))
}

/// First line in `LINES` order where `opponent_mark` holds two cells and the
/// third is empty; returns that empty cell.
pub fn find_blocking_move(board: &Board, opponent_mark: Mark) -> Option<CellIndex> {
    if !opponent_mark.is_player() {
        return None;
    }
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&index| board[index] == opponent_mark)
            .count();
        let mut empty = line.iter().filter(|&&index| board[index] == Mark::Empty);
        match (owned, empty.next()) {
            (2, Some(&index)) => Some(index),
            _ => None,
        }
    })
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<CellIndex> {
    if !input.has_valid_marks() {
        return None;
    }
    let mut board = input.board;
    let (_, best_move) = minimax(
        &mut board,
        input.bot_mark,
        input.bot_mark,
        input.opponent_mark,
    );
    best_move
}

/// Full-depth search without pruning. Scores are not adjusted for depth, so
/// among equal outcomes the lowest cell index wins.
fn minimax(
    board: &mut Board,
    mover: Mark,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> (i32, Option<CellIndex>) {
    if evaluate_line(board, opponent_mark) {
        return (LOSS_SCORE, None);
    }
    if evaluate_line(board, bot_mark) {
        return (WIN_SCORE, None);
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return (DRAW_SCORE, None);
    }

    let next_mover = if mover == bot_mark {
        opponent_mark
    } else {
        bot_mark
    };

    let mut candidates = Vec::with_capacity(available_moves.len());
    for index in available_moves {
        board[index] = mover;
        let (score, _) = minimax(board, next_mover, bot_mark, opponent_mark);
        board[index] = Mark::Empty;

        candidates.push(MoveCandidate { index, score });
    }

    let maximizing = mover == bot_mark;
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        let better = if maximizing {
            candidate.score > best.score
        } else {
            candidate.score < best.score
        };
        if better {
            best = *candidate;
        }
    }

    (best.score, Some(best.index))
}
