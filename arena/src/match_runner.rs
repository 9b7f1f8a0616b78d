use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{
    CellIndex, Difficulty, GameStatus, Mark, TicTacToeGameState, choose_computer_move,
};
use tictactoe_engine::{log, log_debug};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub status: GameStatus,
    pub moves: Vec<CellIndex>,
}

impl MatchRecord {
    pub fn moves_display(&self) -> String {
        self.moves
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
}

impl ArenaSummary {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(_) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => self.unfinished += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws + self.unfinished
    }
}

pub fn run_match(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut SessionRng,
) -> MatchRecord {
    let mut state = TicTacToeGameState::new();
    let mut moves = Vec::new();

    while !state.status().is_over() {
        let mark = state.current_mark();
        let (difficulty, opponent) = match mark {
            Mark::X => (x_difficulty, Mark::O),
            _ => (o_difficulty, Mark::X),
        };

        let board = state.board();
        let Some(index) = choose_computer_move(&board, mark, opponent, difficulty, rng) else {
            log!(
                "{} ({}) found no move after {} moves",
                mark,
                difficulty,
                moves.len()
            );
            break;
        };

        state.apply_move(index, mark);
        moves.push(index);
    }

    MatchRecord {
        status: state.status(),
        moves,
    }
}

pub fn run_arena(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    games: u32,
    rng: &mut SessionRng,
) -> ArenaSummary {
    let mut summary = ArenaSummary::default();
    for game in 1..=games {
        let record = run_match(x_difficulty, o_difficulty, rng);
        log_debug!(
            "Game {}: {} [{}]",
            game,
            record.status,
            record.moves_display()
        );
        summary.record(record.status);
    }
    summary
}
