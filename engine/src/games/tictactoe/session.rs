use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::{GameMode, TicTacToeSessionSettings};
use super::types::{CellIndex, Difficulty, GameStatus, Mark};
use crate::games::SessionRng;
use crate::log;

/// One game under a fixed mode. The caller drives it: apply the human's
/// click, then ask for the computer's turn when `is_computer_turn` says so.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            settings,
            rng,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.settings.mode.difficulty()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn is_computer(&self, mark: Mark) -> bool {
        match self.settings.mode {
            GameMode::HumanVsHuman => false,
            GameMode::HumanVsComputer { .. } => mark == self.settings.computer_mark,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state.status() == GameStatus::InProgress
            && self.is_computer(self.state.current_mark())
    }

    pub fn place_human_mark(&mut self, index: CellIndex) -> GameStatus {
        let mark = self.state.current_mark();
        if self.is_computer(mark) {
            return self.state.status();
        }
        let status = self.state.apply_move(index, mark);
        self.log_game_over(status);
        status
    }

    /// Returns the cell the computer played, or `None` when it was not the
    /// computer's turn or no move was available.
    pub fn play_computer_turn(&mut self) -> Option<CellIndex> {
        if !self.is_computer_turn() {
            return None;
        }
        let difficulty = self.difficulty()?;

        let input = BotInput::from_game_state(&self.state);
        let Some(index) = calculate_move(difficulty, &input, &mut self.rng) else {
            log!("Computer ({}) has no move available", input.bot_mark);
            return None;
        };

        let status = self.state.apply_move(index, input.bot_mark);
        self.log_game_over(status);
        Some(index)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    fn log_game_over(&self, status: GameStatus) {
        if status.is_over() {
            log!(
                "Game over after {} moves: {}",
                self.state.move_count(),
                status
            );
        }
    }
}
