use serde::{Deserialize, Serialize};

use super::types::{Difficulty, Mark};
use crate::config::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer { difficulty: Difficulty },
}

impl GameMode {
    /// Parses the mode picker's output: `"PvP"`, or `"PvAI"` together with
    /// the index chosen in the difficulty dialog.
    pub fn from_selection(mode: &str, difficulty_index: Option<usize>) -> Result<Self, String> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::HumanVsHuman),
            "pvai" => {
                let index = difficulty_index
                    .ok_or_else(|| "PvAI mode requires a difficulty".to_string())?;
                let difficulty = Difficulty::from_index(index)
                    .ok_or_else(|| format!("Difficulty index {} is out of range", index))?;
                Ok(GameMode::HumanVsComputer { difficulty })
            }
            other => Err(format!("Unknown game mode '{}'", other)),
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { difficulty } => Some(*difficulty),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    /// Only consulted in `HumanVsComputer` mode.
    #[serde(default = "default_computer_mark")]
    pub computer_mark: Mark,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

impl TicTacToeSessionSettings {
    pub fn human_vs_human() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            computer_mark: default_computer_mark(),
        }
    }

    pub fn human_vs_computer(difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::HumanVsComputer { difficulty },
            computer_mark: default_computer_mark(),
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::human_vs_human()
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if !self.computer_mark.is_player() {
            return Err("Computer mark must be X or O".to_string());
        }
        Ok(())
    }
}
