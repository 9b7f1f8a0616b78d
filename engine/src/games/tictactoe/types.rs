use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;

/// Row-major cell index, `0..BOARD_SIZE`.
pub type CellIndex = usize;

pub type Board = [Mark; BOARD_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_player(&self) -> bool {
        *self != Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "_"),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(mark) => write!(f, "{} won", mark),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maps the position in the difficulty picker (easy, medium, hard) to a tier.
    pub fn from_index(index: usize) -> Option<Difficulty> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(Difficulty::from_index(0), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_index(1), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_index(2), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_index(3), None);
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_display_parses_back() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Mark::O).to_string(), "O won");
        assert!(GameStatus::Draw.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }
}
