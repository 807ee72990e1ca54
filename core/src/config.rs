use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine density preset, fixed for the lifetime of a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Extreme];

    /// Percentage of the board area covered by mines
    pub const fn density_percent(self) -> u8 {
        match self {
            Self::Easy => 10,
            Self::Medium => 30,
            Self::Hard => 50,
            Self::Extreme => 70,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord,
    pub difficulty: Difficulty,
    /// When set, marked cells cannot be revealed, neither directly nor by flood fill
    #[serde(default)]
    pub protect_marks: bool,
}

impl BoardConfig {
    pub fn new(size: Coord, difficulty: Difficulty) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self {
            size,
            difficulty,
            protect_marks: false,
        })
    }

    pub const fn with_protected_marks(mut self, protect_marks: bool) -> Self {
        self.protect_marks = protect_marks;
        self
    }

    /// Re-checks a config that may have been deserialized or built by hand
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            Err(GameError::InvalidConfiguration)
        } else {
            Ok(())
        }
    }

    pub fn total_cells(&self) -> CellCount {
        CellCount::from(self.size).pow(2)
    }

    /// `floor(size² × density / 100)`
    pub fn mine_count(&self) -> CellCount {
        let density = u32::from(self.difficulty.density_percent());
        let mines = u32::from(self.total_cells()) * density / 100;
        CellCount::try_from(mines).unwrap_or(CellCount::MAX)
    }
}
