use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    /// Opened safe cell with its adjacent mine count
    Revealed(u8),
    /// Opened mine, either the one that was hit or one exposed after losing
    Mine,
    Marked,
}

impl CellState {
    /// Whether reveal or mark commands may still act on the cell
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Marked)
    }

    pub const fn adjacent_mine_count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

/// Read-only view of one board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub is_mine: bool,
    pub state: CellState,
}

impl Cell {
    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    /// Only meaningful once the cell has been revealed as a number
    pub const fn adjacent_mine_count(&self) -> Option<u8> {
        self.state.adjacent_mine_count()
    }
}
