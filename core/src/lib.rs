#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::Serialize;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod config;
mod engine;
mod error;
mod generator;
mod snapshot;
mod tile;
mod types;

/// Where the mines are on a square board, fixed once generated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Builds a layout from a square mask, `None` if the mask is empty, not square or too large.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Option<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows == 0 || rows != cols || Coord::try_from(rows).is_err() {
            return None;
        }
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .ok()?;
        Some(Self {
            mine_mask,
            mine_count,
        })
    }

    /// Duplicate coordinates collapse into a single mine.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration);
        }
        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask).ok_or(GameError::InvalidConfiguration)
    }

    pub fn size(&self) -> Coord {
        // square and bounded by `from_mine_mask`
        self.mine_mask.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size && coords.1 < size
    }

    pub fn total_cells(&self) -> CellCount {
        CellCount::from(self.size()).pow(2)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.contains(coords) && self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count();
        // at most eight neighbors
        count as u8
    }

    /// Mine positions in row-major order
    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of a `toggle_mark` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Marked,
    Unmarked,
    /// The command completed the set of marked mines
    Won,
}

impl MarkOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// The terminal state the command moved the game into, if any
    pub const fn game_state_change(self) -> Option<GameState> {
        match self {
            Self::Won => Some(GameState::Won),
            _ => None,
        }
    }
}

/// Result of a `reveal` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Won,
    HitMine,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Won => true,
            HitMine => true,
        }
    }

    /// The terminal state the command moved the game into, if any
    pub const fn game_state_change(self) -> Option<GameState> {
        match self {
            Self::Won => Some(GameState::Won),
            Self::HitMine => Some(GameState::Lost),
            _ => None,
        }
    }
}

/// Merges outcomes of several reveals, a hit mine dominates a win which dominates a plain reveal
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn layout_from_coords_counts_distinct_mines() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 0), (2, 1), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 7);
        assert_eq!(layout.mine_coords().collect::<Vec<_>>(), [(0, 0), (2, 1)]);
    }

    #[test]
    fn layout_rejects_out_of_range_coords() {
        assert_eq!(
            MineLayout::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            MineLayout::from_mine_coords(0, &[]),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn layout_requires_square_non_empty_mask() {
        assert!(MineLayout::from_mine_mask(Array2::default((2, 3))).is_none());
        assert!(MineLayout::from_mine_mask(Array2::default((0, 0))).is_none());
        assert!(MineLayout::from_mine_mask(Array2::default((1, 1))).is_some());
    }

    #[test]
    fn adjacent_count_is_clipped_at_edges() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 1), (1, 0), (2, 2)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((0, 0)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 1);
        assert!(!layout.contains_mine((5, 5)));
    }

    #[test]
    fn reveal_outcomes_merge_by_severity() {
        use RevealOutcome::*;

        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | Revealed, Revealed);
        assert_eq!(NoChange | NoChange, NoChange);
        assert_eq!(HitMine.game_state_change(), Some(GameState::Lost));
        assert!(!NoChange.has_update());
    }
}
