use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player can see of a board, enough for a full redraw.
///
/// Unlike [`Board`] this never carries the positions of hidden mines, so it is safe to hand to a
/// rendering layer or send over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord,
    pub mine_count: CellCount,
    pub mines_remaining: isize,
    pub state: GameState,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellState>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            mines_remaining: board.mines_remaining(),
            state: board.game_state(),
            triggered_mine: board.triggered_mine(),
            cells: board.cell_states().clone(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellState> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// One line per row: `.` hidden, `F` marked, `*` mine, digits for revealed counts
    pub fn render_text(&self) -> alloc::string::String {
        let mut text = alloc::string::String::with_capacity(self.cells.len() + self.cells.nrows());
        for row in self.cells.rows() {
            for &state in row {
                text.push(match state {
                    CellState::Hidden => '.',
                    CellState::Marked => 'F',
                    CellState::Mine => '*',
                    CellState::Revealed(count) => char::from(b'0' + count),
                });
            }
            text.push('\n');
        }
        text
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self::from_board(board)
    }
}
