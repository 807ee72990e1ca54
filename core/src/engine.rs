use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A square minefield and the player-visible state of every cell on it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    config: BoardConfig,
    mine_layout: MineLayout,
    cells: Array2<CellState>,
    revealed_count: CellCount,
    marked_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Places mines with the given generator.
    ///
    /// Fails on a zero-sized config, or when the generated layout does not have the size and mine
    /// count the config asks for.
    pub fn new(config: BoardConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        let mine_layout = generator.generate(config);
        if mine_layout.size() != config.size || mine_layout.mine_count() != config.mine_count() {
            log::warn!(
                "Rejected {}x{} layout with {} mines, config wants {}x{} with {}",
                mine_layout.size(),
                mine_layout.size(),
                mine_layout.mine_count(),
                config.size,
                config.size,
                config.mine_count()
            );
            return Err(GameError::InvalidConfiguration);
        }
        log::debug!(
            "New {}x{} board, {} difficulty, {} mines",
            mine_layout.size(),
            mine_layout.size(),
            config.difficulty,
            mine_layout.mine_count()
        );
        Ok(Self::with_layout(config, mine_layout))
    }

    /// Shorthand for a randomly mined board from `rng`.
    pub fn random(size: Coord, difficulty: Difficulty, rng: impl rand::Rng) -> Result<Self> {
        let config = BoardConfig::new(size, difficulty)?;
        Self::new(config, RandomMineGenerator::from_rng(rng))
    }

    /// Unchecked, callers make sure the layout matches `config`.
    pub(crate) fn with_layout(config: BoardConfig, mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            config,
            mine_layout,
            cells: Array2::default((size, size).to_nd_index()),
            revealed_count: 0,
            marked_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.mine_layout.size()
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn marked_count(&self) -> CellCount {
        self.marked_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// How many mines have not been marked yet
    pub fn mines_remaining(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.marked_count as isize)
    }

    /// The mine the player revealed, if the game was lost
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        if !self.mine_layout.contains(coords) {
            return None;
        }
        Some(Cell {
            coords,
            is_mine: self.mine_layout[coords],
            state: self.cells[coords.to_nd_index()],
        })
    }

    pub fn cell_state(&self, coords: Coord2) -> Option<CellState> {
        self.mine_layout
            .contains(coords)
            .then(|| self.cells[coords.to_nd_index()])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &state)| {
                let coords = (row as Coord, col as Coord);
                Cell {
                    coords,
                    is_mine: self.mine_layout[coords],
                    state,
                }
            })
    }

    pub(crate) fn cell_states(&self) -> &Array2<CellState> {
        &self.cells
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> MarkOutcome {
        use CellState::*;

        if self.state.is_finished() {
            return MarkOutcome::NoChange;
        }

        let outcome = match self.cell_state(coords) {
            Some(Marked) => {
                self.set_cell(coords, Hidden);
                log::debug!("Unmarked cell at {:?}", coords);
                MarkOutcome::Unmarked
            }
            Some(Hidden) if self.mines_remaining() > 0 => {
                self.set_cell(coords, Marked);
                log::debug!("Marked cell at {:?}, {} left", coords, self.mines_remaining());
                MarkOutcome::Marked
            }
            _ => MarkOutcome::NoChange,
        };

        match self.evaluate_end() {
            Some(GameState::Won) => MarkOutcome::Won,
            _ => outcome,
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() {
            return RevealOutcome::NoChange;
        }

        let outcome = match self.cell_state(coords) {
            Some(state) if self.is_revealable(state) => self.reveal_cell(coords),
            _ => RevealOutcome::NoChange,
        };

        match self.evaluate_end() {
            Some(GameState::Won) => RevealOutcome::Won,
            Some(GameState::Lost) => RevealOutcome::HitMine,
            _ => outcome,
        }
    }

    fn is_revealable(&self, state: CellState) -> bool {
        match state {
            CellState::Hidden => true,
            CellState::Marked => !self.config.protect_marks,
            _ => false,
        }
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.mine_layout[coords] {
            self.set_cell(coords, CellState::Mine);
            self.triggered_mine = Some(coords);
            log::debug!("Revealed mine at {:?}", coords);
            return RevealOutcome::HitMine;
        }

        let count = self.mine_layout.adjacent_mine_count(coords);
        self.set_cell(coords, CellState::Revealed(count));
        log::debug!("Revealed cell at {:?}, mine count: {}", coords, count);

        if count == 0 {
            self.flood_fill(coords);
        }
        RevealOutcome::Revealed
    }

    /// Opens the zero region around `origin` and its numbered border
    fn flood_fill(&mut self, origin: Coord2) {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<_> = self.mine_layout.iter_neighbors(origin).collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let state = self.cells[visit_coords.to_nd_index()];
            if !self.is_revealable(state) {
                continue;
            }

            // neighbors of a zero cell are never mines
            let visit_count = self.mine_layout.adjacent_mine_count(visit_coords);
            self.set_cell(visit_coords, CellState::Revealed(visit_count));
            log::trace!(
                "Flood opened cell at {:?}, mine count: {}",
                visit_coords,
                visit_count
            );

            if visit_count == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    /// Writes a new state while keeping the revealed and marked counters in sync
    fn set_cell(&mut self, coords: Coord2, new_state: CellState) {
        let cell = &mut self.cells[coords.to_nd_index()];
        match *cell {
            CellState::Marked => self.marked_count -= 1,
            CellState::Revealed(_) => self.revealed_count -= 1,
            _ => {}
        }
        match new_state {
            CellState::Marked => self.marked_count += 1,
            CellState::Revealed(_) => self.revealed_count += 1,
            _ => {}
        }
        *cell = new_state;
    }

    /// Every mine is marked and nothing else is
    fn all_mines_marked(&self) -> bool {
        self.marked_count == self.mine_layout.mine_count()
            && self
                .mine_layout
                .mine_coords()
                .all(|coords| self.cells[coords.to_nd_index()] == CellState::Marked)
    }

    fn has_revealed_mine(&self) -> bool {
        self.triggered_mine.is_some()
    }

    /// Runs after every command, returns the new state when the game just ended
    fn evaluate_end(&mut self) -> Option<GameState> {
        if self.all_mines_marked() {
            self.end_game(GameState::Won);
        } else if self.has_revealed_mine() {
            self.end_game(GameState::Lost);
        } else {
            return None;
        }
        Some(self.state)
    }

    fn end_game(&mut self, state: GameState) {
        self.state = state;
        if state == GameState::Lost {
            self.reveal_mines();
        }
        log::debug!(
            "Game ended: {:?}, {} cells revealed, {} marked",
            state,
            self.revealed_count,
            self.marked_count
        );
    }

    fn reveal_mines(&mut self) {
        let mines: alloc::vec::Vec<_> = self.mine_layout.mine_coords().collect();
        for coords in mines {
            self.set_cell(coords, CellState::Mine);
        }
    }
}
