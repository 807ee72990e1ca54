use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}

/// Hands out a prebuilt layout, used for scripted boards and replays.
///
/// `Board::new` still checks the layout against the config, so it must have the config's size
/// and the mine count its difficulty implies.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    layout: MineLayout,
}

impl FixedMineGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, _config: BoardConfig) -> MineLayout {
        self.layout
    }
}
