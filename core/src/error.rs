use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: size must be positive")]
    InvalidConfiguration,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Unknown difficulty name")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
