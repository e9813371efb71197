use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw guess was rejected. The `Display` text is what the player sees.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputError {
    #[error("Please enter a number")]
    Empty,
    #[error("Input must be a valid number")]
    NotANumber,
    #[error("Please enter a whole number")]
    NotWhole,
    #[error("Number must be between 1 and 100")]
    OutOfRange,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game already ended, no new guesses are accepted")]
    AlreadyEnded,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
