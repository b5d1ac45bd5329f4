use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("operation failed because game is over")]
    GameOver,
    #[error("cell coordinates invalid")]
    InvalidCoordinates,
    #[error("you are out of flags")]
    OutOfFlags,
    #[error("cell is already flagged")]
    AlreadyFlagged,
    #[error("cell is already unflagged")]
    AlreadyUnflagged,
    #[error("cell is already dug")]
    AlreadyDug,
    #[error("minefield dimensions should be at least 2x2")]
    InvalidDimensions,
    #[error("a minefield should have at least one mine")]
    NotEnoughMines,
    #[error("the number of mines cannot exceed the size of the minefield")]
    TooManyMines,
}

pub type Result<T> = std::result::Result<T, GameError>;
