use serde::{Deserialize, Serialize};

use crate::GameStatus;

/// Raw state of one grid position. `is_mine` and `mines_around` are fixed at
/// construction; `is_flagged` toggles and `is_dug` is set at most once. A cell
/// is never flagged and dug at the same time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Cell {
    pub is_mine: bool,
    pub mines_around: u8,
    pub is_flagged: bool,
    pub is_dug: bool,
}

impl Cell {
    /// Projects the raw state to what a front end should draw, given the
    /// overall game status.
    pub(crate) fn status(self, game: GameStatus) -> CellStatus {
        match game {
            GameStatus::Lost => {
                if self.is_flagged {
                    return if self.is_mine {
                        CellStatus::Flagged
                    } else {
                        CellStatus::FlaggedWrong
                    };
                }
                if self.is_mine {
                    return if self.is_dug {
                        CellStatus::Exploded
                    } else {
                        CellStatus::Mine
                    };
                }
            }
            // a won board shows every mine as flagged, placed or not
            GameStatus::Won => {
                if self.is_mine {
                    return CellStatus::Flagged;
                }
            }
            GameStatus::On => {}
        }

        if self.is_flagged {
            CellStatus::Flagged
        } else if !self.is_dug {
            CellStatus::Hidden
        } else {
            CellStatus::Open(self.mines_around)
        }
    }
}

/// Displayable status of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    /// Not yet revealed and not flagged.
    Hidden,
    /// Revealed, with the count of mines in the 8-neighborhood (0 to 8).
    Open(u8),
    /// Flagged by the player, or a mine shown flagged after a win.
    Flagged,
    /// A flag that turned out to sit on a safe cell, shown after a loss.
    FlaggedWrong,
    /// An unrevealed mine, shown after a loss.
    Mine,
    /// The mine that was dug and ended the game.
    Exploded,
    /// Out-of-range coordinates.
    Unknown,
}
