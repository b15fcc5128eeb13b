use crate::domain::Board;
use crate::persistence::files::{atomic_write, board_file};
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// Why a stored board could not be produced from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no saved board")]
    Missing,
    #[error("stored board is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("could not read board file: {0}")]
    Io(#[from] std::io::Error),
}

/// Strict load: missing, unreadable, and corrupt are distinct errors.
/// Timestamps come back as parsed datetimes; `started_at` stays a raw
/// epoch-millisecond number.
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::Missing);
    }
    let content = std::fs::read_to_string(path)?;
    let board = serde_json::from_str(&content)?;
    Ok(board)
}

/// Load the board, treating every failure as "no saved board". Corrupt or
/// unreadable stores are reported on stderr and fall back to `None`; the
/// caller creates a fresh default board.
pub fn load_board_from<P: AsRef<Path>>(path: P) -> Option<Board> {
    match read_board(&path) {
        Ok(board) => Some(board),
        Err(LoadError::Missing) => None,
        Err(err) => {
            eprintln!(
                "Warning: ignoring saved board at {}: {}",
                path.as_ref().display(),
                err
            );
            None
        }
    }
}

/// Load the board from the default location
pub fn load_board() -> Result<Option<Board>> {
    Ok(load_board_from(board_file()?))
}

/// Save the board to a specific path
pub fn save_board_to<P: AsRef<Path>>(path: P, board: &Board) -> Result<()> {
    let json = serde_json::to_string_pretty(board)?;
    atomic_write(path, &json)?;
    Ok(())
}

/// Save the board to the default location
pub fn save_board(board: &Board) -> Result<()> {
    save_board_to(board_file()?, board)
}
