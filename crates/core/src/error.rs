//! Error types for shape construction and block placement.

use thiserror::Error;

use crate::board::BlockId;

/// Why a block could not be written into the grid.
///
/// Placement validates every target cell before writing anything, so the
/// grid is untouched whenever this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    #[error("cell ({x}, {y}) is already held by another block")]
    Overlap { x: i8, y: i8 },
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: i8, y: i8 },
    #[error("block {0:?} is not on this board")]
    Detached(BlockId),
}

/// Why a row list could not be turned into a [`crate::shape::Shape`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape has no occupied cell")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("shape is {width}x{height}, larger than the {max}x{max} limit")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
}
