//! Render-facing copy of the board, refilled in place every frame.

use crate::block::Block;
use crate::scoring::display_score;
use crate::types::{BlockColor, MAX_SHAPE_SIDE};

/// Shape and color of the block that spawns next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPreview {
    pub width: u8,
    pub height: u8,
    /// Row-major occupancy inside a `MAX_SHAPE_SIDE` square
    pub cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    pub color: BlockColor,
}

impl NextPreview {
    pub fn from_block(block: &Block) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let shape = block.shape();
        for y in 0..shape.height().min(MAX_SHAPE_SIDE as u8) {
            for x in 0..shape.width().min(MAX_SHAPE_SIDE as u8) {
                cells[y as usize][x as usize] = shape.get(x, y);
            }
        }
        Self {
            width: shape.width(),
            height: shape.height(),
            cells,
            color: block.color,
        }
    }
}

/// Render-facing copy of the board state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major cell colors (y * width + x)
    pub cells: Vec<Option<BlockColor>>,
    pub next: Option<NextPreview>,
    /// Cleared rows
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Color at (x, y); out of bounds reads as empty
    pub fn cell(&self, x: u8, y: u8) -> Option<BlockColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn display_score(&self) -> u32 {
        display_score(self.score)
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
