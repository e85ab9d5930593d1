//! Block module - one piece on the board
//!
//! A block is a [`Shape`] anchored at a board position with a display color.
//! Blocks keep their identity after they settle: clearing a board row removes
//! only the matching local row, and a block whose shape is cut in two splits
//! into independent fragments.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{BlockColor, PieceKind, MAX_SHAPE_SIDE};

/// Board cells directly below the lowest occupied cell of each column
pub type BottomProfile = ArrayVec<(i8, i8), MAX_SHAPE_SIDE>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Board position (x, y) of the shape's top-left corner
    pub origin: (i8, i8),
    pub color: BlockColor,
    shape: Shape,
}

/// `base + delta`, saturating at `i8::MAX`.
///
/// Board sides are at most `i8::MAX` cells, so a saturated coordinate is
/// always out of bounds.
fn offset(base: i8, delta: u8) -> i8 {
    base.saturating_add(delta.min(i8::MAX as u8) as i8)
}

impl Block {
    /// Create a block at the board origin
    pub fn new(shape: Shape, color: BlockColor) -> Self {
        Self {
            origin: (0, 0),
            color,
            shape,
        }
    }

    /// Create a block from a catalog template
    pub fn from_kind(kind: PieceKind, color: BlockColor) -> Self {
        Self::new(Shape::from_template(kind.template()), color)
    }

    /// Move the block to `origin` (builder style)
    pub fn at(mut self, origin: (i8, i8)) -> Self {
        self.origin = origin;
        self
    }

    pub fn x(&self) -> i8 {
        self.origin.0
    }

    pub fn y(&self) -> i8 {
        self.origin.1
    }

    pub fn width(&self) -> u8 {
        self.shape.width()
    }

    pub fn height(&self) -> u8 {
        self.shape.height()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Board row of the last shape row
    pub fn bottom(&self) -> i8 {
        offset(self.y(), self.height()).saturating_sub(1)
    }

    /// Board column one past the last shape column
    pub fn right(&self) -> i8 {
        offset(self.x(), self.width())
    }

    pub fn cell_count(&self) -> usize {
        self.shape.cell_count()
    }

    /// Board coordinates of every occupied cell, row-major
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (ox, oy) = self.origin;
        (0..self.height()).flat_map(move |y| {
            (0..self.width())
                .filter(move |&x| self.shape.get(x, y))
                .map(move |x| (offset(ox, x), offset(oy, y)))
        })
    }

    /// Rotate the shape 90° in place. The origin does not move.
    pub fn rotate(&mut self, clockwise: bool) {
        self.shape = self.shape.rotated(clockwise);
    }

    /// Cells that must be free for the block to fall one row.
    ///
    /// For every column that has an occupied cell, this is the board cell just
    /// below the lowest occupied one. Holes (an empty cell under an occupied
    /// one, as in S, Z or T) are handled by scanning each column bottom-up.
    ///
    /// ```
    /// use tui_cascade_core::{Block, Shape};
    /// use tui_cascade_core::types::BlockColor;
    ///
    /// let l = Shape::from_rows(&[[true, true, true], [true, false, false]]).unwrap();
    /// let block = Block::new(l, BlockColor::Orange);
    /// assert_eq!(block.bottom_profile().as_slice(), &[(0, 2), (1, 1), (2, 1)]);
    /// ```
    pub fn bottom_profile(&self) -> BottomProfile {
        let (ox, oy) = self.origin;
        let mut profile = BottomProfile::new();
        for x in 0..self.width() {
            if let Some(y) = (0..self.height()).rev().find(|&y| self.shape.get(x, y)) {
                profile.push((offset(ox, x), offset(oy, y + 1)));
            }
        }
        profile
    }

    /// Empty local row `row` of the shape (out of range is a no-op).
    ///
    /// The shape may be left with empty rows; [`Block::split_on_empty_rows`]
    /// turns it back into well-formed blocks.
    pub fn clear_row(&mut self, row: u8) {
        self.shape.clear_row(row);
    }

    /// Split the shape into runs of consecutive non-empty rows.
    ///
    /// Each run becomes a new block anchored at `origin.y + run_start`, with the
    /// same column origin, width and color. An entirely empty shape yields no
    /// blocks.
    pub fn split_on_empty_rows(&self) -> Vec<Block> {
        let mut fragments = Vec::new();
        let mut run_start: Option<u8> = None;

        for y in 0..=self.height() {
            let filled = y < self.height() && !self.shape.is_row_empty(y);
            match (run_start, filled) {
                (None, true) => run_start = Some(y),
                (Some(start), false) => {
                    fragments.push(Block {
                        origin: (self.x(), offset(self.y(), start)),
                        color: self.color,
                        shape: self.shape.slice_rows(start, y),
                    });
                    run_start = None;
                }
                _ => {}
            }
        }

        fragments
    }
}
