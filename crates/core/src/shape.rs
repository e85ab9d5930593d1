//! Shape module - dense boolean cell matrix of a block
//!
//! Shapes are stored as a flat, row-major `Vec<bool>` with explicit dimensions.
//! Every mutation (rotation, row clearing, row slicing) keeps `width`/`height`
//! in sync with the buffer, so a shape is always rectangular.
//! Coordinates: (x, y) where x is the local column and y the local row, origin top-left.

use crate::error::ShapeError;
use crate::types::{Template, MAX_SHAPE_SIDE};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major cells (y * width + x)
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from a catalog template
    pub fn from_template(template: Template) -> Self {
        let width = template.width.min(MAX_SHAPE_SIDE as u8);
        let height = template.height.min(MAX_SHAPE_SIDE as u8);
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(template.is_set(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a shape from explicit rows.
    ///
    /// Rows must all have the same length, at least one cell must be occupied,
    /// and neither side may exceed [`MAX_SHAPE_SIDE`].
    ///
    /// ```
    /// use tui_cascade_core::Shape;
    ///
    /// let l = Shape::from_rows(&[[true, true, true], [true, false, false]]).unwrap();
    /// assert_eq!((l.width(), l.height()), (3, 2));
    /// assert_eq!(l.cell_count(), 4);
    /// ```
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        if width > MAX_SHAPE_SIDE || height > MAX_SHAPE_SIDE {
            return Err(ShapeError::TooLarge {
                width,
                height,
                max: MAX_SHAPE_SIDE,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(ShapeError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }

        if !cells.iter().any(|&c| c) {
            return Err(ShapeError::Empty);
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Whether local cell (x, y) is occupied. Out of range is empty.
    pub fn get(&self, x: u8, y: u8) -> bool {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Cells of local row `y` (empty slice when out of range)
    pub fn row(&self, y: u8) -> &[bool] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn is_row_empty(&self, y: u8) -> bool {
        !self.row(y).iter().any(|&c| c)
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Return the shape rotated by 90°.
    ///
    /// Clockwise: `new[r][c] = old[h-1-c][r]`.
    /// Counter-clockwise: `new[r][c] = old[c][w-1-r]`.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let (w, h) = (self.width, self.height);
        // Rotated dimensions swap.
        let (new_w, new_h) = (h, w);
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..new_h {
            for c in 0..new_w {
                let occupied = if clockwise {
                    self.get(r, h - 1 - c)
                } else {
                    self.get(w - 1 - r, c)
                };
                cells.push(occupied);
            }
        }
        Self {
            width: new_w,
            height: new_h,
            cells,
        }
    }

    /// Empty every cell of local row `y`. Out of range rows are ignored.
    pub fn clear_row(&mut self, y: u8) {
        if y >= self.height {
            return;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        for cell in &mut self.cells[start..end] {
            *cell = false;
        }
    }

    /// Copy rows `start..end` into a new shape of the same width
    pub(crate) fn slice_rows(&self, start: u8, end: u8) -> Self {
        let end = end.min(self.height);
        let start = start.min(end);
        let w = self.width as usize;
        Self {
            width: self.width,
            height: end - start,
            cells: self.cells[start as usize * w..end as usize * w].to_vec(),
        }
    }

    /// Convert to nested rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height).map(|y| self.row(y).to_vec()).collect()
    }
}
