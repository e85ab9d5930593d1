//! Board module - the game engine
//!
//! The board is a width x height grid where each cell is empty or holds the
//! [`BlockId`] of the block occupying it. Blocks live in an arena owned by the
//! board, so many cells can name the same block and "does this cell still
//! belong to that block" is a cheap handle comparison.
//! Coordinates: (x, y) where x grows left to right and y top to bottom.
//!
//! Each [`Board::step`] either spawns a block, lets the falling block drop one
//! row, or settles it. Settling clears every full row (each block crossing the
//! row loses only its own slice and splits if it is cut in two), then lets
//! every unsupported block fall, repeating until no row is full.

use arrayvec::ArrayVec;

use crate::block::Block;
use crate::error::PlaceError;
use crate::rng::{BlockSource, RandomSource};
use crate::snapshot::{GameSnapshot, NextPreview};
use crate::types::{BlockColor, GameAction, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIDE};

/// Occupied cells of one block (at most a full shape box)
type CellList = ArrayVec<(i8, i8), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

/// Handle of a block stored on a [`Board`]
///
/// A handle names one block for its whole life: when a slot is reused the
/// generation changes, so stale handles never match the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId {
    index: u32,
    generation: u32,
}

impl BlockId {
    pub fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    block: Option<Block>,
}

/// Generational slot storage for blocks
#[derive(Debug, Clone, Default)]
struct BlockArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl BlockArena {
    fn alloc(&mut self, block: Block) -> BlockId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.block = Some(block);
                BlockId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    block: Some(block),
                });
                BlockId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        }
    }

    fn slot(&self, id: BlockId) -> Option<&Slot> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
    }

    fn get(&self, id: BlockId) -> Option<&Block> {
        self.slot(id)?.block.as_ref()
    }

    fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)?
            .block
            .as_mut()
    }

    fn take(&mut self, id: BlockId) -> Option<Block> {
        let slot = self
            .slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)?;
        let block = slot.block.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(block)
    }

    fn iter(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.block.as_ref().map(|b| {
                (
                    BlockId {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    b,
                )
            })
        })
    }

    fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

/// The game engine: grid, blocks, falling block and score
#[derive(Debug, Clone)]
pub struct Board<S: BlockSource = RandomSource> {
    width: u8,
    height: u8,
    /// Row-major cells (y * width + x)
    grid: Vec<Option<BlockId>>,
    blocks: BlockArena,
    falling: Option<BlockId>,
    /// Cleared rows
    score: u32,
    game_over: bool,
    source: S,
}

impl Board<RandomSource> {
    /// Default-sized board with random spawns from `seed`
    pub fn with_seed(seed: u32) -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, RandomSource::new(seed))
    }
}

impl Default for Board<RandomSource> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

impl<S: BlockSource> Board<S> {
    /// Create an empty board of `width` x `height` cells.
    ///
    /// Dimensions are clamped to `1..=i8::MAX` so every cell has an `i8`
    /// coordinate.
    pub fn new(width: u8, height: u8, source: S) -> Self {
        let width = width.clamp(1, i8::MAX as u8);
        let height = height.clamp(1, i8::MAX as u8);
        Self {
            width,
            height,
            grid: vec![None; width as usize * height as usize],
            blocks: BlockArena::default(),
            falling: None,
            score: 0,
            game_over: false,
            source,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of cleared rows
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Option<BlockId>> {
        self.index(x, y).map(|i| self.grid[i])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Display color of the block at (x, y), if any
    pub fn color_at(&self, x: i8, y: i8) -> Option<BlockColor> {
        let id = self.get(x, y)??;
        self.blocks.get(id).map(|b| b.color)
    }

    /// Row-major view of the grid
    pub fn grid(&self) -> &[Option<BlockId>] {
        &self.grid
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Every block on the board, including the falling one
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.blocks.iter()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn falling_id(&self) -> Option<BlockId> {
        self.falling
    }

    pub fn falling(&self) -> Option<&Block> {
        self.falling.and_then(|id| self.blocks.get(id))
    }

    /// Lookahead of the block that will spawn next
    pub fn next_block(&self) -> Option<&Block> {
        self.source.peek()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= self.height as i8 {
            return false;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        self.grid[start..end].iter().all(|cell| cell.is_some())
    }

    fn cells_of(&self, id: BlockId) -> Option<CellList> {
        self.blocks.get(id).map(|b| b.occupied_cells().collect())
    }

    /// Check whether block `id` can drop one row.
    ///
    /// False when its last row is on the bottom edge, or when a cell of its
    /// bottom profile is held by a different block.
    pub fn can_fall(&self, id: BlockId) -> bool {
        let Some(block) = self.blocks.get(id) else {
            return false;
        };

        if block.bottom() >= self.height as i8 - 1 {
            return false;
        }

        block
            .bottom_profile()
            .iter()
            .all(|&(x, y)| match self.get(x, y) {
                Some(Some(other)) => other == id,
                Some(None) => true,
                None => false,
            })
    }

    /// Write block `id` into the grid.
    ///
    /// Every target cell is checked before anything is written, so on error
    /// the grid is exactly as it was.
    pub fn insert(&mut self, id: BlockId) -> Result<(), PlaceError> {
        let cells = self.cells_of(id).ok_or(PlaceError::Detached(id))?;

        for &(x, y) in &cells {
            match self.get(x, y) {
                None => return Err(PlaceError::OutOfBounds { x, y }),
                Some(Some(other)) if other != id => return Err(PlaceError::Overlap { x, y }),
                Some(_) => {}
            }
        }

        for (x, y) in cells {
            if let Some(i) = self.index(x, y) {
                self.grid[i] = Some(id);
            }
        }

        Ok(())
    }

    /// Clear block `id` from the grid, only where cells still name it
    pub fn remove(&mut self, id: BlockId) {
        let Some(cells) = self.cells_of(id) else {
            return;
        };

        for (x, y) in cells {
            if let Some(i) = self.index(x, y) {
                if self.grid[i] == Some(id) {
                    self.grid[i] = None;
                }
            }
        }
    }

    fn set_origin(&mut self, id: BlockId, origin: (i8, i8)) {
        if let Some(block) = self.blocks.get_mut(id) {
            block.origin = origin;
        }
    }

    /// Put a block back where it just was.
    ///
    /// Its cells were held by `id` a moment ago and nothing else wrote to the
    /// grid since, so this cannot conflict.
    fn reinsert(&mut self, id: BlockId) {
        let restored = self.insert(id);
        debug_assert!(restored.is_ok(), "reinsert of {:?} failed: {:?}", id, restored);
    }

    /// Shift block `id` one column (`dx` is -1 or +1).
    ///
    /// Out-of-board moves are rejected without touching anything; a move into
    /// another block is rolled back. Returns whether the block moved.
    pub fn move_horizontal(&mut self, id: BlockId, dx: i8) -> bool {
        let Some(block) = self.blocks.get(id) else {
            return false;
        };

        let old = block.origin;
        let new_x = old.0 + dx;
        if new_x < 0 || new_x as i16 + block.width() as i16 > self.width as i16 {
            return false;
        }

        self.remove(id);
        self.set_origin(id, (new_x, old.1));
        if self.insert(id).is_ok() {
            return true;
        }

        self.set_origin(id, old);
        self.reinsert(id);
        false
    }

    /// Drop block `id` by up to `max_steps` rows; returns rows moved
    pub fn move_vertical(&mut self, id: BlockId, max_steps: u8) -> u8 {
        if self.blocks.get(id).is_none() {
            return 0;
        }

        self.remove(id);

        let mut moved = 0;
        while moved < max_steps && self.can_fall(id) {
            if let Some(block) = self.blocks.get_mut(id) {
                block.origin.1 += 1;
            }
            moved += 1;
        }

        self.reinsert(id);
        moved
    }

    /// Rotate block `id` in place, undoing the rotation if it does not fit
    fn rotate_block(&mut self, id: BlockId, clockwise: bool) -> bool {
        if self.blocks.get(id).is_none() {
            return false;
        }

        self.remove(id);
        if let Some(block) = self.blocks.get_mut(id) {
            block.rotate(clockwise);
        }
        if self.insert(id).is_ok() {
            return true;
        }

        if let Some(block) = self.blocks.get_mut(id) {
            block.rotate(!clockwise);
        }
        self.reinsert(id);
        false
    }

    /// Rotate the falling block. No wall kicks: a rotation that overlaps or
    /// leaves the board is undone.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        match self.falling {
            Some(id) if !self.game_over => self.rotate_block(id, clockwise),
            _ => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        match self.falling {
            Some(id) if !self.game_over => self.move_horizontal(id, -1),
            _ => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.falling {
            Some(id) if !self.game_over => self.move_horizontal(id, 1),
            _ => false,
        }
    }

    /// Hard drop: move the falling block as far down as it goes.
    ///
    /// The block stays active; the next [`Board::step`] settles it.
    pub fn move_down(&mut self) -> u8 {
        match self.falling {
            Some(id) if !self.game_over => self.move_vertical(id, self.height),
            _ => 0,
        }
    }

    /// Apply a player action. `Pause` and `Restart` belong to the game loop
    /// and are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::HardDrop => self.move_down() > 0,
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    /// Remove board row `y` from block `id` and replace the block by its
    /// remaining fragments.
    fn cut_block_row(&mut self, id: BlockId, y: i8) {
        self.remove(id);
        let Some(mut block) = self.blocks.take(id) else {
            return;
        };
        if self.falling == Some(id) {
            self.falling = None;
        }

        let local = y - block.y();
        if (0..block.height() as i8).contains(&local) {
            block.clear_row(local as u8);
        }

        for fragment in block.split_on_empty_rows() {
            let fid = self.blocks.alloc(fragment);
            // Fragments cover a subset of the cells just released.
            self.reinsert(fid);
        }
    }

    /// Clear every full row, scanning bottom to top.
    ///
    /// Each distinct block crossing a full row loses its own slice of that row
    /// and is split into fragments where the cut leaves empty rows. Returns the
    /// number of rows cleared, which is also added to the score.
    pub fn resolve_full_rows(&mut self) -> u32 {
        let mut cleared = 0;

        for y in (0..self.height as i8).rev() {
            if !self.is_row_full(y) {
                continue;
            }

            let start = y as usize * self.width as usize;
            let mut owners: Vec<BlockId> = Vec::new();
            for cell in &self.grid[start..start + self.width as usize] {
                if let Some(id) = *cell {
                    if !owners.contains(&id) {
                        owners.push(id);
                    }
                }
            }

            for id in owners {
                self.cut_block_row(id, y);
            }
            cleared += 1;
        }

        self.score += cleared;
        cleared
    }

    /// Let every resting block fall as far as it can.
    ///
    /// Scans rows from just above the bottom up to the top, left to right, and
    /// hard-drops each settled block that can fall. Passes repeat until one
    /// moves nothing. Returns whether any block moved.
    pub fn apply_gravity(&mut self) -> bool {
        let mut moved_any = false;

        loop {
            let mut moved = false;
            for y in (0..self.height as i8 - 1).rev() {
                for x in 0..self.width as i8 {
                    let Some(Some(id)) = self.get(x, y) else {
                        continue;
                    };
                    if Some(id) == self.falling || !self.can_fall(id) {
                        continue;
                    }
                    if self.move_vertical(id, self.height) > 0 {
                        moved = true;
                    }
                }
            }

            if !moved {
                break;
            }
            moved_any = true;
        }

        moved_any
    }

    /// Detach the falling block and resolve clears and gravity until stable
    fn settle(&mut self) {
        self.falling = None;
        loop {
            let cleared = self.resolve_full_rows();
            self.apply_gravity();
            // Falling blocks can complete new rows; stop once a pass clears none.
            if cleared == 0 {
                break;
            }
        }
    }

    /// Spawn the next block at the top, horizontally centered.
    /// Returns false (and ends the game) if the spawn cells are taken.
    fn spawn(&mut self) -> bool {
        let block = self.source.next_block();
        let x = (self.width as i8 - block.width() as i8) / 2;
        let id = self.blocks.alloc(block.at((x, 0)));

        match self.insert(id) {
            Ok(()) => {
                self.falling = Some(id);
                true
            }
            Err(_) => {
                self.blocks.take(id);
                self.game_over = true;
                false
            }
        }
    }

    /// Advance the game by one tick. Returns false once the game is over.
    ///
    /// - No falling block: spawn one; a blocked spawn ends the game.
    /// - Falling block that can drop: move it down one row.
    /// - Otherwise: settle it, clearing rows and applying gravity.
    pub fn step(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        match self.falling {
            None => self.spawn(),
            Some(id) => {
                if self.can_fall(id) {
                    self.move_vertical(id, 1);
                } else {
                    self.settle();
                }
                true
            }
        }
    }

    /// Write a render snapshot into `out`, reusing its allocation.
    ///
    /// `out.paused` is owned by the game loop and left untouched.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.width;
        out.height = self.height;
        out.cells.clear();
        out.cells.extend(
            self.grid
                .iter()
                .map(|cell| cell.and_then(|id| self.blocks.get(id)).map(|b| b.color)),
        );
        out.score = self.score;
        out.game_over = self.game_over;
        out.next = self.next_block().map(NextPreview::from_block);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RepeatSource;
    use crate::shape::Shape;
    use crate::types::PieceKind;

    const T: bool = true;
    const F: bool = false;

    fn board(width: u8, height: u8) -> Board<RepeatSource> {
        Board::new(
            width,
            height,
            RepeatSource::of_kind(PieceKind::O, BlockColor::Yellow),
        )
    }

    fn place(board: &mut Board<RepeatSource>, rows: &[&[bool]], origin: (i8, i8)) -> BlockId {
        let block = Block::new(Shape::from_rows(rows).unwrap(), BlockColor::Green).at(origin);
        let id = board.blocks.alloc(block);
        board.insert(id).unwrap();
        id
    }

    #[test]
    fn test_board_index_calculation() {
        let b = board(10, 20);
        assert_eq!(b.index(0, 0), Some(0));
        assert_eq!(b.index(9, 0), Some(9));
        assert_eq!(b.index(0, 1), Some(10));
        assert_eq!(b.index(9, 19), Some(199));
        assert_eq!(b.index(-1, 0), None);
        assert_eq!(b.index(10, 0), None);
        assert_eq!(b.index(0, 20), None);
    }

    #[test]
    fn test_arena_reuses_freed_slots() {
        let mut arena = BlockArena::default();
        let a = arena.alloc(Block::from_kind(PieceKind::I, BlockColor::Cyan));
        let b = arena.alloc(Block::from_kind(PieceKind::O, BlockColor::Cyan));
        assert_eq!(arena.len(), 2);
        assert!(arena.take(a).is_some());
        assert!(arena.take(a).is_none());
        assert_eq!(arena.len(), 1);
        let c = arena.alloc(Block::from_kind(PieceKind::T, BlockColor::Cyan));
        assert_eq!(c.index(), a.index());
        assert_ne!(c, a);
        assert_ne!(c, b);
        assert!(arena.get(a).is_none());
        assert!(arena.get(c).is_some());
    }

    #[test]
    fn test_insert_overlap_leaves_grid_unchanged() {
        let mut b = board(10, 20);
        place(&mut b, &[&[T, T], &[T, T]], (4, 10));
        let before = b.grid.clone();

        let other =
            Block::new(Shape::from_rows(&[[T, T, T]]).unwrap(), BlockColor::Red).at((3, 11));
        let id = b.blocks.alloc(other);
        assert_eq!(b.insert(id), Err(PlaceError::Overlap { x: 4, y: 11 }));
        assert_eq!(b.grid, before);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut b = board(10, 20);
        let id = b
            .blocks
            .alloc(Block::from_kind(PieceKind::I, BlockColor::Cyan).at((8, 0)));
        assert_eq!(b.insert(id), Err(PlaceError::OutOfBounds { x: 10, y: 0 }));
        assert!(b.grid.iter().all(Option::is_none));
    }

    #[test]
    fn test_remove_only_clears_own_cells() {
        let mut b = board(10, 20);
        let a = place(&mut b, &[&[T]], (2, 2));
        let stale = b.blocks.alloc(Block::from_kind(PieceKind::O, BlockColor::Red).at((2, 2)));
        b.remove(stale);
        assert_eq!(b.get(2, 2), Some(Some(a)));
        b.remove(a);
        assert_eq!(b.get(2, 2), Some(None));
    }

    #[test]
    fn test_can_fall_bottom_edge_and_support() {
        let mut b = board(10, 20);
        let floor = place(&mut b, &[&[T, T, T]], (0, 19));
        assert!(!b.can_fall(floor));

        let l = place(&mut b, &[&[T, T, T], &[T, F, F]], (0, 16));
        assert!(b.can_fall(l));

        // Something under the overhang blocks the fall.
        let post = place(&mut b, &[&[T]], (2, 17));
        assert!(!b.can_fall(l));
        b.remove(post);
        assert!(b.can_fall(l));
    }

    #[test]
    fn test_move_horizontal_bounds_and_overlap() {
        let mut b = board(10, 20);
        let id = place(&mut b, &[&[T, T]], (0, 5));
        assert!(!b.move_horizontal(id, -1));
        assert_eq!(b.block(id).unwrap().origin, (0, 5));

        place(&mut b, &[&[T]], (3, 5));
        assert!(b.move_horizontal(id, 1));
        assert_eq!(b.get(0, 5), Some(None));
        assert!(!b.move_horizontal(id, 1));
        assert_eq!(b.block(id).unwrap().origin, (1, 5));
        assert_eq!(b.get(1, 5), Some(Some(id)));
        assert_eq!(b.get(2, 5), Some(Some(id)));
    }

    #[test]
    fn test_move_vertical_stops_on_support() {
        let mut b = board(10, 20);
        place(&mut b, &[&[T]], (1, 19));
        let id = place(&mut b, &[&[T, T]], (0, 0));
        assert_eq!(b.move_vertical(id, 3), 3);
        assert_eq!(b.block(id).unwrap().y(), 3);
        assert_eq!(b.move_vertical(id, 20), 15);
        assert_eq!(b.block(id).unwrap().y(), 18);
    }

    #[test]
    fn test_rotation_rollback_on_wall() {
        let mut b = Board::new(
            10,
            20,
            RepeatSource::of_kind(PieceKind::I, BlockColor::Cyan),
        );
        assert!(b.step());
        let id = b.falling_id().unwrap();
        assert!(b.rotate(true));
        while b.move_right() {}
        assert_eq!(b.block(id).unwrap().x(), 9);

        // Horizontal at x=9 would leave the board.
        let grid = b.grid.clone();
        assert!(!b.rotate(true));
        assert_eq!(b.grid, grid);
        assert_eq!(b.block(id).unwrap().width(), 1);
    }

    #[test]
    fn test_largest_board_rejects_moves_past_the_edge() {
        let mut b = Board::new(
            127,
            127,
            RepeatSource::of_kind(PieceKind::I, BlockColor::Cyan),
        );
        assert!(b.step());
        let id = b.falling_id().unwrap();
        assert!(b.rotate(true));
        while b.move_right() {}
        assert_eq!(b.block(id).unwrap().x(), 126);

        // Horizontal at x=126 would reach column 129.
        let grid = b.grid.clone();
        assert!(!b.rotate(true));
        assert!(!b.rotate(false));
        assert_eq!(b.grid, grid);

        // Back to horizontal on the floor; vertical would reach row 129.
        while b.move_left() {}
        assert!(b.rotate(false));
        b.move_down();
        assert_eq!(b.block(id).unwrap().y(), 126);
        assert!(!b.rotate(true));
        assert_eq!(b.block(id).unwrap().height(), 1);

        let stray = b
            .blocks
            .alloc(Block::from_kind(PieceKind::I, BlockColor::Red).at((125, 0)));
        assert_eq!(b.insert(stray), Err(PlaceError::OutOfBounds { x: 127, y: 0 }));
    }

    #[test]
    fn test_resolve_full_row_shared_by_two_blocks() {
        let mut b = board(4, 6);
        // Two 2x2 blocks sharing rows 4 and 5; clear row 5 only.
        let left = place(&mut b, &[&[T, T], &[T, T]], (0, 4));
        let right = place(&mut b, &[&[F, T], &[T, T]], (2, 4));
        assert!(b.is_row_full(5));
        assert!(!b.is_row_full(4));

        assert_eq!(b.resolve_full_rows(), 1);
        assert_eq!(b.score(), 1);
        assert!(b.block(left).is_none());
        assert!(b.block(right).is_none());
        assert_eq!(b.block_count(), 2);

        for x in 0..4 {
            assert_eq!(b.get(x, 5), Some(None));
        }
        assert!(b.is_occupied(0, 4));
        assert!(b.is_occupied(1, 4));
        assert!(!b.is_occupied(2, 4));
        assert!(b.is_occupied(3, 4));
        assert!(b.blocks().all(|(_, blk)| blk.height() == 1 && blk.y() == 4));
    }

    #[test]
    fn test_resolve_splits_block_cut_in_middle() {
        let mut b = board(3, 6);
        let bar = place(&mut b, &[&[T], &[T], &[T]], (0, 3));
        place(&mut b, &[&[T, T]], (1, 4));

        assert_eq!(b.resolve_full_rows(), 1);
        assert!(b.block(bar).is_none());
        let mut parts: Vec<_> = b.blocks().map(|(_, blk)| blk.origin).collect();
        parts.sort();
        assert_eq!(parts, vec![(0, 3), (0, 5)]);
    }

    #[test]
    fn test_gravity_reaches_fixpoint() {
        let mut b = board(4, 8);
        // A hook resting on a post that is itself unsupported.
        let post = place(&mut b, &[&[T]], (3, 4));
        let hook = place(&mut b, &[&[F, T], &[T, T]], (2, 2));
        assert!(!b.can_fall(hook));
        assert!(b.can_fall(post));

        assert!(b.apply_gravity());
        assert!(b.blocks().all(|(id, _)| !b.can_fall(id)));
        assert_eq!(b.block(post).unwrap().y(), 7);
        assert_eq!(b.block(hook).unwrap().bottom(), 6);
        assert!(!b.apply_gravity());
    }

    #[test]
    fn test_step_spawns_centered_and_falls() {
        let mut b = board(10, 20);
        assert!(b.step());
        let id = b.falling_id().unwrap();
        assert_eq!(b.block(id).unwrap().origin, (4, 0));
        assert!(b.step());
        assert_eq!(b.block(id).unwrap().origin, (4, 1));
    }

    #[test]
    fn test_step_after_game_over_stays_false() {
        let mut b = board(4, 2);
        assert!(b.step());
        assert!(b.step());
        assert!(b.falling_id().is_none());
        assert!(!b.step());
        assert!(b.is_game_over());
        assert!(!b.step());
        assert!(!b.move_left());
    }

    #[test]
    fn test_snapshot_colors() {
        let mut b = board(10, 20);
        place(&mut b, &[&[T]], (0, 19));
        let snap = b.snapshot();
        assert_eq!(snap.cells.len(), 200);
        assert_eq!(snap.cell(0, 19), Some(BlockColor::Green));
        assert_eq!(snap.cell(1, 19), None);
        assert!(snap.next.is_some());
    }
}
