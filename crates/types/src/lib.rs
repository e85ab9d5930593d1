//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered for the spawned block, row 0
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 400 | Interval between engine steps at score 0 |
//! | `TICK_DECAY_MS` | 30 | Interval reduction per decay threshold |
//! | `TICK_DECAY_SCORE` | 5 | Cleared rows per interval reduction |
//! | `MIN_TICK_MS` | 100 | Fastest step interval |
//! | `FRAME_MS` | 16 | Input poll / redraw budget (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_cascade_types::{BlockColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Templates are small rectangular bit masks
//! let t = PieceKind::T.template();
//! assert_eq!((t.width, t.height), (3, 2));
//! assert!(t.is_set(1, 1));
//!
//! assert_eq!(BlockColor::ALL.len(), 7);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Largest side of any block shape.
///
/// Every template fits in a 4x4 box and neither rotation nor row clearing can
/// grow a shape past it.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Step interval at score 0 (400ms per engine step)
pub const BASE_TICK_MS: u32 = 400;

/// Step interval reduction applied once per `TICK_DECAY_SCORE` cleared rows
pub const TICK_DECAY_MS: u32 = 30;

/// Cleared rows needed for each step interval reduction
pub const TICK_DECAY_SCORE: u32 = 5;

/// Fastest allowed step interval
pub const MIN_TICK_MS: u32 = 100;

/// Input poll / redraw budget for the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points shown per cleared row
pub const SCORE_DISPLAY_MULTIPLIER: u32 = 100;

/// A block shape template: `height` rows of `width` bits.
///
/// Bit `x` of `rows[y]` is the cell at column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template {
    pub width: u8,
    pub height: u8,
    pub rows: [u8; MAX_SHAPE_SIDE],
}

impl Template {
    pub const fn new(width: u8, height: u8, rows: [u8; MAX_SHAPE_SIDE]) -> Self {
        Self {
            width,
            height,
            rows,
        }
    }

    /// Check whether the template occupies local cell (x, y)
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.rows[y as usize] & (1 << x) != 0
    }
}

/// The seven tetromino templates used for random spawns
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped, stem down
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Catalog order used by random selection
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Spawn-orientation template for this kind
    pub const fn template(self) -> Template {
        match self {
            PieceKind::I => Template::new(4, 1, [0b1111, 0, 0, 0]),
            PieceKind::O => Template::new(2, 2, [0b11, 0b11, 0, 0]),
            PieceKind::T => Template::new(3, 2, [0b111, 0b010, 0, 0]),
            PieceKind::S => Template::new(3, 2, [0b110, 0b011, 0, 0]),
            PieceKind::Z => Template::new(3, 2, [0b011, 0b110, 0, 0]),
            PieceKind::J => Template::new(3, 2, [0b001, 0b111, 0, 0]),
            PieceKind::L => Template::new(3, 2, [0b100, 0b111, 0, 0]),
        }
    }
}

/// Display color of a block.
///
/// Colors are chosen independently of the template at spawn and carry no game
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Magenta,
    Green,
    Red,
    Blue,
    Orange,
}

impl BlockColor {
    pub const ALL: [BlockColor; 7] = [
        BlockColor::Cyan,
        BlockColor::Yellow,
        BlockColor::Magenta,
        BlockColor::Green,
        BlockColor::Red,
        BlockColor::Blue,
        BlockColor::Orange,
    ];

    /// 24-bit RGB value used by renderers
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BlockColor::Cyan => (80, 220, 220),
            BlockColor::Yellow => (240, 220, 80),
            BlockColor::Magenta => (200, 120, 220),
            BlockColor::Green => (100, 220, 120),
            BlockColor::Red => (220, 80, 80),
            BlockColor::Blue => (80, 120, 220),
            BlockColor::Orange => (255, 165, 0),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Movement and rotation map onto engine commands; `Pause` and `Restart`
/// are handled by the game loop that owns the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the falling block one cell left
    MoveLeft,
    /// Move the falling block one cell right
    MoveRight,
    /// Drop the falling block as far as it can go
    HardDrop,
    /// Rotate the falling block 90° clockwise
    RotateCw,
    /// Rotate the falling block 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}
