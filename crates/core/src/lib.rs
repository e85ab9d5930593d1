//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, scripted games via [`RepeatSource`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shape`]: dense boolean cell matrix with rotation and row operations
//! - [`block`]: a shape placed on the board; bottom profile, row clearing, splitting
//! - [`board`]: the engine; grid of block handles, collision, gravity, row clears, `step`
//! - [`rng`]: LCG and the [`BlockSource`] spawn hook
//! - [`scoring`]: display score and score-driven step pacing
//! - [`snapshot`]: render-facing copy of the board
//!
//! # Game Rules
//!
//! - **Spawn**: the next block appears centered on row 0; a blocked spawn ends the game
//! - **Rotation**: 90° in place, undone if it does not fit (no wall kicks)
//! - **Row clears**: each block crossing a full row loses only that row
//! - **Splitting**: a block cut in the middle becomes independent fragments
//! - **Cascade**: unsupported blocks fall after a clear and may complete more rows
//! - **Score**: one point per cleared row
//!
//! # Example
//!
//! ```
//! use tui_cascade_core::Board;
//!
//! // Create a board and play a few ticks
//! let mut board = Board::with_seed(12345);
//! assert!(board.step()); // spawn
//! board.move_left();
//! board.rotate(true);
//! board.move_down(); // hard drop
//! assert!(board.step()); // settle
//!
//! assert!(board.falling().is_none());
//! assert_eq!(board.score(), 0);
//! ```

pub mod block;
pub mod board;
pub mod error;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tui_cascade_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, BottomProfile};
pub use board::{BlockId, Board};
pub use error::{PlaceError, ShapeError};
pub use rng::{BlockSource, RandomSource, RepeatSource, SimpleRng};
pub use scoring::{display_score, tick_interval_from, tick_interval_ms};
pub use shape::Shape;
pub use snapshot::{GameSnapshot, NextPreview};
