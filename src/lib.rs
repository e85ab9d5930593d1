//! TUI Cascade (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_cascade::{core,input,term,types}`
//! and holds the runtime configuration and game session used by the terminal
//! binary.

pub mod config;
pub mod session;

pub use tui_cascade_core as core;
pub use tui_cascade_input as input;
pub use tui_cascade_term as term;
pub use tui_cascade_types as types;

pub use config::GameConfig;
pub use session::Session;
