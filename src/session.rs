//! Game session: one board plus the loop-level state around it.
//!
//! The binary drives a [`Session`] from its event loop. Pause and restart
//! live here rather than on the board; [`Session::tick`] returning false is
//! the signal to stop the loop.

use crate::config::GameConfig;
use crate::core::{tick_interval_from, Board, GameSnapshot, RandomSource};
use crate::types::GameAction;

pub struct Session {
    board: Board,
    paused: bool,
    width: u8,
    height: u8,
    base_tick_ms: u32,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.width, config.height, RandomSource::new(config.seed)),
            paused: false,
            width: config.width,
            height: config.height,
            base_tick_ms: config.base_tick_ms,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Apply a player action. Returns whether anything changed.
    ///
    /// Pause is ignored once the game is over; board commands are ignored
    /// while paused.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.board.is_game_over() {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if self.paused => false,
            _ => self.board.apply_action(action),
        }
    }

    /// Start a fresh board, seeded from where the current game's RNG stopped
    pub fn restart(&mut self) {
        let seed = self.board.source().seed();
        self.board = Board::new(self.width, self.height, RandomSource::new(seed));
        self.paused = false;
    }

    /// Advance one tick unless paused. Returns false once the game is over.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return !self.board.is_game_over();
        }
        self.board.step()
    }

    /// Current step interval in milliseconds
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_from(self.base_tick_ms, self.board.score())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.snapshot_into(out);
        out.paused = self.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BASE_TICK_MS, BOARD_HEIGHT, BOARD_WIDTH};

    fn session(seed: u32) -> Session {
        Session::new(&GameConfig {
            seed,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_tick_ms: BASE_TICK_MS,
        })
    }

    #[test]
    fn test_tick_stops_on_game_over() {
        let mut s = session(5);
        let mut ticks = 0;
        // Dropping every block at the spawn column never completes a row.
        while s.tick() {
            s.apply(GameAction::HardDrop);
            ticks += 1;
            assert!(ticks < 10_000, "game never ended");
        }
        assert!(s.board().is_game_over());
        assert!(!s.tick());

        let mut snap = GameSnapshot::default();
        s.snapshot_into(&mut snap);
        assert!(snap.game_over);
    }

    #[test]
    fn test_pause_freezes_board() {
        let mut s = session(9);
        assert!(s.tick());
        let before = s.board().snapshot();

        assert!(s.apply(GameAction::Pause));
        assert!(s.is_paused());
        assert!(s.tick());
        assert!(!s.apply(GameAction::MoveLeft));
        assert!(!s.apply(GameAction::HardDrop));
        assert_eq!(s.board().snapshot(), before);

        let mut snap = GameSnapshot::default();
        s.snapshot_into(&mut snap);
        assert!(snap.paused);

        assert!(s.apply(GameAction::Pause));
        assert!(!s.is_paused());
        assert!(s.apply(GameAction::HardDrop));
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut s = session(11);
        while s.tick() {
            s.apply(GameAction::HardDrop);
        }
        assert!(!s.apply(GameAction::Pause));
        assert!(!s.is_paused());
    }

    #[test]
    fn test_restart_starts_fresh_board() {
        let mut s = session(3);
        while s.tick() {
            s.apply(GameAction::HardDrop);
        }
        s.apply(GameAction::Pause);

        assert!(s.apply(GameAction::Restart));
        assert!(!s.board().is_game_over());
        assert!(!s.is_paused());
        assert_eq!(s.board().block_count(), 0);
        assert_eq!(s.board().score(), 0);
        assert!(s.tick());
    }

    #[test]
    fn test_tick_interval_uses_configured_base() {
        let s = Session::new(&GameConfig {
            seed: 1,
            width: 8,
            height: 12,
            base_tick_ms: 250,
        });
        assert_eq!(s.tick_interval_ms(), 250);
        assert_eq!((s.board().width(), s.board().height()), (8, 12));
    }
}
