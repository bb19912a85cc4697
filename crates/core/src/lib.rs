//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of a tick-driven falling-block puzzle. It does no
//! I/O, spawns no threads and never sleeps: a driver calls
//! [`Engine::tick`](game::Engine::tick) once per time step with at most one
//! [`Intent`](types::Intent), then reads the board back for drawing.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece kinds and their rotation tables
//! - [`board`]: the grid, with walls counted as occupied
//! - [`cursor`]: the falling piece
//! - [`validator`]: the one placement check used for every move
//! - [`line_clear`]: full-row detection and compaction
//! - [`scoring`]: line awards, levels and fall speed
//! - [`rng`]: seeded randomizer and scripted piece sources
//! - [`config`]: tunable rules, loadable from JSON
//! - [`game`]: the tick engine state machine
//! - [`snapshot`]: frames and changed-cell tracking for render sinks
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::Engine;
//! use tick_tetris_core::types::Intent;
//!
//! let mut engine = Engine::new(12345);
//! engine.tick(Intent::ShiftLeft);
//! engine.tick(Intent::RotateCcw);
//! while !engine.tick(Intent::SoftDrop).locked() {}
//!
//! assert_eq!(engine.state().pieces, 1);
//! assert_eq!(engine.board().filled_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod cursor;
pub mod game;
pub mod line_clear;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod validator;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellView};
pub use config::{ConfigError, EngineConfig};
pub use cursor::PieceCursor;
pub use game::{Engine, GameState, TickReport};
pub use line_clear::{clear_full_rows, clear_lines, LineClear};
pub use rng::{Randomizer, ScriptedPieces, SimpleRng};
pub use scoring::{calculate_level, fall_interval, line_clear_award, ScoringRules, SpeedCurve};
pub use shapes::{cells, rotation_count, PieceShape};
pub use snapshot::{CellChange, Frame, RedrawTracker};
pub use validator::{can_place, cursor_fits};
