//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and lookups, making
//! them usable in any context (engine, input mapping, render sinks).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn pivot**: (4, 1)
//!
//! # Speed and Scoring Defaults
//!
//! All intervals are counted in engine ticks, not milliseconds. How often a
//! tick happens is the driver's business.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_INTERVAL` | 100 | Ticks between gravity steps at level 0 |
//! | `FALL_INTERVAL_STEP` | 10 | Interval reduction per level |
//! | `MIN_FALL_INTERVAL` | 10 | Floor for the fall interval |
//! | `FIRST_LINE_AWARD` | 1 | Points for the first row of a lock; each further row doubles |
//! | `POINTS_PER_LEVEL` | 10 | Score needed per level |
//! | `MAX_LEVEL` | 10 | Level clamp |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color_tag(), 7);
//!
//! assert_eq!(Intent::from_str("rotateCcw"), Some(Intent::RotateCcw));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board side (an I piece must fit either way)
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board side
pub const MAX_BOARD_DIM: u8 = 64;

/// Default spawn pivot column
pub const SPAWN_X: i8 = 4;

/// Default spawn pivot row
///
/// Row 1 rather than 0 because several orientations reach one row above the pivot.
pub const SPAWN_Y: i8 = 1;

/// Ticks between gravity steps at level 0
pub const BASE_FALL_INTERVAL: u32 = 100;

/// Fall interval reduction per level
pub const FALL_INTERVAL_STEP: u32 = 10;

/// Fall interval floor; gravity never reaches zero ticks
pub const MIN_FALL_INTERVAL: u32 = 10;

/// Points awarded for the first row cleared by one lock
pub const FIRST_LINE_AWARD: u32 = 1;

/// Score per level
pub const POINTS_PER_LEVEL: u32 = 10;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Cells per piece
pub const PIECE_CELLS: usize = 4;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **Z**: Red, Z-shaped
/// - **S**: Green, S-shaped (mirror of Z)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **T**: Purple, T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    Z,
    S,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::Z => 2,
            PieceKind::S => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::T => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::T => "t",
        }
    }

    /// Palette index written into the board when this kind locks.
    ///
    /// 0 is reserved for the empty background, so tags run 1..=7.
    pub const fn color_tag(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Display color as RGB
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::Z => (255, 0, 0),
            PieceKind::S => (0, 255, 0),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (232, 132, 0),
            PieceKind::T => (160, 0, 160),
        }
    }
}

/// Player intent for a single tick
///
/// At most one intent is fed to the engine per tick. When several buttons are
/// held, the input layer resolves them to the strongest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Intent {
    /// No player action this tick
    #[default]
    None,
    /// Move piece one column left
    ShiftLeft,
    /// Move piece one column right
    ShiftRight,
    /// Rotate piece one step counter-clockwise
    RotateCcw,
    /// Extra gravity step this tick
    SoftDrop,
}

impl Intent {
    /// Parse intent from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("shiftLeft"), Some(Intent::ShiftLeft));
    /// assert_eq!(Intent::from_str("softdrop"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Intent::None),
            "shiftleft" => Some(Intent::ShiftLeft),
            "shiftright" => Some(Intent::ShiftRight),
            "rotateccw" => Some(Intent::RotateCcw),
            "softdrop" => Some(Intent::SoftDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::None => "none",
            Intent::ShiftLeft => "shiftLeft",
            Intent::ShiftRight => "shiftRight",
            Intent::RotateCcw => "rotateCcw",
            Intent::SoftDrop => "softDrop",
        }
    }
}

/// Tick engine phases
///
/// `Spawning`, `Locking` and `LineClearing` are passed through inside a single
/// tick. Between ticks a live game is always `Falling`; `GameOver` is terminal
/// until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Spawning,
    Falling,
    Locking,
    LineClearing,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Spawning => "spawning",
            GamePhase::Falling => "falling",
            GamePhase::Locking => "locking",
            GamePhase::LineClearing => "lineClearing",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Absolute board coordinate `(x, y)`
pub type Coord = (i8, i8);

/// Emitted when a piece locks into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Absolute cells the piece occupied at lock time (before line clear).
    pub cells: [Coord; PIECE_CELLS],
    pub lines_cleared: u32,
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tags_are_distinct_and_nonzero() {
        let mut tags: Vec<u8> = PieceKind::ALL.iter().map(|k| k.color_tag()).collect();
        tags.sort_unstable();
        assert_eq!(tags, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn index_roundtrips_through_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn intent_defaults_to_none() {
        assert_eq!(Intent::default(), Intent::None);
        assert_eq!(Intent::from_str(Intent::RotateCcw.as_str()), Some(Intent::RotateCcw));
    }

    #[test]
    fn default_speed_curve_stays_above_floor() {
        assert!(BASE_FALL_INTERVAL > MIN_FALL_INTERVAL);
        assert_eq!(BASE_FALL_INTERVAL - FALL_INTERVAL_STEP * MAX_LEVEL, 0);
    }
}
