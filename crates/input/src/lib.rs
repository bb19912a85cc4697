//! Input module (engine-facing).
//!
//! Turns raw controls into the single [`Intent`](crate::types::Intent) the engine
//! accepts per tick. [`buttons`] resolves held-button samples (a two-button pad
//! plus a drop button); [`map`] handles terminal key events from `crossterm`.

pub mod buttons;
pub mod map;

pub use tick_tetris_types as types;

pub use buttons::{Buttons, IntentLatch};
pub use map::{intent_for_key, is_reset, should_quit};
