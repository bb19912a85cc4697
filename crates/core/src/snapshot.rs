//! Render-sink views of the engine.
//!
//! A [`Frame`] is what a screen should show: locked cells with the falling piece
//! drawn on top. [`RedrawTracker`] remembers the last frame handed to a sink and
//! reports only the cells that differ, so slow displays can redraw incrementally.

use serde::Serialize;

use crate::game::Engine;
use crate::rng::Randomizer;
use crate::types::{Cell, GamePhase, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub width: u8,
    pub height: u8,
    /// Row-major, board cells with the active piece composed on top
    pub cells: Vec<Cell>,
    pub active: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: GamePhase,
}

impl Frame {
    pub fn capture<R: Randomizer>(engine: &Engine<R>) -> Self {
        let board = engine.board();
        let mut cells = board.cells().to_vec();
        let width = board.width() as usize;

        if let Some(cursor) = engine.active() {
            for (x, y) in cursor.cells() {
                // Active cells are always in bounds.
                cells[y as usize * width + x as usize] = Some(cursor.kind);
            }
        }

        let state = engine.state();
        Self {
            width: board.width(),
            height: board.height(),
            cells,
            active: engine.active().map(|c| c.kind),
            score: state.score,
            level: state.level,
            lines: state.lines,
            phase: engine.phase(),
        }
    }

    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Palette tags (0 = empty), one row per inner vector
    pub fn tag_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| c.map_or(0, PieceKind::color_tag)).collect())
            .collect()
    }

    /// FNV-1a over the composed cells; cheap "did anything change" check
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        self.cells.iter().fold(OFFSET, |hash, cell| {
            let tag = cell.map_or(0, PieceKind::color_tag) as u64;
            (hash ^ tag).wrapping_mul(PRIME)
        })
    }
}

/// One cell that needs redrawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellChange {
    pub x: u8,
    pub y: u8,
    pub cell: Cell,
}

/// Tracks the last frame drawn and yields the cells that changed since
#[derive(Debug, Clone, Default)]
pub struct RedrawTracker {
    last: Option<Frame>,
}

impl RedrawTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Force the next call to report every cell
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Cells that differ from the previously tracked frame, then remember `frame`.
    ///
    /// The first frame, or one with different dimensions, reports every cell.
    pub fn changes(&mut self, frame: &Frame) -> Vec<CellChange> {
        let width = frame.width as usize;
        let full = self
            .last
            .as_ref()
            .map_or(true, |prev| prev.width != frame.width || prev.height != frame.height);

        let changes = frame
            .cells
            .iter()
            .enumerate()
            .filter(|&(idx, cell)| {
                full || self
                    .last
                    .as_ref()
                    .map_or(true, |prev| prev.cells[idx] != *cell)
            })
            .map(|(idx, &cell)| CellChange {
                x: (idx % width) as u8,
                y: (idx / width) as u8,
                cell,
            })
            .collect();

        match self.last.as_mut() {
            Some(prev) => prev.clone_from(frame),
            None => self.last = Some(frame.clone()),
        }
        changes
    }
}
