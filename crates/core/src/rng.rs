//! RNG module - piece randomization
//!
//! Pieces are drawn uniformly from the seven kinds (no bag), and each spawn also
//! picks a uniformly random starting orientation among the kind's meaningful
//! rotations. A small LCG keeps games reproducible from a seed.

use crate::shapes;
use crate::types::PieceKind;

/// Source of spawn choices for the engine
pub trait Randomizer {
    /// Kind for the next spawn
    fn next_kind(&mut self) -> PieceKind;

    /// Starting rotation in `0..rotation_count`
    fn next_rotation(&mut self, rotation_count: u8) -> u8;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift keeps the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Randomizer for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    fn next_rotation(&mut self, rotation_count: u8) -> u8 {
        self.next_range(rotation_count.max(1) as u32) as u8
    }
}

/// Replays a fixed list of spawns, cycling when exhausted
///
/// The scripted rotation is reduced modulo the kind's rotation count, so any
/// `u8` is accepted.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    script: Vec<(PieceKind, u8)>,
    next: usize,
    pending_rotation: u8,
}

impl ScriptedPieces {
    /// An empty script falls back to `O` pieces.
    pub fn new(script: Vec<(PieceKind, u8)>) -> Self {
        Self {
            script,
            next: 0,
            pending_rotation: 0,
        }
    }

    /// Script of kinds, all spawned at rotation 0
    pub fn kinds(kinds: &[PieceKind]) -> Self {
        Self::new(kinds.iter().map(|&k| (k, 0)).collect())
    }

    /// How many spawns have been served
    pub fn served(&self) -> usize {
        self.next
    }
}

impl Randomizer for ScriptedPieces {
    fn next_kind(&mut self) -> PieceKind {
        if self.script.is_empty() {
            self.pending_rotation = 0;
            return PieceKind::O;
        }
        let (kind, rotation) = self.script[self.next % self.script.len()];
        self.next += 1;
        self.pending_rotation = rotation % shapes::rotation_count(kind);
        kind
    }

    fn next_rotation(&mut self, rotation_count: u8) -> u8 {
        self.pending_rotation % rotation_count.max(1)
    }
}
