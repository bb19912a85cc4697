//! Game module - the tick engine
//!
//! [`Engine`] owns the board, the falling piece and the progress counters, and
//! advances them one discrete step per [`Engine::tick`]. One tick runs:
//!
//! 1. the player's intent (shift, counter-clockwise rotation, or soft drop as an
//!    extra gravity step), dropped silently when blocked;
//! 2. gravity, once every `fall_interval` ticks;
//! 3. on a failed downward move: lock, line clear, and the next spawn.
//!
//! A blocked spawn ends the game. After that every tick is a no-op until
//! [`Engine::reset`].

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::cursor::PieceCursor;
use crate::line_clear::clear_full_rows;
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::{calculate_level, fall_interval, line_clear_award};
use crate::shapes;
use crate::types::{Coord, GamePhase, Intent, LockEvent};
use crate::validator::{cursor_fits, landing_y};

/// Score and speed progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub score: u32,
    pub level: u32,
    /// Ticks between gravity steps, derived from `level`
    pub fall_interval: u32,
    /// Ticks counted toward the next gravity step
    pub fall_progress: u32,
    pub game_over: bool,
    /// Rows cleared since reset
    pub lines: u32,
    /// Pieces locked since reset
    pub pieces: u32,
    /// Ticks simulated since reset (game-over ticks excluded)
    pub ticks: u64,
}

impl GameState {
    fn fresh(config: &EngineConfig) -> Self {
        Self {
            score: 0,
            level: 0,
            fall_interval: fall_interval(0, &config.speed),
            fall_progress: 0,
            game_over: false,
            lines: 0,
            pieces: 0,
            ticks: 0,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TickReport {
    /// The intent was legal and committed
    pub intent_applied: bool,
    /// Gravity moved the piece down a row
    pub fell: bool,
    pub lock: Option<LockEvent>,
    /// Phase after the tick; `None` when the tick was ignored
    pub phase: Option<GamePhase>,
}

impl TickReport {
    pub fn locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lock.map_or(0, |e| e.lines_cleared)
    }
}

/// The tick-driven game engine
#[derive(Debug, Clone)]
pub struct Engine<R: Randomizer = SimpleRng> {
    config: EngineConfig,
    board: Board,
    active: Option<PieceCursor>,
    phase: GamePhase,
    state: GameState,
    rng: R,
    last_event: Option<LockEvent>,
}

impl Engine<SimpleRng> {
    /// Default rules with a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::build(EngineConfig::default(), SimpleRng::new(seed))
    }

    pub fn with_config(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_randomizer(config, SimpleRng::new(seed))
    }
}

impl<R: Randomizer> Engine<R> {
    /// Validates the config, then resets to a fresh game.
    pub fn with_randomizer(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: EngineConfig, rng: R) -> Self {
        let mut engine = Self {
            board: Board::with_size(config.board_width, config.board_height),
            state: GameState::fresh(&config),
            config,
            active: None,
            phase: GamePhase::Spawning,
            rng,
            last_event: None,
        };
        engine.reset();
        engine
    }

    /// Empty the board, zero the progress counters and spawn a first piece.
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::fresh(&self.config);
        self.active = None;
        self.last_event = None;
        self.phase = GamePhase::Spawning;
        self.spawn();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for puzzle setups and tests.
    ///
    /// Editing cells under the falling piece leaves it overlapping the stack;
    /// follow up with [`Engine::set_active`] when that matters.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<PieceCursor> {
        self.active
    }

    /// Absolute cells of the falling piece
    pub fn active_cells(&self) -> Option<[Coord; 4]> {
        self.active.map(|c| c.cells())
    }

    /// Row the falling piece would land on
    pub fn ghost_y(&self) -> Option<i8> {
        self.active.map(|c| landing_y(&self.board, &c))
    }

    /// Replace the falling piece if the placement is legal.
    ///
    /// Ignored (returns false) after game over.
    pub fn set_active(&mut self, cursor: PieceCursor) -> bool {
        if self.phase == GamePhase::GameOver || !cursor_fits(&self.board, &cursor) {
            return false;
        }
        self.active = Some(cursor);
        self.phase = GamePhase::Falling;
        true
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn fall_interval(&self) -> u32 {
        self.state.fall_interval
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self, intent: Intent) -> TickReport {
        let mut report = TickReport::default();
        if self.phase == GamePhase::GameOver {
            return report;
        }
        self.state.ticks += 1;

        loop {
            self.phase = match self.phase {
                GamePhase::Falling => {
                    if self.active.is_none() {
                        // A caller can only get here by editing state directly; respawn.
                        GamePhase::Spawning
                    } else if self.fall(intent, &mut report) {
                        GamePhase::Locking
                    } else {
                        break;
                    }
                }
                GamePhase::Locking => self.lock_active(&mut report),
                GamePhase::LineClearing => self.clear_lines(&mut report),
                GamePhase::Spawning => {
                    self.spawn();
                    break;
                }
                GamePhase::GameOver => break,
            };
        }

        report.phase = Some(self.phase);
        report
    }

    /// Intent plus gravity. Returns true when the piece has landed.
    fn fall(&mut self, intent: Intent, report: &mut TickReport) -> bool {
        let Some(cursor) = self.active else {
            return false;
        };

        let candidate = match intent {
            Intent::None => None,
            Intent::ShiftLeft => Some(cursor.shifted(-1)),
            Intent::ShiftRight => Some(cursor.shifted(1)),
            Intent::RotateCcw => Some(cursor.rotated_ccw()),
            Intent::SoftDrop => Some(cursor.dropped()),
        };
        if let Some(candidate) = candidate {
            if self.try_commit(candidate) {
                report.intent_applied = true;
            } else if intent == Intent::SoftDrop {
                return true;
            }
        }

        self.state.fall_progress += 1;
        if self.state.fall_progress >= self.state.fall_interval {
            self.state.fall_progress = 0;
            if let Some(current) = self.active {
                if self.try_commit(current.dropped()) {
                    report.fell = true;
                } else {
                    return true;
                }
            }
        }

        false
    }

    fn try_commit(&mut self, candidate: PieceCursor) -> bool {
        if cursor_fits(&self.board, &candidate) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    fn lock_active(&mut self, report: &mut TickReport) -> GamePhase {
        let Some(cursor) = self.active.take() else {
            return GamePhase::Spawning;
        };

        let cells = cursor.cells();
        // In bounds since the cursor was validated; cells edited in through
        // `board_mut` since then are overwritten.
        self.board.lock_cells(&cells, cursor.kind);

        self.state.pieces += 1;
        report.lock = Some(LockEvent {
            kind: cursor.kind,
            cells,
            lines_cleared: 0,
            points: 0,
        });
        GamePhase::LineClearing
    }

    fn clear_lines(&mut self, report: &mut TickReport) -> GamePhase {
        let cleared = clear_full_rows(&mut self.board);
        let lines = cleared.count();
        let points = line_clear_award(lines, &self.config.scoring);

        if lines > 0 {
            self.state.lines += lines;
            self.state.score = self.state.score.saturating_add(points);

            let level = calculate_level(self.state.score, &self.config.scoring);
            if level != self.state.level {
                debug!(from = self.state.level, to = level, "level changed");
                self.state.level = level;
                self.state.fall_interval = fall_interval(level, &self.config.speed);
            }
        }

        if let Some(event) = report.lock.as_mut() {
            event.lines_cleared = lines;
            event.points = points;
            debug!(
                kind = event.kind.as_str(),
                cells = ?event.cells,
                rows = ?cleared.rows,
                points,
                score = self.state.score,
                "piece locked"
            );
            self.last_event = Some(*event);
        }

        GamePhase::Spawning
    }

    /// Pick the next piece and place it at the spawn pivot, or end the game.
    fn spawn(&mut self) {
        let kind = self.rng.next_kind();
        let rotation = self.rng.next_rotation(shapes::rotation_count(kind));
        let cursor = PieceCursor::new(kind, rotation, self.config.spawn_x, self.config.spawn_y);

        if cursor_fits(&self.board, &cursor) {
            trace!(kind = kind.as_str(), rotation = cursor.rotation(), "spawned");
            self.active = Some(cursor);
            self.phase = GamePhase::Falling;
        } else {
            self.active = None;
            self.phase = GamePhase::GameOver;
            self.state.game_over = true;
            info!(
                score = self.state.score,
                level = self.state.level,
                lines = self.state.lines,
                pieces = self.state.pieces,
                blocked_kind = kind.as_str(),
                "game over"
            );
        }
    }
}

impl Default for Engine<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
