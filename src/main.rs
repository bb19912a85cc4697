//! Terminal runner (default binary).
//!
//! Drives the engine at a fixed 10 ms tick, reading keys with crossterm and
//! writing only the cells the [`RedrawTracker`] reports as changed.
//!
//! Usage: `tick-tetris [seed]`

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, terminal, QueueableCommand};

use tick_tetris::core::{Engine, Frame, RedrawTracker};
use tick_tetris::input::{intent_for_key, is_reset, should_quit};
use tick_tetris::types::{Cell, GamePhase, Intent};

const TICK_MS: u64 = 10;

/// Top-left corner of the well, inside the border
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 1;

/// Terminal columns per cell; 2 roughly squares the glyph aspect ratio
const CELL_W: u16 = 2;

fn main() -> Result<()> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(clock_seed);

    let mut stdout = io::stdout();
    enter(&mut stdout)?;

    let result = run(&mut stdout, seed);

    // Always try to restore terminal state.
    let _ = exit(&mut stdout);
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(out: &mut Stdout, seed: u32) -> Result<()> {
    let mut engine = Engine::new(seed);
    let mut tracker = RedrawTracker::new();
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut pending = Intent::None;

    draw_border(out, &engine)?;

    loop {
        draw(out, &mut tracker, &Frame::capture(&engine))?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if engine.is_game_over() {
                        if is_reset(key) {
                            engine.reset();
                            tracker.invalidate();
                            draw_border(out, &engine)?;
                        }
                    } else if let Some(intent) = intent_for_key(key) {
                        // Last key before the tick wins; the engine takes one intent per tick.
                        pending = intent;
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(std::mem::take(&mut pending));
        }
    }
}

fn enter(out: &mut Stdout) -> Result<()> {
    terminal::enable_raw_mode()?;
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    out.flush()?;
    Ok(())
}

fn exit(out: &mut Stdout) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn draw_border(out: &mut Stdout, engine: &Engine) -> Result<()> {
    let (w, h) = (engine.board().width() as u16, engine.board().height() as u16);
    let inner = w * CELL_W;

    out.queue(ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(SetForegroundColor(Color::Magenta))?;
    out.queue(cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y - 1))?;
    out.queue(Print(format!("+{}+", "-".repeat(inner as usize))))?;
    for y in 0..h {
        out.queue(cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y + y))?;
        out.queue(Print("|"))?;
        out.queue(cursor::MoveTo(ORIGIN_X + inner, ORIGIN_Y + y))?;
        out.queue(Print("|"))?;
    }
    out.queue(cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y + h))?;
    out.queue(Print(format!("+{}+", "-".repeat(inner as usize))))?;
    out.queue(ResetColor)?;
    out.flush()?;
    Ok(())
}

fn draw(out: &mut Stdout, tracker: &mut RedrawTracker, frame: &Frame) -> Result<()> {
    let changes = tracker.changes(frame);

    for change in &changes {
        out.queue(cursor::MoveTo(
            ORIGIN_X + change.x as u16 * CELL_W,
            ORIGIN_Y + change.y as u16,
        ))?;
        draw_cell(out, change.cell)?;
    }

    let status_x = ORIGIN_X + frame.width as u16 * CELL_W + 3;
    out.queue(ResetColor)?;
    out.queue(cursor::MoveTo(status_x, ORIGIN_Y))?;
    out.queue(Print(format!("Score: {:<8}", frame.score)))?;
    out.queue(cursor::MoveTo(status_x, ORIGIN_Y + 1))?;
    out.queue(Print(format!("Level: {:<8}", frame.level)))?;
    out.queue(cursor::MoveTo(status_x, ORIGIN_Y + 2))?;
    out.queue(Print(format!("Lines: {:<8}", frame.lines)))?;
    out.queue(cursor::MoveTo(status_x, ORIGIN_Y + 4))?;
    if frame.phase == GamePhase::GameOver {
        out.queue(SetForegroundColor(Color::Red))?;
        out.queue(Print("GAME OVER  r: again  q: quit"))?;
        out.queue(ResetColor)?;
    } else {
        out.queue(Print("arrows/hjkl move, up rotates, q quits"))?;
    }

    out.flush()?;
    Ok(())
}

fn draw_cell(out: &mut Stdout, cell: Cell) -> Result<()> {
    match cell {
        Some(kind) => {
            let (r, g, b) = kind.rgb();
            out.queue(SetBackgroundColor(Color::Rgb { r, g, b }))?;
            out.queue(Print("  "))?;
            out.queue(ResetColor)?;
        }
        None => {
            out.queue(SetForegroundColor(Color::DarkGrey))?;
            out.queue(Print(" ."))?;
            out.queue(ResetColor)?;
        }
    }
    Ok(())
}
