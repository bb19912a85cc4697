//! Frame capture and incremental redraw

use tick_tetris::core::{Engine, EngineConfig, Frame, PieceCursor, RedrawTracker, ScriptedPieces};
use tick_tetris::types::{GamePhase, Intent, PieceKind};

fn engine_with(kinds: &[PieceKind]) -> Engine<ScriptedPieces> {
    Engine::with_randomizer(EngineConfig::default(), ScriptedPieces::kinds(kinds)).unwrap()
}

#[test]
fn test_frame_composes_active_piece_over_board() {
    let mut engine = engine_with(&[PieceKind::O]);
    engine.board_mut().set_cell(0, 19, PieceKind::L);

    let frame = Frame::capture(&engine);
    assert_eq!(frame.width, 10);
    assert_eq!(frame.height, 20);
    assert_eq!(frame.active, Some(PieceKind::O));
    assert_eq!(frame.phase, GamePhase::Falling);
    assert_eq!(frame.get(0, 19), Some(Some(PieceKind::L)));
    for (x, y) in [(4, 1), (5, 1), (4, 2), (5, 2)] {
        assert_eq!(frame.get(x, y), Some(Some(PieceKind::O)));
    }
    assert_eq!(frame.get(10, 0), None);

    // The board itself stays free of the falling piece.
    assert_eq!(engine.board().filled_count(), 1);
}

#[test]
fn test_tag_rows_use_palette() {
    let engine = engine_with(&[PieceKind::T]);
    let rows = Frame::capture(&engine).tag_rows();

    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|r| r.len() == 10));
    let tagged: usize = rows.iter().flatten().filter(|&&t| t == PieceKind::T.color_tag()).count();
    assert_eq!(tagged, 4);
}

#[test]
fn test_tracker_reports_full_frame_then_only_changes() {
    let mut engine = engine_with(&[PieceKind::O]);
    let mut tracker = RedrawTracker::new();

    let first = Frame::capture(&engine);
    assert_eq!(tracker.changes(&first).len(), 200);
    assert!(tracker.changes(&first).is_empty());

    engine.tick(Intent::ShiftRight);
    let second = Frame::capture(&engine);
    let changes = tracker.changes(&second);

    // O moving one column: left column empties, a new right column fills.
    assert_eq!(changes.len(), 4);
    for change in &changes {
        assert_eq!(second.get(change.x, change.y), Some(change.cell));
        assert_ne!(first.get(change.x, change.y), Some(change.cell));
    }
}

#[test]
fn test_tracker_invalidate_and_resize() {
    let engine = engine_with(&[PieceKind::I]);
    let mut tracker = RedrawTracker::new();
    let frame = Frame::capture(&engine);
    tracker.changes(&frame);

    tracker.invalidate();
    assert_eq!(tracker.changes(&frame).len(), 200);

    let mut config = EngineConfig::default();
    config.board_width = 8;
    config.board_height = 8;
    config.spawn_x = 3;
    let small = Engine::with_config(config, 5).unwrap();
    assert_eq!(tracker.changes(&Frame::capture(&small)).len(), 64);
}

#[test]
fn test_fingerprint_tracks_visible_change() {
    let mut engine = engine_with(&[PieceKind::O]);
    let a = Frame::capture(&engine).fingerprint();
    assert_eq!(a, Frame::capture(&engine).fingerprint());

    assert!(engine.set_active(PieceCursor::new(PieceKind::O, 0, 0, 0)));
    assert_ne!(a, Frame::capture(&engine).fingerprint());
}
