//! Session tests: command dispatch, locking, line clears, game over.

use blockfall::core::{standard_palette, GameSession, PieceTemplate, SeededRng, Shape};
use blockfall::types::Command;

/// Single-template palette: 2x2 O block, color 4.
fn o_palette() -> Vec<PieceTemplate> {
    vec![PieceTemplate::new(
        Shape::from_rows(&[&[4, 4], &[4, 4]]),
        4,
    )]
}

/// Single-template palette: 1x4 horizontal bar, color 1.
fn bar_palette() -> Vec<PieceTemplate> {
    vec![PieceTemplate::new(Shape::from_rows(&[&[1, 1, 1, 1]]), 1)]
}

#[test]
fn test_move_commands_translate_the_piece() {
    let mut session = GameSession::new(10, 20, o_palette()).unwrap();
    assert_eq!(session.active().x(), 4);
    assert_eq!(session.active().y(), -1);

    let snap = session.apply(Command::Left);
    assert_eq!(snap.active.x, 3);

    let snap = session.apply(Command::Right);
    assert_eq!(snap.active.x, 4);

    let snap = session.apply(Command::Tick);
    assert_eq!(snap.active.y, 0);
}

#[test]
fn test_rejected_move_is_a_silent_noop() {
    // O block on a 4-wide board spawns at x = 1; one step reaches the
    // left wall and every further Left must change nothing at all.
    let mut session = GameSession::new(4, 20, o_palette()).unwrap();
    session.apply(Command::Left);
    let before = session.snapshot();
    assert_eq!(before.active.x, 0);

    let after = session.apply(Command::Left);
    assert_eq!(after, before);
    let after = session.apply(Command::Left);
    assert_eq!(after, before);
}

#[test]
fn test_rejected_rotation_leaves_state_unchanged() {
    // A horizontal bar resting on the floor of a 3-row board cannot
    // stand upright; the rotation is dropped, no wall-kick repositioning.
    let mut session = GameSession::new(4, 3, bar_palette()).unwrap();
    for _ in 0..3 {
        session.apply(Command::Tick);
    }
    let before = session.snapshot();
    assert_eq!(before.active.y, 2);

    let after = session.apply(Command::Rotate);
    assert_eq!(after, before);
}

#[test]
fn test_rotation_commits_when_it_fits() {
    let mut session = GameSession::new(10, 20, bar_palette()).unwrap();
    session.apply(Command::Tick);
    session.apply(Command::Tick);

    let snap = session.apply(Command::Rotate);
    assert_eq!(snap.active.shape.len(), 4, "bar stands upright");
    assert_eq!(snap.active.shape[0].len(), 1);
}

#[test]
fn test_blocked_tick_locks_clears_and_respawns() {
    // The 4-wide bar fills a 4-column row on every lock.
    let mut session = GameSession::new(4, 4, bar_palette()).unwrap();

    for _ in 0..4 {
        let snap = session.apply(Command::Tick);
        assert!(!snap.game_over);
    }
    assert_eq!(session.active().y(), 3);

    let snap = session.apply(Command::Tick);
    assert_eq!(snap.lines_cleared, 1);
    assert!(snap.grid.iter().flatten().all(|&v| v == 0));
    assert!(!snap.game_over);
    assert_eq!(snap.active.y, -1, "a fresh piece spawned");
}

#[test]
fn test_simultaneous_multi_row_clear() {
    // O block on a 2-wide board fills two rows in a single lock; both
    // are removed by one clearing pass.
    let mut session = GameSession::new(2, 4, o_palette()).unwrap();

    for _ in 0..3 {
        session.apply(Command::Tick);
    }
    assert_eq!(session.active().y(), 2);

    let snap = session.apply(Command::Tick);
    assert_eq!(snap.lines_cleared, 2);
    assert!(snap.grid.iter().flatten().all(|&v| v == 0));
    assert!(!snap.game_over);
}

#[test]
fn test_game_over_when_piece_locks_above_board() {
    // Settled cells already fill the topmost row, so the spawned piece
    // cannot descend at all: it freezes with y still negative.
    let mut session = GameSession::new(4, 4, o_palette()).unwrap();
    for x in 0..4 {
        session.board_mut().set(x, 0, 1);
    }

    let snap = session.apply(Command::Tick);

    assert!(snap.game_over);
    assert_eq!(snap.active.y, -1, "no replacement piece was spawned");
    assert_eq!(snap.active.shape, vec![vec![4, 4], vec![4, 4]]);
}

#[test]
fn test_commands_after_game_over_are_noops() {
    let mut session = GameSession::new(4, 4, o_palette()).unwrap();
    for x in 0..4 {
        session.board_mut().set(x, 0, 1);
    }
    session.apply(Command::Tick);
    assert!(session.game_over());

    let before = session.snapshot();
    for cmd in [Command::Left, Command::Right, Command::Rotate, Command::Tick] {
        assert_eq!(session.apply(cmd), before);
    }
}

#[test]
fn test_active_piece_stays_in_bounds() {
    // Fuzz a full game with a deterministic command stream and check
    // the bounds invariant after every command.
    let mut session = GameSession::with_seed(10, 20, standard_palette(), 31337).unwrap();
    let mut rng = SeededRng::new(4242);

    for _ in 0..3000 {
        let cmd = match rng.next_range(4) {
            0 => Command::Left,
            1 => Command::Right,
            2 => Command::Rotate,
            _ => Command::Tick,
        };
        let snap = session.apply(cmd);

        assert_eq!(snap.grid.len(), 20);
        assert!(snap.grid.iter().all(|row| row.len() == 10));

        for (dy, row) in snap.active.shape.iter().enumerate() {
            for (dx, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let gx = snap.active.x + dx as i32;
                let gy = snap.active.y + dy as i32;
                assert!((0..10).contains(&gx), "x {} out of bounds", gx);
                assert!(gy < 20, "y {} below the floor", gy);
            }
        }
    }
}
