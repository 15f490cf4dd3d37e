use super::*;

fn letter(warmup: u32) -> Letter {
    Letter {
        character: 'a',
        line_index: 0,
        column_index: 0,
        cell_position: Vec2::ZERO,
        line_offset: Vec2::ZERO,
        warmup_frames: warmup,
        elapsed_frames: 0,
        velocity: -7.0,
        resting_offset: 0.0,
    }
}

#[test]
fn warmup_counts_up_then_stops() {
    let physics = PhysicsConfig::default();
    let mut l = letter(3);
    for expected in 1..=3 {
        tick_letter(&mut l, &physics);
        assert_eq!(l.elapsed_frames, expected);
    }
    for _ in 0..10 {
        tick_letter(&mut l, &physics);
        assert_eq!(l.elapsed_frames, 3);
    }
}

#[test]
fn locked_letter_does_not_move() {
    let physics = PhysicsConfig::default();
    let mut l = letter(5);
    step_physics(&mut l, &physics);
    assert_eq!(l.resting_offset, 0.0);
    assert_eq!(l.velocity, -7.0);
    assert!(!l.is_settled());
}

#[test]
fn unlock_frame_applies_physics() {
    let physics = PhysicsConfig::default();
    let mut l = letter(1);
    tick_letter(&mut l, &physics);
    let v = (-7.0 + 0.4) * 0.98;
    assert!((l.velocity - v).abs() < 1e-12);
    assert!((l.resting_offset - v).abs() < 1e-12);
}

#[test]
fn settled_letter_stays_on_baseline() {
    let physics = PhysicsConfig::default();
    let mut l = letter(0);
    let mut settled_at = None;
    for frame in 0..400 {
        tick_letter(&mut l, &physics);
        assert!(l.resting_offset <= 0.0);
        if settled_at.is_none() && l.resting_offset == 0.0 && l.velocity.abs() < 0.4 {
            settled_at = Some(frame);
        }
    }
    assert!(settled_at.is_some());
    for _ in 0..500 {
        tick_letter(&mut l, &physics);
        assert_eq!(l.resting_offset, 0.0);
        assert!(l.is_settled());
    }
}

#[test]
fn bounce_heights_never_grow() {
    let physics = PhysicsConfig::default();
    let mut l = letter(0);
    let mut peaks = Vec::new();
    let mut lowest = 0.0f64;
    for _ in 0..400 {
        tick_letter(&mut l, &physics);
        if l.resting_offset == 0.0 {
            if lowest < 0.0 {
                peaks.push(-lowest);
            }
            lowest = 0.0;
        } else {
            lowest = lowest.min(l.resting_offset);
        }
    }
    assert!(peaks.len() >= 2, "{peaks:?}");
    for pair in peaks.windows(2) {
        assert!(pair[1] <= pair[0], "{peaks:?}");
    }
}

#[test]
fn draw_position_sums_offsets() {
    let mut l = letter(0);
    l.cell_position = Vec2::new(32.0, 0.0);
    l.line_offset = Vec2::new(110.0, 20.0);
    l.resting_offset = -3.5;
    assert_eq!(l.draw_position(84.0), Vec2::new(142.0, 100.5));
}
