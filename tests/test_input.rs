use fish_catch::config::{ControlScheme, GameConfig};
use fish_catch::input::{Dir, InputTranslator, MoveIntent};

fn drag_config() -> GameConfig {
    GameConfig {
        control_scheme: ControlScheme::Drag,
        ..GameConfig::default()
    }
}

fn flick_config() -> GameConfig {
    GameConfig {
        control_scheme: ControlScheme::Flick,
        ..GameConfig::default()
    }
}

/// Put the translator into a rightward 200 u/s drag.
fn dragging_right(input: &mut InputTranslator, config: &GameConfig) {
    input.pointer_down(100.0, 100.0);
    input.pointer_move(120.0, 100.0, config);
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

#[test]
fn single_key_moves_at_keyboard_speed() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    input.key_down(Dir::Left);
    assert_eq!(input.translate(&config), MoveIntent { vx: -150.0, vy: 0.0 });

    input.key_up(Dir::Left);
    input.key_down(Dir::Down);
    assert_eq!(input.translate(&config), MoveIntent { vx: 0.0, vy: 150.0 });
}

#[test]
fn diagonal_magnitude_matches_straight_movement() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    input.key_down(Dir::Right);
    input.key_down(Dir::Up);
    let MoveIntent { vx, vy } = input.translate(&config);
    assert!(vx > 0.0 && vy < 0.0);
    let magnitude = (vx * vx + vy * vy).sqrt();
    assert!((magnitude - 150.0).abs() < 0.01);
}

#[test]
fn opposite_keys_cancel() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    input.key_down(Dir::Left);
    input.key_down(Dir::Right);
    assert_eq!(input.translate(&config), MoveIntent::default());
}

#[test]
fn keyboard_overrides_pointer_velocity() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    dragging_right(&mut input, &config);
    assert_eq!(input.translate(&config).vx, 200.0);

    // Any held key wins over the drag, even a cancelling pair
    input.key_down(Dir::Left);
    input.key_down(Dir::Right);
    assert_eq!(input.translate(&config), MoveIntent::default());

    // Released keys hand control back to the pointer
    input.release_keys();
    assert_eq!(input.translate(&config).vx, 200.0);
}

// ── Pointer drag ──────────────────────────────────────────────────────────────

#[test]
fn movement_inside_dead_zone_is_ignored() {
    let config = drag_config(); // dead zone 5
    let mut input = InputTranslator::new();
    input.pointer_down(100.0, 100.0);
    input.pointer_move(103.0, 103.0, &config);
    assert_eq!(input.translate(&config), MoveIntent::default());
}

#[test]
fn drag_sets_velocity_along_the_normalized_direction() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    input.pointer_down(100.0, 100.0);
    input.pointer_move(110.0, 100.0, &config); // pure horizontal
    let intent = input.translate(&config);
    assert_eq!(intent, MoveIntent { vx: 200.0, vy: 0.0 });
}

#[test]
fn drag_anchor_rebases_on_each_accepted_move() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    input.pointer_down(100.0, 100.0);
    input.pointer_move(110.0, 100.0, &config);
    // Next delta is measured from (110, 100): straight down
    input.pointer_move(110.0, 108.0, &config);
    let intent = input.translate(&config);
    assert_eq!(intent, MoveIntent { vx: 0.0, vy: 200.0 });
}

#[test]
fn move_without_pointer_down_does_nothing() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    input.pointer_move(500.0, 500.0, &config);
    assert_eq!(input.translate(&config), MoveIntent::default());
}

#[test]
fn drag_release_stops_immediately() {
    let config = drag_config();
    let mut input = InputTranslator::new();
    dragging_right(&mut input, &config);
    input.pointer_up(&config);
    assert_eq!(input.translate(&config), MoveIntent::default());
}

// ── Flick inertia ─────────────────────────────────────────────────────────────

#[test]
fn flick_release_coasts_with_decaying_velocity() {
    let config = flick_config();
    let mut input = InputTranslator::new();
    dragging_right(&mut input, &config);
    input.pointer_up(&config);

    let first = input.translate(&config);
    assert!((first.vx - 200.0 * 0.92).abs() < 0.01);

    let second = input.translate(&config);
    assert!(second.vx < first.vx);
    assert!(second.vx > 0.0);
}

#[test]
fn flick_decay_snaps_to_exactly_zero() {
    let config = flick_config();
    let mut input = InputTranslator::new();
    dragging_right(&mut input, &config);
    input.pointer_up(&config);

    let mut frames = 0;
    loop {
        let intent = input.translate(&config);
        if intent == MoveIntent::default() {
            break;
        }
        frames += 1;
        assert!(frames < 200, "flick never came to rest");
    }
    // At rest it stays at rest — exact zero, not a crawl
    assert_eq!(input.translate(&config), MoveIntent::default());
}

#[test]
fn new_touch_cancels_coasting() {
    let config = flick_config();
    let mut input = InputTranslator::new();
    dragging_right(&mut input, &config);
    input.pointer_up(&config);
    assert!(input.translate(&config).vx > 0.0);

    input.pointer_down(300.0, 300.0);
    assert_eq!(input.translate(&config), MoveIntent::default());
}

#[test]
fn flick_release_without_motion_does_not_coast() {
    let config = flick_config();
    let mut input = InputTranslator::new();
    input.pointer_down(100.0, 100.0);
    input.pointer_up(&config);
    assert_eq!(input.translate(&config), MoveIntent::default());
}
