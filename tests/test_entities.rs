use fish_catch::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GamePhase::Start, GamePhase::Start);
    assert_ne!(GamePhase::Playing, GamePhase::GameOver);
    assert_eq!(Facing::Left, Facing::Left);
    assert_ne!(Facing::Left, Facing::Right);
    assert_eq!(SpawnSide::Left, SpawnSide::Left);
    assert_ne!(SpawnSide::Left, SpawnSide::Right);
    assert_eq!(GameEvent::SessionStarted, GameEvent::SessionStarted);
    assert_ne!(GameEvent::ScoreChanged(1), GameEvent::ScoreChanged(2));

    let phase = GamePhase::Playing;
    assert_eq!(phase.clone(), GamePhase::Playing);
}

#[test]
fn facing_follows_horizontal_velocity() {
    assert_eq!(Facing::from_vx(-120.0), Facing::Left);
    assert_eq!(Facing::from_vx(120.0), Facing::Right);
    // Zero resolves to a side rather than panicking; callers gate on a
    // dead zone before asking.
    assert_eq!(Facing::from_vx(0.0), Facing::Right);
}

#[test]
fn fish_clone_is_independent() {
    let original = Fish {
        id: 1,
        x: -20.0,
        y: 100.0,
        facing: Facing::Right,
        side: SpawnSide::Left,
        hitbox: 8.0,
        motion: FishMotion::Glide { target_x: 900.0, speed: 100.0 },
    };
    let mut cloned = original.clone();
    cloned.x = 500.0;
    cloned.motion = FishMotion::Drift { vx: 80.0, vy: 10.0 };

    assert_eq!(original.x, -20.0);
    assert_eq!(original.motion, FishMotion::Glide { target_x: 900.0, speed: 100.0 });
}

#[test]
fn motion_models_compare_by_value() {
    assert_eq!(
        FishMotion::Glide { target_x: 900.0, speed: 100.0 },
        FishMotion::Glide { target_x: 900.0, speed: 100.0 }
    );
    assert_ne!(
        FishMotion::Glide { target_x: 900.0, speed: 100.0 },
        FishMotion::Drift { vx: 100.0, vy: 0.0 }
    );
}
