use workout_core::{Running, SportsWalking, Swimming, Training};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn running_reference_session() {
    let w = Running::new(15000, 1.0, 75.0);
    assert!(approx(w.get_distance(), 9.75));
    assert!(approx(w.get_mean_speed(), 9.75));
    // (18*9.75 + 1.79) * 75 / 1000 * 1 * 60
    assert!(approx(w.get_spent_calories(), 797.805));
}

#[test]
fn walking_uses_height_in_meters() {
    let w = SportsWalking::new(9000, 1.0, 75.0, 180.0);
    assert!(approx(w.get_distance(), 5.85));
    assert!(approx(w.get_mean_speed(), 5.85));

    let speed_ms = 5.85 * 0.278;
    let expected = (0.035 * 75.0 + speed_ms * speed_ms / 1.8 * 0.029 * 75.0) * 60.0;
    assert!(approx(w.get_spent_calories(), expected));
    assert!((w.get_spent_calories() - 349.252).abs() < 1e-3);
}

#[test]
fn swimming_overrides_step_and_speed() {
    let w = Swimming::new(720, 1.0, 80.0, 25.0, 40);
    // 1.38 m per tak, ikke 0.65
    assert!(approx(w.get_distance(), 0.9936));
    // fart fra bassenglengder, ikke fra distanse
    assert!(approx(w.get_mean_speed(), 1.0));
    assert!(approx(w.get_spent_calories(), 336.0));
}

#[test]
fn summary_carries_display_name() {
    assert_eq!(Running::new(1, 1.0, 1.0).show_training_info().training_type, "Running");
    assert_eq!(
        SportsWalking::new(1, 1.0, 1.0, 170.0).show_training_info().training_type,
        "SportsWalking"
    );
    assert_eq!(
        Swimming::new(1, 1.0, 1.0, 25.0, 1).show_training_info().training_type,
        "Swimming"
    );
}

#[test]
fn show_training_info_is_idempotent() {
    let w = SportsWalking::new(9000, 1.0, 75.0, 180.0);
    assert_eq!(w.show_training_info(), w.show_training_info());
}

#[test]
fn zero_action_gives_zero_distance() {
    let w = Running::new(0, 1.0, 75.0);
    assert_eq!(w.get_distance(), 0.0);
    assert_eq!(w.get_mean_speed(), 0.0);
    assert!(w.get_spent_calories() > 0.0);
}
