// Host-side tests for the gesture transform controller.

use ar_core::*;
use smallvec::smallvec;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

fn one(x: f32, y: f32) -> PointerList {
    smallvec![Pointer::new(1, x, y)]
}

fn two(a: (f32, f32), b: (f32, f32)) -> PointerList {
    smallvec![Pointer::new(1, a.0, a.1), Pointer::new(2, b.0, b.1)]
}

fn visible(config: ControllerConfig) -> GestureController {
    let mut c = GestureController::new(config).expect("valid config");
    c.on_presence_changed(true);
    c
}

#[test]
fn starts_hidden_with_no_session() {
    let c = GestureController::new(ControllerConfig::nft()).unwrap();
    assert_eq!(c.presence(), Presence::Hidden);
    assert_eq!(c.session_kind(), SessionKind::None);
    assert_eq!(c.transform(), ControllerConfig::nft().default_transform);
}

#[test]
fn drag_rotates_with_inverted_pitch() {
    let mut c = visible(ControllerConfig::nft());
    assert_eq!(c.on_pointer_down(&one(100.0, 100.0)), Outcome::Unchanged);
    assert_eq!(c.session_kind(), SessionKind::Rotate);

    let out = c.on_pointer_move(&one(150.0, 130.0));
    let t = out.changed().expect("move publishes");
    assert_close(t.rotation_y, 25.0);
    assert_close(t.rotation_x, -9.0);
}

#[test]
fn drag_tracks_incrementally_from_last_position() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&one(0.0, 0.0));
    c.on_pointer_move(&one(10.0, 0.0));
    c.on_pointer_move(&one(20.0, 0.0));
    // Two 10px steps, not 10 + 20 from the original anchor.
    assert_close(c.transform().rotation_y, 10.0);
}

#[test]
fn natural_pitch_direction_adds_vertical_drag() {
    let mut c = visible(ControllerConfig::marker());
    c.on_pointer_down(&one(100.0, 100.0));
    c.on_pointer_move(&one(100.0, 130.0));
    assert_close(c.transform().rotation_x, MARKER_PITCH_DEFAULT + 9.0);
}

#[test]
fn large_drag_clamps_pitch_at_boundary() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&one(100.0, 100.0));
    c.on_pointer_move(&one(100.0, -1000.0));
    assert_close(c.transform().rotation_x, FREE_PITCH_MAX);

    // Already at the bound; a further drag must saturate, not overflow.
    c.on_pointer_move(&one(1000.0, -5000.0));
    assert_close(c.transform().rotation_x, FREE_PITCH_MAX);

    c.on_pointer_move(&one(1000.0, 100_000.0));
    assert_close(c.transform().rotation_x, FREE_PITCH_MIN);
}

#[test]
fn rotation_y_is_not_normalized() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&one(0.0, 0.0));
    c.on_pointer_move(&one(2000.0, 0.0));
    assert_close(c.transform().rotation_y, 1000.0);
}

#[test]
fn cumulative_pinch_scales_from_gesture_start() {
    let mut config = ControllerConfig::marker();
    config.default_transform.scale = 0.3;
    let mut c = visible(config);
    c.on_pointer_down(&two((0.0, 0.0), (100.0, 0.0)));
    assert_eq!(c.session_kind(), SessionKind::Pinch);

    let t = c.on_pointer_move(&two((0.0, 0.0), (200.0, 0.0))).changed().unwrap();
    assert_close(t.scale, 0.6);

    // Same distance again yields the same scale: ratio is against the start.
    let t = c.on_pointer_move(&two((0.0, 0.0), (200.0, 0.0))).changed().unwrap();
    assert_close(t.scale, 0.6);
}

#[test]
fn pinch_result_is_clamped_to_max_scale() {
    let mut config = ControllerConfig::marker();
    config.scale = Bounds::new(0.1, 0.5);
    config.scale_presets = vec![0.3, 0.5, 0.2];
    let mut c = visible(config);
    c.on_pointer_down(&two((0.0, 0.0), (0.0, 100.0)));
    c.on_pointer_move(&two((0.0, 0.0), (0.0, 200.0)));
    assert_close(c.transform().scale, 0.5);
}

#[test]
fn incremental_pinch_rebases_every_move() {
    let mut c = visible(ControllerConfig::simple());
    c.on_pointer_down(&two((0.0, 0.0), (100.0, 0.0)));
    c.on_pointer_move(&two((0.0, 0.0), (150.0, 0.0)));
    assert_close(c.transform().scale, 1.5);
    // Ratio 200/150 applied to 1.5, i.e. still proportional overall.
    c.on_pointer_move(&two((0.0, 0.0), (200.0, 0.0)));
    assert_close(c.transform().scale, 2.0);
    // Repeating the same distance is now a no-op ratio of 1.
    c.on_pointer_move(&two((0.0, 0.0), (200.0, 0.0)));
    assert_close(c.transform().scale, 2.0);
}

#[test]
fn incremental_pinch_rebases_on_clamped_scale() {
    let mut c = visible(ControllerConfig::simple());
    c.on_pointer_down(&two((0.0, 0.0), (100.0, 0.0)));
    c.on_pointer_move(&two((0.0, 0.0), (1000.0, 0.0)));
    assert_close(c.transform().scale, FREE_SCALE_MAX);
    // Shrinking afterwards starts from the clamped value, not 10x.
    c.on_pointer_move(&two((0.0, 0.0), (500.0, 0.0)));
    assert_close(c.transform().scale, FREE_SCALE_MAX / 2.0);
}

#[test]
fn releasing_one_pinch_finger_reanchors_rotation() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&one(0.0, 0.0));
    c.on_pointer_down(&two((0.0, 0.0), (300.0, 300.0)));
    assert_eq!(c.session_kind(), SessionKind::Pinch);

    c.on_pointer_up(&one(300.0, 300.0));
    assert_eq!(c.session_kind(), SessionKind::Rotate);
    let before = c.transform();

    // No jump from the old (0,0) anchor: only the 1px move counts.
    c.on_pointer_move(&one(301.0, 300.0));
    assert_close(c.transform().rotation_y, before.rotation_y + 0.5);
    assert_close(c.transform().rotation_x, before.rotation_x);
}

#[test]
fn lifting_all_fingers_ends_the_session() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&one(0.0, 0.0));
    assert_eq!(c.on_pointer_up(&PointerList::new()), Outcome::Unchanged);
    assert_eq!(c.session_kind(), SessionKind::None);
    assert_eq!(c.on_pointer_move(&one(50.0, 50.0)), Outcome::Ignored);
    assert_eq!(c.on_pointer_up(&PointerList::new()), Outcome::Ignored);
}

#[test]
fn lifting_third_finger_keeps_pinching_on_the_remaining_two() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&two((0.0, 0.0), (100.0, 0.0)));
    c.on_pointer_move(&two((0.0, 0.0), (150.0, 0.0)));
    assert_close(c.transform().scale, 1.5);

    let rest: PointerList = smallvec![
        Pointer::new(1, 0.0, 0.0),
        Pointer::new(3, 0.0, 50.0),
        Pointer::new(4, 10.0, 10.0),
    ];
    c.on_pointer_up(&rest);
    assert_eq!(c.session_kind(), SessionKind::Pinch);
    // New anchor is 50px at scale 1.5; doubling the spread doubles the scale.
    c.on_pointer_move(&two((0.0, 0.0), (0.0, 100.0)));
    assert_close(c.transform().scale, 3.0);
}

#[test]
fn malformed_pointer_lists_are_ignored() {
    let mut c = visible(ControllerConfig::nft());
    let before = c.transform();

    let three: PointerList = smallvec![
        Pointer::new(1, 0.0, 0.0),
        Pointer::new(2, 1.0, 1.0),
        Pointer::new(3, 2.0, 2.0),
    ];
    assert_eq!(c.on_pointer_down(&three), Outcome::Ignored);
    assert_eq!(c.on_pointer_down(&PointerList::new()), Outcome::Ignored);

    c.on_pointer_down(&two((0.0, 0.0), (100.0, 0.0)));
    // Pinch session fed a single contact: kind mismatch.
    assert_eq!(c.on_pointer_move(&one(10.0, 10.0)), Outcome::Ignored);

    c.on_pointer_down(&one(0.0, 0.0));
    // Rotate session fed two contacts.
    assert_eq!(
        c.on_pointer_move(&two((0.0, 0.0), (5.0, 5.0))),
        Outcome::Ignored
    );
    assert_eq!(c.on_pointer_move(&one(f32::NAN, 3.0)), Outcome::Ignored);
    assert_eq!(c.transform(), before);
}

#[test]
fn coincident_pinch_contacts_cannot_start_a_pinch() {
    let mut c = visible(ControllerConfig::nft());
    assert_eq!(
        c.on_pointer_down(&two((50.0, 50.0), (50.0, 50.0))),
        Outcome::Ignored
    );
    assert_eq!(c.session_kind(), SessionKind::None);
}

#[test]
fn hidden_controller_ignores_pointer_input() {
    let mut c = GestureController::new(ControllerConfig::nft()).unwrap();
    assert_eq!(c.on_pointer_down(&one(0.0, 0.0)), Outcome::Ignored);
    assert_eq!(c.on_pointer_move(&one(10.0, 0.0)), Outcome::Ignored);
    assert_eq!(c.on_wheel(-1.0), Outcome::Ignored);
    assert_eq!(c.cycle_scale(), Outcome::Ignored);
}

#[test]
fn hiding_mid_drag_drops_the_session_and_gates_moves() {
    let mut c = visible(ControllerConfig::marker());
    c.on_pointer_down(&one(0.0, 0.0));
    c.on_pointer_move(&one(40.0, 0.0));
    let before = c.transform();

    c.on_presence_changed(false);
    assert_eq!(c.session_kind(), SessionKind::None);
    assert_eq!(c.on_pointer_move(&one(400.0, 400.0)), Outcome::Ignored);
    assert_eq!(c.transform(), before);

    // Coming back does not resurrect the old drag.
    c.on_presence_changed(true);
    assert_eq!(c.on_pointer_move(&one(500.0, 500.0)), Outcome::Ignored);
}

#[test]
fn hide_policy_reset_restores_defaults() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&one(0.0, 0.0));
    c.on_pointer_move(&one(100.0, 100.0));
    let out = c.on_presence_changed(false);
    assert_eq!(out, Outcome::Changed(ControllerConfig::nft().default_transform));
    assert_eq!(c.transform(), ControllerConfig::nft().default_transform);
}

#[test]
fn hide_policy_preserve_keeps_last_transform() {
    let mut c = visible(ControllerConfig::marker());
    c.on_pointer_down(&one(0.0, 0.0));
    c.on_pointer_move(&one(100.0, 100.0));
    let before = c.transform();
    assert_eq!(c.on_presence_changed(false), Outcome::Unchanged);
    c.on_presence_changed(true);
    assert_eq!(c.transform(), before);
}

#[test]
fn scale_cycle_follows_presets_and_wraps() {
    let mut c = visible(ControllerConfig::marker());
    let start = c.transform().scale;
    assert_close(start, 0.3);
    let seen: Vec<f32> = (0..3)
        .map(|_| c.cycle_scale().changed().unwrap().scale)
        .collect();
    assert_eq!(seen, vec![0.5, 0.2, 0.3]);
}

#[test]
fn scale_cycle_returns_to_start_after_multiples_of_its_length() {
    for config in [
        ControllerConfig::marker(),
        ControllerConfig::nft(),
        ControllerConfig::simple(),
    ] {
        let len = config.scale_presets.len();
        let mut c = visible(config);
        let start = c.transform().scale;
        for n in 1..=(3 * len) {
            c.cycle_scale();
            let back = c.transform().scale == start;
            assert_eq!(back, n % len == 0, "after {n} presses");
        }
    }
}

#[test]
fn scale_cycle_after_pinch_restarts_at_first_preset() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&two((0.0, 0.0), (100.0, 0.0)));
    c.on_pointer_move(&two((0.0, 0.0), (123.0, 0.0)));
    c.on_pointer_up(&PointerList::new());
    assert_close(c.transform().scale, 1.23);
    assert_close(c.cycle_scale().changed().unwrap().scale, 1.0);
}

#[test]
fn scale_cycle_during_pinch_cancels_the_pinch() {
    let mut c = visible(ControllerConfig::nft());
    c.on_pointer_down(&two((0.0, 0.0), (100.0, 0.0)));
    c.cycle_scale();
    assert_eq!(c.session_kind(), SessionKind::None);
    assert_eq!(
        c.on_pointer_move(&two((0.0, 0.0), (300.0, 0.0))),
        Outcome::Ignored
    );
    assert_close(c.transform().scale, 1.5);
}

#[test]
fn reset_rotation_restores_defaults_regardless_of_history() {
    for config in [
        ControllerConfig::marker(),
        ControllerConfig::nft(),
        ControllerConfig::simple(),
    ] {
        let d = config.default_transform;
        let mut c = visible(config);
        c.on_pointer_down(&one(0.0, 0.0));
        c.on_pointer_move(&one(321.0, -77.0));
        c.on_pointer_move(&one(-40.0, 900.0));
        c.on_pointer_up(&PointerList::new());
        c.reset_rotation();
        assert_eq!(c.transform().rotation_x, d.rotation_x);
        assert_eq!(c.transform().rotation_y, d.rotation_y);
    }
}

#[test]
fn reset_rotation_keeps_scale() {
    let mut c = visible(ControllerConfig::nft());
    c.cycle_scale();
    c.reset_rotation();
    assert_close(c.transform().scale, 1.5);
}

#[test]
fn wheel_factor_zoom_is_clamped() {
    let mut c = visible(ControllerConfig::nft());
    c.on_wheel(-100.0);
    assert_close(c.transform().scale, 1.1);
    c.on_wheel(100.0);
    assert_close(c.transform().scale, 0.99);
    for _ in 0..100 {
        c.on_wheel(1.0);
    }
    assert_close(c.transform().scale, FREE_SCALE_MIN);
    assert_eq!(c.on_wheel(0.0), Outcome::Ignored);
}

#[test]
fn wheel_step_zoom_is_clamped() {
    let mut c = visible(ControllerConfig::marker());
    c.on_wheel(-1.0);
    assert_close(c.transform().scale, 0.35);
    for _ in 0..100 {
        c.on_wheel(-1.0);
    }
    assert_close(c.transform().scale, MARKER_SCALE_MAX);
}

#[test]
fn auto_rotate_spins_only_while_idle() {
    let mut c = visible(ControllerConfig::simple());
    assert!(c.auto_rotate_enabled());
    let t = c.tick(16.0).changed().unwrap();
    assert_close(t.rotation_y, AUTO_ROTATE_SPEED);

    // A drag stops the spin and it stays off after release.
    c.on_pointer_down(&one(0.0, 0.0));
    assert_eq!(c.tick(16.0), Outcome::Ignored);
    c.on_pointer_up(&PointerList::new());
    assert!(!c.auto_rotate_enabled());
    assert_eq!(c.tick(16.0), Outcome::Ignored);

    // Reset turns it back on in this profile.
    c.reset_rotation();
    assert!(c.auto_rotate_enabled());
    assert_close(c.tick(16.0).changed().unwrap().rotation_y, AUTO_ROTATE_SPEED);
}

#[test]
fn auto_rotate_tick_skips_bogus_frames_and_hidden_state() {
    let mut c = GestureController::new(ControllerConfig::simple()).unwrap();
    assert_eq!(c.tick(16.0), Outcome::Ignored);
    c.on_presence_changed(true);
    assert_eq!(c.tick(0.0), Outcome::Ignored);
    assert_eq!(c.tick(f64::NAN), Outcome::Ignored);
    assert!(c.tick(33.0).is_changed());
}

#[test]
fn tick_is_noop_without_auto_rotate() {
    let mut c = visible(ControllerConfig::marker());
    assert_eq!(c.tick(16.0), Outcome::Ignored);
    assert_eq!(c.toggle_auto_rotate(), Outcome::Ignored);
    assert!(!c.auto_rotate_enabled());
}

#[test]
fn toggle_auto_rotate_flips_flag() {
    let mut c = visible(ControllerConfig::simple());
    c.toggle_auto_rotate();
    assert!(!c.auto_rotate_enabled());
    assert_eq!(c.tick(16.0), Outcome::Ignored);
    c.handle(ControllerEvent::ToggleAutoRotate);
    assert!(c.auto_rotate_enabled());
}

#[test]
fn handle_routes_events_like_direct_calls() {
    let mut a = visible(ControllerConfig::nft());
    let mut b = visible(ControllerConfig::nft());

    a.on_pointer_down(&one(10.0, 10.0));
    a.on_pointer_move(&one(30.0, 50.0));
    a.cycle_scale();

    b.handle(ControllerEvent::PointerDown(one(10.0, 10.0)));
    b.handle(ControllerEvent::PointerMove(one(30.0, 50.0)));
    b.handle(ControllerEvent::CycleScale);

    assert_eq!(a.transform(), b.transform());
}

#[test]
fn show_resets_everything() {
    let mut c = visible(ControllerConfig::marker());
    c.on_pointer_down(&one(0.0, 0.0));
    c.on_pointer_move(&one(80.0, 80.0));
    c.show();
    assert_eq!(c.transform(), ControllerConfig::marker().default_transform);
    assert_eq!(c.session_kind(), SessionKind::None);
    assert_eq!(c.presence(), Presence::Visible);
}
