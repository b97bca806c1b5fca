// Host-side tests for post-release coasting.

use dome_core::*;
use glam::Vec2;

const LIMITS: RotationLimits = RotationLimits { max_vertical_deg: 5.0 };

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// Step until the run ends; returns the number of frames that moved.
fn run_to_end(run: &mut InertiaRun, o: &mut Orientation) -> (u32, InertiaStep) {
    let mut moved = 0;
    loop {
        match run.step(o, &LIMITS) {
            InertiaStep::Moved => moved += 1,
            end => return (moved, end),
        }
    }
}

#[test]
fn params_follow_dampening() {
    let p = InertiaParams::from_dampening(0.6);
    assert!(approx(p.friction, 0.973));
    assert!(approx(p.stop_threshold, 0.009));
    assert_eq!(p.max_frames, 252);

    let lo = InertiaParams::from_dampening(0.0);
    assert!(approx(lo.friction, 0.94));
    assert_eq!(lo.max_frames, 90);
    let hi = InertiaParams::from_dampening(1.0);
    assert_eq!(hi.max_frames, 360);
}

#[test]
fn dampening_is_clamped() {
    assert_eq!(InertiaParams::from_dampening(2.0), InertiaParams::from_dampening(1.0));
    assert_eq!(InertiaParams::from_dampening(-1.0), InertiaParams::from_dampening(0.0));
    assert_eq!(InertiaParams::from_dampening(f32::NAN), InertiaParams::from_dampening(0.0));
}

#[test]
fn release_velocity_is_clamped_and_scaled() {
    let run = InertiaRun::start(Vec2::new(5.0, -0.5), InertiaParams::from_dampening(0.6));
    assert!(approx(run.velocity.x, 112.0));
    assert!(approx(run.velocity.y, -40.0));
    assert_eq!(run.frames, 0);
}

#[test]
fn max_release_coast_is_bounded_and_deterministic() {
    let params = InertiaParams::from_dampening(0.6);
    let mut a = InertiaRun::start(Vec2::new(1.4, 0.0), params);
    let mut b = a;
    let mut oa = Orientation::default();
    let mut ob = Orientation::default();

    let (moved_a, end_a) = run_to_end(&mut a, &mut oa);
    let (moved_b, end_b) = run_to_end(&mut b, &mut ob);
    assert!(moved_a <= 252);
    assert_eq!((moved_a, end_a), (moved_b, end_b));
    assert_eq!(oa, ob);
    assert_eq!(oa.angle_x, 0.0);
}

#[test]
fn slow_release_settles_below_threshold() {
    let params = InertiaParams::from_dampening(0.6);
    let mut run = InertiaRun::start(Vec2::new(0.01, 0.0), params);
    let mut o = Orientation::default();
    let (moved, end) = run_to_end(&mut run, &mut o);
    assert_eq!(end, InertiaStep::Settled);
    assert!(moved < 252);
    assert!(run.velocity.x.abs() < params.stop_threshold);
    assert!(run.velocity.y.abs() < params.stop_threshold);
    assert!(o.angle_y > 0.0);
}

#[test]
fn step_rotates_like_a_drag() {
    let params = InertiaParams::from_dampening(0.0);
    let mut run = InertiaRun::start(Vec2::new(0.5, 0.5), params);
    let mut o = Orientation::default();
    assert_eq!(run.step(&mut o, &LIMITS), InertiaStep::Moved);
    let v = 40.0 * 0.94;
    assert!(approx(o.angle_y, v / 200.0));
    assert!(approx(o.angle_x, -v / 200.0));
}

#[test]
fn coasting_respects_vertical_limit() {
    let mut run = InertiaRun::start(Vec2::new(0.0, -1.4), InertiaParams::from_dampening(1.0));
    let mut o = Orientation::default();
    run_to_end(&mut run, &mut o);
    assert_eq!(o.angle_x, 5.0);
}

#[test]
fn fallback_velocity_from_total_movement() {
    let v = release_velocity(Vec2::ZERO, Vec2::new(100.0, 0.0), 20.0).unwrap();
    assert!(approx(v.x, 0.1));
    assert_eq!(v.y, 0.0);

    assert_eq!(release_velocity(Vec2::ZERO, Vec2::new(2.0, 0.0), 20.0), None);

    let measured = Vec2::new(0.5, -0.2);
    assert_eq!(
        release_velocity(measured, Vec2::new(100.0, 0.0), 20.0),
        Some(measured)
    );
}

#[test]
fn tiny_measured_velocity_does_not_start_a_coast() {
    assert_eq!(
        release_velocity(Vec2::new(0.003, 0.0), Vec2::new(1.0, 0.0), 20.0),
        None
    );
}
