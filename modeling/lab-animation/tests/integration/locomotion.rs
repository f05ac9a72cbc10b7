//! Euler integration driving the gait

use glam::DVec3;
use lab_animation::{Bug, BugRole, Critter, Gait};
use test_case::test_case;

#[test_case(1.0, 0.0, 0.01, 100 ; "along x")]
#[test_case(0.3, -0.4, 0.02, 50 ; "diagonal")]
#[test_case(-2.0, 1.5, 0.1, 7 ; "fast")]
fn test_distance_without_forces(vx: f64, vy: f64, dt: f64, steps: u32) {
    let mut critter = Critter::new(0.0, 0.0, vx, vy);
    for _ in 0..steps {
        critter.accel_reset();
        critter.integrate(dt);
    }
    let speed = DVec3::new(vx, vy, 0.0).length();
    let expected = f64::from(steps) * speed * dt;
    assert!((critter.distance_traveled() - expected).abs() < 1e-9);
    assert!((critter.location().length() - expected).abs() < 1e-9);
}

#[test]
fn test_attraction_moves_towards_target() {
    let target = DVec3::new(5.0, 5.0, 0.0);
    let mut critter = Critter::new(0.0, 0.0, 0.0, 0.0);
    let before = (target - critter.location()).length();

    critter.accel_attract(target, 1.0, 0.0);
    let towards = (target - critter.location()).normalize();
    assert!(critter.acceleration.dot(towards) > 0.0);

    critter.integrate(0.1);
    assert!((target - critter.location()).length() < before);
}

#[test]
fn test_repulsion_moves_away() {
    let threat = DVec3::new(1.0, 0.0, 0.0);
    let mut critter = Critter::new(0.0, 0.0, 0.0, 0.0);
    critter.accel_attract(threat, -2.0, -1.0);
    assert!(critter.acceleration.x < 0.0);
    assert_eq!(critter.acceleration.y, 0.0);
}

#[test]
fn test_drag_slows_down() {
    let mut critter = Critter::new(0.0, 0.0, 2.0, 0.0);
    for _ in 0..10 {
        critter.accel_reset();
        critter.accel_drag(1.0);
        critter.integrate(0.1);
    }
    assert!(critter.velocity.x > 0.0);
    assert!(critter.velocity.x < 2.0);
}

#[test]
fn test_motion_stays_on_ground_plane() {
    let mut critter = Critter::new(0.0, 0.0, 1.0, 1.0);
    critter.accel_attract(DVec3::new(3.0, -1.0, 4.0), 1.0, 1.0);
    critter.integrate(0.5);
    assert_eq!(critter.position.z, 0.0);
    assert_eq!(critter.velocity.z, 0.0);
}

#[test]
fn test_walking_bug_cycles_its_legs() {
    let gait = Gait::hexapod().unwrap();
    let mut bug = Bug::new(&gait, Critter::new(0.0, 0.0, 1.3, 0.0), 1.0, BugRole::Prey).unwrap();

    let mut positions = Vec::new();
    for _ in 0..8 {
        bug.critter.accel_reset();
        bug.step(&gait, 0.125).unwrap();
        positions.push(bug.state().cycle_position);
    }

    // one stride per second at this speed, so eight steps complete a cycle
    assert!(positions.windows(2).take(6).all(|w| w[1] > w[0]));
    let last = positions[7];
    assert!(last < 1e-9 || last > 1.0 - 1e-9);
    for leg in bug.legs(&gait) {
        assert!(leg.yaw.abs() <= 40.0);
        assert!((10.0..=30.0).contains(&leg.lift));
    }
}
