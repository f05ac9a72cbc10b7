//! Planar point-mass locomotion
//!
//! Critters move on the ground plane. Each frame the caller resets the
//! acceleration, accumulates forces (drag, attraction, repulsion) and then
//! integrates with a forward Euler step. The distance traveled drives the
//! gait animation.

use glam::DVec3;
use log::trace;

/// Position, velocity and acceleration of a critter on the ground plane
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Critter {
    pub position: DVec3,
    pub velocity: DVec3,
    pub acceleration: DVec3,
    distance: f64,
}

impl Critter {
    /// Create a critter at `(x, y)` moving with velocity `(vx, vy)`
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            position: DVec3::new(x, y, 0.0),
            velocity: DVec3::new(vx, vy, 0.0),
            acceleration: DVec3::ZERO,
            distance: 0.0,
        }
    }

    pub fn location(&self) -> DVec3 {
        self.position
    }

    /// Total path length covered so far
    pub fn distance_traveled(&self) -> f64 {
        self.distance
    }

    /// Advance one forward Euler step of `dt`
    pub fn integrate(&mut self, dt: f64) {
        self.velocity.x += self.acceleration.x * dt;
        self.velocity.y += self.acceleration.y * dt;

        let step = self.velocity.truncate() * dt;
        self.position.x += step.x;
        self.position.y += step.y;
        self.distance += step.length();

        trace!(
            "integrate dt={dt}: pos=({:.4}, {:.4}) dist={:.4}",
            self.position.x, self.position.y, self.distance
        );
    }

    /// Clear the accumulated acceleration, once per frame
    pub fn accel_reset(&mut self) {
        self.acceleration = DVec3::ZERO;
    }

    /// Add viscous drag `-k * v`
    pub fn accel_drag(&mut self, k: f64) {
        self.acceleration.x -= k * self.velocity.x;
        self.acceleration.y -= k * self.velocity.y;
    }

    /// Add a pull of `k * distance^exp` towards `target`.
    ///
    /// A negative `k` pushes away instead. Nothing is added when the
    /// critter sits exactly on the target.
    pub fn accel_attract(&mut self, target: DVec3, k: f64, exp: f64) {
        let offset = target - self.position;
        let planar = offset.truncate();
        if planar.length_squared() == 0.0 {
            return;
        }
        let dir = planar.normalize();
        let magnitude = k * offset.length().powf(exp);
        self.acceleration.x += dir.x * magnitude;
        self.acceleration.y += dir.y * magnitude;
    }

    /// Halve the velocity, used when bouncing off an obstacle
    pub fn damp_velocity(&mut self) {
        self.velocity = DVec3::new(self.velocity.x / 2.0, self.velocity.y / 2.0, 0.0);
    }

    /// Facing direction in degrees, following the acceleration
    pub fn heading_degrees(&self) -> f64 {
        self.acceleration.y.atan2(self.acceleration.x).to_degrees()
    }
}
