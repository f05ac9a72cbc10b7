//! Locomotion gait presets
//!
//! A gait is a keyframe cycle plus the stride it covers. Poses store two
//! angles per leg, yaw around the body's vertical axis and lift, with
//! legs listed front to back and alternating left, right.

use crate::error::Result;
use crate::keyframe::{KeyframeAnimator, KeyframeSequence};

/// Distance a unit-scale hexapod covers in one gait cycle
pub const HEXAPOD_STRIDE: f64 = 1.3;

/// Number of legs on the hexapod
pub const HEXAPOD_LEGS: usize = 6;

/// Angles stored per leg: yaw then lift
pub const PARAMS_PER_LEG: usize = 2;

const HEXAPOD_TIMES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[rustfmt::skip]
const HEXAPOD_POSES: [[f64; HEXAPOD_LEGS * PARAMS_PER_LEG]; 5] = [
    [ 30.0, 10.0,   30.0, 30.0,
       0.0, 30.0,    0.0, 10.0,
     -30.0, 10.0,  -30.0, 30.0],
    [ 20.0, 10.0,   40.0, 30.0,
      10.0, 30.0,  -10.0, 10.0,
     -40.0, 10.0,  -20.0, 30.0],
    [ 30.0, 30.0,   30.0, 10.0,
       0.0, 10.0,    0.0, 30.0,
     -30.0, 30.0,  -30.0, 10.0],
    [ 40.0, 30.0,   20.0, 10.0,
     -10.0, 10.0,   10.0, 30.0,
     -20.0, 30.0,  -40.0, 10.0],
    // closes the cycle
    [ 30.0, 10.0,   30.0, 30.0,
       0.0, 30.0,    0.0, 10.0,
     -30.0, 10.0,  -30.0, 30.0],
];

/// Side of the body a leg is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Angles for a single leg, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct LegPose {
    pub side: Side,
    /// Front-to-back position of the left/right pair
    pub pair: usize,
    pub yaw: f64,
    pub lift: f64,
}

impl LegPose {
    /// Rotations about the vertical and horizontal axes that place the leg.
    ///
    /// Right legs mirror the left ones, so their yaw is negated and the
    /// lift is measured from the opposite side.
    pub fn joint_rotations(&self) -> (f64, f64) {
        match self.side {
            Side::Left => (self.yaw, 90.0 - self.lift),
            Side::Right => (-self.yaw, -90.0 + self.lift),
        }
    }
}

/// A keyframed locomotion cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Gait {
    animator: KeyframeAnimator,
    leg_count: usize,
}

impl Gait {
    /// Build a gait for `leg_count` legs from a sequence and stride
    pub fn new(sequence: KeyframeSequence, stride: f64, leg_count: usize) -> Result<Self> {
        let animator = KeyframeAnimator::new(sequence, stride)?;
        Ok(Self {
            animator,
            leg_count,
        })
    }

    /// The six-legged alternating tripod walk
    pub fn hexapod() -> Result<Self> {
        let poses: Vec<&[f64]> = HEXAPOD_POSES.iter().map(|p| p.as_slice()).collect();
        let sequence = KeyframeSequence::from_tables(&HEXAPOD_TIMES, &poses)?;
        Self::new(sequence, HEXAPOD_STRIDE, HEXAPOD_LEGS)
    }

    pub fn animator(&self) -> &KeyframeAnimator {
        &self.animator
    }

    pub fn leg_count(&self) -> usize {
        self.leg_count
    }

    /// Split a pose into per-leg angles.
    ///
    /// Extra trailing values that do not form a full leg are ignored.
    pub fn legs<'a>(&self, pose: &'a [f64]) -> impl Iterator<Item = LegPose> + use<'a> {
        pose.chunks_exact(PARAMS_PER_LEG)
            .take(self.leg_count)
            .enumerate()
            .map(|(index, angles)| LegPose {
                side: if index % 2 == 0 { Side::Left } else { Side::Right },
                pair: index / 2,
                yaw: angles[0],
                lift: angles[1],
            })
    }
}
