//! Animation state tracking for posed critters

use crate::error::Result;
use crate::keyframe::KeyframeAnimator;

/// Current pose of an animated critter and where in its cycle it is
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct AnimationState {
    /// Current angle per degree of freedom
    pub pose: Vec<f64>,
    /// Raw phase last applied (distance traveled or elapsed time)
    pub phase: f64,
    /// Normalized position in the cycle, in `[0, 1)`
    pub cycle_position: f64,
}

impl AnimationState {
    /// Create a state with a zeroed pose of `pose_len` values
    pub fn new(pose_len: usize) -> Self {
        Self {
            pose: vec![0.0; pose_len],
            phase: 0.0,
            cycle_position: 0.0,
        }
    }

    /// Create a state sized for `animator`, posed at the start of its cycle
    pub fn for_animator(animator: &KeyframeAnimator) -> Self {
        let first = &animator.sequence().keyframes()[0];
        Self {
            pose: first.pose.clone(),
            phase: 0.0,
            cycle_position: 0.0,
        }
    }

    /// Re-pose for a new raw phase, reusing the pose buffer
    pub fn advance_to(&mut self, animator: &KeyframeAnimator, phase: f64, scale: f64) -> Result<()> {
        if self.pose.len() != animator.pose_len() {
            self.pose.resize(animator.pose_len(), 0.0);
        }
        self.cycle_position = animator.pose_into(phase, scale, &mut self.pose)?;
        self.phase = phase;
        Ok(())
    }

    /// Return to the start of the cycle without touching the pose
    pub fn reset_phase(&mut self) {
        self.phase = 0.0;
        self.cycle_position = 0.0;
    }
}
