//! Cyclic keyframe sequences and interpolation
//!
//! A sequence describes one cycle of motion over normalized time
//! `[0, 1)`. Sampling finds the pair of keyframes around the requested
//! time and blends every degree of freedom linearly. Time past the last
//! keyframe wraps around to the first one.

use log::trace;

use crate::error::{KeyframeError, Result};

/// One known pose at a point in the cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Keyframe {
    /// Position in the cycle, in `[0, 1]`
    pub time: f64,
    /// One angle per degree of freedom
    pub pose: Vec<f64>,
}

impl Keyframe {
    pub fn new(time: f64, pose: Vec<f64>) -> Self {
        Self { time, pose }
    }
}

/// Keyframes around a sampling time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Index of the last keyframe at or before the time
    pub previous: usize,
    /// Index of the keyframe to blend towards
    pub next: usize,
    /// Time of `previous`
    pub start: f64,
    /// Time of `next`, shifted by one cycle when wrapping
    pub end: f64,
}

/// Validated, immutable keyframe table for one motion cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct KeyframeSequence {
    keyframes: Vec<Keyframe>,
}

impl KeyframeSequence {
    /// Build a sequence, checking that it starts at 0, ends at or before
    /// 1, increases strictly and has uniform pose lengths.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self> {
        if keyframes.len() < 2 {
            return Err(KeyframeError::TooFewKeyframes(keyframes.len()));
        }

        let expected = keyframes[0].pose.len();
        if expected == 0 {
            return Err(KeyframeError::EmptyPose);
        }
        for (index, keyframe) in keyframes.iter().enumerate() {
            if keyframe.pose.len() != expected {
                return Err(KeyframeError::PoseLengthMismatch {
                    index,
                    expected,
                    actual: keyframe.pose.len(),
                });
            }
        }

        if keyframes[0].time != 0.0 {
            return Err(KeyframeError::InvalidStartTime(keyframes[0].time));
        }
        for (index, pair) in keyframes.windows(2).enumerate() {
            if !(pair[1].time > pair[0].time) {
                return Err(KeyframeError::NonIncreasingTimestamps {
                    index: index + 1,
                    previous: pair[0].time,
                    time: pair[1].time,
                });
            }
        }
        let end = keyframes[keyframes.len() - 1].time;
        if !(end <= 1.0) {
            return Err(KeyframeError::InvalidEndTime(end));
        }

        Ok(Self { keyframes })
    }

    /// Build a sequence from parallel timestamp and pose tables
    pub fn from_tables(times: &[f64], poses: &[&[f64]]) -> Result<Self> {
        let keyframes = times
            .iter()
            .zip(poses)
            .map(|(&time, pose)| Keyframe::new(time, pose.to_vec()))
            .collect();
        Self::new(keyframes)
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Number of keyframes
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Always false for a validated sequence
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Number of degrees of freedom per pose
    pub fn pose_len(&self) -> usize {
        self.keyframes[0].pose.len()
    }

    /// Whether the last pose repeats the first, closing the cycle
    pub fn is_closed(&self) -> bool {
        let last = &self.keyframes[self.keyframes.len() - 1];
        last.time == 1.0 && last.pose == self.keyframes[0].pose
    }

    /// Locate the keyframes around `time` (already in `[0, 1]`).
    ///
    /// `previous` is the largest timestamp not after `time`; when that is
    /// the final keyframe, `next` wraps to keyframe 0 one cycle later.
    pub fn bracket(&self, time: f64) -> Bracket {
        let last = self.keyframes.len() - 1;
        let previous = self
            .keyframes
            .partition_point(|k| k.time <= time)
            .saturating_sub(1);

        if previous == last {
            Bracket {
                previous,
                next: 0,
                start: self.keyframes[last].time,
                end: 1.0 + self.keyframes[0].time,
            }
        } else {
            Bracket {
                previous,
                next: previous + 1,
                start: self.keyframes[previous].time,
                end: self.keyframes[previous + 1].time,
            }
        }
    }

    /// Interpolated pose at cycle time `time`
    pub fn sample(&self, time: f64) -> Result<Vec<f64>> {
        let mut pose = vec![0.0; self.pose_len()];
        self.sample_into(time, &mut pose)?;
        Ok(pose)
    }

    /// Interpolate into an existing buffer, avoiding a per-frame allocation.
    ///
    /// Times outside `[0, 1]` are wrapped into the cycle first.
    pub fn sample_into(&self, time: f64, pose: &mut [f64]) -> Result<()> {
        if !time.is_finite() {
            return Err(KeyframeError::InvalidPhase(time));
        }
        if pose.len() != self.pose_len() {
            return Err(KeyframeError::PoseBufferMismatch {
                expected: self.pose_len(),
                actual: pose.len(),
            });
        }

        let time = if (0.0..=1.0).contains(&time) {
            time
        } else {
            wrap_cycle(time)
        };

        let bracket = self.bracket(time);
        let from = &self.keyframes[bracket.previous].pose;

        if time == bracket.start {
            pose.copy_from_slice(from);
            return Ok(());
        }

        let span = bracket.end - bracket.start;
        if !(span > 0.0) {
            return Err(KeyframeError::DegenerateInterval {
                start: bracket.start,
                end: bracket.end,
            });
        }

        let to = &self.keyframes[bracket.next].pose;
        let blend = (time - bracket.start) / span;
        trace!(
            "sample t={time:.4} between keyframes {} and {} (blend {blend:.4})",
            bracket.previous, bracket.next
        );

        for ((out, h1), h2) in pose.iter_mut().zip(from).zip(to) {
            *out = h1 + (h2 - h1) * blend;
        }
        Ok(())
    }
}

/// Reduce `value` into `[0, 1)`, also for negative inputs
pub(crate) fn wrap_cycle(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Maps a raw phase (distance traveled or elapsed time) onto poses.
///
/// One cycle of the sequence covers `stride * scale` units of phase, so a
/// larger critter takes proportionally longer steps.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeAnimator {
    sequence: KeyframeSequence,
    stride: f64,
}

impl KeyframeAnimator {
    /// Create an animator covering `stride` phase units per cycle at scale 1
    pub fn new(sequence: KeyframeSequence, stride: f64) -> Result<Self> {
        if !(stride.is_finite() && stride > 0.0) {
            return Err(KeyframeError::InvalidStride(stride));
        }
        Ok(Self { sequence, stride })
    }

    pub fn sequence(&self) -> &KeyframeSequence {
        &self.sequence
    }

    pub fn stride(&self) -> f64 {
        self.stride
    }

    /// Number of degrees of freedom per pose
    pub fn pose_len(&self) -> usize {
        self.sequence.pose_len()
    }

    /// Map a raw phase onto the canonical cycle `[0, 1)`
    pub fn normalize(&self, phase: f64, scale: f64) -> Result<f64> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(KeyframeError::InvalidScale(scale));
        }
        if !phase.is_finite() {
            return Err(KeyframeError::InvalidPhase(phase));
        }
        Ok(wrap_cycle(phase / (self.stride * scale)))
    }

    /// Pose at normalized cycle time `time`
    pub fn sample(&self, time: f64) -> Result<Vec<f64>> {
        self.sequence.sample(time)
    }

    /// Write the pose at normalized cycle time `time` into `pose`
    pub fn sample_into(&self, time: f64, pose: &mut [f64]) -> Result<()> {
        self.sequence.sample_into(time, pose)
    }

    /// Pose for a raw phase at the given scale
    pub fn pose_at(&self, phase: f64, scale: f64) -> Result<Vec<f64>> {
        let time = self.normalize(phase, scale)?;
        self.sequence.sample(time)
    }

    /// Write the pose for a raw phase into `pose`, returning the cycle time
    pub fn pose_into(&self, phase: f64, scale: f64, pose: &mut [f64]) -> Result<f64> {
        let time = self.normalize(phase, scale)?;
        self.sequence.sample_into(time, pose)?;
        Ok(time)
    }
}
