use thiserror::Error;

/// Error types for keyframe sequences and animators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyframeError {
    /// A cycle needs at least a start and an end keyframe
    #[error("Keyframe sequence needs at least 2 keyframes, got {0}")]
    TooFewKeyframes(usize),

    /// Keyframe poses carry no degrees of freedom
    #[error("Keyframe poses must have at least one value")]
    EmptyPose,

    /// A keyframe pose differs in length from the first one
    #[error("Keyframe {index} has {actual} values, expected {expected}")]
    PoseLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// First timestamp is not 0
    #[error("First keyframe must be at time 0, got {0}")]
    InvalidStartTime(f64),

    /// Last timestamp is above 1 or not finite
    #[error("Last keyframe must be at or before time 1, got {0}")]
    InvalidEndTime(f64),

    /// Timestamps are not strictly increasing
    #[error("Keyframe {index} at time {time} does not come after time {previous}")]
    NonIncreasingTimestamps {
        index: usize,
        previous: f64,
        time: f64,
    },

    /// Stride must be positive and finite
    #[error("Stride must be positive and finite, got {0}")]
    InvalidStride(f64),

    /// Scale must be positive and finite
    #[error("Scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    /// Phase or cycle time is NaN or infinite
    #[error("Phase must be finite, got {0}")]
    InvalidPhase(f64),

    /// Bracketing keyframes share a timestamp
    #[error("Zero-length interpolation interval between times {start} and {end}")]
    DegenerateInterval { start: f64, end: f64 },

    /// Output buffer has the wrong number of values
    #[error("Pose buffer has {actual} values, expected {expected}")]
    PoseBufferMismatch { expected: usize, actual: usize },
}

/// Result type using KeyframeError
pub type Result<T> = std::result::Result<T, KeyframeError>;
