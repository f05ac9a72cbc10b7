//! Keyframe animation and locomotion for articulated critters
//!
//! A [`KeyframeSequence`] holds one cycle of poses over normalized time.
//! A [`KeyframeAnimator`] maps a raw phase, usually distance walked, onto
//! that cycle so leg motion keeps pace with body motion. [`Critter`]
//! integrates planar point-mass motion with forward Euler steps.
//!
//! # Example
//!
//! ```rust
//! use lab_animation::{Bug, BugRole, Critter, Gait};
//!
//! let gait = Gait::hexapod()?;
//! let mut bug = Bug::new(&gait, Critter::new(0.0, 0.0, 0.5, 0.0), 1.0, BugRole::Prey)?;
//!
//! for _ in 0..20 {
//!     bug.critter.accel_reset();
//!     bug.critter.accel_drag(0.1);
//!     bug.step(&gait, 0.05)?;
//! }
//!
//! assert!(bug.critter.distance_traveled() > 0.0);
//! assert_eq!(bug.legs(&gait).count(), 6);
//! # Ok::<(), lab_animation::KeyframeError>(())
//! ```

pub mod bug;
pub mod critter;
pub mod error;
pub mod gait;
pub mod keyframe;
pub mod state;

pub use bug::{Bug, BugRole};
pub use critter::Critter;
pub use error::{KeyframeError, Result};
pub use gait::{Gait, HEXAPOD_LEGS, HEXAPOD_STRIDE, LegPose, PARAMS_PER_LEG, Side};
pub use keyframe::{Bracket, Keyframe, KeyframeAnimator, KeyframeSequence};
pub use state::AnimationState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
