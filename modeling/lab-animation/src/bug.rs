//! Walking bugs: a critter driving a gait

use glam::DVec3;
use log::debug;

use crate::critter::Critter;
use crate::error::Result;
use crate::gait::{Gait, LegPose};
use crate::state::AnimationState;

/// Whether a bug hunts or is hunted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum BugRole {
    #[default]
    Prey,
    Predator,
}

impl BugRole {
    /// Sign applied to attraction towards the other role: predators chase,
    /// prey flee.
    pub fn pursuit_sign(self) -> f64 {
        match self {
            BugRole::Prey => -1.0,
            BugRole::Predator => 1.0,
        }
    }
}

impl std::fmt::Display for BugRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BugRole::Prey => write!(f, "prey"),
            BugRole::Predator => write!(f, "predator"),
        }
    }
}

/// A critter whose legs follow the distance it has walked
#[derive(Debug, Clone)]
pub struct Bug {
    pub critter: Critter,
    scale: f64,
    role: BugRole,
    state: AnimationState,
}

impl Bug {
    /// Create a bug and pose it at the start of `gait`
    pub fn new(gait: &Gait, critter: Critter, scale: f64, role: BugRole) -> Result<Self> {
        let mut state = AnimationState::for_animator(gait.animator());
        state.advance_to(gait.animator(), 0.0, scale)?;
        debug!(
            "new {role} bug at ({:.3}, {:.3}) scale {scale}",
            critter.position.x, critter.position.y
        );
        Ok(Self {
            critter,
            scale,
            role,
            state,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn role(&self) -> BugRole {
        self.role
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn location(&self) -> DVec3 {
        self.critter.location()
    }

    /// Re-pose the legs for the distance walked so far
    pub fn keyframe(&mut self, gait: &Gait) -> Result<()> {
        let distance = self.critter.distance_traveled();
        self.state.advance_to(gait.animator(), distance, self.scale)
    }

    /// Integrate one step and update the pose
    pub fn step(&mut self, gait: &Gait, dt: f64) -> Result<()> {
        self.critter.integrate(dt);
        self.keyframe(gait)
    }

    /// Current per-leg angles
    pub fn legs<'a>(&'a self, gait: &Gait) -> impl Iterator<Item = LegPose> + use<'a> {
        gait.legs(&self.state.pose)
    }
}
