//! Gait and locomotion command implementations

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use glam::DVec3;
use lab_animation::{Bug, BugRole, Critter, Gait};
use log::debug;

use crate::utils::{add_table_row, create_table, format_degrees, format_length, format_planar};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Prey,
    Predator,
}

impl From<RoleArg> for BugRole {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Prey => BugRole::Prey,
            RoleArg::Predator => BugRole::Predator,
        }
    }
}

#[derive(Subcommand)]
pub enum AnimCommands {
    /// Print hexapod leg angles for a range of walked distances
    Sample {
        /// Distance walked at the first sample
        #[arg(short, long, default_value_t = 0.0)]
        distance: f64,

        /// Bug scale; larger bugs take longer strides
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 5)]
        steps: usize,

        /// Distance between samples
        #[arg(long, default_value_t = 0.325)]
        increment: f64,
    },

    /// Walk a bug with Euler integration and report its path
    Simulate {
        /// Number of integration steps
        #[arg(short = 'n', long, default_value_t = 20)]
        steps: usize,

        /// Time step
        #[arg(long, default_value_t = 0.05)]
        dt: f64,

        /// Initial velocity
        #[arg(long, num_args = 2, value_names = ["VX", "VY"], default_values_t = [1.0, 0.0], allow_negative_numbers = true)]
        velocity: Vec<f64>,

        /// Viscous drag coefficient
        #[arg(long, default_value_t = 0.0)]
        drag: f64,

        /// Point to chase or flee
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        target: Option<Vec<f64>>,

        /// Strength of the pull towards the target
        #[arg(long, default_value_t = 1.0)]
        attract: f64,

        /// Distance exponent of the pull
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        exponent: f64,

        /// Predators chase the target, prey flee it
        #[arg(long, default_value = "predator")]
        role: RoleArg,

        /// Bug scale
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Print one JSON object per step instead of a table
        #[cfg(feature = "serde")]
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(command: AnimCommands) -> Result<()> {
    match command {
        AnimCommands::Sample {
            distance,
            scale,
            steps,
            increment,
        } => execute_sample(distance, scale, steps, increment),
        AnimCommands::Simulate {
            steps,
            dt,
            velocity,
            drag,
            target,
            attract,
            exponent,
            role,
            scale,
            #[cfg(feature = "serde")]
            json,
        } => {
            let setup = Simulation {
                steps,
                dt,
                velocity: planar(&velocity),
                drag,
                target: target.as_deref().map(planar),
                attract,
                exponent,
                role: role.into(),
                scale,
            };
            #[cfg(feature = "serde")]
            if json {
                return setup.run_json();
            }
            setup.run_table()
        }
    }
}

fn planar(values: &[f64]) -> DVec3 {
    match values {
        [x, y, ..] => DVec3::new(*x, *y, 0.0),
        _ => DVec3::ZERO,
    }
}

fn leg_headers() -> Vec<String> {
    let mut headers = vec!["Distance".to_string(), "Cycle".to_string()];
    for pair in 0..3 {
        headers.push(format!("L{pair} yaw/lift"));
        headers.push(format!("R{pair} yaw/lift"));
    }
    headers
}

fn execute_sample(distance: f64, scale: f64, steps: usize, increment: f64) -> Result<()> {
    let gait = Gait::hexapod().context("Failed to build hexapod gait")?;
    let animator = gait.animator();

    println!("🐞 Hexapod gait (stride {})", animator.stride());
    let headers = leg_headers();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut table = create_table(&header_refs);

    let mut pose = vec![0.0; animator.pose_len()];
    for i in 0..steps {
        let phase = distance + increment * i as f64;
        let cycle = animator
            .pose_into(phase, scale, &mut pose)
            .with_context(|| format!("Failed to sample gait at distance {phase}"))?;

        let mut row = vec![format_length(phase), format!("{cycle:.3}")];
        row.extend(
            gait.legs(&pose)
                .map(|leg| format!("{}/{}", format_degrees(leg.yaw), format_degrees(leg.lift))),
        );
        add_table_row(&mut table, row);
    }
    table.printstd();
    Ok(())
}

struct Simulation {
    steps: usize,
    dt: f64,
    velocity: DVec3,
    drag: f64,
    target: Option<DVec3>,
    attract: f64,
    exponent: f64,
    role: BugRole,
    scale: f64,
}

/// State of the bug after one step
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct Frame {
    step: usize,
    position: [f64; 2],
    distance: f64,
    heading: f64,
    cycle: f64,
}

impl Simulation {
    fn run(&self, mut on_frame: impl FnMut(Frame)) -> Result<()> {
        let gait = Gait::hexapod().context("Failed to build hexapod gait")?;
        let critter = Critter::new(0.0, 0.0, self.velocity.x, self.velocity.y);
        let mut bug =
            Bug::new(&gait, critter, self.scale, self.role).context("Invalid bug parameters")?;
        debug!(
            "simulating {} steps of {} for a {} bug",
            self.steps, self.dt, self.role
        );

        for step in 1..=self.steps {
            bug.critter.accel_reset();
            if self.drag != 0.0 {
                bug.critter.accel_drag(self.drag);
            }
            if let Some(target) = self.target {
                let gain = self.attract * self.role.pursuit_sign();
                bug.critter.accel_attract(target, gain, self.exponent);
            }
            bug.step(&gait, self.dt)
                .with_context(|| format!("Failed to pose bug at step {step}"))?;

            let position = bug.location();
            on_frame(Frame {
                step,
                position: [position.x, position.y],
                distance: bug.critter.distance_traveled(),
                heading: bug.critter.heading_degrees(),
                cycle: bug.state().cycle_position,
            });
        }
        Ok(())
    }

    fn run_table(&self) -> Result<()> {
        let mut table = create_table(&["Step", "Position", "Distance", "Heading", "Cycle"]);
        self.run(|frame| {
            add_table_row(
                &mut table,
                vec![
                    frame.step.to_string(),
                    format_planar(DVec3::new(frame.position[0], frame.position[1], 0.0)),
                    format_length(frame.distance),
                    format_degrees(frame.heading),
                    format!("{:.3}", frame.cycle),
                ],
            );
        })?;
        table.printstd();
        Ok(())
    }

    #[cfg(feature = "serde")]
    fn run_json(&self) -> Result<()> {
        let mut lines = Vec::with_capacity(self.steps);
        self.run(|frame| lines.push(serde_json::to_string(&frame)))?;
        for line in lines {
            println!("{}", line.context("Failed to encode frame")?);
        }
        Ok(())
    }
}
