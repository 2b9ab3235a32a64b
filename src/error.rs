//! Configuration errors.
//!
//! The simulation itself has no failure modes: a dropped shot and a lost round are game
//! events, not errors. What can be wrong is a [`Config`](crate::Config) the loop cannot
//! run with, which [`Game::new`](crate::Game::new) rejects up front.

use core::fmt;

use crate::config::{
    HEIGHT,
    WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The time base would never tick.
    ZeroTickRate,
    /// Joystick center lies outside `0..=max`, or the range is empty.
    JoystickRange { center: u16, max: u16 },
    /// Joystick divisor must be positive.
    JoystickDivisor(i32),
    /// Ship margin leaves no room on the playfield.
    ShipMargin { axis: &'static str, margin: i32 },
    /// Collision threshold must be positive.
    CollisionThreshold(i32),
    /// Lasers must travel rightwards, less than a playfield width per tick.
    LaserSpeed(i32),
    /// Lasers must spawn on the playfield row ahead of the ship.
    LaserNoseOffset(i32),
    /// Wrap row advance must be shorter than the playfield height.
    RowStep { pool: &'static str, step: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTickRate => write!(f, "tick rate must be non-zero"),
            Self::JoystickRange { center, max } => {
                write!(f, "joystick center {center} outside range 0..={max}")
            }
            Self::JoystickDivisor(d) => write!(f, "joystick divisor {d} must be positive"),
            Self::ShipMargin { axis, margin } => {
                write!(f, "ship {axis} margin {margin} leaves no room on the playfield")
            }
            Self::CollisionThreshold(t) => write!(f, "collision threshold {t} must be positive"),
            Self::LaserSpeed(s) => write!(f, "laser speed {s} outside 1..{WIDTH}"),
            Self::LaserNoseOffset(o) => write!(f, "laser nose offset {o} outside 0..{WIDTH}"),
            Self::RowStep { pool, step } => {
                write!(f, "{pool} row step {step} must be shorter than {HEIGHT}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
