//! Everything a round is made of: the ship, the three pools, score and mode.

use crate::{
    config::{
        HEIGHT,
        MAX_ASTEROIDS,
        MAX_LASERS,
        MAX_STARS,
    },
    object::{
        MovingObject,
        Pool,
    },
};

/// Round state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Running,
    GameOver,
}

const SHIP_START: (i32, i32) = (20, 32);

/// Horizontal speed of an asteroid, derived from its slot so lanes differ.
pub(crate) const fn asteroid_speed(slot: usize) -> i32 {
    -2 - (slot % 3) as i32
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    pub ship: MovingObject,
    pub stars: Pool<MAX_STARS>,
    pub asteroids: Pool<MAX_ASTEROIDS>,
    pub lasers: Pool<MAX_LASERS>,
    pub score: u16,
    pub mode: Mode,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// A freshly started round.
    pub fn new() -> Self {
        Self {
            ship: MovingObject::new(SHIP_START.0, SHIP_START.1, 0, 0),
            stars: Pool::from_fn(|i| {
                let i = i as i32;
                MovingObject::new(50 + i * 10, (i * 13) % HEIGHT, -1, 0)
            }),
            asteroids: Pool::from_fn(|i| {
                let slot = i as i32;
                MovingObject::new(100 + slot * 20, (slot * 17) % HEIGHT, asteroid_speed(i), 0)
            }),
            lasers: Pool::new(),
            score: 0,
            mode: Mode::Running,
        }
    }

    /// Reset every pool and scalar to the deterministic opening layout.
    pub fn start_round(&mut self) {
        *self = Self::new();
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub(crate) fn award(&mut self, points: u16) {
        self.score = self.score.saturating_add(points);
    }
}
