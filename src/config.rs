//! Playfield geometry, pool capacities and gameplay tuning.
//!
//! Anything that sizes an array is a `const`; everything else lives in [`Config`] so a
//! board can retune the game without touching the simulation.

use fugit::HertzU32;

use crate::error::ConfigError;

// ── Geometry / capacities ───────────────────────────────────────────────────

/// Playfield width in pixels (SSD1306-class 128×64 panel).
pub const WIDTH: i32 = 128;
/// Playfield height in pixels.
pub const HEIGHT: i32 = 64;

pub const MAX_STARS: usize = 10;
pub const MAX_ASTEROIDS: usize = 5;
pub const MAX_LASERS: usize = 3;

/// Full-scale reading of the 10-bit joystick ADC.
pub const ADC_MAX: u16 = 1023;

// ── Tuning ──────────────────────────────────────────────────────────────────

/// Gameplay tuning. `Config::default()` reproduces the reference game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Rate the time base raises ticks at.
    pub tick_rate: HertzU32,
    /// Joystick reading at rest.
    pub joystick_center: u16,
    /// Largest value the joystick ADC returns.
    pub joystick_max: u16,
    /// `(sample - center) / divisor` gives the ship speed in px/tick.
    pub joystick_divisor: i32,
    /// Distance kept between the ship and the right edge.
    pub ship_margin_x: i32,
    /// Distance kept between the ship and the bottom edge.
    pub ship_margin_y: i32,
    /// Objects collide when both `|dx|` and `|dy|` are below this.
    pub collision_threshold: i32,
    pub star_reward: u16,
    pub asteroid_reward: u16,
    pub laser_speed: i32,
    /// Lasers spawn this far ahead of the ship.
    pub laser_nose_offset: i32,
    /// Row advance applied to a star when it wraps.
    pub star_row_step: i32,
    /// Row advance applied to an asteroid when it wraps.
    pub asteroid_row_step: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: HertzU32::from_raw(60),
            joystick_center: 512,
            joystick_max: ADC_MAX,
            joystick_divisor: 100,
            ship_margin_x: 8,
            ship_margin_y: 4,
            collision_threshold: 3,
            star_reward: 5,
            asteroid_reward: 10,
            laser_speed: 5,
            laser_nose_offset: 5,
            star_row_step: 13,
            asteroid_row_step: 17,
        }
    }
}

impl Config {
    #[must_use]
    pub const fn with_tick_rate(mut self, tick_rate: HertzU32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Recalibrate the joystick for a different ADC.
    #[must_use]
    pub const fn with_joystick(mut self, center: u16, max: u16, divisor: i32) -> Self {
        self.joystick_center = center;
        self.joystick_max = max;
        self.joystick_divisor = divisor;
        self
    }

    #[must_use]
    pub const fn with_ship_margins(mut self, x: i32, y: i32) -> Self {
        self.ship_margin_x = x;
        self.ship_margin_y = y;
        self
    }

    #[must_use]
    pub const fn with_collision_threshold(mut self, threshold: i32) -> Self {
        self.collision_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_rewards(mut self, star: u16, asteroid: u16) -> Self {
        self.star_reward = star;
        self.asteroid_reward = asteroid;
        self
    }

    #[must_use]
    pub const fn with_laser(mut self, speed: i32, nose_offset: i32) -> Self {
        self.laser_speed = speed;
        self.laser_nose_offset = nose_offset;
        self
    }

    #[must_use]
    pub const fn with_row_steps(mut self, star: i32, asteroid: i32) -> Self {
        self.star_row_step = star;
        self.asteroid_row_step = asteroid;
        self
    }

    /// Largest x the ship may occupy.
    pub const fn ship_max_x(&self) -> i32 {
        WIDTH - self.ship_margin_x
    }

    /// Largest y the ship may occupy.
    pub const fn ship_max_y(&self) -> i32 {
        HEIGHT - self.ship_margin_y
    }

    /// Reject tunings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate.raw() == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.joystick_max == 0 || self.joystick_center > self.joystick_max {
            return Err(ConfigError::JoystickRange {
                center: self.joystick_center,
                max: self.joystick_max,
            });
        }
        if self.joystick_divisor <= 0 {
            return Err(ConfigError::JoystickDivisor(self.joystick_divisor));
        }
        if !(0..WIDTH).contains(&self.ship_margin_x) {
            return Err(ConfigError::ShipMargin {
                axis: "x",
                margin: self.ship_margin_x,
            });
        }
        if !(0..HEIGHT).contains(&self.ship_margin_y) {
            return Err(ConfigError::ShipMargin {
                axis: "y",
                margin: self.ship_margin_y,
            });
        }
        if self.collision_threshold <= 0 {
            return Err(ConfigError::CollisionThreshold(self.collision_threshold));
        }
        if !(1..WIDTH).contains(&self.laser_speed) {
            return Err(ConfigError::LaserSpeed(self.laser_speed));
        }
        if !(0..WIDTH).contains(&self.laser_nose_offset) {
            return Err(ConfigError::LaserNoseOffset(self.laser_nose_offset));
        }
        for (pool, step) in [
            ("star", self.star_row_step),
            ("asteroid", self.asteroid_row_step),
        ] {
            if step.checked_abs().is_none_or(|step| step >= HEIGHT) {
                return Err(ConfigError::RowStep { pool, step });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_tuning() {
        let config = Config::default();
        assert_eq!(config.tick_rate.to_Hz(), 60);
        assert_eq!(config.ship_max_x(), 120);
        assert_eq!(config.ship_max_y(), 60);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::default()
            .with_tick_rate(HertzU32::from_raw(30))
            .with_rewards(1, 2)
            .with_laser(7, 3);
        assert_eq!(config.tick_rate.to_Hz(), 30);
        assert_eq!((config.star_reward, config.asteroid_reward), (1, 2));
        assert_eq!((config.laser_speed, config.laser_nose_offset), (7, 3));
    }

    #[test]
    fn rejects_unusable_tunings() {
        assert_eq!(
            Config::default()
                .with_tick_rate(HertzU32::from_raw(0))
                .validate(),
            Err(ConfigError::ZeroTickRate)
        );
        assert_eq!(
            Config::default().with_joystick(512, 1023, 0).validate(),
            Err(ConfigError::JoystickDivisor(0))
        );
        assert_eq!(
            Config::default().with_joystick(2000, 1023, 100).validate(),
            Err(ConfigError::JoystickRange {
                center: 2000,
                max: 1023
            })
        );
        assert_eq!(
            Config::default().with_ship_margins(WIDTH, 4).validate(),
            Err(ConfigError::ShipMargin {
                axis: "x",
                margin: WIDTH
            })
        );
        assert_eq!(
            Config::default().with_collision_threshold(0).validate(),
            Err(ConfigError::CollisionThreshold(0))
        );
        assert_eq!(
            Config::default().with_laser(0, 5).validate(),
            Err(ConfigError::LaserSpeed(0))
        );
        assert_eq!(
            Config::default().with_laser(WIDTH, 5).validate(),
            Err(ConfigError::LaserSpeed(WIDTH))
        );
        assert_eq!(
            Config::default().with_laser(i32::MAX, 0).validate(),
            Err(ConfigError::LaserSpeed(i32::MAX))
        );
        assert_eq!(
            Config::default().with_laser(5, -1).validate(),
            Err(ConfigError::LaserNoseOffset(-1))
        );
        assert_eq!(
            Config::default().with_laser(5, WIDTH).validate(),
            Err(ConfigError::LaserNoseOffset(WIDTH))
        );
        assert_eq!(
            Config::default().with_row_steps(HEIGHT, 17).validate(),
            Err(ConfigError::RowStep {
                pool: "star",
                step: HEIGHT
            })
        );
        assert_eq!(
            Config::default().with_row_steps(13, i32::MIN).validate(),
            Err(ConfigError::RowStep {
                pool: "asteroid",
                step: i32::MIN
            })
        );
        assert_eq!(
            Config::default()
                .with_laser(WIDTH - 1, WIDTH - 1)
                .with_row_steps(-(HEIGHT - 1), HEIGHT - 1)
                .validate(),
            Ok(())
        );
    }
}
