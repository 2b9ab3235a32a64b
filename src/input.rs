//! Joystick and button input.

use crate::config::Config;

/// Joystick ADC channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Shoot,
    Reset,
}

/// Source of raw player input.
pub trait InputSource {
    /// Current reading of a joystick axis, in `0..=Config::joystick_max`.
    fn read_axis(&mut self, axis: Axis) -> u16;

    /// Whether a button is held right now, already normalized from the pin level.
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Buttons are wired with pull-ups: a pressed button reads low.
pub const fn pressed_from_level(is_high: bool) -> bool {
    !is_high
}

/// One tick's worth of sampled input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controls {
    pub joy_x: u16,
    pub joy_y: u16,
    pub shoot: bool,
}

impl Controls {
    /// Read both axes (X first) and the shoot button.
    pub fn sample(input: &mut impl InputSource) -> Self {
        Self {
            joy_x: input.read_axis(Axis::X),
            joy_y: input.read_axis(Axis::Y),
            shoot: input.is_pressed(Button::Shoot),
        }
    }

    /// Ship velocity for this tick: direct position-rate mapping, truncating toward zero.
    pub fn ship_velocity(&self, config: &Config) -> (i32, i32) {
        let center = i32::from(config.joystick_center);
        (
            (i32::from(self.joy_x) - center) / config.joystick_divisor,
            (i32::from(self.joy_y) - center) / config.joystick_divisor,
        )
    }
}
