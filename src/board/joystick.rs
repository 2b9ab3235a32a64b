//! Player input on the badge.
//!
//! The badge has no analog stick, so the D-pad stands in for one: each axis reads full
//! deflection while its direction is held and the rest value otherwise. A shoots and
//! Start resets.

use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use super::ButtonResources;
use crate::{
    config::Config,
    input::{
        Axis,
        Button,
        InputSource,
        pressed_from_level,
    },
};

/// The buttons the game reads. All wired active low with pull-ups.
pub struct Buttons {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub left: Input<'static>,
    pub right: Input<'static>,
    pub a: Input<'static>,
    pub start: Input<'static>,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            up: Input::new(res.up, pull_up),
            down: Input::new(res.down, pull_up),
            left: Input::new(res.left, pull_up),
            right: Input::new(res.right, pull_up),
            a: Input::new(res.a, pull_up),
            start: Input::new(res.start, pull_up),
        }
    }
}

fn pressed(button: &Input<'_>) -> bool {
    pressed_from_level(button.is_high())
}

/// D-pad as a digital joystick.
pub struct Joystick {
    buttons: Buttons,
    center: u16,
    max: u16,
}

impl Joystick {
    pub fn new(buttons: Buttons, config: &Config) -> Self {
        Self {
            buttons,
            center: config.joystick_center,
            max: config.joystick_max,
        }
    }

    fn deflection(&self, low: &Input<'_>, high: &Input<'_>) -> u16 {
        match (pressed(low), pressed(high)) {
            (true, false) => 0,
            (false, true) => self.max,
            _ => self.center,
        }
    }
}

impl InputSource for Joystick {
    fn read_axis(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.deflection(&self.buttons.left, &self.buttons.right),
            Axis::Y => self.deflection(&self.buttons.up, &self.buttons.down),
        }
    }

    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Shoot => pressed(&self.buttons.a),
            Button::Reset => pressed(&self.buttons.start),
        }
    }
}
