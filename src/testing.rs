//! Recording collaborators for unit tests.

use std::vec::Vec;

use fugit::{
    HertzU32,
    MillisDurationU32,
};

use crate::{
    audio::ToneSink,
    config::ADC_MAX,
    input::{
        Axis,
        Button,
        InputSource,
    },
    render::DisplaySink,
};

/// Tone sink remembering `(hz, ms)` of every tone, in order.
#[derive(Debug, Default)]
pub struct RecordingTones {
    pub played: Vec<(u32, u32)>,
}

impl ToneSink for RecordingTones {
    fn play(&mut self, frequency: HertzU32, duration: MillisDurationU32) {
        self.played.push((frequency.to_Hz(), duration.ticks()));
    }
}

/// Display sink remembering every call.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub clears: u32,
    pub presents: u32,
    pub pixels: Vec<(i32, i32)>,
}

impl DisplaySink for RecordingDisplay {
    fn clear(&mut self) {
        self.clears += 1;
        self.pixels.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.pixels.push((x, y));
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

/// Input held at whatever the test sets.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedInput {
    pub x: u16,
    pub y: u16,
    pub shoot: bool,
    pub reset: bool,
}

impl ScriptedInput {
    pub const fn centered() -> Self {
        Self {
            x: ADC_MAX / 2 + 1,
            y: ADC_MAX / 2 + 1,
            shoot: false,
            reset: false,
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_axis(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Shoot => self.shoot,
            Button::Reset => self.reset,
        }
    }
}
