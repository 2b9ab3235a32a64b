//! Piezo buzzer on the expansion header.

use esp_hal::{
    delay::Delay,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
};

use super::BuzzerResources;
use crate::audio::Buzzer;

/// Buzzer driven from a GPIO, timed with the busy-wait delay so tones block the loop.
pub type BadgeBuzzer = Buzzer<Output<'static>, Delay>;

impl From<BuzzerResources<'static>> for BadgeBuzzer {
    fn from(res: BuzzerResources<'static>) -> Self {
        Buzzer::new(
            Output::new(res.pin, Level::Low, OutputConfig::default()),
            Delay::new(),
        )
    }
}
