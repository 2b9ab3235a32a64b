//! Sound effects and the blocking tone generator.
//!
//! Tones are synchronous: a tone holds the loop for its whole duration, and tones raised in
//! the same tick play back to back in the order their events happened. Nothing is mixed and
//! nothing is dropped.

use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
};
use fugit::{
    HertzU32,
    MillisDurationU32,
};

/// Blocking tone generator.
pub trait ToneSink {
    /// Play a square tone, returning once `duration` has elapsed. A zero frequency is a
    /// rest: silent, but it still takes `duration`.
    fn play(&mut self, frequency: HertzU32, duration: MillisDurationU32);
}

impl<T: ToneSink + ?Sized> ToneSink for &mut T {
    fn play(&mut self, frequency: HertzU32, duration: MillisDurationU32) {
        (**self).play(frequency, duration);
    }
}

/// The game's sound effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tone {
    Shoot,
    Explosion,
    Hit,
    Collect,
}

impl Tone {
    pub const fn frequency(self) -> HertzU32 {
        HertzU32::from_raw(match self {
            Self::Shoot => 1000,
            Self::Explosion => 500,
            Self::Hit => 800,
            Self::Collect => 1200,
        })
    }

    pub const fn duration(self) -> MillisDurationU32 {
        MillisDurationU32::from_ticks(match self {
            Self::Shoot | Self::Collect => 50,
            Self::Hit => 100,
            Self::Explosion => 200,
        })
    }

    pub fn play_on(self, sink: &mut impl ToneSink) {
        sink.play(self.frequency(), self.duration());
    }
}

/// Piezo buzzer bit-banged from a GPIO: toggles the pin every half period.
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Buzzer<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn drive(&mut self, high: bool) -> bool {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.is_ok()
    }
}

impl<P: OutputPin, D: DelayNs> ToneSink for Buzzer<P, D> {
    fn play(&mut self, frequency: HertzU32, duration: MillisDurationU32) {
        let hz = frequency.to_Hz();
        if hz == 0 {
            self.drive(false);
            self.delay.delay_ms(duration.ticks());
            return;
        }

        let half_period_us = (500_000 / hz).max(1);
        let edges = duration.to_micros() / half_period_us;
        for edge in 0..edges {
            if !self.drive(edge % 2 == 0) {
                error!("buzzer pin write failed");
                // Stay silent for the rest of the tone so the caller still blocks for it.
                self.delay.delay_us((edges - edge) * half_period_us);
                break;
            }
            self.delay.delay_us(half_period_us);
        }
        self.drive(false);
    }
}
