//! # spaceflight
//!
//! A tick-locked arcade space flight game for small monochrome displays.
//!
//! Fly the ship with an analog joystick, collect stars, shoot asteroids and don't touch
//! them. The whole game is a fixed 60 Hz step over a handful of fixed-capacity sprite
//! pools:
//! - **Time base**: a flag raised by a timer, consumed once per step ([`TickFlag`])
//! - **Input**: two joystick axes and the shoot/reset buttons ([`InputSource`])
//! - **Display**: a 128×64 monochrome surface ([`DisplaySink`], [`Frame`], [`Screen`])
//! - **Sound**: one blocking tone at a time ([`ToneSink`], [`Buzzer`])
//! - **Loop**: update, collide, render per tick; idle until reset after game over
//!   ([`Game`])
//!
//! The simulation is `no_std`, allocation-free and hardware-agnostic. With the `badge`
//! feature the crate also carries board support and firmware for the Disobey 2026 badge.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! static TICK: spaceflight::TickFlag = spaceflight::TickFlag::new();
//!
//! let mut game = spaceflight::Game::new(Config::default(), &TICK, input, display, buzzer)?;
//! loop {
//!     game.poll();
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod audio;
pub mod collision;
mod config;
mod error;
mod frame;
mod game;
mod input;
mod object;
pub mod render;
mod state;
mod time_base;
pub mod update;

#[cfg(feature = "badge")]
pub mod board;

#[cfg(test)]
mod testing;

pub use audio::{
    Buzzer,
    Tone,
    ToneSink,
};
pub use config::{
    ADC_MAX,
    Config,
    HEIGHT,
    MAX_ASTEROIDS,
    MAX_LASERS,
    MAX_STARS,
    WIDTH,
};
pub use error::ConfigError;
pub use frame::{
    Frame,
    Screen,
};
pub use game::{
    Game,
    Poll,
};
pub use input::{
    Axis,
    Button,
    Controls,
    InputSource,
    pressed_from_level,
};
pub use object::{
    MovingObject,
    Pool,
};
pub use render::DisplaySink;
pub use state::{
    Mode,
    SimulationState,
};
pub use time_base::{
    TickFlag,
    TimeBase,
};
