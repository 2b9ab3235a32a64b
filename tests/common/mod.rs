#![allow(dead_code)]

use spaceflight::{
    Axis,
    Button,
    Config,
    DisplaySink,
    Frame,
    Game,
    InputSource,
    TickFlag,
    ToneSink,
};

/// Tone sink logging `(hz, ms)` pairs.
#[derive(Debug, Default)]
pub struct Tones(pub Vec<(u32, u32)>);

impl ToneSink for Tones {
    fn play(&mut self, frequency: fugit::HertzU32, duration: fugit::MillisDurationU32) {
        self.0.push((frequency.to_Hz(), duration.ticks()));
    }
}

/// Frame that also counts presents.
#[derive(Debug, Default)]
pub struct Screen {
    pub frame: Frame,
    pub presents: u32,
}

impl DisplaySink for Screen {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.frame.set_pixel(x, y);
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Stick {
    pub x: u16,
    pub y: u16,
    pub shoot: bool,
    pub reset: bool,
}

impl Default for Stick {
    fn default() -> Self {
        Self {
            x: 512,
            y: 512,
            shoot: false,
            reset: false,
        }
    }
}

impl InputSource for Stick {
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

pub type TestGame<'a> = Game<&'a TickFlag, Stick, Screen, Tones>;

pub fn game(flag: &TickFlag) -> TestGame<'_> {
    Game::new(
        Config::default(),
        flag,
        Stick::default(),
        Screen::default(),
        Tones::default(),
    )
    .expect("default config is valid")
}

/// Park every star and asteroid so a test only sees what it places.
pub fn clear_field(game: &mut TestGame<'_>) {
    let state = game.state_mut();
    for star in state.stars.slots_mut() {
        star.active = false;
    }
    for asteroid in state.asteroids.slots_mut() {
        asteroid.active = false;
    }
}

/// Raise one tick and poll once.
pub fn tick(flag: &TickFlag, game: &mut TestGame<'_>) -> spaceflight::Poll {
    flag.signal();
    game.poll()
}
