//! Drawing the simulation onto a monochrome surface.

use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{
        Alignment,
        Baseline,
        Text,
        TextStyleBuilder,
    },
};

use crate::{
    config::{
        HEIGHT,
        WIDTH,
    },
    state::SimulationState,
};

/// Pixel-addressable monochrome surface.
pub trait DisplaySink {
    /// Blank the whole surface.
    fn clear(&mut self);

    /// Light one pixel. Coordinates outside the playfield are ignored.
    fn set_pixel(&mut self, x: i32, y: i32);

    /// Make everything drawn since the last `clear` visible.
    fn present(&mut self);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        (**self).set_pixel(x, y);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

/// Ship glyph relative to its position: nose, then the two wing pixels.
const SHIP: [(i32, i32); 3] = [(0, 0), (1, -1), (1, 1)];
/// Asteroids are a 2×2 block anchored top-left.
const ASTEROID: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

fn draw_glyph(sink: &mut impl DisplaySink, x: i32, y: i32, glyph: &[(i32, i32)]) {
    for &(dx, dy) in glyph {
        sink.set_pixel(x + dx, y + dy);
    }
}

/// Full redraw of a running round: ship, stars, asteroids, lasers.
pub fn compose(state: &SimulationState, sink: &mut impl DisplaySink) {
    sink.clear();

    draw_glyph(sink, state.ship.x, state.ship.y, &SHIP);
    for (_, star) in state.stars.iter_active() {
        sink.set_pixel(star.x, star.y);
    }
    for (_, asteroid) in state.asteroids.iter_active() {
        draw_glyph(sink, asteroid.x, asteroid.y, &ASTEROID);
    }
    for (_, laser) in state.lasers.iter_active() {
        sink.set_pixel(laser.x, laser.y);
    }

    sink.present();
}

// ── Game-over screen ────────────────────────────────────────────────────────

/// Adapts a [`DisplaySink`] to embedded-graphics so text can be drawn onto it.
///
/// Only `On` pixels reach the sink; `Off` leaves the pixel as it was.
struct Canvas<'a, S: ?Sized>(&'a mut S);

impl<S: DisplaySink + ?Sized> OriginDimensions for Canvas<'_, S> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<S: DisplaySink + ?Sized> DrawTarget for Canvas<'_, S> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if color.is_on() {
                self.0.set_pixel(x, y);
            }
        }
        Ok(())
    }
}

/// Top edge of the "GAME OVER" line.
const LABEL_Y: i32 = 18;
/// Top edge of the score line.
const SCORE_Y: i32 = 36;
const SCORE_PREFIX: &[u8] = b"Score: ";

/// Decimal digits of `n`, most significant first.
fn decimal(mut n: u16, buf: &mut [u8; 5]) -> &str {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    core::str::from_utf8(&buf[start..]).unwrap_or_default()
}

fn score_line(score: u16, buf: &mut [u8; 12]) -> &str {
    let mut digits = [0; 5];
    let digits = decimal(score, &mut digits).as_bytes();
    let end = SCORE_PREFIX.len() + digits.len();
    buf[..SCORE_PREFIX.len()].copy_from_slice(SCORE_PREFIX);
    buf[SCORE_PREFIX.len()..end].copy_from_slice(digits);
    core::str::from_utf8(&buf[..end]).unwrap_or_default()
}

/// End-of-round screen: a border around the playfield, "GAME OVER" and the final score,
/// both centered.
pub fn compose_game_over(score: u16, sink: &mut impl DisplaySink) {
    sink.clear();

    for x in 0..WIDTH {
        sink.set_pixel(x, 0);
        sink.set_pixel(x, HEIGHT - 1);
    }
    for y in 1..HEIGHT - 1 {
        sink.set_pixel(0, y);
        sink.set_pixel(WIDTH - 1, y);
    }

    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    let mut canvas = Canvas(sink);

    let label = Point::new(WIDTH / 2, LABEL_Y);
    let Ok(_) = Text::with_text_style("GAME OVER", label, style, centered).draw(&mut canvas);

    let mut buf = [0; 12];
    let line = score_line(score, &mut buf);
    let at = Point::new(WIDTH / 2, SCORE_Y);
    let Ok(_) = Text::with_text_style(line, at, style, centered).draw(&mut canvas);

    canvas.0.present();
}
