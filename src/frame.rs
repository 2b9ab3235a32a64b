//! 1-bpp framebuffer for the playfield, and its bridge onto `embedded-graphics` targets.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{
        Point,
        Size,
    },
    primitives::Rectangle,
};

use crate::{
    config::{
        HEIGHT,
        WIDTH,
    },
    render::DisplaySink,
};

const ROW_BYTES: usize = WIDTH as usize / 8;
const LEN: usize = ROW_BYTES * HEIGHT as usize;

/// Playfield-sized monochrome buffer.
///
/// Rows are stored top to bottom, each row left to right with the most significant bit of
/// every byte first (the layout `ImageRaw<BinaryColor>` reads).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Frame([u8; LEN]);

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub const fn new() -> Self {
        Self([0; LEN])
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.0
    }

    fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if !(0..WIDTH).contains(&x) || !(0..HEIGHT).contains(&y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * ROW_BYTES + x / 8, 0x80 >> (x % 8)))
    }

    pub fn is_set(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|(byte, mask)| self.0[byte] & mask != 0)
    }

    pub fn lit_pixels(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }
}

impl DisplaySink for Frame {
    fn clear(&mut self) {
        self.0.fill(0);
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some((byte, mask)) = Self::index(x, y) {
            self.0[byte] |= mask;
        }
    }

    /// The buffer is the surface; nothing to flush.
    fn present(&mut self) {}
}

/// A [`Frame`] shown on a real panel.
///
/// Drawing goes into the frame; `present` pushes the whole frame to the target in one
/// contiguous fill, each playfield pixel blown up to a `scale`×`scale` square at `origin`.
pub struct Screen<D: DrawTarget> {
    target: D,
    frame: Frame,
    origin: Point,
    scale: u32,
    on: D::Color,
    off: D::Color,
}

impl<D: DrawTarget> Screen<D> {
    pub fn new(target: D, on: D::Color, off: D::Color) -> Self {
        Self {
            target,
            frame: Frame::new(),
            origin: Point::zero(),
            scale: 1,
            on,
            off,
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Area of the target covered by the playfield.
    pub fn area(&self) -> Rectangle {
        Rectangle::new(
            self.origin,
            Size::new(WIDTH as u32 * self.scale, HEIGHT as u32 * self.scale),
        )
    }
}

impl<D: DrawTarget> DisplaySink for Screen<D> {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.frame.set_pixel(x, y);
    }

    fn present(&mut self) {
        let area = self.area();
        let Self {
            target,
            frame,
            scale,
            on,
            off,
            ..
        } = self;
        let frame: &Frame = frame;
        let (scale, on, off) = (*scale as i32, *on, *off);

        let colors = (0..HEIGHT * scale).flat_map(move |py| {
            (0..WIDTH * scale).map(move |px| {
                if frame.is_set(px / scale, py / scale) {
                    on
                } else {
                    off
                }
            })
        });
        if target.fill_contiguous(&area, colors).is_err() {
            error!("display flush failed");
        }
    }
}
