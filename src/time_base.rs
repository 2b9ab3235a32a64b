//! Tick source for the fixed-rate loop.
//!
//! The producer (timer interrupt or timer task) only ever raises a flag. The loop consumes
//! it with a single atomic swap, so one raise yields at most one step and ticks raised while
//! the loop was busy collapse into one instead of queueing up.

use core::sync::atomic::{
    AtomicBool,
    Ordering,
};

/// Tick-pending signal as seen by the game loop.
pub trait TimeBase {
    fn tick_pending(&self) -> bool;

    fn clear_tick(&self);

    /// Consume a pending tick. Returns `true` at most once per raise.
    fn take_tick(&self) -> bool {
        let pending = self.tick_pending();
        if pending {
            self.clear_tick();
        }
        pending
    }
}

/// Single-slot tick flag, shareable with an interrupt handler or another task as a `static`.
#[derive(Debug, Default)]
pub struct TickFlag(AtomicBool);

impl TickFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Raise the flag. Producer side; never blocks. Returns `true` if the previous tick had
    /// not been consumed yet, i.e. a tick was just dropped.
    pub fn signal(&self) -> bool {
        self.0.swap(true, Ordering::Release)
    }
}

impl TimeBase for TickFlag {
    fn tick_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn clear_tick(&self) {
        self.0.store(false, Ordering::Release);
    }

    fn take_tick(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl<T: TimeBase + ?Sized> TimeBase for &T {
    fn tick_pending(&self) -> bool {
        (**self).tick_pending()
    }

    fn clear_tick(&self) {
        (**self).clear_tick();
    }

    fn take_tick(&self) -> bool {
        (**self).take_tick()
    }
}
