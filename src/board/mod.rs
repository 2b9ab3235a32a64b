//! Disobey 2026 badge support: pin map, bring-up and the hardware-backed collaborators.
//!
//! - **Display**: 320×170 ST7789 over SPI with DMA, playfield shown 2× and centered
//! - **Joystick**: the D-pad read as a digital two-axis stick, A to shoot, Start to reset
//! - **Buzzer**: piezo on the expansion header, bit-banged square wave
//! - **Time base**: an embassy ticker task raising the shared [`TickFlag`]
//!
//! ```rust,ignore
//! let peripherals = spaceflight::board::init();
//! let resources = split_resources!(peripherals);
//!
//! let panel: Panel = resources.display.into();
//! let joystick = Joystick::new(resources.buttons.into(), &config);
//! let buzzer: BadgeBuzzer = resources.buzzer.into();
//! ```

mod buzzer;
mod display;
mod joystick;

pub use buzzer::BadgeBuzzer;
pub use display::{
    Display,
    Panel,
};
use embassy_time::{
    Duration,
    Ticker,
};
use esp_hal::{
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    rom,
};
use fugit::HertzU32;
pub use joystick::{
    Buttons,
    Joystick,
};

use crate::{
    Game,
    TickFlag,
};

/// The game wired to badge hardware.
pub type BadgeGame = Game<&'static TickFlag, Joystick, Panel<'static>, BadgeBuzzer>;

/// StaticCell helper — allocates a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            dc: GPIO15,
            rst: GPIO7,
            sck: GPIO4,
            cs: GPIO6,
            miso: GPIO16,
            mosi: GPIO5,
            spi: SPI2,
            dma: DMA_CH0,
            backlight: GPIO19,
        },
        buttons: ButtonResources<'d> {
            up: GPIO11,
            down: GPIO1,
            left: GPIO21,
            right: GPIO2,
            a: GPIO13,
            start: GPIO12,
        },
        buzzer: BuzzerResources<'d> {
            pin: GPIO9,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Minimal CPU clock switcher for ESP32-S3.
///
/// Steps through an intermediate frequency before reaching the target,
/// which is required by the hardware.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Initialise the badge hardware and return the raw peripheral set.
///
/// Call this once at the top of `main`, then break the peripherals into
/// resource groups with `split_resources!`.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

// ── Time base ───────────────────────────────────────────────────────────────

/// Raise `flag` at `rate` forever. The game loop consumes it.
#[embassy_executor::task]
pub async fn tick_task(flag: &'static TickFlag, rate: HertzU32) {
    info!("tick task started at {} Hz", rate.to_Hz());
    let mut ticker = Ticker::every(Duration::from_hz(u64::from(rate.to_Hz())));
    loop {
        ticker.next().await;
        if flag.signal() {
            trace!("tick dropped, loop still busy");
        }
    }
}
