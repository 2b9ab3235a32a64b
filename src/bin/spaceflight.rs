//! Space flight on the Disobey 2026 badge.
//!
//! Controls:
//! - D-pad: steer the ship
//! - A: fire (hold for autofire, three lasers in flight at most)
//! - Start: new round after game over

#![no_std]
#![no_main]

use defmt::{
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use spaceflight::{
    board::*,
    *,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

static TICK: TickFlag = TickFlag::new();

/// How often the game-over screen checks the Start button.
const RESET_POLL: Duration = Duration::from_millis(50);

#[embassy_executor::task]
async fn game_task(game: &'static mut BadgeGame) {
    info!("Space flight started");
    loop {
        match game.poll() {
            Poll::RoundOver => {
                info!("Game over! Score: {}", game.state().score);
                Timer::after(RESET_POLL).await;
            }
            Poll::AwaitingReset => Timer::after(RESET_POLL).await,
            Poll::Restarted => info!("New round"),
            Poll::Idle | Poll::Stepped => embassy_futures::yield_now().await,
        }
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = board::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let config = Config::default();
    let panel: Panel<'static> = resources.display.into();
    let joystick = Joystick::new(resources.buttons.into(), &config);
    let buzzer: BadgeBuzzer = resources.buzzer.into();

    match Game::new(config, &TICK, joystick, panel, buzzer) {
        Ok(game) => {
            let game = mk_static!(BadgeGame, game);
            spawner.must_spawn(tick_task(&TICK, config.tick_rate));
            spawner.must_spawn(game_task(game));
        }
        Err(e) => error!("Refusing to start: {}", e),
    }

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
