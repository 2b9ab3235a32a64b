//! The loop driver: owns the round and its collaborators, and runs one simulation step per
//! observed tick.

use crate::{
    audio::ToneSink,
    collision,
    config::Config,
    error::ConfigError,
    input::{
        Button,
        Controls,
        InputSource,
    },
    render::{
        self,
        DisplaySink,
    },
    state::{
        Mode,
        SimulationState,
    },
    time_base::TimeBase,
    update,
};

/// What one call to [`Game::poll`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Poll {
    /// Round running, no tick was pending. Nothing changed.
    Idle,
    /// One tick simulated and drawn.
    Stepped,
    /// The tick just simulated ended the round; the game-over screen is up.
    RoundOver,
    /// Game over, reset not pressed.
    AwaitingReset,
    /// Reset pressed during game over; a new round is running.
    Restarted,
}

pub struct Game<T, I, D, S> {
    time_base: T,
    input: I,
    display: D,
    tones: S,
    config: Config,
    state: SimulationState,
}

impl<T, I, D, S> Game<T, I, D, S>
where
    T: TimeBase,
    I: InputSource,
    D: DisplaySink,
    S: ToneSink,
{
    /// Validate `config` and start the first round.
    pub fn new(
        config: Config,
        time_base: T,
        input: I,
        display: D,
        tones: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self {
            time_base,
            input,
            display,
            tones,
            config,
            state: SimulationState::new(),
        };
        game.restart();
        Ok(game)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Direct access to the round, for scripted setups.
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn tones(&self) -> &S {
        &self.tones
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// One iteration of the outer loop.
    ///
    /// While running this is [`step`](Self::step). After game over the tick gate is
    /// bypassed and only the reset button is watched.
    pub fn poll(&mut self) -> Poll {
        match self.state.mode {
            Mode::Running => self.step(),
            Mode::GameOver if self.input.is_pressed(Button::Reset) => {
                self.restart();
                Poll::Restarted
            }
            Mode::GameOver => Poll::AwaitingReset,
        }
    }

    /// Simulate and draw one tick, if one is pending and the round is live.
    ///
    /// Consumes the pending tick. Without one this touches nothing.
    pub fn step(&mut self) -> Poll {
        if !self.state.is_running() {
            return Poll::AwaitingReset;
        }
        if !self.time_base.take_tick() {
            return Poll::Idle;
        }

        let controls = Controls::sample(&mut self.input);
        update::advance(&mut self.state, &controls, &self.config, &mut self.tones);
        collision::resolve(&mut self.state, &self.config, &mut self.tones);

        if self.state.is_running() {
            render::compose(&self.state, &mut self.display);
            Poll::Stepped
        } else {
            info!("game over, score {}", self.state.score);
            render::compose_game_over(self.state.score, &mut self.display);
            Poll::RoundOver
        }
    }

    fn restart(&mut self) {
        self.state.start_round();
        // A tick raised while the previous round was over is stale.
        self.time_base.clear_tick();
        render::compose(&self.state, &mut self.display);
        info!("round started");
    }
}
