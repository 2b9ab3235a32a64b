//! Collision pass, run once per tick between update and render.

use crate::{
    audio::{
        Tone,
        ToneSink,
    },
    config::Config,
    state::{
        Mode,
        SimulationState,
    },
};

/// Resolve every overlap for this tick, in ascending slot order.
///
/// Order: ship against asteroids (ends the round and the pass), lasers against asteroids,
/// ship against stars.
pub fn resolve(state: &mut SimulationState, config: &Config, tones: &mut impl ToneSink) {
    let threshold = config.collision_threshold;

    if let Some((slot, _)) = state
        .asteroids
        .iter_active()
        .find(|(_, asteroid)| state.ship.overlaps(asteroid, threshold))
    {
        info!("ship hit asteroid {}, final score {}", slot, state.score);
        state.mode = Mode::GameOver;
        Tone::Explosion.play_on(tones);
        return;
    }

    for laser_slot in 0..state.lasers.capacity() {
        let Some(&laser) = state.lasers.get(laser_slot) else {
            continue;
        };
        if !laser.active {
            continue;
        }
        let Some((slot, asteroid)) = state
            .asteroids
            .iter_active_mut()
            .find(|(_, asteroid)| laser.overlaps(asteroid, threshold))
        else {
            continue;
        };
        asteroid.active = false;
        if let Some(laser) = state.lasers.get_mut(laser_slot) {
            laser.active = false;
        }
        state.award(config.asteroid_reward);
        debug!("asteroid {} destroyed, score {}", slot, state.score);
        Tone::Hit.play_on(tones);
    }

    let ship = state.ship;
    for slot in 0..state.stars.capacity() {
        let Some(star) = state.stars.get_mut(slot) else {
            continue;
        };
        if star.active && ship.overlaps(star, threshold) {
            star.active = false;
            state.award(config.star_reward);
            debug!("star {} collected, score {}", slot, state.score);
            Tone::Collect.play_on(tones);
        }
    }
}
