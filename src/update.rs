//! Per-tick motion: ship steering, scrolling stars and asteroids, lasers, firing.

use crate::{
    audio::{
        Tone,
        ToneSink,
    },
    config::{
        Config,
        HEIGHT,
        MAX_LASERS,
        WIDTH,
    },
    input::Controls,
    object::{
        MovingObject,
        Pool,
    },
    state::{
        SimulationState,
        asteroid_speed,
    },
};

/// Advance the simulation by one tick of motion, then handle the shoot button.
///
/// Only touches `state`; the tone sink hears the shot, if one was fired.
pub fn advance(
    state: &mut SimulationState,
    controls: &Controls,
    config: &Config,
    tones: &mut impl ToneSink,
) {
    steer_ship(&mut state.ship, controls, config);
    scroll(&mut state.stars, config.star_row_step, |_| None);
    scroll(&mut state.asteroids, config.asteroid_row_step, |slot| {
        Some(asteroid_speed(slot))
    });
    move_lasers(&mut state.lasers);

    if controls.shoot {
        fire(state, config, tones);
    }
}

fn steer_ship(ship: &mut MovingObject, controls: &Controls, config: &Config) {
    (ship.vx, ship.vy) = controls.ship_velocity(config);
    ship.advance();
    ship.x = ship.x.clamp(0, config.ship_max_x());
    ship.y = ship.y.clamp(0, config.ship_max_y());
}

/// Move a scrolling pool left. Objects falling off the left edge re-enter on the right,
/// one row step further down, optionally with a new speed.
fn scroll<const N: usize>(
    pool: &mut Pool<N>,
    row_step: i32,
    respeed: impl Fn(usize) -> Option<i32>,
) {
    for (slot, object) in pool.iter_active_mut() {
        object.advance();
        if object.x < 0 {
            object.x = WIDTH;
            object.y = (object.y + row_step).rem_euclid(HEIGHT);
            if let Some(vx) = respeed(slot) {
                object.vx = vx;
            }
        }
    }
}

fn move_lasers<const N: usize>(lasers: &mut Pool<N>) {
    for (_, laser) in lasers.iter_active_mut() {
        laser.advance();
        if laser.x >= WIDTH {
            laser.active = false;
        }
    }
}

fn fire(state: &mut SimulationState, config: &Config, tones: &mut impl ToneSink) {
    let ship = state.ship;
    let Some(laser) = state.lasers.first_free() else {
        trace!("shot dropped, all {} lasers in flight", MAX_LASERS);
        return;
    };
    *laser = MovingObject::new(ship.x + config.laser_nose_offset, ship.y, config.laser_speed, 0);
    Tone::Shoot.play_on(tones);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTones;

    fn still() -> Controls {
        Controls {
            joy_x: 512,
            joy_y: 512,
            shoot: false,
        }
    }

    #[test]
    fn ship_follows_stick_and_stays_on_field() {
        let config = Config::default();
        let mut state = SimulationState::new();
        let mut tones = RecordingTones::default();
        let right_down = Controls {
            joy_x: 1023,
            joy_y: 1023,
            shoot: false,
        };

        advance(&mut state, &right_down, &config, &mut tones);
        assert_eq!((state.ship.x, state.ship.y), (25, 37));
        assert_eq!((state.ship.vx, state.ship.vy), (5, 5));

        for _ in 0..40 {
            advance(&mut state, &right_down, &config, &mut tones);
        }
        assert_eq!((state.ship.x, state.ship.y), (120, 60));

        let left_up = Controls {
            joy_x: 0,
            joy_y: 0,
            shoot: false,
        };
        for _ in 0..40 {
            advance(&mut state, &left_up, &config, &mut tones);
        }
        assert_eq!((state.ship.x, state.ship.y), (0, 0));
    }

    #[test]
    fn star_wraps_to_right_edge_one_row_step_down() {
        let config = Config::default();
        let mut state = SimulationState::new();
        *state.stars.get_mut(3).unwrap() = MovingObject::new(0, 60, -1, 0);

        advance(&mut state, &still(), &config, &mut RecordingTones::default());
        let star = state.stars.get(3).unwrap();
        assert_eq!((star.x, star.y, star.vx), (WIDTH, 9, -1));
    }

    #[test]
    fn asteroid_wrap_rederives_speed_from_slot() {
        let config = Config::default();
        let mut state = SimulationState::new();
        *state.asteroids.get_mut(2).unwrap() = MovingObject::new(1, 50, -7, 0);

        advance(&mut state, &still(), &config, &mut RecordingTones::default());
        let asteroid = state.asteroids.get(2).unwrap();
        assert_eq!((asteroid.x, asteroid.y, asteroid.vx), (WIDTH, 3, -4));
    }

    #[test]
    fn inactive_objects_do_not_move() {
        let config = Config::default();
        let mut state = SimulationState::new();
        state.asteroids.get_mut(0).unwrap().active = false;
        let parked = *state.asteroids.get(0).unwrap();

        advance(&mut state, &still(), &config, &mut RecordingTones::default());
        assert_eq!(state.asteroids.get(0), Some(&parked));
    }

    #[test]
    fn laser_expires_past_right_edge() {
        let config = Config::default();
        let mut state = SimulationState::new();
        *state.lasers.get_mut(1).unwrap() = MovingObject::new(122, 10, 5, 0);

        advance(&mut state, &still(), &config, &mut RecordingTones::default());
        assert!(state.lasers.get(1).unwrap().active);
        assert_eq!(state.lasers.get(1).unwrap().x, 127);

        advance(&mut state, &still(), &config, &mut RecordingTones::default());
        assert!(!state.lasers.get(1).unwrap().active);
    }

    #[test]
    fn shooting_fills_first_free_slot_ahead_of_nose() {
        let config = Config::default();
        let mut state = SimulationState::new();
        let mut tones = RecordingTones::default();
        let fire = Controls {
            shoot: true,
            ..still()
        };

        advance(&mut state, &fire, &config, &mut tones);
        assert_eq!(state.lasers.get(0), Some(&MovingObject::new(25, 32, 5, 0)));
        assert_eq!(tones.played, [(1000, 50)]);

        // Held button keeps firing every tick until the pool runs dry.
        advance(&mut state, &fire, &config, &mut tones);
        advance(&mut state, &fire, &config, &mut tones);
        assert_eq!(state.lasers.active_count(), MAX_LASERS);
        assert_eq!(tones.played.len(), 3);

        let before = state.lasers;
        let mut silent = RecordingTones::default();
        let mut expected = before;
        for (_, laser) in expected.iter_active_mut() {
            laser.advance();
        }
        advance(&mut state, &fire, &config, &mut silent);
        assert_eq!(state.lasers, expected);
        assert!(silent.played.is_empty());
    }
}
