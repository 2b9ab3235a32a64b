mod common;

use common::{
    Tones,
    game,
    tick,
};
use proptest::prelude::*;
use spaceflight::{
    Config,
    Controls,
    HEIGHT,
    Mode,
    SimulationState,
    TickFlag,
    WIDTH,
    collision,
    update,
};

fn controls() -> impl Strategy<Value = Controls> {
    (0..=1023_u16, 0..=1023_u16, any::<bool>()).prop_map(|(joy_x, joy_y, shoot)| Controls {
        joy_x,
        joy_y,
        shoot,
    })
}

/// Asteroid 4 opens the round at x = 180.
const FURTHEST_START: i32 = 180;

proptest! {
    #[test]
    fn ship_stays_on_field(inputs in prop::collection::vec(controls(), 1..200)) {
        let config = Config::default();
        let mut state = SimulationState::new();
        let mut tones = Tones::default();
        for c in &inputs {
            update::advance(&mut state, c, &config, &mut tones);
            prop_assert!((0..=config.ship_max_x()).contains(&state.ship.x));
            prop_assert!((0..=config.ship_max_y()).contains(&state.ship.y));
        }
    }

    #[test]
    fn scrolling_objects_stay_in_rows(ticks in 1_usize..400) {
        let config = Config::default();
        let mut state = SimulationState::new();
        let rest = Controls { joy_x: 512, joy_y: 512, shoot: false };
        for _ in 0..ticks {
            update::advance(&mut state, &rest, &config, &mut Tones::default());
            for (_, o) in state.stars.iter_active().chain(state.asteroids.iter_active()) {
                prop_assert!((0..HEIGHT).contains(&o.y));
                prop_assert!(o.x <= FURTHEST_START.max(WIDTH));
                prop_assert!(o.x >= 0);
            }
        }
    }

    #[test]
    fn same_inputs_same_round(inputs in prop::collection::vec(controls(), 1..150)) {
        let config = Config::default();
        let mut a = SimulationState::new();
        let mut b = SimulationState::new();
        for c in &inputs {
            for state in [&mut a, &mut b] {
                if state.mode == Mode::Running {
                    update::advance(state, c, &config, &mut Tones::default());
                    collision::resolve(state, &config, &mut Tones::default());
                }
            }
        }
        prop_assert_eq!(a, b);
    }

    #[test]
    fn score_never_drops_while_running(inputs in prop::collection::vec(controls(), 1..300)) {
        let flag = TickFlag::new();
        let mut game = game(&flag);
        let mut last = game.state().score;
        for c in &inputs {
            let stick = game.input_mut();
            stick.x = c.joy_x;
            stick.y = c.joy_y;
            stick.shoot = c.shoot;
            tick(&flag, &mut game);
            prop_assert!(game.state().score >= last);
            last = game.state().score;
            if game.state().mode == Mode::GameOver {
                break;
            }
        }
    }
}
